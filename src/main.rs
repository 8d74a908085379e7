use mahjongg::app;
use mahjongg::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified (L, V, A, X, S)");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "L" => {
            // List (テンプレート一覧)
            app::ListApp::new(args2).run();
        }
        "V" => {
            // Variations (組み合わせの列挙)
            app::VariationsApp::new(args2).run();
        }
        "A" => {
            // Analyze (手牌の判定)
            app::AnalyzeApp::new(args2).run();
        }
        "X" => {
            // eXport (JSON出力)
            app::ExportApp::new(args2).run();
        }
        "S" => {
            // Sample (ランダムな手牌の生成)
            app::SampleApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
