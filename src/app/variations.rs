use crate::hand::*;
use crate::model::*;
use crate::util::misc::*;

use crate::error;

#[derive(Debug)]
pub struct VariationsApp {
    template_id: String,
    max: usize, // 表示する組み合わせの上限
    flat: bool,
}

impl VariationsApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            template_id: "".to_string(),
            max: 100,
            flat: false,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-n" => app.max = next_value(&mut it, s),
                "-f" => app.flat = true,
                opt if opt.starts_with('-') => error_exit(format!("unknown option: {}", opt)),
                id => {
                    if !app.template_id.is_empty() {
                        error_exit::<_, ()>("multiple template id is not allowed");
                    }
                    app.template_id = id.to_string();
                }
            }
        }

        if app.template_id.is_empty() {
            print_usage();
            std::process::exit(1);
        }

        app
    }

    pub fn run(&self) {
        match self.render(default_registry()) {
            Ok(lines) => {
                for l in lines {
                    println!("{}", l);
                }
            }
            Err(e) => error!("{}", e),
        }
    }

    fn render(&self, reg: &TemplateRegistry) -> Res<Vec<String>> {
        let template = reg.find(&self.template_id)?;
        let vs = template.generate_variations();
        let info = template.get_info();

        let mut lines = vec![format!("{} ({})", info.name, info.id)];
        for (i, v) in vs.iter().take(self.max).enumerate() {
            if self.flat {
                lines.push(vec_to_string(&flatten(v)));
            } else {
                lines.push(format!("Variation {}: {}", i + 1, format_variation(v)));
            }
        }
        lines.push(format!(
            "Showing {} of {} variations",
            vs.len().min(self.max),
            vs.len()
        ));
        if vs.len() > self.max {
            lines.push(format!(
                "... and {} more variations not shown",
                vs.len() - self.max
            ));
        }
        Ok(lines)
    }
}

// "pair: 1B 1B | single: 2B | ..."
pub fn format_variation(v: &[TileSet]) -> String {
    v.iter()
        .map(|ts| format!("{}: {}", ts.set_type().name(), vec_to_string(ts.tiles())))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run V TEMPLATE_ID [-n MAX] [-f]
Options
    -n: maximum number of variations to print (default: 100)
    -f: print each variation as a flat list of tile codes
"
    );
}

#[test]
fn test_variations_app() {
    let app = VariationsApp::new(vec![
        "sequence_and_kongs".to_string(),
        "-n".to_string(),
        "10".to_string(),
    ]);
    let lines = app.render(default_registry()).unwrap();
    assert_eq!(lines.len(), 1 + 10 + 2);
    assert_eq!(
        lines[1],
        "Variation 1: pair: 1B 1B | single: 2B | single: 3B | single: 4B | single: 5B \
         | kong: 1C 1C 1C 1C | kong: 1D 1D 1D 1D"
    );
    assert_eq!(lines[11], "Showing 10 of 15 variations");
    assert_eq!(lines[12], "... and 5 more variations not shown");

    let app = VariationsApp::new(vec!["pungs_369".to_string(), "-f".to_string()]);
    let lines = app.render(default_registry()).unwrap();
    assert_eq!(lines.len(), 1 + 6 + 1);
    assert_eq!(lines[1], "3B 3B 3B 6B 6B 6B 6B 6C 6C 6C 9D 9D 9D 9D");

    let app = VariationsApp::new(vec!["nonexistent_id".to_string()]);
    assert!(app.render(default_registry()).is_err());
}
