// mainから直接呼び出すアプリケーションの動作モード(L, V, A, X, S)のモジュール

mod analyze;
mod export;
mod list;
mod sample;
mod variations;

pub use analyze::AnalyzeApp;
pub use export::ExportApp;
pub use list::ListApp;
pub use sample::SampleApp;
pub use variations::VariationsApp;
