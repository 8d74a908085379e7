// 外部フォーマットへの変換
pub mod export;
