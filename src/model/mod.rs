// 麻雀牌のデータモデル
mod define;
mod error;
mod tile;
mod tile_set;

pub use define::*;
pub use error::*;
pub use tile::*;
pub use tile_set::*;
