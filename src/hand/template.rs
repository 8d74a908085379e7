use std::fmt;

use serde::Serialize;

use crate::model::*;

// 1つのテンプレートから生成される具体的な牌の組み合わせ (総枚数は常に14枚)
pub type Variation = Vec<TileSet>;

pub fn flatten(v: &[TileSet]) -> Vec<Tile> {
    v.iter().flat_map(|ts| ts.tiles().iter().copied()).collect()
}

// テンプレートの表示用情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub catid: String,
    pub image: String,
    pub point_value: u32,
    pub number: usize, // カテゴリ内の番号
}

// HandTemplate trait
// 実装は状態を持たず,生成・判定ともに純粋関数であること
pub trait HandTemplate: Send + Sync {
    fn get_info(&self) -> &TemplateInfo;

    // 構造的に有効な組み合わせをすべて列挙
    fn generate_variations(&self) -> Vec<Variation>;

    // 14枚の牌がこのテンプレートのいずれかの組み合わせと同型であるかの判定
    // 牌の並び順は問わない. 14枚以外の入力はfalse
    fn validate_hand(&self, tiles: &[Tile]) -> bool;

    // 牌コード列での判定 不正なコードを含む場合はエラーではなくfalse
    fn validate_codes(&self, codes: &[&str]) -> bool {
        match tiles_from_codes(codes) {
            Ok(tiles) => self.validate_hand(&tiles),
            Err(_) => false,
        }
    }

    fn id(&self) -> &str {
        &self.get_info().id
    }
}

impl fmt::Debug for dyn HandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.get_info();
        write!(f, "{}({}): {}", info.name, info.id, info.description)
    }
}
