use serde::Serialize;

use super::*;

// 表示層向けのテンプレート概要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub point_value: u32,
}

impl From<&TemplateInfo> for TemplateSummary {
    fn from(info: &TemplateInfo) -> Self {
        Self {
            template_id: info.id.clone(),
            name: info.name.clone(),
            description: info.description.clone(),
            category: info.category.clone(),
            point_value: info.point_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub is_match: bool,
    pub tile_count: usize,
}

impl TemplateRegistry {
    pub fn find(&self, id: &str) -> MahjonggResult<&dyn HandTemplate> {
        self.get(id).ok_or_else(|| MahjonggError::TemplateNotFound { id: id.to_string() })
    }

    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.list_all()
            .iter()
            .map(|t| TemplateSummary::from(t.get_info()))
            .collect()
    }

    pub fn get_template(&self, id: &str) -> Option<TemplateSummary> {
        self.get(id).map(|t| TemplateSummary::from(t.get_info()))
    }

    // 件数の制限は表示側で行う
    pub fn get_variations(&self, id: &str) -> Option<Vec<Variation>> {
        self.get(id).map(|t| t.generate_variations())
    }

    // テンプレートの検索 -> 牌コードのパース -> 判定 の順に行う
    pub fn analyze<S: AsRef<str>>(&self, id: &str, codes: &[S]) -> MahjonggResult<Analysis> {
        let template = self.find(id)?;
        let tiles = tiles_from_codes(codes)?;
        Ok(Analysis {
            is_match: template.validate_hand(&tiles),
            tile_count: tiles.len(),
        })
    }
}

#[test]
fn test_summaries() {
    let reg = default_registry();
    let sums = reg.list_templates();
    assert_eq!(sums.len(), 5);
    assert_eq!(sums[0].template_id, "sequence_and_kongs");
    assert_eq!(sums[0].point_value, 25);

    let s = reg.get_template("symmetrical_13579_all_suits").unwrap();
    assert_eq!(s.category, "13579");
    assert_eq!(reg.get_template("nonexistent_id"), None);

    assert_eq!(reg.get_variations("sequence_and_kongs").map(|vs| vs.len()), Some(15));
    assert!(reg.get_variations("nonexistent_id").is_none());
}

#[test]
fn test_analyze() {
    let reg = default_registry();

    let mut codes = vec!["9B", "9B"];
    codes.extend(["1C", "2C", "3C", "N", "E", "S", "W", "RD", "GD", "WD", "FL", "JK"]);
    assert_eq!(
        reg.analyze("sequence_and_kongs", &codes),
        Ok(Analysis {
            is_match: false,
            tile_count: 14
        })
    );

    let codes = [
        "1B", "1B", "3B", "3B", "3B", "5C", "5C", "5C", "5C", "7D", "7D", "7D", "9D", "9D",
    ];
    assert_eq!(
        reg.analyze("symmetrical_13579_all_suits", &codes),
        Ok(Analysis {
            is_match: true,
            tile_count: 14
        })
    );

    // 14枚以外はエラーではなく不一致
    assert_eq!(
        reg.analyze("symmetrical_13579_all_suits", &codes[..3]),
        Ok(Analysis {
            is_match: false,
            tile_count: 3
        })
    );

    assert_eq!(
        reg.analyze("nonexistent_id", &codes),
        Err(MahjonggError::TemplateNotFound {
            id: "nonexistent_id".to_string()
        })
    );
    assert_eq!(
        reg.analyze("pungs_369", &["3D", "XX"]),
        Err(MahjonggError::invalid_code("XX"))
    );
    // テンプレートの検索がパースより先
    assert!(matches!(
        reg.analyze("nonexistent_id", &["XX"]),
        Err(MahjonggError::TemplateNotFound { .. })
    ));
}

#[test]
fn test_analyze_owned_codes() {
    let codes: Vec<String> = "FL FL 3B 3B 3B 3B GD 3C 3C 3C 3C RD 3D 3D"
        .split(' ')
        .map(|s| s.to_string())
        .collect();
    let a = default_registry()
        .analyze("kong_kong_pair_flowers_dragons", &codes)
        .unwrap();
    assert!(a.is_match);
    assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"is_match":true,"tile_count":14}"#);
}
