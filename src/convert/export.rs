use serde::Serialize;

use crate::hand::*;
use crate::model::*;

pub const EXPORT_VERSION: &str = "1.0.0";

// 出力専用 (読み込みには対応しない)
// 組み合わせは面子の区切りを持たない14枚の牌コードの列として出力
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub version: String,
    pub templates: Vec<ExportTemplate>,
}

#[derive(Debug, Serialize)]
pub struct ExportTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub catid: String,
    pub image: String,
    pub variations: Vec<Vec<Tile>>,
}

impl ExportTemplate {
    pub fn from_template(template: &dyn HandTemplate) -> Self {
        let info = template.get_info();
        Self {
            id: info.id.clone(),
            name: info.name.clone(),
            description: info.description.clone(),
            category: info.category.clone(),
            catid: info.catid.clone(),
            image: info.image.clone(),
            variations: template
                .generate_variations()
                .iter()
                .map(|v| flatten(v))
                .collect(),
        }
    }
}

pub fn export_templates(registry: &TemplateRegistry) -> ExportDocument {
    ExportDocument {
        version: EXPORT_VERSION.to_string(),
        templates: registry
            .list_all()
            .into_iter()
            .map(ExportTemplate::from_template)
            .collect(),
    }
}

pub fn export_json(registry: &TemplateRegistry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_templates(registry))
}

#[test]
fn test_export_document() {
    let doc = export_templates(default_registry());
    assert_eq!(doc.version, "1.0.0");
    assert_eq!(doc.templates.len(), 5);
    for t in &doc.templates {
        assert!(!t.variations.is_empty());
        assert!(t.variations.iter().all(|v| v.len() == HAND_SIZE));
    }
}

#[test]
fn test_export_json() {
    use serde_json::Value;

    let reg = TemplateRegistry::builder()
        .register(Box::new(Symmetrical13579::new()))
        .build();
    let json: Value = serde_json::from_str(&export_json(&reg).unwrap()).unwrap();
    assert_eq!(json["version"], "1.0.0");
    let t = &json["templates"][0];
    assert_eq!(t["id"], "symmetrical_13579_all_suits");
    assert_eq!(t["catid"], "3");
    assert_eq!(t["variations"].as_array().unwrap().len(), 6);
    assert_eq!(
        t["variations"][0],
        serde_json::json!([
            "1B", "1B", "3B", "3B", "3B", "5C", "5C", "5C", "5C", "7D", "7D", "7D", "9D", "9D"
        ])
    );
}
