use std::collections::HashMap;
use std::sync::OnceLock;

use super::*;

use crate::warn;

// [TemplateRegistry]
// 起動時に一度だけ構築し,以降は読み取り専用 (ロックなしで複数スレッドから参照可能)
pub struct TemplateRegistry {
    templates: Vec<Box<dyn HandTemplate>>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::new()
    }

    pub fn with_default_templates() -> Self {
        Self::builder()
            .register(Box::new(SequenceAndKongs::new()))
            .register(Box::new(Symmetrical13579::new()))
            .register(Box::new(KongKongPair::new()))
            .register(Box::new(EvenPungsFlowers::new()))
            .register(Box::new(Pungs369::new()))
            .build()
    }

    pub fn get(&self, id: &str) -> Option<&dyn HandTemplate> {
        self.index.get(id).map(|&i| self.templates[i].as_ref())
    }

    // 登録順
    pub fn list_all(&self) -> Vec<&dyn HandTemplate> {
        self.templates.iter().map(|t| t.as_ref()).collect()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&dyn HandTemplate> {
        self.templates
            .iter()
            .filter(|t| t.get_info().category == category)
            .map(|t| t.as_ref())
            .collect()
    }

    // 重複なし,昇順
    pub fn categories(&self) -> Vec<&str> {
        let mut cats: Vec<&str> = self
            .templates
            .iter()
            .map(|t| t.get_info().category.as_str())
            .collect();
        cats.sort_unstable();
        cats.dedup();
        cats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[derive(Default)]
pub struct TemplateRegistryBuilder {
    templates: Vec<Box<dyn HandTemplate>>,
    index: HashMap<String, usize>,
}

impl TemplateRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // 同じIDの2回目以降の登録は無視
    pub fn register(mut self, template: Box<dyn HandTemplate>) -> Self {
        let id = template.id().to_string();
        if self.index.contains_key(&id) {
            warn!("template '{}' is already registered", id);
            return self;
        }
        self.index.insert(id, self.templates.len());
        self.templates.push(template);
        self
    }

    pub fn build(self) -> TemplateRegistry {
        TemplateRegistry {
            templates: self.templates,
            index: self.index,
        }
    }
}

pub fn default_registry() -> &'static TemplateRegistry {
    static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TemplateRegistry::with_default_templates)
}

#[test]
fn test_registry_order() {
    let reg = default_registry();
    let ids: Vec<&str> = reg.list_all().iter().map(|t| t.id()).collect();
    assert_eq!(
        ids,
        [
            "sequence_and_kongs",
            "symmetrical_13579_all_suits",
            "kong_kong_pair_flowers_dragons",
            "even_chow_even_pungs_flowers",
            "pungs_369",
        ]
    );
    assert_eq!(reg.len(), 5);
    assert!(reg.get("nonexistent_id").is_none());
    assert_eq!(
        reg.get("pungs_369").map(|t| t.get_info().category.as_str()),
        Some("369")
    );
}

#[test]
fn test_registry_duplicate() {
    let reg = TemplateRegistry::builder()
        .register(Box::new(Pungs369::new()))
        .register(Box::new(SequenceAndKongs::new()))
        .register(Box::new(Pungs369::new()))
        .build();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.list_all()[0].id(), "pungs_369");
    assert_eq!(reg.list_all()[1].id(), "sequence_and_kongs");
    assert!(TemplateRegistry::builder().build().is_empty());
}

#[test]
fn test_registry_category() {
    let reg = default_registry();
    assert_eq!(
        reg.categories(),
        ["13579", "2468", "369", "Any Like Numbers", "Consecutive"]
    );
    let ts = reg.list_by_category("2468");
    assert_eq!(ts.len(), 1);
    assert_eq!(ts[0].id(), "even_chow_even_pungs_flowers");
    assert!(reg.list_by_category("Winds").is_empty());
}

#[test]
fn test_registry_shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| default_registry().list_all().len()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 5);
    }
}
