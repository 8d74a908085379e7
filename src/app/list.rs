use crate::hand::*;
use crate::util::misc::*;

use crate::error;

#[derive(Debug)]
pub struct ListApp {
    category: Option<String>,
    json: bool,
}

impl ListApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            category: None,
            json: false,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-c" => app.category = Some(next_value(&mut it, s)),
                "-j" => app.json = true,
                opt => error_exit(format!("unknown option: {}", opt)),
            }
        }

        app
    }

    pub fn run(&self) {
        if let Err(e) = self.list(default_registry()) {
            error!("{}", e);
        }
    }

    fn list(&self, reg: &TemplateRegistry) -> Res {
        let templates = match &self.category {
            Some(c) => reg.list_by_category(c),
            None => reg.list_all(),
        };
        if templates.is_empty() {
            Err(format!(
                "no templates. categories: {}",
                reg.categories().join(", ")
            ))?;
        }

        if self.json {
            let sums: Vec<TemplateSummary> = templates
                .iter()
                .map(|t| TemplateSummary::from(t.get_info()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&sums)?);
            return Ok(());
        }

        for t in templates {
            let info = t.get_info();
            println!(
                "{}: {} ({} #{}, {} points)",
                info.id, info.name, info.category, info.number, info.point_value
            );
            println!("    {}", info.description);
        }
        Ok(())
    }
}

#[test]
fn test_list_app() {
    let app = ListApp::new(vec!["-c".to_string(), "369".to_string()]);
    assert_eq!(app.category.as_deref(), Some("369"));
    assert!(app.list(default_registry()).is_ok());

    let app = ListApp::new(vec!["-c".to_string(), "Winds".to_string(), "-j".to_string()]);
    assert!(app.json);
    assert!(app.list(default_registry()).is_err());
}
