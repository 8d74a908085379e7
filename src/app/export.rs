use crate::convert::export::*;
use crate::hand::*;
use crate::util::misc::*;

use crate::{error, info};

#[derive(Debug)]
pub struct ExportApp {
    out_path: String,
    print: bool, // ファイルではなく標準出力に書き出す
}

impl ExportApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            out_path: "hand_templates.json".to_string(),
            print: false,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-o" => app.out_path = next_value(&mut it, s),
                "-p" => app.print = true,
                opt => error_exit(format!("unknown option: {}", opt)),
            }
        }

        app
    }

    pub fn run(&self) {
        if let Err(e) = self.export(default_registry()) {
            error!("{}", e);
        }
    }

    fn export(&self, reg: &TemplateRegistry) -> Res {
        let json = export_json(reg)?;
        if self.print {
            println!("{}", json);
            return Ok(());
        }

        write_to_file(&self.out_path, &json)?;
        info!("exported {} templates to {}", reg.len(), self.out_path);
        println!("Saved {} templates to {}", reg.len(), self.out_path);
        Ok(())
    }
}

#[test]
fn test_export_app() {
    let path = std::env::temp_dir().join(format!("mahjongg_export_{}.json", std::process::id()));
    let path = path.to_string_lossy().to_string();
    let app = ExportApp::new(vec!["-o".to_string(), path.clone()]);
    app.export(default_registry()).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(json["version"], EXPORT_VERSION);
    assert_eq!(json["templates"].as_array().unwrap().len(), 5);
    std::fs::remove_file(&path).unwrap();
}
