use rand::prelude::*;

use crate::hand::*;
use crate::model::*;
use crate::util::misc::*;

use crate::{error, info};

#[derive(Debug)]
pub struct SampleApp {
    template_id: Option<String>,
    seed: u64,
    count: usize,
}

impl SampleApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            template_id: None,
            seed: 0,
            count: 1,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-t" => app.template_id = Some(next_value(&mut it, s)),
                "-s" => app.seed = next_value(&mut it, s),
                "-n" => app.count = next_value(&mut it, s),
                opt => error_exit(format!("unknown option: {}", opt)),
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now();
            info!("random seed: {}", app.seed);
        }

        app
    }

    pub fn run(&self) {
        match self.sample(default_registry()) {
            Ok(lines) => {
                for l in lines {
                    println!("{}", l);
                }
            }
            Err(e) => error!("{}", e),
        }
    }

    fn sample(&self, reg: &TemplateRegistry) -> Res<Vec<String>> {
        let mut rng: StdRng = SeedableRng::seed_from_u64(self.seed);
        let template = match &self.template_id {
            Some(id) => reg.find(id)?,
            None => *reg
                .list_all()
                .choose(&mut rng)
                .ok_or("no templates registered")?,
        };

        let info = template.get_info();
        let mut lines = vec![format!("{} ({})", info.name, info.id)];
        for _ in 0..self.count {
            let mut tiles = sample_hand(template, &mut rng);
            let is_match = template.validate_hand(&tiles);
            tiles.sort();
            lines.push(format!("{} => {}", vec_to_string(&tiles), is_match));
        }
        Ok(lines)
    }
}

#[test]
fn test_sample_app() {
    let app = SampleApp::new(vec![
        "-t".to_string(),
        "even_chow_even_pungs_flowers".to_string(),
        "-s".to_string(),
        "7".to_string(),
        "-n".to_string(),
        "3".to_string(),
    ]);
    let lines = app.sample(default_registry()).unwrap();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("(even_chow_even_pungs_flowers)"));
    for l in &lines[1..] {
        assert_eq!(l.matches("FL").count(), 4);
        assert!(l.ends_with("=> true"));
    }

    // テンプレート指定なしでも同じシードなら同じ結果
    let app1 = SampleApp::new(vec!["-s".to_string(), "11".to_string()]);
    let app2 = SampleApp::new(vec!["-s".to_string(), "11".to_string()]);
    assert_eq!(
        app1.sample(default_registry()).unwrap(),
        app2.sample(default_registry()).unwrap()
    );
}
