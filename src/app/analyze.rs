use std::fs::File;
use std::io::{self, BufRead};

use crate::hand::*;
use crate::model::*;
use crate::util::misc::*;

use crate::{debug, error};

#[derive(Debug)]
pub struct AnalyzeApp {
    args: Vec<String>,
    detail: bool,
}

impl AnalyzeApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = vec![];
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s),
                opt if opt.starts_with('-') => {
                    error!("unknown option: {}", opt);
                    return;
                }
                _ => exp.push(s.clone()),
            }
        }

        if (file_path.is_empty() && exp.is_empty()) || (!file_path.is_empty() && !exp.is_empty()) {
            print_usage();
            return;
        }

        let reg = default_registry();
        if !exp.is_empty() {
            if let Err(e) = self.process_expression(reg, &exp[0], &exp[1..]) {
                error!("{}", e);
            }
            return;
        }

        if let Err(e) = self.run_from_file(reg, &file_path) {
            error!("{}", e);
        }
    }

    fn run_from_file(&self, reg: &TemplateRegistry, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for line in lines.map_while(Result::ok) {
            let e = line.trim();
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", line);
                continue;
            }
            match HandCase::parse(e) {
                Ok(case) => {
                    println!("> {}", line);
                    let verify = case.verify(reg, self.detail);
                    println!("verify: {:?}", verify);
                }
                Err(e) => error!("{}", e),
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, reg: &TemplateRegistry, id: &str, codes: &[String]) -> Res {
        let a = reg.analyze(id, codes)?;
        if self.detail {
            let tiles = tiles_from_codes(codes)?;
            let names: Vec<String> = tiles.iter().map(|t| t.full_name()).collect();
            debug!("{}", names.join(", "));
        }
        println!("{}", serde_json::to_string(&a)?);
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// ファイル1行分の入力: "TEMPLATE_ID / CODE CODE ... / EXPECT"
#[derive(Debug)]
struct HandCase {
    template_id: String,
    codes: Vec<String>,
    expect: Option<bool>,
}

impl HandCase {
    fn parse(input: &str) -> Res<Self> {
        let input = input.split('#').next().unwrap_or("");
        let exps: Vec<&str> = input.split('/').map(|s| s.trim()).collect();
        if exps.len() < 2 || exps.len() > 3 || exps[0].is_empty() {
            Err(format!("invalid hand case: {}", input))?;
        }

        let expect = match exps.get(2) {
            None | Some(&"") => None,
            Some(e) => Some(e.parse::<bool>().map_err(|_| format!("invalid expectation: {}", e))?),
        };

        Ok(Self {
            template_id: exps[0].to_string(),
            codes: exps[1].split_whitespace().map(|s| s.to_string()).collect(),
            expect,
        })
    }

    fn verify(&self, reg: &TemplateRegistry, detail: bool) -> Verify {
        let is_match = match reg.analyze(&self.template_id, &self.codes) {
            Ok(a) => {
                println!("match: {}, tiles: {}", a.is_match, a.tile_count);
                a.is_match
            }
            Err(e) => {
                // 不正な入力は不一致として扱う
                println!("{}", e);
                false
            }
        };
        if detail {
            debug!("{:?}", self);
        }

        match self.expect {
            Some(e) if e == is_match => Verify::Ok,
            Some(_) => Verify::Error,
            None => Verify::Skip,
        }
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run A TEMPLATE_ID CODE... [-d]
    $ cargo run A -f FILE [-d]
Options
    -d: print debug info
    -f: read hands from file instead of commandline (TEMPLATE_ID / CODES / EXPECT)
"
    );
}

#[test]
fn test_hand_case_parse() {
    let c = HandCase::parse("pungs_369 / 3D 3D 3D / false # comment").unwrap();
    assert_eq!(c.template_id, "pungs_369");
    assert_eq!(c.codes, ["3D", "3D", "3D"]);
    assert_eq!(c.expect, Some(false));

    let c = HandCase::parse("pungs_369 / 3D").unwrap();
    assert_eq!(c.expect, None);

    assert!(HandCase::parse("pungs_369").is_err());
    assert!(HandCase::parse("pungs_369 / 3D / maybe").is_err());
}

#[test]
fn test_analyze_hands() {
    let reg = default_registry();
    let file = File::open("tests/hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    let mut n = 0;
    for line in lines.map_while(Result::ok) {
        let e = line.trim();
        if e.is_empty() || e.starts_with('#') {
            continue;
        }
        let case = HandCase::parse(e).unwrap();
        assert_eq!(Verify::Ok, case.verify(reg, false), "{}", line);
        n += 1;
    }
    assert!(n > 0);
}
