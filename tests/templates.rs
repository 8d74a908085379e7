use std::collections::HashSet;

use rand::prelude::*;

use mahjongg::convert::export::*;
use mahjongg::hand::*;
use mahjongg::model::*;

fn hand(codes: &str) -> Vec<Tile> {
    let codes: Vec<&str> = codes.split_whitespace().collect();
    tiles_from_codes(&codes).unwrap()
}

#[test]
fn test_every_variation_validates() {
    for t in default_registry().list_all() {
        let vs = t.generate_variations();
        assert!(!vs.is_empty(), "{}", t.id());
        for v in &vs {
            let tiles = flatten(v);
            assert_eq!(tiles.len(), HAND_SIZE, "{}: {:?}", t.id(), tiles);
            assert!(t.validate_hand(&tiles), "{}: {:?}", t.id(), tiles);
        }
    }
}

#[test]
fn test_variations_are_distinct() {
    for t in default_registry().list_all() {
        let vs = t.generate_variations();
        let mut seen = HashSet::new();
        for v in &vs {
            assert!(seen.insert(flatten(v)), "{}: duplicated variation", t.id());
        }
    }
}

#[test]
fn test_variation_counts() {
    let reg = default_registry();
    let counts = [
        ("sequence_and_kongs", 15),
        ("symmetrical_13579_all_suits", 6),
        ("kong_kong_pair_flowers_dragons", 54),
        ("even_chow_even_pungs_flowers", 24),
        ("pungs_369", 6),
    ];
    for (id, n) in counts {
        assert_eq!(reg.get_variations(id).map(|vs| vs.len()), Some(n), "{}", id);
    }
}

#[test]
fn test_validation_ignores_order() {
    let mut rng = StdRng::seed_from_u64(2024);
    for t in default_registry().list_all() {
        for v in t.generate_variations() {
            let mut tiles = flatten(&v);
            tiles.shuffle(&mut rng);
            assert!(t.validate_hand(&tiles), "{}: {:?}", t.id(), tiles);
        }
    }
}

#[test]
fn test_wrong_size_never_matches() {
    for t in default_registry().list_all() {
        let tiles = flatten(&t.generate_variations()[0]);
        assert!(!t.validate_hand(&tiles[..HAND_SIZE - 1]));
        assert!(!t.validate_hand(&[]));

        let mut more = tiles.clone();
        more.push(tiles[0]);
        assert!(!t.validate_hand(&more));
    }
}

#[test]
fn test_jokers_never_match() {
    for t in default_registry().list_all() {
        let mut tiles = flatten(&t.generate_variations()[0]);
        tiles[0] = Tile::Joker;
        assert!(!t.validate_hand(&tiles), "{}", t.id());
    }
}

#[test]
fn test_hands() {
    let reg = default_registry();
    let seq = reg.get("sequence_and_kongs").unwrap();
    assert!(seq.validate_hand(&hand("1B 1B 2B 3B 4B 5B 1C 1C 1C 1C 1D 1D 1D 1D")));
    assert!(!seq.validate_hand(&hand("9B 9B 1C 2C 3C N E S W RD GD WD FL JK")));

    let sym = reg.get("symmetrical_13579_all_suits").unwrap();
    assert!(sym.validate_hand(&hand("1B 1B 3B 3B 3B 5C 5C 5C 5C 7D 7D 7D 9D 9D")));
    assert!(sym.validate_codes(&["1B", "1B", "3B", "3B", "3B", "5C", "5C", "5C", "5C", "7D", "7D", "7D", "9D", "9D"]));
    assert!(!sym.validate_codes(&["1B", "1B", "3B", "3B", "3B", "5C", "5C", "5C", "5C", "7D", "7D", "7D", "9D", "0D"]));
}

#[test]
fn test_registry_lookup() {
    let reg = default_registry();
    assert_eq!(reg.len(), 5);
    assert!(reg.get("nonexistent_id").is_none());
    assert!(matches!(
        reg.analyze("nonexistent_id", &["1B"]),
        Err(MahjonggError::TemplateNotFound { .. })
    ));
    for t in reg.list_all() {
        assert_eq!(reg.get(t.id()).map(|x| x.id()), Some(t.id()));
    }
    assert_eq!(reg.categories(), ["13579", "2468", "369", "Any Like Numbers", "Consecutive"]);
}

#[test]
fn test_export_matches_registry() {
    let reg = default_registry();
    let doc = export_templates(reg);
    assert_eq!(doc.templates.len(), reg.len());
    for (e, t) in doc.templates.iter().zip(reg.list_all()) {
        assert_eq!(e.id, t.id());
        assert_eq!(e.variations.len(), t.generate_variations().len());
        for v in &e.variations {
            assert!(t.validate_hand(v));
        }
    }

    let json: serde_json::Value = serde_json::from_str(&export_json(reg).unwrap()).unwrap();
    let codes: Vec<String> =
        serde_json::from_value(json["templates"][0]["variations"][0].clone()).unwrap();
    assert_eq!(codes.len(), HAND_SIZE);
    assert!(reg.analyze("sequence_and_kongs", &codes).unwrap().is_match);
}
