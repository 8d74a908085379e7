use super::*;

const ROLE_36: &[(Tnum, usize)] = &[(3, 3), (6, 4)];
const ROLE_6: &[(Tnum, usize)] = &[(6, 3)];
const ROLE_9: &[(Tnum, usize)] = &[(9, 4)];

// 333 6666 (s1)  666 (s2)  9999 (s3)
pub struct Pungs369 {
    info: TemplateInfo,
}

impl Pungs369 {
    pub fn new() -> Self {
        Self {
            info: TemplateInfo {
                id: "pungs_369".to_string(),
                name: "p3 k6 p6 k9 in 3 suits".to_string(),
                description: "Pung of 3s, Kong of 6s (same suit), Pung of 6s (different suit), \
                              Kong of 9s"
                    .to_string(),
                category: "369".to_string(),
                catid: "1b".to_string(),
                image: "<green>333 6666 <red>666 <black>9999".to_string(),
                point_value: 25,
                number: 1,
            },
        }
    }
}

impl Default for Pungs369 {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTemplate for Pungs369 {
    fn get_info(&self) -> &TemplateInfo {
        &self.info
    }

    fn generate_variations(&self) -> Vec<Variation> {
        suit_permutations()
            .into_iter()
            .map(|[s1, s2, s3]| {
                vec![
                    TileSet::pung(num(s1, 3)),
                    TileSet::kong(num(s1, 6)),
                    TileSet::pung(num(s2, 6)),
                    TileSet::kong(num(s3, 9)),
                ]
            })
            .collect()
    }

    fn validate_hand(&self, tiles: &[Tile]) -> bool {
        if tiles.len() != HAND_SIZE {
            return false;
        }
        let tc = TileCounter::from_tiles(tiles);
        tc.honor_total() == 0
            && tc.flowers == 0
            && tc.match_suit_roles([ROLE_36, ROLE_6, ROLE_9]).is_some()
    }
}

#[test]
fn test_pungs_369() {
    let t = Pungs369::new();
    let vs = t.generate_variations();
    assert_eq!(vs.len(), 6);
    for v in &vs {
        assert_eq!(flatten(v).len(), HAND_SIZE);
        assert!(t.validate_hand(&flatten(v)));
    }

    let ok = [
        "3D", "3D", "3D", "6D", "6D", "6D", "6D", "6B", "6B", "6B", "9C", "9C", "9C", "9C",
    ];
    assert!(t.validate_codes(&ok));

    // 6の刻子と9の槓子が同じ色
    let ng = [
        "3D", "3D", "3D", "6D", "6D", "6D", "6D", "6B", "6B", "6B", "9B", "9B", "9B", "9B",
    ];
    assert!(!t.validate_codes(&ng));

    let ng = [
        "3D", "3D", "3D", "6D", "6D", "6D", "6D", "6B", "6B", "6B", "9C", "9C", "9C", "JK",
    ];
    assert!(!t.validate_codes(&ng));
}
