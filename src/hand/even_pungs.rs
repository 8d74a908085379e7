use super::*;

const EVENS: [Tnum; 4] = [2, 4, 6, 8];

// FFFF  2468 (s1)  2n2n2n (s2)  2n2n2n (s3)
pub struct EvenPungsFlowers {
    info: TemplateInfo,
}

impl EvenPungsFlowers {
    pub fn new() -> Self {
        Self {
            info: TemplateInfo {
                id: "even_chow_even_pungs_flowers".to_string(),
                name: "Even Chow + Even Pungs + Flowers".to_string(),
                description: "Kong of Flowers, singles of 2,4,6,8 in one suit, \
                              and pungs of the same even number in the other two suits"
                    .to_string(),
                category: "2468".to_string(),
                catid: "4".to_string(),
                image: "<black>FFFF <green>2468 <red>222 <black>222".to_string(),
                point_value: 25,
                number: 6,
            },
        }
    }
}

impl Default for EvenPungsFlowers {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTemplate for EvenPungsFlowers {
    fn get_info(&self) -> &TemplateInfo {
        &self.info
    }

    fn generate_variations(&self) -> Vec<Variation> {
        let mut res = vec![];
        for n in 1..=4 {
            for [s1, s2, s3] in suit_permutations() {
                let mut v = vec![TileSet::kong(Tile::Flower)];
                for e in EVENS {
                    v.push(TileSet::single(num(s1, e)));
                }
                v.push(TileSet::pung(num(s2, 2 * n)));
                v.push(TileSet::pung(num(s3, 2 * n)));
                res.push(v);
            }
        }
        res
    }

    fn validate_hand(&self, tiles: &[Tile]) -> bool {
        if tiles.len() != HAND_SIZE {
            return false;
        }
        let tc = TileCounter::from_tiles(tiles);
        if tc.flowers != 4 || tc.honor_total() != 0 {
            return false;
        }

        let singles: Vec<(Tnum, usize)> = EVENS.iter().map(|&e| (e, 1)).collect();
        let s1 = match SUITS.iter().copied().find(|&s| tc.row_is(s, &singles)) {
            Some(s) => s,
            None => return false,
        };
        let [s2, s3] = other_suits(s1);
        let n = match tc.lowest_number(s2) {
            Some(n) if n % 2 == 0 => n,
            _ => return false,
        };
        tc.row_is(s2, &[(n, 3)]) && tc.row_is(s3, &[(n, 3)])
    }
}

#[test]
fn test_even_pungs_flowers() {
    let t = EvenPungsFlowers::new();
    let vs = t.generate_variations();
    assert_eq!(vs.len(), 24);
    for v in &vs {
        assert_eq!(flatten(v).len(), HAND_SIZE);
        assert!(t.validate_hand(&flatten(v)));
    }

    let hand = |codes: &[&str]| tiles_from_codes(codes).unwrap();
    let ok = hand(&[
        "FL", "FL", "FL", "FL", "2C", "4C", "6C", "8C", "8B", "8B", "8B", "8D", "8D", "8D",
    ]);
    assert!(t.validate_hand(&ok));

    // 刻子の数字が異なる
    let ng = hand(&[
        "FL", "FL", "FL", "FL", "2C", "4C", "6C", "8C", "6B", "6B", "6B", "8D", "8D", "8D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 奇数の刻子
    let ng = hand(&[
        "FL", "FL", "FL", "FL", "2C", "4C", "6C", "8C", "3B", "3B", "3B", "3D", "3D", "3D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 単独牌の色が揃っていない
    let ng = hand(&[
        "FL", "FL", "FL", "FL", "2C", "4C", "6C", "8B", "2B", "2B", "2B", "2D", "2D", "2D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 花が3枚
    let ng = hand(&[
        "FL", "FL", "FL", "N", "2C", "4C", "6C", "8C", "2B", "2B", "2B", "2D", "2D", "2D",
    ]);
    assert!(!t.validate_hand(&ng));
}
