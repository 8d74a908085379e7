use super::*;

// 1色で n の対子と n+1~n+4 の単独牌(5連続), 残り2色で n の槓子
//   例: 11 2345 (B)  1111 (C)  1111 (D)
pub struct SequenceAndKongs {
    info: TemplateInfo,
}

impl SequenceAndKongs {
    pub fn new() -> Self {
        Self {
            info: TemplateInfo {
                id: "sequence_and_kongs".to_string(),
                name: "Sequence of 5 and Opposite Kongs".to_string(),
                description: "Pair + sequence of 5 + kongs in other suits".to_string(),
                category: "Consecutive".to_string(),
                catid: "2".to_string(),
                image: "<red>112345 <green>1111 <black>1111".to_string(),
                point_value: 25,
                number: 7,
            },
        }
    }
}

impl Default for SequenceAndKongs {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTemplate for SequenceAndKongs {
    fn get_info(&self) -> &TemplateInfo {
        &self.info
    }

    fn generate_variations(&self) -> Vec<Variation> {
        let mut res = vec![];
        for n in 1..=5 {
            for s1 in SUITS {
                let [s2, s3] = other_suits(s1);
                let mut v = vec![TileSet::pair(num(s1, n))];
                for i in 1..=4 {
                    v.push(TileSet::single(num(s1, n + i)));
                }
                v.push(TileSet::kong(num(s2, n)));
                v.push(TileSet::kong(num(s3, n)));
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
        if tc.honor_total() != 0 || tc.flowers != 0 {
            return false;
        }

        // 対子+連続牌の色は6枚
        let s1 = match SUITS.iter().copied().find(|&s| tc.suit_total(s) == 6) {
            Some(s) => s,
            None => return false,
        };
        let n = match tc.lowest_number(s1) {
            Some(n) if n <= 5 => n,
            _ => return false,
        };

        let mut counts = vec![(n, 2)];
        for i in 1..=4 {
            counts.push((n + i, 1));
        }
        tc.row_is(s1, &counts) && other_suits(s1).iter().all(|&s| tc.row_is(s, &[(n, 4)]))
    }
}

#[cfg(test)]
fn hand(codes: &[&str]) -> Vec<Tile> {
    tiles_from_codes(codes).unwrap()
}

#[test]
fn test_sequence_and_kongs_generate() {
    let t = SequenceAndKongs::new();
    let vs = t.generate_variations();
    assert_eq!(vs.len(), 15);
    for v in &vs {
        assert_eq!(flatten(v).len(), HAND_SIZE);
        let types: Vec<TileSetType> = v.iter().map(|ts| ts.set_type()).collect();
        assert_eq!(types.iter().filter(|&&x| x == TileSetType::Pair).count(), 1);
        assert_eq!(types.iter().filter(|&&x| x == TileSetType::Single).count(), 4);
        assert_eq!(types.iter().filter(|&&x| x == TileSetType::Kong).count(), 2);
        assert!(t.validate_hand(&flatten(v)));
    }
}

#[test]
fn test_sequence_and_kongs_validate() {
    let t = SequenceAndKongs::new();
    let ok = hand(&[
        "5D", "5D", "6D", "7D", "8D", "9D", "5B", "5B", "5B", "5B", "5C", "5C", "5C", "5C",
    ]);
    assert!(t.validate_hand(&ok));

    // 連続牌が途切れている
    let ng = hand(&[
        "5D", "5D", "6D", "7D", "8D", "8D", "5B", "5B", "5B", "5B", "5C", "5C", "5C", "5C",
    ]);
    assert!(!t.validate_hand(&ng));

    // 槓子の数字が対子と異なる
    let ng = hand(&[
        "1C", "1C", "2C", "3C", "4C", "5C", "2B", "2B", "2B", "2B", "2D", "2D", "2D", "2D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 枚数不足
    assert!(!t.validate_hand(&ok[..13]));
    assert!(!t.validate_hand(&[]));
}

#[test]
fn test_sequence_and_kongs_validate_codes() {
    let t = SequenceAndKongs::new();
    let mut codes = vec!["9B", "9B"];
    codes.extend(["N"; 12]);
    assert!(!t.validate_codes(&codes));
    codes[2] = "??";
    assert!(!t.validate_codes(&codes));
}
