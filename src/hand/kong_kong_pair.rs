use super::*;

// FF  nnnn D (s1)  nnnn D (s2)  nn (s3)
// 三元牌は槓子と同じ色かつ既定の色(中:萬子, 發:索子, 白:筒子)であること
pub struct KongKongPair {
    info: TemplateInfo,
}

impl KongKongPair {
    pub fn new() -> Self {
        Self {
            info: TemplateInfo {
                id: "kong_kong_pair_flowers_dragons".to_string(),
                name: "Kong Kong Pair with some flowers and single dragons".to_string(),
                description: "Pair of Flowers, two kongs of the same number in different suits \
                              with single dragons, and a pair of the same number in a third suit"
                    .to_string(),
                category: "Any Like Numbers".to_string(),
                catid: "1".to_string(),
                image: "<black>FF <green>1111 D <red>1111 D <black>11".to_string(),
                point_value: 25,
                number: 1,
            },
        }
    }
}

impl Default for KongKongPair {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTemplate for KongKongPair {
    fn get_info(&self) -> &TemplateInfo {
        &self.info
    }

    // 数字9通り x 槓子の色の順序付きの組6通り
    fn generate_variations(&self) -> Vec<Variation> {
        let mut res = vec![];
        for n in 1..TNUM {
            for [s1, s2, s3] in suit_permutations() {
                res.push(vec![
                    TileSet::pair(Tile::Flower),
                    TileSet::kong(num(s1, n)),
                    TileSet::single(Tile::dragon(s1.canonical_dragon())),
                    TileSet::kong(num(s2, n)),
                    TileSet::single(Tile::dragon(s2.canonical_dragon())),
                    TileSet::pair(num(s3, n)),
                ]);
            }
        }
        res
    }

    fn validate_hand(&self, tiles: &[Tile]) -> bool {
        if tiles.len() != HAND_SIZE {
            return false;
        }
        let tc = TileCounter::from_tiles(tiles);
        if tc.flowers != 2 || tc.wind_total() != 0 || tc.jokers != 0 {
            return false;
        }
        if tc.dragon_total() != 2 {
            return false;
        }

        // 三元牌の色が槓子の色 (既定の色以外の三元牌があれば不一致)
        let mut kong_suits = vec![];
        for d in DRAGONS {
            for s in SUITS {
                match tc.dragons[d.index()][s.index()] {
                    0 => {}
                    1 if s == d.canonical_suit() => kong_suits.push(s),
                    _ => return false,
                }
            }
        }
        if kong_suits.len() != 2 {
            return false;
        }

        let pair_suit = match SUITS.iter().copied().find(|s| !kong_suits.contains(s)) {
            Some(s) => s,
            None => return false,
        };
        let n = match tc.lowest_number(pair_suit) {
            Some(n) => n,
            None => return false,
        };
        tc.row_is(pair_suit, &[(n, 2)]) && kong_suits.iter().all(|&s| tc.row_is(s, &[(n, 4)]))
    }
}

#[cfg(test)]
fn hand(codes: &[&str]) -> Vec<Tile> {
    tiles_from_codes(codes).unwrap()
}

#[test]
fn test_kong_kong_pair_generate() {
    use crate::util::misc::vec_to_string;

    let t = KongKongPair::new();
    let vs = t.generate_variations();
    assert_eq!(vs.len(), 54);
    for v in &vs {
        let tiles = flatten(v);
        assert_eq!(tiles.len(), HAND_SIZE);
        assert!(t.validate_hand(&tiles));

        // 三元牌は直前の槓子と同じ色
        for w in v.windows(2) {
            if let Tile::Dragon(d, s) = w[1].tiles()[0] {
                assert_eq!(s, d.canonical_suit());
                assert_eq!(w[0].tiles()[0].suit(), Some(s));
            }
        }
    }

    // 槓子の色の組ごとに異なる組み合わせが生成される
    let mut codes: Vec<String> = vs.iter().map(|v| vec_to_string(&flatten(v))).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 54);
}

#[test]
fn test_kong_kong_pair_validate() {
    let t = KongKongPair::new();
    let ok = hand(&[
        "FL", "FL", "3B", "3B", "3B", "3B", "GD", "3C", "3C", "3C", "3C", "RD", "3D", "3D",
    ]);
    assert!(t.validate_hand(&ok));

    // 發を筒子として扱った場合は不一致
    let ng = hand(&[
        "FL", "FL", "3B", "3B", "3B", "3B", "GDD", "3C", "3C", "3C", "3C", "RD", "3D", "3D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 三元牌が槓子ではなく対子の色
    let ng = hand(&[
        "FL", "FL", "3B", "3B", "3B", "3B", "WD", "3C", "3C", "3C", "3C", "RD", "3D", "3D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 数字が揃っていない
    let ng = hand(&[
        "FL", "FL", "3B", "3B", "3B", "3B", "GD", "4C", "4C", "4C", "4C", "RD", "3D", "3D",
    ]);
    assert!(!t.validate_hand(&ng));

    // 花の代わりにジョーカー
    let ng = hand(&[
        "JK", "FL", "3B", "3B", "3B", "3B", "GD", "3C", "3C", "3C", "3C", "RD", "3D", "3D",
    ]);
    assert!(!t.validate_hand(&ng));
}
