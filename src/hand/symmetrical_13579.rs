use super::*;

const ROLE_13: &[(Tnum, usize)] = &[(1, 2), (3, 3)];
const ROLE_5: &[(Tnum, usize)] = &[(5, 4)];
const ROLE_79: &[(Tnum, usize)] = &[(7, 3), (9, 2)];

// 11 333 (s1)  5555 (s2)  777 99 (s3)  s1,s2,s3は3色の順列
pub struct Symmetrical13579 {
    info: TemplateInfo,
}

impl Symmetrical13579 {
    pub fn new() -> Self {
        Self {
            info: TemplateInfo {
                id: "symmetrical_13579_all_suits".to_string(),
                name: "13579 Symmetrical - All 3 Suits".to_string(),
                description: "Pair of 1s and pung of 3s in one suit, kong of 5s in another, \
                              pung of 7s and pair of 9s in the third suit"
                    .to_string(),
                category: "13579".to_string(),
                catid: "3".to_string(),
                image: "<green>11 333 <red>5555 <black>777 99".to_string(),
                point_value: 25,
                number: 2,
            },
        }
    }
}

impl Default for Symmetrical13579 {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTemplate for Symmetrical13579 {
    fn get_info(&self) -> &TemplateInfo {
        &self.info
    }

    fn generate_variations(&self) -> Vec<Variation> {
        suit_permutations()
            .into_iter()
            .map(|[s1, s2, s3]| {
                vec![
                    TileSet::pair(num(s1, 1)),
                    TileSet::pung(num(s1, 3)),
                    TileSet::kong(num(s2, 5)),
                    TileSet::pung(num(s3, 7)),
                    TileSet::pair(num(s3, 9)),
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
            && tc.match_suit_roles([ROLE_13, ROLE_5, ROLE_79]).is_some()
    }
}

#[test]
fn test_symmetrical_13579() {
    let t = Symmetrical13579::new();
    let vs = t.generate_variations();
    assert_eq!(vs.len(), 6);
    for v in &vs {
        assert_eq!(flatten(v).len(), HAND_SIZE);
        assert!(t.validate_hand(&flatten(v)));
    }

    let b = |n| num(Suit::Bamboo, n);
    let c = |n| num(Suit::Character, n);
    let d = |n| num(Suit::Dot, n);
    let hand: Vec<Tile> = [
        TileSet::pair(b(1)),
        TileSet::pung(b(3)),
        TileSet::kong(c(5)),
        TileSet::pung(d(7)),
        TileSet::pair(d(9)),
    ]
    .iter()
    .flat_map(|ts| ts.tiles().to_vec())
    .collect();
    assert!(t.validate_hand(&hand));

    // 7の刻子が1枚欠けている
    let missing: Vec<Tile> = hand.iter().copied().filter(|&x| x != d(7)).chain([d(7), d(7)]).collect();
    assert_eq!(missing.len(), 13);
    assert!(!t.validate_hand(&missing));

    // 7を1枚だけ別の牌に置き換え
    let mut replaced = hand.clone();
    let i = replaced.iter().position(|&x| x == d(7)).unwrap();
    replaced[i] = d(8);
    assert!(!t.validate_hand(&replaced));

    // 5の槓子が1の対子と同じ色
    let mut same_suit = hand.clone();
    for x in same_suit.iter_mut() {
        if *x == c(5) {
            *x = b(5);
        }
    }
    assert!(!t.validate_hand(&same_suit));
}
