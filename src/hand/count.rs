use crate::model::*;

// [SuitRow] 数牌の枚数テーブル (index = 数字, 0は未使用)
pub type SuitRow = [usize; TNUM];

// (数字, 枚数)の列から期待される行を作成
pub fn make_row(counts: &[(Tnum, usize)]) -> SuitRow {
    let mut row = SuitRow::default();
    for &(n, c) in counts {
        row[n] += c;
    }
    row
}

// [TileCounter]
// 牌の種類ごとの枚数集計 テンプレートの判定はこの集計のみから行う
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TileCounter {
    pub numbered: [SuitRow; SUIT],
    pub winds: [usize; WIND],
    pub dragons: [[usize; SUIT]; DRAGON], // [dragon][suit]
    pub flowers: usize,
    pub jokers: usize,
    pub total: usize,
}

impl TileCounter {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut tc = Self::default();
        for t in tiles {
            match *t {
                Tile::Numbered(s, n) => tc.numbered[s.index()][n.get()] += 1,
                Tile::Wind(w) => tc.winds[w.index()] += 1,
                Tile::Dragon(d, s) => tc.dragons[d.index()][s.index()] += 1,
                Tile::Flower => tc.flowers += 1,
                Tile::Joker => tc.jokers += 1,
            }
        }
        tc.total = tiles.len();
        tc
    }

    #[inline]
    pub fn row(&self, s: Suit) -> &SuitRow {
        &self.numbered[s.index()]
    }

    pub fn suit_total(&self, s: Suit) -> usize {
        self.row(s).iter().sum()
    }

    pub fn wind_total(&self) -> usize {
        self.winds.iter().sum()
    }

    pub fn dragon_total(&self) -> usize {
        self.dragons.iter().flatten().sum()
    }

    // 数牌以外に含まれる牌の枚数 (花は除く)
    pub fn honor_total(&self) -> usize {
        self.wind_total() + self.dragon_total() + self.jokers
    }

    // 行に含まれる最小の数字
    pub fn lowest_number(&self, s: Suit) -> Option<Tnum> {
        (1..TNUM).find(|&n| self.row(s)[n] != 0)
    }

    #[inline]
    pub fn row_is(&self, s: Suit, counts: &[(Tnum, usize)]) -> bool {
        *self.row(s) == make_row(counts)
    }

    // 3色それぞれが異なる役割(roles[i])に一致する場合,役割ごとの色を返却
    pub fn match_suit_roles(&self, roles: [&[(Tnum, usize)]; SUIT]) -> Option<[Suit; SUIT]> {
        let mut assigned: [Option<Suit>; SUIT] = [None; SUIT];
        for s in SUITS {
            let r = roles.iter().position(|counts| self.row_is(s, counts))?;
            if assigned[r].is_some() {
                return None;
            }
            assigned[r] = Some(s);
        }
        Some([assigned[0]?, assigned[1]?, assigned[2]?])
    }
}

// 3色の全順列 (6通り)
pub fn suit_permutations() -> Vec<[Suit; SUIT]> {
    let mut res = vec![];
    for s1 in SUITS {
        for s2 in SUITS {
            if s2 == s1 {
                continue;
            }
            for s3 in SUITS {
                if s3 != s1 && s3 != s2 {
                    res.push([s1, s2, s3]);
                }
            }
        }
    }
    res
}

// 指定した色以外の2色 (B,C,Dの順)
pub fn other_suits(s: Suit) -> [Suit; 2] {
    let mut res = [s; 2];
    let mut i = 0;
    for s2 in SUITS {
        if s2 != s {
            res[i] = s2;
            i += 1;
        }
    }
    res
}

// テンプレート定義用 (n は 1~9)
#[inline]
pub fn num(s: Suit, n: Tnum) -> Tile {
    Tile::Numbered(s, NUMBERS[n - 1])
}

#[test]
fn test_tile_counter() {
    let tiles = tiles_from_codes(&["1B", "1B", "5D", "N", "GDD", "FL", "JK", "RD"]).unwrap();
    let tc = TileCounter::from_tiles(&tiles);
    assert_eq!(tc.total, 8);
    assert_eq!(tc.row(Suit::Bamboo)[1], 2);
    assert_eq!(tc.suit_total(Suit::Dot), 1);
    assert_eq!(tc.wind_total(), 1);
    assert_eq!(tc.dragons[Dragon::Green.index()][Suit::Dot.index()], 1);
    assert_eq!(tc.dragon_total(), 2);
    assert_eq!(tc.flowers, 1);
    assert_eq!(tc.jokers, 1);
    assert_eq!(tc.honor_total(), 4);
    assert_eq!(tc.lowest_number(Suit::Dot), Some(5));
    assert_eq!(tc.lowest_number(Suit::Character), None);
    assert!(tc.row_is(Suit::Bamboo, &[(1, 2)]));
    assert!(!tc.row_is(Suit::Bamboo, &[(1, 1)]));

    let tc = TileCounter::from_tiles(&[num(Suit::Dot, 9), num(Suit::Dot, 1)]);
    assert_eq!(tc.row(Suit::Dot)[9], 1);
    assert_eq!(tc.lowest_number(Suit::Dot), Some(1));
    assert_eq!(tc.honor_total(), 0);
}

#[test]
fn test_suit_helpers() {
    let perms = suit_permutations();
    assert_eq!(perms.len(), 6);
    assert_eq!(perms[0], [Suit::Bamboo, Suit::Character, Suit::Dot]);
    assert_eq!(other_suits(Suit::Character), [Suit::Bamboo, Suit::Dot]);
}

#[test]
fn test_match_suit_roles() {
    let tiles = tiles_from_codes(&["3C", "3C", "3C", "6D", "6D", "6D", "6D"]).unwrap();
    let tc = TileCounter::from_tiles(&tiles);
    assert_eq!(
        tc.match_suit_roles([&[], &[(3, 3)], &[(6, 4)]]),
        Some([Suit::Bamboo, Suit::Character, Suit::Dot])
    );
    // どの役割にも一致しない色がある
    assert_eq!(tc.match_suit_roles([&[], &[(3, 2)], &[(6, 4)]]), None);

    // 2色が同じ役割に一致
    let tc = TileCounter::from_tiles(&tiles[3..]);
    assert_eq!(tc.match_suit_roles([&[], &[(3, 3)], &[(6, 4)]]), None);
}
