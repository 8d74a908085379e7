use std::fmt;

use serde::Serialize;

use super::*;
use crate::util::misc::vec_to_string;

// [TileSetType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSetType {
    Single,   // 単独牌
    Pair,     // 対子
    Pung,     // 刻子
    Kong,     // 槓子
    Chow,     // 順子 (3枚)
    Sequence, // 連続牌 (2枚以上)
}

impl TileSetType {
    // 固定の枚数 (Sequenceは可変なのでNone)
    pub fn size(self) -> Option<usize> {
        match self {
            TileSetType::Single => Some(1),
            TileSetType::Pair => Some(2),
            TileSetType::Pung => Some(3),
            TileSetType::Kong => Some(4),
            TileSetType::Chow => Some(3),
            TileSetType::Sequence => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileSetType::Single => "single",
            TileSetType::Pair => "pair",
            TileSetType::Pung => "pung",
            TileSetType::Kong => "kong",
            TileSetType::Chow => "chow",
            TileSetType::Sequence => "sequence",
        }
    }

    #[inline]
    pub fn is_run(self) -> bool {
        matches!(self, TileSetType::Chow | TileSetType::Sequence)
    }
}

// [TileSet]
// 構築後は不変. Chow/Sequenceの牌は数字の昇順に並ぶ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TileSet {
    set_type: TileSetType,
    tiles: Vec<Tile>,
}

impl TileSet {
    pub fn new(set_type: TileSetType, mut tiles: Vec<Tile>) -> MahjonggResult<Self> {
        if tiles.is_empty() {
            return Err(MahjonggError::invalid_group("tile set cannot be empty"));
        }

        match set_type.size() {
            Some(n) if n != tiles.len() => {
                return Err(MahjonggError::invalid_group(format!(
                    "{} requires {} tiles, got {}",
                    set_type.name(),
                    n,
                    tiles.len()
                )));
            }
            None if tiles.len() < 2 => {
                return Err(MahjonggError::invalid_group(
                    "sequence requires at least 2 tiles",
                ));
            }
            _ => {}
        }

        if set_type.is_run() {
            tiles.sort_by_key(|t| t.number());
            check_run(&tiles)?;
        } else if tiles.iter().any(|t| *t != tiles[0]) {
            return Err(MahjonggError::invalid_group(format!(
                "{} requires identical tiles: {}",
                set_type.name(),
                vec_to_string(&tiles)
            )));
        }

        Ok(Self { set_type, tiles })
    }

    pub fn single(t: Tile) -> Self {
        Self {
            set_type: TileSetType::Single,
            tiles: vec![t],
        }
    }

    pub fn pair(t: Tile) -> Self {
        Self {
            set_type: TileSetType::Pair,
            tiles: vec![t; 2],
        }
    }

    pub fn pung(t: Tile) -> Self {
        Self {
            set_type: TileSetType::Pung,
            tiles: vec![t; 3],
        }
    }

    pub fn kong(t: Tile) -> Self {
        Self {
            set_type: TileSetType::Kong,
            tiles: vec![t; 4],
        }
    }

    pub fn chow(t1: Tile, t2: Tile, t3: Tile) -> MahjonggResult<Self> {
        Self::new(TileSetType::Chow, vec![t1, t2, t3])
    }

    // startから始まるlength枚の連続牌 (3枚の場合はChow)
    pub fn sequence(start: Tile, length: usize) -> MahjonggResult<Self> {
        if length < 2 {
            return Err(MahjonggError::invalid_group(
                "sequence length must be at least 2",
            ));
        }
        let (s, n) = match start {
            Tile::Numbered(s, n) => (s, n),
            t => {
                return Err(MahjonggError::invalid_group(format!(
                    "sequence requires a numbered tile: {}",
                    t
                )));
            }
        };
        let tiles = (0..length)
            .map(|i| n.offset(i).map(|n| Tile::Numbered(s, n)))
            .collect::<Option<Vec<Tile>>>()
            .ok_or_else(|| {
                MahjonggError::invalid_group(format!(
                    "sequence of length {} starting at {} exceeds 9",
                    length, n
                ))
            })?;
        let set_type = if length == 3 {
            TileSetType::Chow
        } else {
            TileSetType::Sequence
        };
        Self::new(set_type, tiles)
    }

    #[inline]
    pub fn set_type(&self) -> TileSetType {
        self.set_type
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // 順子: "1B 2B 3B", その他: "3x1B"
    pub fn short_name(&self) -> String {
        if self.set_type.is_run() {
            vec_to_string(&self.tiles)
        } else {
            format!("{}x{}", self.tiles.len(), self.tiles[0])
        }
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.set_type.name().to_uppercase(),
            self.short_name()
        )
    }
}

// 同色の数牌で数字が1ずつ増加していること (昇順に並べ替え済みであること)
fn check_run(tiles: &[Tile]) -> MahjonggResult<()> {
    let mut prev: Option<(Suit, Tnum)> = None;
    for t in tiles {
        let (s, n) = match *t {
            Tile::Numbered(s, n) => (s, n.get()),
            _ => {
                return Err(MahjonggError::invalid_group(format!(
                    "run requires numbered tiles: {}",
                    vec_to_string(tiles)
                )));
            }
        };
        if let Some((s0, n0)) = prev {
            if s != s0 {
                return Err(MahjonggError::invalid_group(format!(
                    "run requires a single suit: {}",
                    vec_to_string(tiles)
                )));
            }
            if n != n0 + 1 {
                return Err(MahjonggError::invalid_group(format!(
                    "run requires consecutive numbers: {}",
                    vec_to_string(tiles)
                )));
            }
        }
        prev = Some((s, n));
    }
    Ok(())
}

#[test]
fn test_identical_sets() {
    let t = Tile::numbered(1, Suit::Bamboo).unwrap();
    assert_eq!(TileSet::pair(t).len(), 2);
    assert_eq!(TileSet::pung(t).len(), 3);
    assert_eq!(TileSet::kong(Tile::Flower).tiles(), &[Tile::Flower; 4]);
    assert_eq!(TileSet::pung(t).short_name(), "3x1B");
    assert_eq!(TileSet::kong(t).to_string(), "KONG: 4x1B");

    assert!(TileSet::new(TileSetType::Pung, vec![t; 3]).is_ok());
    assert!(TileSet::new(TileSetType::Pung, vec![t; 2]).is_err());
    assert!(TileSet::new(TileSetType::Single, vec![]).is_err());
    assert!(TileSet::new(TileSetType::Pair, vec![t, Tile::numbered(1, Suit::Dot).unwrap()]).is_err());
}

#[test]
fn test_chow() {
    let b = |n| Tile::numbered(n, Suit::Bamboo).unwrap();
    let c = TileSet::chow(b(3), b(1), b(2)).unwrap();
    assert_eq!(c.set_type(), TileSetType::Chow);
    assert_eq!(c.tiles(), &[b(1), b(2), b(3)]);
    assert_eq!(c.short_name(), "1B 2B 3B");

    assert!(TileSet::chow(b(1), b(2), b(4)).is_err());
    assert!(TileSet::chow(b(1), b(2), Tile::numbered(3, Suit::Dot).unwrap()).is_err());
    assert!(TileSet::chow(b(1), b(1), b(2)).is_err());
    assert!(TileSet::chow(Tile::Flower, b(1), b(2)).is_err());
}

#[test]
fn test_sequence() {
    let d = |n| Tile::numbered(n, Suit::Dot).unwrap();
    let s = TileSet::sequence(d(5), 5).unwrap();
    assert_eq!(s.set_type(), TileSetType::Sequence);
    assert_eq!(s.tiles(), &[d(5), d(6), d(7), d(8), d(9)]);

    assert_eq!(TileSet::sequence(d(7), 3).unwrap().set_type(), TileSetType::Chow);
    assert_eq!(TileSet::sequence(d(8), 2).unwrap().set_type(), TileSetType::Sequence);

    assert!(TileSet::sequence(d(6), 5).is_err());
    assert!(TileSet::sequence(d(1), 1).is_err());
    assert!(TileSet::sequence(Tile::Joker, 3).is_err());
    assert!(matches!(
        TileSet::sequence(d(9), 2),
        Err(MahjonggError::InvalidTileGroup { .. })
    ));
    // 9を超える長さはオーバーフローせずにエラー
    assert!(TileSet::sequence(d(9), usize::MAX).is_err());
    assert!(TileSet::sequence(d(1), 10).is_err());
    assert_eq!(TileSet::sequence(d(1), 9).unwrap().len(), 9);
}
