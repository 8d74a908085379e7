use std::fmt;
use std::str::FromStr;

use serde::{de, ser};

use super::*;

// [Number]
// 数牌の数字 (1~9). 範囲外の値を持つ数字は構築できない
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(u8);

pub const NUMBERS: [Number; 9] = [
    Number(1),
    Number(2),
    Number(3),
    Number(4),
    Number(5),
    Number(6),
    Number(7),
    Number(8),
    Number(9),
];

impl Number {
    pub fn new(n: Tnum) -> Option<Self> {
        if (1..TNUM).contains(&n) {
            Some(Number(n as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(self) -> Tnum {
        self.0 as Tnum
    }

    // d個先の数字 (9を超える場合はNone)
    pub fn offset(self, d: usize) -> Option<Self> {
        self.get().checked_add(d).and_then(Self::new)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// [Tile]
// 牌の同一性は短縮コードと一対一に対応する
//   数牌: "5B"  風牌: "N"  三元牌: "RD" (既定の色以外は "RDB" のように色を付与)  花: "FL"  ジョーカー: "JK"
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Numbered(Suit, Number),
    Wind(Wind),
    Dragon(Dragon, Suit),
    Flower,
    Joker,
}

impl Tile {
    pub fn numbered(n: Tnum, s: Suit) -> MahjonggResult<Self> {
        Number::new(n)
            .map(|n| Tile::Numbered(s, n))
            .ok_or_else(|| MahjonggError::invalid_code(&format!("{}{}", n, s.letter())))
    }

    // 既定の色を持つ三元牌
    #[inline]
    pub fn dragon(d: Dragon) -> Self {
        Tile::Dragon(d, d.canonical_suit())
    }

    pub fn from_short_code(code: &str) -> MahjonggResult<Self> {
        let chars: Vec<char> = code.chars().collect();
        let tile = match chars.as_slice() {
            [c] => Wind::from_letter(*c).map(Tile::Wind),
            [n, s] if n.is_ascii_digit() => match (n.to_digit(10), Suit::from_letter(*s)) {
                (Some(n), Some(s)) => Number::new(n as Tnum).map(|n| Tile::Numbered(s, n)),
                _ => None,
            },
            ['F', 'L'] => Some(Tile::Flower),
            ['J', 'K'] => Some(Tile::Joker),
            [_, _] => Dragon::from_code(code).map(Tile::dragon),
            [d0, d1, s] => {
                let d: String = [*d0, *d1].iter().collect();
                match (Dragon::from_code(&d), Suit::from_letter(*s)) {
                    // 既定の色を明示した表記は受け付けない ("GD" のみが正規形)
                    (Some(d), Some(s)) if s != d.canonical_suit() => Some(Tile::Dragon(d, s)),
                    _ => None,
                }
            }
            _ => None,
        };
        tile.ok_or_else(|| MahjonggError::invalid_code(code))
    }

    pub fn short_code(&self) -> String {
        match *self {
            Tile::Numbered(s, n) => format!("{}{}", n, s.letter()),
            Tile::Wind(w) => w.letter().to_string(),
            Tile::Dragon(d, s) => {
                if s == d.canonical_suit() {
                    d.code().to_string()
                } else {
                    format!("{}{}", d.code(), s.letter())
                }
            }
            Tile::Flower => "FL".to_string(),
            Tile::Joker => "JK".to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        match *self {
            Tile::Numbered(s, n) => format!("{} {}", n, s.name()),
            Tile::Wind(w) => format!("{} Wind", w.name()),
            Tile::Dragon(d, s) => format!("{} ({})", d.name(), s.name()),
            Tile::Flower => "Flower".to_string(),
            Tile::Joker => "Joker".to_string(),
        }
    }

    #[inline]
    pub fn suit(&self) -> Option<Suit> {
        match *self {
            Tile::Numbered(s, _) | Tile::Dragon(_, s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn number(&self) -> Option<Tnum> {
        match *self {
            Tile::Numbered(_, n) => Some(n.get()),
            _ => None,
        }
    }
}

impl FromStr for Tile {
    type Err = MahjonggError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::from_short_code(s)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_code())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.short_code())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile short code")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_short_code(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// 文字列の配列をまとめてパース
pub fn tiles_from_codes<S: AsRef<str>>(codes: &[S]) -> MahjonggResult<Vec<Tile>> {
    codes
        .iter()
        .map(|c| Tile::from_short_code(c.as_ref()))
        .collect()
}

#[cfg(test)]
fn every_tile() -> Vec<Tile> {
    let mut tiles = vec![];
    for s in SUITS {
        for n in NUMBERS {
            tiles.push(Tile::Numbered(s, n));
        }
    }
    for w in WINDS {
        tiles.push(Tile::Wind(w));
    }
    for d in DRAGONS {
        for s in SUITS {
            tiles.push(Tile::Dragon(d, s));
        }
    }
    tiles.push(Tile::Flower);
    tiles.push(Tile::Joker);
    tiles
}

#[test]
fn test_short_code_round_trip() {
    let tiles = every_tile();
    for t in &tiles {
        assert_eq!(Tile::from_short_code(&t.short_code()).unwrap(), *t);
    }

    // 短縮コードは全て異なる
    let mut codes: Vec<String> = tiles.iter().map(|t| t.short_code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), tiles.len());
}

#[test]
fn test_short_code_forms() {
    assert_eq!(Tile::numbered(5, Suit::Bamboo).unwrap().short_code(), "5B");
    assert_eq!(Tile::Wind(Wind::North).short_code(), "N");
    assert_eq!(Tile::dragon(Dragon::Red).short_code(), "RD");
    assert_eq!(Tile::Dragon(Dragon::Green, Suit::Dot).short_code(), "GDD");
    assert_eq!(Tile::Flower.short_code(), "FL");
    assert_eq!(Tile::Joker.short_code(), "JK");
    assert_eq!("WD".parse::<Tile>().unwrap(), Tile::Dragon(Dragon::White, Suit::Dot));
}

#[test]
fn test_invalid_short_code() {
    for code in ["", "0B", "10B", "5X", "5b", "X", "FLW", "GDB", "RDC", "ZD", "n", "1", "üB"] {
        assert_eq!(
            Tile::from_short_code(code),
            Err(MahjonggError::invalid_code(code)),
            "{}",
            code
        );
    }
    assert!(Tile::numbered(0, Suit::Dot).is_err());
    assert!(Tile::numbered(10, Suit::Dot).is_err());
    assert!(Tile::numbered(usize::MAX, Suit::Dot).is_err());
    assert_eq!(Tile::numbered(9, Suit::Dot).unwrap().short_code(), "9D");
}

#[test]
fn test_number_range() {
    assert_eq!(Number::new(0), None);
    assert_eq!(Number::new(10), None);
    assert_eq!(Number::new(usize::MAX), None);
    for (i, n) in NUMBERS.iter().enumerate() {
        assert_eq!(Number::new(i + 1), Some(*n));
        assert_eq!(n.get(), i + 1);
    }

    let n = NUMBERS[6];
    assert_eq!(n.offset(2), Some(NUMBERS[8]));
    assert_eq!(n.offset(3), None);
    assert_eq!(n.offset(usize::MAX), None);

    // 構築可能な全ての数牌の短縮コードは1~9の数字を持つ
    for s in SUITS {
        for n in NUMBERS {
            let t = Tile::Numbered(s, n);
            assert_eq!(Tile::from_short_code(&t.short_code()), Ok(t));
        }
    }
}

#[test]
fn test_full_name() {
    assert_eq!(Tile::numbered(3, Suit::Character).unwrap().full_name(), "3 Character");
    assert_eq!(Tile::Wind(Wind::East).full_name(), "East Wind");
    assert_eq!(
        Tile::Dragon(Dragon::Red, Suit::Bamboo).full_name(),
        "Red Dragon (Bamboo)"
    );
    assert_eq!(Tile::Flower.full_name(), "Flower");
}

#[test]
fn test_tile_serde() {
    let tiles = vec![
        Tile::numbered(7, Suit::Dot).unwrap(),
        Tile::Dragon(Dragon::White, Suit::Bamboo),
        Tile::Flower,
    ];
    let json = serde_json::to_string(&tiles).unwrap();
    assert_eq!(json, r#"["7D","WDB","FL"]"#);
    let back: Vec<Tile> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tiles);
    assert!(serde_json::from_str::<Tile>(r#""0D""#).is_err());
}
