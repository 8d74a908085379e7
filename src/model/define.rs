use std::fmt;

use serde::Serialize;

// 型エイリアス
pub type Tnum = usize; // 数牌の数字部分 (1~9)

// Number
pub const SUIT: usize = 3; // 数牌の種別の数 (索子,萬子,筒子)
pub const TNUM: usize = 10; // 数字部分のテーブル長 (index 0は未使用)
pub const WIND: usize = 4; // 風牌の種類
pub const DRAGON: usize = 3; // 三元牌の種類
pub const HAND_SIZE: usize = 14; // 和了形の枚数

// [Suit]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Suit {
    Bamboo,    // 索子 (B)
    Character, // 萬子 (C)
    Dot,       // 筒子 (D)
}

pub const SUITS: [Suit; SUIT] = [Suit::Bamboo, Suit::Character, Suit::Dot];

impl Suit {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        ['B', 'C', 'D'][self.index()]
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'B' => Some(Suit::Bamboo),
            'C' => Some(Suit::Character),
            'D' => Some(Suit::Dot),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        ["Bamboo", "Character", "Dot"][self.index()]
    }

    // 各色に対応する三元牌
    pub fn canonical_dragon(self) -> Dragon {
        match self {
            Suit::Bamboo => Dragon::Green,
            Suit::Character => Dragon::Red,
            Suit::Dot => Dragon::White,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// [Wind]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Wind {
    North,
    East,
    South,
    West,
}

pub const WINDS: [Wind; WIND] = [Wind::North, Wind::East, Wind::South, Wind::West];

impl Wind {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        ['N', 'E', 'S', 'W'][self.index()]
    }

    pub fn from_letter(c: char) -> Option<Self> {
        WINDS.iter().copied().find(|w| w.letter() == c)
    }

    pub fn name(self) -> &'static str {
        ["North", "East", "South", "West"][self.index()]
    }
}

// [Dragon]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dragon {
    Red,   // 中 (Character)
    Green, // 發 (Bamboo)
    White, // 白 (Dot)
}

pub const DRAGONS: [Dragon; DRAGON] = [Dragon::Red, Dragon::Green, Dragon::White];

impl Dragon {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        ["RD", "GD", "WD"][self.index()]
    }

    pub fn from_code(s: &str) -> Option<Self> {
        DRAGONS.iter().copied().find(|d| d.code() == s)
    }

    pub fn name(self) -> &'static str {
        ["Red Dragon", "Green Dragon", "White Dragon"][self.index()]
    }

    pub fn canonical_suit(self) -> Suit {
        match self {
            Dragon::Red => Suit::Character,
            Dragon::Green => Suit::Bamboo,
            Dragon::White => Suit::Dot,
        }
    }
}

#[test]
fn test_dragon_suit_mapping() {
    for s in SUITS {
        assert_eq!(s.canonical_dragon().canonical_suit(), s);
    }
    assert_eq!(Dragon::Red.canonical_suit(), Suit::Character);
    assert_eq!(Dragon::Green.canonical_suit(), Suit::Bamboo);
    assert_eq!(Dragon::White.canonical_suit(), Suit::Dot);
}
