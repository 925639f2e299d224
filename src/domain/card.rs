use core::fmt;

use serde::{Deserialize, Serialize};

/// Масть карты. Дискриминанты 1..=4.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Club = 1,    // ♣
    Diamond,     // ♦
    Heart,       // ♥
    Spade,       // ♠
}

impl Suit {
    /// Канонический порядок мастей.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
}

/// Ранг карты в очках блэкджека.
///
/// Десятка, валет, дама и король сливаются в одно значение 10: карта хранит
/// только очки, а не «картинку». Туз = 11.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const DEUCE: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(10);
    pub const QUEEN: Rank = Rank(10);
    pub const KING: Rank = Rank(10);
    pub const ACE: Rank = Rank(11);

    /// 13 слотов ранга в каноническом порядке (2..9, T, J, Q, K, A).
    pub const ALL: [Rank; 13] = [
        Rank::DEUCE,
        Rank::THREE,
        Rank::FOUR,
        Rank::FIVE,
        Rank::SIX,
        Rank::SEVEN,
        Rank::EIGHT,
        Rank::NINE,
        Rank::TEN,
        Rank::JACK,
        Rank::QUEEN,
        Rank::KING,
        Rank::ACE,
    ];

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_ace(self) -> bool {
        self.0 == Rank::ACE.0
    }
}

/// Карта: неизменяемая пара (масть, ранг).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Очки карты для блэкджека.
    pub const fn points(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ace() {
            write!(f, "A")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `10d`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
