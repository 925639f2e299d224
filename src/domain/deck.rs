use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Количество карт в стандартной колоде.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Колода карт: упорядоченный список из 52 карт.
///
/// Источник случайности передаётся снаружи (`RandomSource`), колода сама
/// RNG не хранит.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная колода в порядке:
    /// Club 2..A, Diamond 2..A, Heart 2..A, Spade 2..A.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Перемешать колоду на месте (равномерная перестановка).
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
