use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Рука: карты в порядке получения. Во время игры только дополняется,
/// сбрасывается целиком через `Game::reset_hands`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}
