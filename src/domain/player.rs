use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::hand::Hand;

/// Глобально уникальный идентификатор игрока.
///
/// Имя игрока — ключ поиска за столом, а `PlayerId` — идентичность,
/// которая не меняется даже если имя потом займёт другой человек.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub Uuid);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Игрок за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Hand::empty(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Дилер: одна рука, один на стол, живёт столько же, сколько игра.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new() -> Self {
        Self { hand: Hand::empty() }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
