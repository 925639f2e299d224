use serde::{Deserialize, Serialize};

use crate::domain::{Card, Hand, Player, PlayerId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub cards: Vec<Card>,
}

impl From<&Hand> for HandDto {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub id: PlayerId,
    pub name: String,
    pub hand: HandDto,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            hand: HandDto::from(player.hand()),
        }
    }
}

/// Полный вид стола. Игроки отсортированы по имени.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub max_players: u8,
    pub dealer: HandDto,
    pub players: Vec<PlayerDto>,
    /// Количество карт в каждой колоде.
    pub deck_sizes: Vec<usize>,
}
