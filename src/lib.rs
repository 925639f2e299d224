//! Модель многопользовательского блэкджек-стола.
//!
//! Состав стола (до 7 игроков с уникальными именами), дилер, колоды и руки.
//! Правила раздачи, подсчёт очков и ставки здесь не реализованы.
//!
//! Слои:
//! - `domain` – карты, колоды, руки, игроки, конфиг стола;
//! - `engine` – `Game` и ошибки, трейты `RandomSource` / `PlayerIdSource`;
//! - `infra` – RNG, генераторы ID, `SharedGame`;
//! - `api` – сериализуемые команды, запросы и DTO.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::domain::{Card, Dealer, Deck, Hand, Player, PlayerId, Rank, Suit, TableConfig};
pub use crate::engine::{ConfigError, Game, GameError, PlayerIdSource, RandomSource};
