//! Движок стола: единственная поверхность мутаций состояния игры.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `add_player` / `remove_player` – управление составом стола
//!   - `reset_hands` – сбросить руки дилера и игроков
//!   - `shuffle` – перемешать все колоды
//!   - `first_deal` – заглушка под первую раздачу

pub mod errors;
pub mod game;

pub use errors::{ConfigError, GameError};
pub use game::Game;

use crate::domain::PlayerId;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Генератор идентификаторов игроков.
/// Реализации лежат в infra (UUID v4 и детерминированный счётчик для тестов).
pub trait PlayerIdSource {
    fn next_player_id(&self) -> PlayerId;
}
