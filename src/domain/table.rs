use serde::{Deserialize, Serialize};

use crate::engine::ConfigError;

/// Максимум игроков за блэкджек-столом (без дилера).
pub const MAX_PLAYERS: u8 = 7;

/// Конфиг стола: сколько мест и сколько колод.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Максимальное количество игроков (1..=7).
    pub max_players: u8,
    /// Сколько колод держит игра (минимум одна).
    pub deck_count: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            deck_count: 1,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players == 0 || self.max_players > MAX_PLAYERS {
            return Err(ConfigError::InvalidCapacity(self.max_players));
        }
        if self.deck_count == 0 {
            return Err(ConfigError::NoDecks);
        }
        Ok(())
    }

    /// Прочитать конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
