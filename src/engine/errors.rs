use thiserror::Error;

/// Ошибки операций над столом. Ни одна не меняет состояние игры.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Стол заполнен (максимум {capacity} игроков)")]
    TableFull { capacity: u8 },

    #[error("Имя {0:?} уже занято за столом")]
    NameExists(String),

    #[error("Игрок {0:?} не найден за столом")]
    NoPlayer(String),
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Нужна хотя бы одна колода")]
    NoDecks,

    #[error("Недопустимая вместимость стола: {0} (ожидается 1..=7)")]
    InvalidCapacity(u8),

    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),
}
