use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::GameError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// За столом нет свободных мест.
    #[error("Стол заполнен (максимум {capacity} игроков)")]
    TableFull { capacity: u8 },

    /// Имя уже занято.
    #[error("Имя {0:?} уже занято")]
    NameExists(String),

    /// Игрок не найден за столом.
    #[error("Игрок {0:?} не найден")]
    NoPlayer(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::TableFull { capacity } => ApiError::TableFull { capacity },
            GameError::NameExists(name) => ApiError::NameExists(name),
            GameError::NoPlayer(name) => ApiError::NoPlayer(name),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
