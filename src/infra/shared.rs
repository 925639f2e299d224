use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Player, PlayerId};
use crate::engine::{Game, GameError, PlayerIdSource, RandomSource};
use crate::infra::ids::UuidIdSource;

/// Игра, разделяемая между несколькими вызывающими (например, сетевыми
/// соединениями).
///
/// Каждый метод держит один мьютекс на всё время вызова, поэтому проверка
/// вместимости и уникальности имени атомарна вместе с мутацией.
#[derive(Debug)]
pub struct SharedGame<I = UuidIdSource> {
    inner: Arc<Mutex<Game<I>>>,
}

impl<I> Clone for SharedGame<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: PlayerIdSource> SharedGame<I> {
    pub fn new(game: Game<I>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Отравленный мьютекс не страшен: `Game` не мутирует до проверок,
    /// так что состояние внутри всегда согласовано.
    fn lock(&self) -> MutexGuard<'_, Game<I>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_player(&self, name: &str) -> Result<PlayerId, GameError> {
        self.lock().add_player(name)
    }

    pub fn remove_player(&self, name: &str) -> Result<Player, GameError> {
        self.lock().remove_player(name)
    }

    pub fn reset_hands(&self) {
        self.lock().reset_hands()
    }

    pub fn shuffle<R: RandomSource>(&self, rng: &mut R) {
        self.lock().shuffle(rng)
    }

    pub fn first_deal(&self) -> Result<(), GameError> {
        self.lock().first_deal()
    }

    pub fn player_count(&self) -> usize {
        self.lock().player_count()
    }

    /// Выполнить произвольное чтение/запись под одной блокировкой.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut Game<I>) -> T) -> T {
        f(&mut self.lock())
    }
}
