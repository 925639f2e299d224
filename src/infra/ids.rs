use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::PlayerId;
use crate::engine::PlayerIdSource;

/// Боевой генератор: случайные UUID v4, глобально уникальные.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdSource;

impl PlayerIdSource for UuidIdSource {
    fn next_player_id(&self) -> PlayerId {
        PlayerId(Uuid::new_v4())
    }
}

/// Детерминированная генерация ID на основе монотонного счётчика.
/// Удобно для тестов и реплея: n-й выданный ID всегда `id_for(n)`.
#[derive(Debug)]
pub struct SequentialIdSource {
    counter: AtomicU64,
}

impl SequentialIdSource {
    /// Генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// ID, который генератор выдаст под номером `n`.
    pub fn id_for(n: u64) -> PlayerId {
        PlayerId(Uuid::from_u64_pair(0, n))
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerIdSource for SequentialIdSource {
    #[inline]
    fn next_player_id(&self) -> PlayerId {
        Self::id_for(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}
