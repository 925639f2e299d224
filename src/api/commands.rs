use serde::{Deserialize, Serialize};

use crate::engine::{Game, PlayerIdSource, RandomSource};

use super::errors::ApiError;

/// Команда, меняющая состояние стола. Один вариант = одна операция `Game`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Посадить игрока за стол.
    AddPlayer { name: String },

    /// Убрать игрока со стола.
    RemovePlayer { name: String },

    /// Сбросить руки дилера и игроков.
    ResetHands,

    /// Перемешать все колоды.
    Shuffle,

    /// Первая раздача (сейчас no-op).
    FirstDeal,
}

/// Применить команду к игре.
///
/// RNG нужен только для `Shuffle`, но передаётся всегда, чтобы вызывающий
/// код не ветвился по типу команды.
pub fn execute_command<I, R>(
    game: &mut Game<I>,
    rng: &mut R,
    command: Command,
) -> Result<(), ApiError>
where
    I: PlayerIdSource,
    R: RandomSource,
{
    match command {
        Command::AddPlayer { name } => {
            game.add_player(&name)?;
        }
        Command::RemovePlayer { name } => {
            game.remove_player(&name)?;
        }
        Command::ResetHands => game.reset_hands(),
        Command::Shuffle => game.shuffle(rng),
        Command::FirstDeal => game.first_deal()?,
    }
    Ok(())
}
