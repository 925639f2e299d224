// src/engine/game.rs

use std::collections::HashMap;

use crate::domain::{Dealer, Deck, Hand, Player, PlayerId, TableConfig};
use crate::engine::{ConfigError, GameError, PlayerIdSource, RandomSource};
use crate::infra::ids::UuidIdSource;

/// Состояние одного блэкджек-стола на сессию.
///
/// Владеет дилером, игроками (по имени) и колодами. Снаружи состояние
/// только читается; меняется исключительно методами `Game`.
///
/// Все проверки выполняются до мутации: при ошибке состояние не меняется.
#[derive(Debug)]
pub struct Game<I = UuidIdSource> {
    config: TableConfig,
    dealer: Dealer,
    players: HashMap<String, Player>,
    decks: Vec<Deck>,
    ids: I,
}

impl Game<UuidIdSource> {
    /// Новая игра: пустая рука дилера, нет игроков, одна свежая колода.
    pub fn new() -> Self {
        Self::build(TableConfig::default(), UuidIdSource)
    }
}

impl Default for Game<UuidIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: PlayerIdSource> Game<I> {
    /// Игра с явным конфигом и своим генератором ID.
    pub fn with_config(config: TableConfig, ids: I) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, ids))
    }

    fn build(config: TableConfig, ids: I) -> Self {
        let decks = (0..config.deck_count).map(|_| Deck::standard()).collect();
        tracing::debug!(
            max_players = config.max_players,
            deck_count = config.deck_count,
            "created new game"
        );
        Self {
            config,
            dealer: Dealer::new(),
            players: HashMap::new(),
            decks,
            ids,
        }
    }

    /// Посадить игрока за стол.
    ///
    /// Ошибки: `TableFull`, если мест нет; `NameExists`, если имя уже занято.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        if self.players.len() >= self.config.max_players as usize {
            return Err(GameError::TableFull {
                capacity: self.config.max_players,
            });
        }
        if self.players.contains_key(name) {
            return Err(GameError::NameExists(name.to_string()));
        }

        let id = self.ids.next_player_id();
        self.players
            .insert(name.to_string(), Player::new(id, name.to_string()));

        tracing::info!(player = name, %id, seated = self.players.len(), "player joined");
        Ok(id)
    }

    /// Убрать игрока со стола. Возвращает удалённую запись.
    pub fn remove_player(&mut self, name: &str) -> Result<Player, GameError> {
        let player = self
            .players
            .remove(name)
            .ok_or_else(|| GameError::NoPlayer(name.to_string()))?;

        tracing::info!(player = name, seated = self.players.len(), "player left");
        Ok(player)
    }

    /// Сбросить руки дилера и всех игроков. Состав стола не меняется.
    pub fn reset_hands(&mut self) {
        *self.dealer.hand_mut() = Hand::empty();
        for player in self.players.values_mut() {
            *player.hand_mut() = Hand::empty();
        }
        tracing::debug!(players = self.players.len(), "hands reset");
    }

    /// Перемешать все колоды на месте.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        for deck in &mut self.decks {
            deck.shuffle(rng);
        }
        tracing::debug!(decks = self.decks.len(), "decks shuffled");
    }

    /// Первая раздача (по две карты каждому игроку).
    ///
    /// Пока заглушка: без модели ходов и подсчёта очков раздавать нечего,
    /// поэтому метод ничего не делает и всегда успешен.
    pub fn first_deal(&mut self) -> Result<(), GameError> {
        Ok(())
    }
}

impl<I> Game<I> {
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Игроки за столом. Порядок не определён.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    #[cfg(test)]
    pub(crate) fn dealer_hand_mut(&mut self) -> &mut Hand {
        self.dealer.hand_mut()
    }

    #[cfg(test)]
    pub(crate) fn player_hand_mut(&mut self, name: &str) -> Option<&mut Hand> {
        self.players.get_mut(name).map(|p| p.hand_mut())
    }
}
