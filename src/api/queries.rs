use serde::{Deserialize, Serialize};

use crate::engine::Game;

use super::dto::{HandDto, PlayerDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable,

    /// Получить одного игрока по имени.
    GetPlayer { name: String },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Player(Option<PlayerDto>),
}

pub fn run_query<I>(game: &Game<I>, query: &Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(game)),
        Query::GetPlayer { name } => QueryResponse::Player(game.player(name).map(PlayerDto::from)),
    }
}

/// Сформировать DTO стола на основе `Game`.
pub fn build_table_view<I>(game: &Game<I>) -> TableViewDto {
    let mut players: Vec<PlayerDto> = game.players().map(PlayerDto::from).collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));

    TableViewDto {
        max_players: game.config().max_players,
        dealer: HandDto::from(game.dealer().hand()),
        players,
        deck_sizes: game.decks().iter().map(|d| d.len()).collect(),
    }
}
