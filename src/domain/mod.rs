//! Доменная модель блэкджек-стола: карты, колоды, руки, игроки, дилер, конфиг стола.
//!
//! Здесь только данные и их инварианты. Все мутации состояния стола идут через
//! `engine::Game`.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
