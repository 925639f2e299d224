//! Инфраструктурный слой вокруг движка стола:
//! - генерация ID игроков;
//! - RNG-реализации для перемешивания колод;
//! - потокобезопасная обёртка над игрой для конкурентных вызывающих.

pub mod ids;
pub mod rng;
pub mod shared;

pub use ids::*;
pub use rng::*;
pub use shared::SharedGame;
