//! Core value types and services: cards, players, RNG.

pub mod card;
pub mod player;
pub mod rng;

pub use card::{Card, Color};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
