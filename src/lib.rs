//! # frost-fairies
//!
//! Stochastic simulator for a cooperative card game: fairies collect the
//! four colored jewels before any flower on the shared board accumulates
//! four units of frost.
//!
//! ## Architecture
//!
//! One [`GameEngine`] instance plays exactly one game. It owns the two
//! shuffled draw piles, the per-player hands, the frost board and the
//! jewel set, and implements `Iterator<Item = Snapshot>`: each `next()`
//! resolves one turn and yields an immutable snapshot of the result. The
//! iterator ends the turn after a win (four jewels) or a loss (four frost
//! units on one flower).
//!
//! All randomness flows through a single seeded [`GameRng`], so a game is
//! fully determined by its seed (or by explicitly injected piles, see
//! [`GameEngine::with_piles`]).
//!
//! ## Modules
//!
//! - `core`: card/color value types, player IDs, deterministic RNG
//! - `decks`: the 57-card main deck and the 44-color storm deck
//! - `state`: hands, the frost board, per-turn snapshots
//! - `engine`: the turn loop and terminal evaluation
//! - `report`: text rendering of snapshots and the win tally

pub mod core;
pub mod decks;
pub mod engine;
pub mod report;
pub mod state;

pub use crate::core::{Card, Color, GameRng, PlayerId, PlayerMap};
pub use crate::decks::{Deck, StormDeck};
pub use crate::engine::GameEngine;
pub use crate::state::{Board, Hand, Outcome, Snapshot, HAND_LIMIT, JEWEL_GOAL};
