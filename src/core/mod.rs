//! Core types: cards, RNG, configuration.
//!
//! Everything here is independent of round rules; the deck generator and the
//! round state machine build on these.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, CardId, PairValue};
pub use config::{
    validate_deck_size, validate_value_template, RoundConfig, DECK_SIZE_OPTIONS, DEFAULT_DECK_SIZE,
};
pub use rng::{GameRng, GameRngState};
