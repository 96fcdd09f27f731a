//! Deck generation.
//!
//! `DeckGenerator` produces `deck_size / 2` distinct pairing values, each on
//! two face-down cards with fresh ids, shuffled with Fisher–Yates.

pub mod generator;

pub use generator::DeckGenerator;
