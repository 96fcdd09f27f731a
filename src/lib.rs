//! # memory-match
//!
//! Engine for a memory-matching card game: a grid of face-down cards is
//! revealed two at a time, matching pairs stay up, mismatches flip back after
//! a pause. Rounds track moves and elapsed time; the best results persist.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `round::transition` maps state + event to the next state
//!    plus a list of effects. No clocks, storage, or randomness inside.
//!
//! 2. **Injected storage**: the best record lives behind `KeyValueStore`,
//!    handed to the controller at construction.
//!
//! 3. **Generation-stamped timers**: every deck bumps a generation; delayed
//!    flip-backs from an older generation are dropped.
//!
//! ## Modules
//!
//! - `core`: card ids, pairing values, RNG, configuration
//! - `deck`: shuffled paired-deck generation
//! - `round`: state, events, transitions, clock, controller
//! - `records`: best record and key/value stores
//! - `view`: snapshots and a text rendering adapter
//!
//! ## Example
//!
//! ```
//! use memory_match::{MemoryStore, RoundConfig, RoundController};
//!
//! let config = RoundConfig::new().with_seed(7);
//! let mut controller = RoundController::new(config, MemoryStore::new()).unwrap();
//! controller.start_round(4).unwrap();
//!
//! let first = controller.snapshot().cards[0].id;
//! controller.select_card(first).unwrap();
//! assert!(controller.snapshot().cards[0].flipped);
//! ```

pub mod core;
pub mod deck;
pub mod error;
pub mod records;
pub mod round;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, PairValue,
    GameRng, GameRngState,
    RoundConfig, DECK_SIZE_OPTIONS, DEFAULT_DECK_SIZE,
};

pub use crate::deck::DeckGenerator;

pub use crate::error::{GameError, Result};

pub use crate::records::{
    BestRecord, BestRecordStore, KeyValueStore, MemoryStore, JsonFileStore,
};

pub use crate::round::{
    Phase, RoundState, Event, Effect, Outcome, IgnoreReason, FlipBackToken,
    transition, Transition, RoundClock, RoundController,
};

pub use crate::view::{BoardView, Face, RoundSnapshot};
