//! Presentation seam.
//!
//! - `RoundSnapshot`: immutable copy of the state for re-rendering
//! - `BoardView`: text faces, status lines, and grid layout over a snapshot

pub mod board;
pub mod snapshot;

pub use board::{grid_columns, BoardView, Face};
pub use snapshot::RoundSnapshot;
