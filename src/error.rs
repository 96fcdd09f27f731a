//! Crate error type.
//!
//! Only contract violations and persistence failures are errors. Selections
//! that cannot apply (not running, matched card, unknown id) are reported as
//! [`crate::round::Outcome::Ignored`] instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Deck sizes must be positive and even.
    #[error("invalid deck size {0}: must be a positive even number")]
    InvalidDeckSize(usize),

    /// A configuration value the engine cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
