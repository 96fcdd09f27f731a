//! Round configuration.
//!
//! Hosts configure the engine at startup with a `RoundConfig`:
//! - deck size (number of cards, always even)
//! - timing (clock tick interval, mismatch pause)
//! - RNG seed
//! - how pairing values are named

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Deck sizes offered to players.
pub const DECK_SIZE_OPTIONS: [usize; 3] = [4, 16, 32];

/// Default deck size for a fresh controller.
pub const DEFAULT_DECK_SIZE: usize = 4;

/// Placeholder replaced by the 1-based pair index in `value_template`.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Check that a deck size is positive and even.
pub fn validate_deck_size(deck_size: usize) -> Result<()> {
    if deck_size == 0 || deck_size % 2 != 0 {
        return Err(GameError::InvalidDeckSize(deck_size));
    }
    Ok(())
}

/// Check that a value template names the pair index.
///
/// Without the placeholder every pair renders the same value and any two
/// cards would match.
pub fn validate_value_template(template: &str) -> Result<()> {
    if !template.contains(INDEX_PLACEHOLDER) {
        return Err(GameError::InvalidConfig("value_template must contain {index}"));
    }
    Ok(())
}

/// Render a pairing value from a template and a 1-based pair index.
#[must_use]
pub fn render_pair_value(template: &str, index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &index.to_string())
}

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of cards in the deck.
    pub deck_size: usize,

    /// How long a mismatched pair stays face-up.
    pub mismatch_delay: Duration,

    /// Interval between clock ticks; each tick adds one to the elapsed seconds.
    pub tick_interval: Duration,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Template for pairing values. `{index}` becomes the pair number (1-based).
    pub value_template: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            mismatch_delay: Duration::from_secs(1),
            tick_interval: Duration::from_secs(1),
            seed: None,
            value_template: format!("https://picsum.photos/seed/{INDEX_PLACEHOLDER}/100"),
        }
    }
}

impl RoundConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the mismatch pause.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the clock tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pairing value template.
    #[must_use]
    pub fn with_value_template(mut self, template: impl Into<String>) -> Self {
        self.value_template = template.into();
        self
    }

    /// Render the pairing value for a 1-based pair index.
    #[must_use]
    pub fn pair_value(&self, index: usize) -> String {
        render_pair_value(&self.value_template, index)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        validate_deck_size(self.deck_size)?;
        validate_value_template(&self.value_template)?;
        if self.tick_interval.is_zero() {
            return Err(GameError::InvalidConfig("tick_interval must be non-zero"));
        }
        Ok(())
    }
}
