//! Shuffled paired-deck generation.

use im::Vector;
use log::debug;

use crate::core::config::render_pair_value;
use crate::core::{
    validate_deck_size, validate_value_template, Card, CardId, GameRng, PairValue, RoundConfig,
};
use crate::error::Result;

/// Builds shuffled decks of paired cards.
///
/// Card ids come from a counter that only moves forward, so ids stay unique
/// across every deck this generator produces.
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    value_template: String,
    next_id: u64,
}

impl DeckGenerator {
    /// Create a generator using the config's value template.
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            value_template: config.value_template.clone(),
            next_id: 0,
        }
    }

    /// Allocate a fresh card id.
    fn alloc_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Generate `deck_size / 2` pairs in uniformly random order.
    ///
    /// Fails with `InvalidDeckSize` for zero or odd sizes, and with
    /// `InvalidConfig` if the value template has no `{index}`.
    pub fn generate(&mut self, deck_size: usize, rng: &mut GameRng) -> Result<Vector<Card>> {
        validate_deck_size(deck_size)?;
        validate_value_template(&self.value_template)?;

        let mut cards = Vec::with_capacity(deck_size);
        for index in 1..=deck_size / 2 {
            let value = PairValue::new(render_pair_value(&self.value_template, index));
            let first = self.alloc_id();
            let second = self.alloc_id();
            cards.push(Card::new(first, value.clone()));
            cards.push(Card::new(second, value));
        }

        rng.shuffle(&mut cards);
        debug!("generated deck of {} cards (seed {})", deck_size, rng.seed());

        Ok(cards.into_iter().collect())
    }
}

impl Default for DeckGenerator {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}
