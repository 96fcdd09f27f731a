//! Card identity and face-up state.
//!
//! ## Identity
//!
//! Every card in a deck has a unique `CardId`. Ids come from a monotonic
//! counter owned by the [`crate::deck::DeckGenerator`], so two cards never share
//! an id, not even across rounds.
//!
//! ## Pairing
//!
//! A `PairValue` is the opaque key two cards share. The engine only compares
//! values for equality; presentation decides what a value looks like.
//!
//! ```
//! use memory_match::core::{Card, CardId, PairValue};
//!
//! let a = Card::new(CardId(0), PairValue::new("x"));
//! let b = Card::new(CardId(1), PairValue::new("x"));
//! assert!(a.pairs_with(&b));
//! assert!(!a.pairs_with(&a));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque pairing key shared by exactly two cards of a deck.
///
/// By default this is an image reference, but the engine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairValue(String);

impl PairValue {
    /// Create a pairing value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the underlying key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, stable for the lifetime of the round.
    pub id: CardId,

    /// Pairing key.
    pub value: PairValue,

    /// Face-up because of an active or not-yet-flipped-back selection.
    pub flipped: bool,

    /// Part of a permanently resolved pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, value: PairValue) -> Self {
        Self {
            id,
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Is the face visible to the player?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Do two distinct cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new_is_face_down() {
        let card = Card::new(CardId(7), PairValue::new("a"));
        assert!(!card.flipped);
        assert!(!card.matched);
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_face_up() {
        let mut card = Card::new(CardId(7), PairValue::new("a"));
        card.flipped = true;
        assert!(card.is_face_up());

        card.flipped = false;
        card.matched = true;
        assert!(card.is_face_up());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardId(1), PairValue::new("a"));
        let b = Card::new(CardId(2), PairValue::new("a"));
        let c = Card::new(CardId(3), PairValue::new("c"));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", PairValue::new("img")), "img");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId(3), PairValue::new("https://example/1"));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
