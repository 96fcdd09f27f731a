//! Inputs and outputs of the round state machine.
//!
//! - `Event`: something that happened (player click, clock tick, timer)
//! - `Effect`: something the host must do (start a timer, persist a record)
//! - `Outcome`: what an event did, for the caller

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId};
use crate::records::BestRecord;

/// Identifies a pending mismatch flip-back.
///
/// Carries the round generation it was scheduled in; a token from an older
/// generation is ignored. `serials` are the cards' flip serials at the time
/// of the mismatch; a card flipped up again since then is left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipBackToken {
    pub generation: u64,
    pub cards: [CardId; 2],
    pub serials: [u64; 2],
}

/// Input to [`super::transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Begin a round on a freshly generated deck.
    StartRound { deck: Vector<Card> },
    /// Player clicked a card.
    SelectCard(CardId),
    /// One clock interval elapsed.
    Tick,
    /// The mismatch pause for a pair ended.
    FlipBack(FlipBackToken),
    /// Player picked another deck size; round is abandoned.
    ChangeDeckSize { deck: Vector<Card> },
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    StartClock,
    StopClock,
    /// Deliver `Event::FlipBack(token)` after the mismatch delay.
    ScheduleFlipBack(FlipBackToken),
    /// Drop every pending flip-back.
    CancelFlipBacks,
    /// Persist an improved best record.
    SaveBest(BestRecord),
    /// Round completed.
    RoundWon { moves: u32, elapsed_secs: u64 },
}

/// Why an event changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    NotRunning,
    SelectionFull,
    AlreadyMatched,
    AlreadySelected,
    UnknownCard,
    StaleTimer,
}

/// Result of applying an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No state change.
    Ignored(IgnoreReason),
    Started,
    /// First card of a pair turned face-up.
    Flipped,
    Matched,
    /// Pair did not match; a flip-back is scheduled.
    Mismatched,
    /// Last pair matched.
    Won,
    Ticked,
    FlippedBack,
    /// Deck replaced without starting a round.
    Reset,
}

impl Outcome {
    /// Did the event change state?
    #[must_use]
    pub fn is_applied(self) -> bool {
        !matches!(self, Outcome::Ignored(_))
    }

    /// Did the event complete a two-card comparison?
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(self, Outcome::Matched | Outcome::Mismatched | Outcome::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_classification() {
        assert!(!Outcome::Ignored(IgnoreReason::NotRunning).is_applied());
        assert!(Outcome::Flipped.is_applied());

        assert!(Outcome::Matched.is_move());
        assert!(Outcome::Mismatched.is_move());
        assert!(Outcome::Won.is_move());
        assert!(!Outcome::Flipped.is_move());
        assert!(!Outcome::Ticked.is_move());
    }

    #[test]
    fn test_token_serde() {
        let token = FlipBackToken {
            generation: 3,
            cards: [CardId(1), CardId(4)],
            serials: [7, 8],
        };
        let json = serde_json::to_string(&token).unwrap();
        let restored: FlipBackToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, restored);
    }
}
