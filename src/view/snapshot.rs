//! Render-ready round snapshots.

use serde::{Deserialize, Serialize};

use crate::core::Card;
use crate::records::BestRecord;
use crate::round::{Phase, RoundState};

/// Everything a presentation layer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub generation: u64,
    /// Cards in board order with their flipped/matched flags.
    pub cards: Vec<Card>,
    pub moves: u32,
    pub elapsed_secs: u64,
    pub phase: Phase,
    pub is_running: bool,
    /// True once the last pair is matched; drives the congratulations message.
    pub won: bool,
    pub best: BestRecord,
}

impl From<&RoundState> for RoundSnapshot {
    fn from(state: &RoundState) -> Self {
        Self {
            generation: state.generation,
            cards: state.deck.iter().cloned().collect(),
            moves: state.moves,
            elapsed_secs: state.elapsed_secs,
            phase: state.phase,
            is_running: state.is_running(),
            won: state.phase == Phase::Won,
            best: state.best,
        }
    }
}

impl RoundSnapshot {
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    /// Cards currently showing their face.
    pub fn face_up(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.is_face_up())
    }
}
