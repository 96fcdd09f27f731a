//! Round state.
//!
//! `RoundState` is a value: transitions produce a new state instead of
//! mutating in place. The deck and matched set use `im` persistent
//! structures, so each transition's clone is O(1).

use im::{HashMap as ImHashMap, HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardId};
use crate::records::BestRecord;

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No round started, or abandoned by a deck size change. Clock stopped.
    #[default]
    Idle,
    /// Clock running, selections accepted.
    Running,
    /// Every card matched. Clock stopped.
    Won,
}

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Bumped by every new deck. Delayed callbacks carry it to detect staleness.
    pub generation: u64,

    /// Cards in board order; fixed for the round once generated.
    pub deck: Vector<Card>,

    /// Face-up, unresolved cards. Never more than two.
    pub selection: SmallVec<[CardId; 2]>,

    /// Cards belonging to resolved pairs.
    pub matched: ImHashSet<CardId>,

    /// Serial of the most recent flip-up of each card. A flip-back only
    /// applies to a card whose serial still equals the one it was issued for.
    pub flipped_at: ImHashMap<CardId, u64>,

    /// Last flip serial handed out.
    pub flip_serial: u64,

    /// Completed comparison attempts.
    pub moves: u32,

    /// Clock ticks delivered while running.
    pub elapsed_secs: u64,

    pub phase: Phase,

    /// Best record as known to this round; updated on a winning round.
    pub best: BestRecord,
}

impl RoundState {
    /// Create an idle state around a freshly generated deck.
    #[must_use]
    pub fn new(deck: Vector<Card>, best: BestRecord) -> Self {
        Self {
            generation: 0,
            deck,
            selection: SmallVec::new(),
            matched: ImHashSet::new(),
            flipped_at: ImHashMap::new(),
            flip_serial: 0,
            moves: 0,
            elapsed_secs: 0,
            phase: Phase::Idle,
            best,
        }
    }

    /// Replace the deck and clear all progress, bumping the generation.
    ///
    /// The caller sets the phase.
    pub(crate) fn reset_with(&mut self, deck: Vector<Card>) {
        self.generation += 1;
        self.deck = deck;
        self.selection.clear();
        self.matched = ImHashSet::new();
        self.flipped_at = ImHashMap::new();
        self.moves = 0;
        self.elapsed_secs = 0;
    }

    /// Is the clock running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.deck.iter().position(|card| card.id == id)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|idx| self.deck.get(idx))
    }

    /// Turn a card face-up and stamp it with a fresh flip serial.
    pub(crate) fn flip_up(&mut self, idx: usize) -> Option<u64> {
        let card = self.deck.get_mut(idx)?;
        card.flipped = true;
        let id = card.id;
        self.flip_serial += 1;
        self.flipped_at.insert(id, self.flip_serial);
        Some(self.flip_serial)
    }

    /// Serial of the card's latest flip-up, if it was ever flipped this round.
    #[must_use]
    pub fn flip_serial_of(&self, id: CardId) -> Option<u64> {
        self.flipped_at.get(&id).copied()
    }

    /// Is this card part of a resolved pair?
    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }
}
