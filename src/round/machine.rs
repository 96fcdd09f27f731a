//! Pure round transitions.
//!
//! `transition(state, event)` returns the next state, what happened, and the
//! side effects the host must carry out. Nothing here touches clocks,
//! storage, or randomness; decks arrive pre-generated inside events.
//!
//! ## Selection Protocol
//!
//! 1. The clicked card turns face-up and joins the selection.
//! 2. When the selection holds two ids, they are compared.
//! 3. In the same transition the selection clears and `moves` increments.
//!    A mismatch additionally schedules a flip-back; the pause is cosmetic.

use log::{debug, info};

use super::event::{Effect, Event, FlipBackToken, IgnoreReason, Outcome};
use super::state::{Phase, RoundState};
use crate::core::CardId;

/// Result of applying one event.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: RoundState,
    pub outcome: Outcome,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn ignored(state: &RoundState, reason: IgnoreReason) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Ignored(reason),
            effects: Vec::new(),
        }
    }
}

/// Apply an event to a round state.
#[must_use]
pub fn transition(state: &RoundState, event: Event) -> Transition {
    match event {
        Event::StartRound { deck } => {
            let mut next = state.clone();
            next.reset_with(deck);
            next.phase = Phase::Running;
            info!(
                "round {} started with {} cards",
                next.generation,
                next.deck_size()
            );
            Transition {
                state: next,
                outcome: Outcome::Started,
                effects: vec![Effect::CancelFlipBacks, Effect::StartClock],
            }
        }
        Event::ChangeDeckSize { deck } => {
            let mut next = state.clone();
            next.reset_with(deck);
            next.phase = Phase::Idle;
            Transition {
                state: next,
                outcome: Outcome::Reset,
                effects: vec![Effect::StopClock, Effect::CancelFlipBacks],
            }
        }
        Event::SelectCard(id) => select_card(state, id),
        Event::Tick => {
            if !state.is_running() {
                return Transition::ignored(state, IgnoreReason::NotRunning);
            }
            let mut next = state.clone();
            next.elapsed_secs += 1;
            Transition {
                state: next,
                outcome: Outcome::Ticked,
                effects: Vec::new(),
            }
        }
        Event::FlipBack(token) => flip_back(state, token),
    }
}

fn select_card(state: &RoundState, id: CardId) -> Transition {
    if !state.is_running() {
        return Transition::ignored(state, IgnoreReason::NotRunning);
    }
    if state.selection.len() >= 2 {
        return Transition::ignored(state, IgnoreReason::SelectionFull);
    }
    if state.is_matched(id) {
        return Transition::ignored(state, IgnoreReason::AlreadyMatched);
    }
    if state.selection.contains(&id) {
        return Transition::ignored(state, IgnoreReason::AlreadySelected);
    }
    let Some(idx) = state.position(id) else {
        debug!("ignoring selection of unknown {}", id);
        return Transition::ignored(state, IgnoreReason::UnknownCard);
    };

    let mut next = state.clone();
    next.flip_up(idx);
    next.selection.push(id);

    if next.selection.len() < 2 {
        return Transition {
            state: next,
            outcome: Outcome::Flipped,
            effects: Vec::new(),
        };
    }

    let pair = [next.selection[0], next.selection[1]];
    next.selection.clear();
    next.moves += 1;

    let is_match = match (next.card(pair[0]), next.card(pair[1])) {
        (Some(first), Some(second)) => first.pairs_with(second),
        _ => false,
    };

    if !is_match {
        return Transition {
            outcome: Outcome::Mismatched,
            effects: vec![Effect::ScheduleFlipBack(FlipBackToken {
                generation: next.generation,
                cards: pair,
                serials: [
                    next.flip_serial_of(pair[0]).unwrap_or_default(),
                    next.flip_serial_of(pair[1]).unwrap_or_default(),
                ],
            })],
            state: next,
        };
    }

    for card_id in pair {
        next.matched.insert(card_id);
        if let Some(idx) = next.position(card_id) {
            if let Some(card) = next.deck.get_mut(idx) {
                card.matched = true;
            }
        }
    }

    if next.is_complete() {
        return win(next);
    }

    Transition {
        state: next,
        outcome: Outcome::Matched,
        effects: Vec::new(),
    }
}

fn win(mut next: RoundState) -> Transition {
    next.phase = Phase::Won;
    info!(
        "round {} won in {} moves and {} seconds",
        next.generation, next.moves, next.elapsed_secs
    );

    let mut effects = vec![
        Effect::StopClock,
        Effect::RoundWon {
            moves: next.moves,
            elapsed_secs: next.elapsed_secs,
        },
    ];
    if let Some(improved) = next.best.improved_by(next.moves, next.elapsed_secs) {
        info!("new best record: {:?}", improved);
        next.best = improved;
        effects.push(Effect::SaveBest(improved));
    }

    Transition {
        state: next,
        outcome: Outcome::Won,
        effects,
    }
}

fn flip_back(state: &RoundState, token: FlipBackToken) -> Transition {
    if token.generation != state.generation {
        debug!(
            "dropping flip-back from generation {} (current {})",
            token.generation, state.generation
        );
        return Transition::ignored(state, IgnoreReason::StaleTimer);
    }

    let mut next = state.clone();
    for (id, serial) in token.cards.into_iter().zip(token.serials) {
        // Re-picked since the mismatch: a newer selection owns the card.
        if next.is_matched(id) || next.flip_serial_of(id) != Some(serial) {
            continue;
        }
        if let Some(idx) = next.position(id) {
            if let Some(card) = next.deck.get_mut(idx) {
                card.flipped = false;
            }
        }
    }

    Transition {
        state: next,
        outcome: Outcome::FlippedBack,
        effects: Vec::new(),
    }
}
