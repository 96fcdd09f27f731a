//! Round controller: owns the state and carries out effects.
//!
//! The controller is the only stateful piece. Each operation builds an
//! [`Event`], runs it through [`transition`], stores the new state, and then
//! executes the returned effects against the clock and the record store.

use std::time::Duration;

use log::{debug, info, warn};

use super::clock::{RoundClock, Timer};
use super::event::{Effect, Event, Outcome};
use super::machine::transition;
use super::state::RoundState;
use crate::core::{CardId, GameRng, GameRngState, RoundConfig};
use crate::deck::DeckGenerator;
use crate::error::Result;
use crate::records::{BestRecord, BestRecordStore, KeyValueStore};
use crate::view::RoundSnapshot;

/// Drives rounds of the memory game.
///
/// The record store is injected; nothing here reaches for global storage.
pub struct RoundController<S: KeyValueStore> {
    config: RoundConfig,
    generator: DeckGenerator,
    rng: GameRng,
    state: RoundState,
    clock: RoundClock,
    records: BestRecordStore<S>,
}

impl<S: KeyValueStore> RoundController<S> {
    /// Create a controller with an idle board of `config.deck_size` cards.
    ///
    /// Loads the best record once, here.
    pub fn new(config: RoundConfig, store: S) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut generator = DeckGenerator::new(&config);
        let records = BestRecordStore::new(store);
        let best = records.load()?;
        let deck = generator.generate(config.deck_size, &mut rng)?;

        debug!(
            "controller ready: {} cards, seed {}, best {:?}",
            config.deck_size,
            rng.seed(),
            best
        );

        Ok(Self {
            clock: RoundClock::new(config.tick_interval),
            state: RoundState::new(deck, best),
            config,
            generator,
            rng,
            records,
        })
    }

    /// Start a new round on a fresh deck of `deck_size` cards.
    ///
    /// Valid from any phase. Pending flip-backs of the previous round are
    /// dropped. On `InvalidDeckSize` nothing changes.
    pub fn start_round(&mut self, deck_size: usize) -> Result<Outcome> {
        let deck = self.generator.generate(deck_size, &mut self.rng)?;
        self.config.deck_size = deck_size;
        self.dispatch(Event::StartRound { deck })
    }

    /// Start a new round with the current deck size.
    pub fn restart(&mut self) -> Result<Outcome> {
        self.start_round(self.config.deck_size)
    }

    /// Handle a click on a card.
    ///
    /// Clicks that cannot apply return `Outcome::Ignored`. An error means the
    /// round was won but the improved record could not be persisted; the
    /// in-memory state is already updated.
    pub fn select_card(&mut self, id: CardId) -> Result<Outcome> {
        self.dispatch(Event::SelectCard(id))
    }

    /// Deliver one clock tick.
    pub fn tick(&mut self) -> Result<Outcome> {
        self.dispatch(Event::Tick)
    }

    /// Abandon the round and lay out a fresh idle deck of `deck_size` cards.
    pub fn change_deck_size(&mut self, deck_size: usize) -> Result<Outcome> {
        let deck = self.generator.generate(deck_size, &mut self.rng)?;
        self.config.deck_size = deck_size;
        self.dispatch(Event::ChangeDeckSize { deck })
    }

    /// Let `elapsed` wall time pass, delivering due ticks and flip-backs.
    pub fn advance(&mut self, elapsed: Duration) -> Result<()> {
        let until = self.clock.now() + elapsed;
        while let Some(timer) = self.clock.pop_due(until) {
            let event = match timer {
                Timer::Tick => Event::Tick,
                Timer::FlipBack(token) => Event::FlipBack(token),
            };
            self.dispatch(event)?;
        }
        self.clock.advance_to(until);
        Ok(())
    }

    /// Render-ready copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn best(&self) -> BestRecord {
        self.state.best
    }

    /// Scheduled flip-backs not yet delivered.
    #[must_use]
    pub fn pending_flip_backs(&self) -> usize {
        self.clock.pending_flip_backs()
    }

    /// Is the round clock ticking?
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.clock.is_ticking()
    }

    /// RNG checkpoint; restoring it reproduces the next decks.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Borrow the record store.
    #[must_use]
    pub fn records(&self) -> &BestRecordStore<S> {
        &self.records
    }

    fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        let step = transition(&self.state, event);
        self.state = step.state;
        for effect in step.effects {
            self.apply(effect)?;
        }
        Ok(step.outcome)
    }

    fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::StartClock => self.clock.start(),
            Effect::StopClock => self.clock.stop(),
            Effect::ScheduleFlipBack(token) => {
                self.clock.schedule(token, self.config.mismatch_delay);
            }
            Effect::CancelFlipBacks => self.clock.cancel_flip_backs(),
            Effect::SaveBest(record) => {
                if let Err(err) = self.records.save(&record) {
                    warn!("failed to persist best record {:?}: {}", record, err);
                    return Err(err);
                }
            }
            Effect::RoundWon {
                moves,
                elapsed_secs,
            } => {
                info!(
                    "You completed the game in {} moves and {} seconds",
                    moves, elapsed_secs
                );
            }
        }
        Ok(())
    }
}
