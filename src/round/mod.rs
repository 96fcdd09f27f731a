//! Round state machine.
//!
//! ## Lifecycle
//!
//! `Idle` → `Running` (start) → `Won` (all pairs matched) → `Running` (restart).
//! Changing the deck size from any phase returns to `Idle`.
//!
//! ## Layers
//!
//! - `transition`: pure function, state + event → state + outcome + effects
//! - `RoundClock`: logical timers for ticks and mismatch flip-backs
//! - `RoundController`: owns state, clock, RNG, and record store; executes effects

pub mod clock;
pub mod controller;
pub mod event;
pub mod machine;
pub mod state;

pub use clock::{RoundClock, Timer};
pub use controller::RoundController;
pub use event::{Effect, Event, FlipBackToken, IgnoreReason, Outcome};
pub use machine::{transition, Transition};
pub use state::{Phase, RoundState};
