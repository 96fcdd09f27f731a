//! Best-record persistence.
//!
//! ## Key Types
//!
//! - `BestRecord`: lowest moves and lowest time ever achieved
//! - `KeyValueStore`: durable `get`/`set` seam, injected into the controller
//! - `MemoryStore`, `JsonFileStore`: the two provided backends
//! - `BestRecordStore`: `load`/`save` of a `BestRecord` over any store

pub mod best;
pub mod store;

pub use best::BestRecord;
pub use store::{
    BestRecordStore, JsonFileStore, KeyValueStore, MemoryStore, BEST_MOVES_KEY, BEST_TIME_KEY,
};
