//! Best-ever results.

use serde::{Deserialize, Serialize};

/// Lowest move count and lowest time over all completed rounds.
///
/// `None` means no round has been completed yet; any value beats it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best_moves: Option<u32>,
    pub best_time: Option<u64>,
}

impl BestRecord {
    /// Create a record with known values.
    #[must_use]
    pub fn new(best_moves: Option<u32>, best_time: Option<u64>) -> Self {
        Self {
            best_moves,
            best_time,
        }
    }

    /// Merge a completed round into the record.
    ///
    /// Each field only ever decreases, and independently of the other.
    /// Returns `Some(updated)` iff at least one field strictly improved.
    #[must_use]
    pub fn improved_by(&self, moves: u32, elapsed_secs: u64) -> Option<BestRecord> {
        let better_moves = self.best_moves.map_or(true, |best| moves < best);
        let better_time = self.best_time.map_or(true, |best| elapsed_secs < best);

        if !better_moves && !better_time {
            return None;
        }

        Some(BestRecord {
            best_moves: if better_moves { Some(moves) } else { self.best_moves },
            best_time: if better_time { Some(elapsed_secs) } else { self.best_time },
        })
    }

    /// True if no round has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_moves.is_none() && self.best_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_always_improves() {
        let record = BestRecord::default();
        assert!(record.is_empty());
        assert_eq!(
            record.improved_by(10, 30),
            Some(BestRecord::new(Some(10), Some(30)))
        );
    }

    #[test]
    fn test_equal_is_not_better() {
        let record = BestRecord::new(Some(5), Some(20));
        assert_eq!(record.improved_by(5, 20), None);
        assert_eq!(record.improved_by(6, 21), None);
    }

    #[test]
    fn test_fields_improve_independently() {
        let record = BestRecord::new(Some(5), Some(20));

        assert_eq!(
            record.improved_by(4, 25),
            Some(BestRecord::new(Some(4), Some(20)))
        );
        assert_eq!(
            record.improved_by(9, 12),
            Some(BestRecord::new(Some(5), Some(12)))
        );
    }

    #[test]
    fn test_partial_record() {
        let record = BestRecord::new(Some(3), None);
        assert_eq!(
            record.improved_by(8, 40),
            Some(BestRecord::new(Some(3), Some(40)))
        );
    }
}
