//! Text rendering of a snapshot.
//!
//! A thin adapter: it reads a `RoundSnapshot` and never touches round state.
//! Hidden cards render as `?`; face-up cards render their label.

use crate::core::{CardId, PairValue};

use super::snapshot::RoundSnapshot;

/// What the player sees on one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face<'a> {
    Hidden,
    /// Face-up in an unresolved or pending-flip-back selection.
    Revealed(&'a PairValue),
    Matched(&'a PairValue),
}

/// Board layout and text for a snapshot.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    snapshot: &'a RoundSnapshot,
    columns: usize,
}

impl<'a> BoardView<'a> {
    /// Lay the deck out on a near-square grid.
    #[must_use]
    pub fn new(snapshot: &'a RoundSnapshot) -> Self {
        Self {
            snapshot,
            columns: grid_columns(snapshot.deck_size()),
        }
    }

    /// Override the column count (minimum 1).
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Faces in board order.
    pub fn faces(&self) -> impl Iterator<Item = (CardId, Face<'a>)> + 'a {
        let snapshot = self.snapshot;
        snapshot.cards.iter().map(|card| {
            let face = if card.matched {
                Face::Matched(&card.value)
            } else if card.flipped {
                Face::Revealed(&card.value)
            } else {
                Face::Hidden
            };
            (card.id, face)
        })
    }

    /// Header lines: moves, time, and best results when known.
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Moves: {}", self.snapshot.moves),
            format!("Time: {} sec", self.snapshot.elapsed_secs),
        ];
        if let Some(moves) = self.snapshot.best.best_moves {
            lines.push(format!("Top Score: {} Moves", moves));
        }
        if let Some(time) = self.snapshot.best.best_time {
            lines.push(format!("Top Time: {} sec", time));
        }
        lines
    }

    /// Congratulations message, once the round is won.
    #[must_use]
    pub fn win_message(&self) -> Option<String> {
        self.snapshot.won.then(|| {
            format!(
                "Congratulations! You completed the game in {} moves and {} seconds.",
                self.snapshot.moves, self.snapshot.elapsed_secs
            )
        })
    }

    /// Render the grid using `Display` of each pairing value.
    #[must_use]
    pub fn render_grid(&self) -> String {
        self.render_grid_with(|value| value.to_string())
    }

    /// Render the grid, labelling face-up cards with `label`.
    ///
    /// Cells are padded to the widest label; rows end with `\n`.
    pub fn render_grid_with<F>(&self, label: F) -> String
    where
        F: Fn(&PairValue) -> String,
    {
        let cells: Vec<String> = self
            .faces()
            .map(|(_, face)| match face {
                Face::Hidden => "?".to_string(),
                Face::Revealed(value) | Face::Matched(value) => label(value),
            })
            .collect();

        let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(1);
        let mut out = String::new();
        for row in cells.chunks(self.columns) {
            let line: Vec<String> = row.iter().map(|c| format!("{:<width$}", c)).collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }
        out
    }
}

/// Columns for a near-square grid: ceil(sqrt(n)).
#[must_use]
pub fn grid_columns(card_count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < card_count {
        columns += 1;
    }
    columns
}
