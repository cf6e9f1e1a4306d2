//! What the computer has observed about the player so far.

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Counts of the player's moves by type plus the most recent move.
///
/// Snapshots are plain values: the engine replaces its copy after every
/// round through [`HistorySnapshot::recorded`] and
/// [`HistorySnapshot::with_last_move`], and strategies only ever see a
/// shared reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub rock: u32,
    pub paper: u32,
    pub scissors: u32,
    /// `None` until the first round has been committed.
    pub last_player_move: Option<Move>,
}

impl HistorySnapshot {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Times the player has played `mv`.
    pub fn count(&self, mv: Move) -> u32 {
        match mv {
            Move::Rock => self.rock,
            Move::Paper => self.paper,
            Move::Scissors => self.scissors,
        }
    }

    /// Total number of moves counted.
    pub fn total(&self) -> u32 {
        self.rock + self.paper + self.scissors
    }

    /// A copy with the counter for `mv` incremented. The last move is untouched.
    pub fn recorded(self, mv: Move) -> Self {
        let mut next = self;
        match mv {
            Move::Rock => next.rock += 1,
            Move::Paper => next.paper += 1,
            Move::Scissors => next.scissors += 1,
        }
        next
    }

    /// A copy remembering `mv` as the player's most recent move.
    pub fn with_last_move(self, mv: Move) -> Self {
        Self {
            last_player_move: Some(mv),
            ..self
        }
    }

    /// Least played move, first in Rock, Paper, Scissors order on ties.
    pub fn least_used(&self) -> Move {
        Move::ALL[1..].iter().fold(Move::Rock, |best, &mv| {
            if self.count(mv) < self.count(best) {
                mv
            } else {
                best
            }
        })
    }

    /// Most played move, first in Rock, Paper, Scissors order on ties.
    pub fn most_used(&self) -> Move {
        Move::ALL[1..].iter().fold(Move::Rock, |best, &mv| {
            if self.count(mv) > self.count(best) {
                mv
            } else {
                best
            }
        })
    }
}
