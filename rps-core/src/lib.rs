//! Rock-Paper-Scissors strategy engine.
//!
//! The engine picks one of five opponent strategies per round, asks it for
//! the computer's move, resolves the round and keeps the session's score.
//! Presentation layers call [`RoundEngine::play`] and read the results back.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod engine;
pub mod error;
pub mod history;
pub mod moves;
pub mod random;
pub mod selector;
pub mod tally;

pub use engine::{EngineConfig, RoundEngine, Roster};
pub use error::{GameError, InvalidMoveError};
pub use history::HistorySnapshot;
pub use moves::{resolve, verdict, Move, Outcome};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use tally::{RoundLog, RoundRecord, StrategyUsage, Tally};

/// The five ways the computer can choose its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Cheat,
    LeastUsed,
    MostUsed,
    LastUsed,
    Random,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Cheat,
        StrategyKind::LeastUsed,
        StrategyKind::MostUsed,
        StrategyKind::LastUsed,
        StrategyKind::Random,
    ];
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Cheat => write!(f, "Cheat"),
            StrategyKind::LeastUsed => write!(f, "Least Used"),
            StrategyKind::MostUsed => write!(f, "Most Used"),
            StrategyKind::LastUsed => write!(f, "Last Used"),
            StrategyKind::Random => write!(f, "Random"),
        }
    }
}

/// Core trait that every computer strategy implements.
///
/// Strategies hold no state of their own. Everything they may look at is
/// passed in: the player's current move, the history as it stood before this
/// round's last-move update, and a randomness source.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    fn choose(
        &self,
        player_move: Move,
        history: &HistorySnapshot,
        rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError>;
}
