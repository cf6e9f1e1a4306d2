//! Win/loss/tie counters and the log of played rounds.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::moves::{verdict, Move, Outcome};
use crate::StrategyKind;

/// Cumulative results for a session.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Number of rounds counted.
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }

    pub fn describe(&self) -> String {
        format!(
            "player: {}, computer: {}, ties: {}",
            self.player_wins, self.computer_wins, self.ties
        )
    }
}

/// A single resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    pub round: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub strategy: StrategyKind,
    pub outcome: Outcome,
}

impl RoundRecord {
    /// Result line shown to the player, e.g.
    /// `Paper covers Rock. Computer wins! (Computer: Cheat)`.
    pub fn describe(&self) -> String {
        format!(
            "{} (Computer: {})",
            verdict(self.player_move, self.computer_move),
            self.strategy
        )
    }
}

/// How often each strategy was picked.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyUsage {
    pub cheat: u32,
    pub least_used: u32,
    pub most_used: u32,
    pub last_used: u32,
    pub random: u32,
}

impl StrategyUsage {
    pub fn record(&mut self, kind: StrategyKind) {
        match kind {
            StrategyKind::Cheat => self.cheat += 1,
            StrategyKind::LeastUsed => self.least_used += 1,
            StrategyKind::MostUsed => self.most_used += 1,
            StrategyKind::LastUsed => self.last_used += 1,
            StrategyKind::Random => self.random += 1,
        }
    }

    pub fn get(&self, kind: StrategyKind) -> u32 {
        match kind {
            StrategyKind::Cheat => self.cheat,
            StrategyKind::LeastUsed => self.least_used,
            StrategyKind::MostUsed => self.most_used,
            StrategyKind::LastUsed => self.last_used,
            StrategyKind::Random => self.random,
        }
    }
}

/// Append-only log of rounds, optionally bounded.
///
/// A bounded log drops its oldest records first. The session [`Tally`] lives
/// outside the log, so eviction never changes the score.
#[derive(Debug, Clone, Default)]
pub struct RoundLog {
    records: VecDeque<RoundRecord>,
    capacity: Option<usize>,
    evicted: u64,
}

impl RoundLog {
    /// Unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that keeps at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: Some(capacity),
            evicted: 0,
        }
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push_back(record);
        if let Some(capacity) = self.capacity {
            while self.records.len() > capacity {
                self.records.pop_front();
                self.evicted += 1;
            }
        }
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Records dropped to honour the capacity.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Strategy counts over the retained records.
    pub fn strategy_usage(&self) -> StrategyUsage {
        let mut usage = StrategyUsage::default();
        for record in &self.records {
            usage.record(record.strategy);
        }
        usage
    }
}
