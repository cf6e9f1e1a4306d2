//! The round engine: one call per player move.

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::error::GameError;
use crate::history::HistorySnapshot;
use crate::moves::{resolve, Move};
use crate::random::{RandomSource, RngSource};
use crate::selector::{self, SELECTOR_HIGH, SELECTOR_LOW};
use crate::tally::{RoundLog, RoundRecord, StrategyUsage, Tally};
use crate::{Strategy, StrategyKind};

/// Engine settings chosen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for reproducible sessions. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Keep at most this many rounds in the log. `None` keeps all of them.
    pub log_capacity: Option<usize>,
}

impl EngineConfig {
    pub fn rng(&self) -> RngSource<StdRng> {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }

    pub fn log(&self) -> RoundLog {
        match self.log_capacity {
            Some(capacity) => RoundLog::with_capacity(capacity),
            None => RoundLog::new(),
        }
    }
}

/// One instance of each strategy, looked up by kind.
pub struct Roster {
    cheat: Box<dyn Strategy>,
    least_used: Box<dyn Strategy>,
    most_used: Box<dyn Strategy>,
    last_used: Box<dyn Strategy>,
    random: Box<dyn Strategy>,
}

impl Roster {
    pub fn new(
        cheat: impl Strategy + 'static,
        least_used: impl Strategy + 'static,
        most_used: impl Strategy + 'static,
        last_used: impl Strategy + 'static,
        random: impl Strategy + 'static,
    ) -> Self {
        debug_assert_eq!(cheat.kind(), StrategyKind::Cheat);
        debug_assert_eq!(least_used.kind(), StrategyKind::LeastUsed);
        debug_assert_eq!(most_used.kind(), StrategyKind::MostUsed);
        debug_assert_eq!(last_used.kind(), StrategyKind::LastUsed);
        debug_assert_eq!(random.kind(), StrategyKind::Random);
        Self {
            cheat: Box::new(cheat),
            least_used: Box::new(least_used),
            most_used: Box::new(most_used),
            last_used: Box::new(last_used),
            random: Box::new(random),
        }
    }

    pub fn get(&self, kind: StrategyKind) -> &dyn Strategy {
        match kind {
            StrategyKind::Cheat => self.cheat.as_ref(),
            StrategyKind::LeastUsed => self.least_used.as_ref(),
            StrategyKind::MostUsed => self.most_used.as_ref(),
            StrategyKind::LastUsed => self.last_used.as_ref(),
            StrategyKind::Random => self.random.as_ref(),
        }
    }
}

/// Owns the session state and resolves rounds against it.
///
/// History, tally, usage and log are only written at the end of
/// [`RoundEngine::play_round`], after every decision for the round has
/// succeeded. A failed round leaves them exactly as they were.
pub struct RoundEngine<R> {
    roster: Roster,
    rng: R,
    history: HistorySnapshot,
    tally: Tally,
    usage: StrategyUsage,
    log: RoundLog,
    rounds_played: u32,
}

impl RoundEngine<RngSource<StdRng>> {
    /// Engine with the randomness source and log described by `config`.
    pub fn from_config(roster: Roster, config: &EngineConfig) -> Self {
        Self::with_log(roster, config.rng(), config.log())
    }
}

impl<R: RandomSource> RoundEngine<R> {
    pub fn new(roster: Roster, rng: R) -> Self {
        Self::with_log(roster, rng, RoundLog::new())
    }

    pub fn with_log(roster: Roster, rng: R, log: RoundLog) -> Self {
        Self {
            roster,
            rng,
            history: HistorySnapshot::new(),
            tally: Tally::default(),
            usage: StrategyUsage::default(),
            log,
            rounds_played: 0,
        }
    }

    /// Parse the player's input and play it.
    pub fn play(&mut self, input: &str) -> Result<RoundRecord, GameError> {
        let player_move: Move = input.parse()?;
        self.play_round(player_move)
    }

    /// Play one round and commit its result.
    pub fn play_round(&mut self, player_move: Move) -> Result<RoundRecord, GameError> {
        // Counts include this round; the last move is still the previous one.
        let pending = self.history.recorded(player_move);

        let draw = self.rng.draw(SELECTOR_LOW, SELECTOR_HIGH)?;
        let kind = selector::select(draw)?;
        debug!(draw, strategy = %kind, "selected strategy");

        let computer_move = self
            .roster
            .get(kind)
            .choose(player_move, &pending, &mut self.rng)?;
        let outcome = resolve(player_move, computer_move);

        let record = RoundRecord {
            round: self.rounds_played + 1,
            player_move,
            computer_move,
            strategy: kind,
            outcome,
        };

        self.history = pending.with_last_move(player_move);
        self.tally.record(outcome);
        self.usage.record(kind);
        self.log.push(record.clone());
        self.rounds_played += 1;

        info!(
            round = record.round,
            player = %player_move,
            computer = %computer_move,
            strategy = %kind,
            ?outcome,
            "round resolved"
        );
        Ok(record)
    }

    pub fn history(&self) -> HistorySnapshot {
        self.history
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Strategy counts over the whole session, including evicted rounds.
    pub fn usage(&self) -> StrategyUsage {
        self.usage
    }

    pub fn log(&self) -> &RoundLog {
        &self.log
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Outcome;
    use crate::random::ScriptedSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<HistorySnapshot>>>;

    /// Always answers with the same move and remembers what it was shown.
    struct Fixed {
        kind: StrategyKind,
        answer: Move,
        seen: Seen,
    }

    impl Strategy for Fixed {
        fn kind(&self) -> StrategyKind {
            self.kind
        }

        fn choose(
            &self,
            _player_move: Move,
            history: &HistorySnapshot,
            _rng: &mut dyn RandomSource,
        ) -> Result<Move, GameError> {
            self.seen.borrow_mut().push(*history);
            Ok(self.answer)
        }
    }

    /// Pulls one extra value from the randomness source.
    struct Draws;

    impl Strategy for Draws {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Random
        }

        fn choose(
            &self,
            _player_move: Move,
            _history: &HistorySnapshot,
            rng: &mut dyn RandomSource,
        ) -> Result<Move, GameError> {
            let pick = rng.draw(0, 2)?;
            Ok(Move::ALL[pick as usize])
        }
    }

    fn fixed(kind: StrategyKind, answer: Move, seen: &Seen) -> Fixed {
        Fixed {
            kind,
            answer,
            seen: Rc::clone(seen),
        }
    }

    /// Fixed answers per band, so tests can predict the computer's move.
    fn roster(seen: &Seen) -> Roster {
        Roster::new(
            fixed(StrategyKind::Cheat, Move::Paper, seen),
            fixed(StrategyKind::LeastUsed, Move::Scissors, seen),
            fixed(StrategyKind::MostUsed, Move::Rock, seen),
            fixed(StrategyKind::LastUsed, Move::Scissors, seen),
            Draws,
        )
    }

    fn engine(draws: impl IntoIterator<Item = u32>) -> (RoundEngine<ScriptedSource>, Seen) {
        let seen = Seen::default();
        let engine = RoundEngine::new(roster(&seen), ScriptedSource::new(draws));
        (engine, seen)
    }

    #[test]
    fn first_round_with_cheat_band() {
        let (mut engine, _) = engine([10]);
        let record = engine.play_round(Move::Rock).unwrap();

        assert_eq!(record.round, 1);
        assert_eq!(record.strategy, StrategyKind::Cheat);
        assert_eq!(record.computer_move, Move::Paper);
        assert_eq!(record.outcome, Outcome::ComputerWin);
        assert_eq!(
            engine.tally(),
            Tally {
                player_wins: 0,
                computer_wins: 1,
                ties: 0
            }
        );
        let history = engine.history();
        assert_eq!((history.rock, history.paper, history.scissors), (1, 0, 0));
        assert_eq!(history.last_player_move, Some(Move::Rock));
    }

    #[test]
    fn strategy_sees_counts_with_previous_last_move() {
        let (mut engine, seen) = engine([1, 40]);
        engine.play_round(Move::Scissors).unwrap();
        engine.play_round(Move::Paper).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].scissors, 1);
        assert_eq!(seen[0].last_player_move, None);
        assert_eq!(seen[1].scissors, 1);
        assert_eq!(seen[1].paper, 1);
        assert_eq!(seen[1].last_player_move, Some(Move::Scissors));
    }

    #[test]
    fn selector_draw_picks_band() {
        let (mut engine, _) = engine([11, 31, 51, 100, 2]);
        let kinds: Vec<StrategyKind> = (0..4)
            .map(|_| engine.play_round(Move::Rock).unwrap().strategy)
            .collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::LeastUsed,
                StrategyKind::MostUsed,
                StrategyKind::LastUsed,
                StrategyKind::Random,
            ]
        );
        assert_eq!(
            engine.log().records().last().map(|r| r.computer_move),
            Some(Move::Scissors)
        );
    }

    #[test]
    fn exactly_one_tally_field_per_round() {
        let (mut engine, _) = engine([1, 1, 1]);
        engine.play_round(Move::Rock).unwrap(); // Paper: computer
        engine.play_round(Move::Paper).unwrap(); // Paper: tie
        engine.play_round(Move::Scissors).unwrap(); // Paper: player

        assert_eq!(
            engine.tally(),
            Tally {
                player_wins: 1,
                computer_wins: 1,
                ties: 1
            }
        );
        assert_eq!(engine.tally().rounds(), engine.rounds_played());
        assert_eq!(engine.history().total(), 3);
    }

    #[test]
    fn invalid_input_is_rejected_before_any_change() {
        let (mut engine, _) = engine([1]);
        let err = engine.play("X").unwrap_err();
        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(engine.history(), HistorySnapshot::new());
        assert_eq!(engine.tally(), Tally::default());
        assert!(engine.log().is_empty());

        assert!(engine.play(" r ").is_ok());
    }

    #[test]
    fn exhausted_selector_leaves_state_untouched() {
        let (mut engine, _) = engine([1]);
        engine.play_round(Move::Rock).unwrap();
        let history = engine.history();
        let tally = engine.tally();

        assert_eq!(
            engine.play_round(Move::Paper),
            Err(GameError::RandomnessExhausted)
        );
        assert_eq!(engine.history(), history);
        assert_eq!(engine.tally(), tally);
        assert_eq!(engine.log().len(), 1);
        assert_eq!(engine.rounds_played(), 1);
    }

    #[test]
    fn failing_strategy_leaves_state_untouched() {
        // Random band selected, then the strategy finds nothing left to draw.
        let (mut engine, _) = engine([80]);
        assert_eq!(
            engine.play_round(Move::Scissors),
            Err(GameError::RandomnessExhausted)
        );
        assert_eq!(engine.history(), HistorySnapshot::new());
        assert_eq!(engine.tally(), Tally::default());
        assert_eq!(engine.usage(), StrategyUsage::default());
    }

    #[test]
    fn out_of_range_selector_draw_fails() {
        let seen = Seen::default();
        let mut engine = RoundEngine::new(roster(&seen), ScriptedSource::new([0]));
        assert!(matches!(
            engine.play_round(Move::Rock),
            Err(GameError::DrawOutOfRange { value: 0, .. })
        ));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn snapshot_reads_are_idempotent() {
        let (mut engine, _) = engine([5]);
        engine.play_round(Move::Paper).unwrap();
        assert_eq!(engine.tally(), engine.tally());
        assert_eq!(engine.history(), engine.history());
        assert_eq!(engine.usage(), engine.usage());
    }

    #[test]
    fn bounded_log_does_not_affect_tally() {
        let seen = Seen::default();
        let mut engine = RoundEngine::with_log(
            roster(&seen),
            ScriptedSource::new([1; 5]),
            RoundLog::with_capacity(2),
        );
        for _ in 0..5 {
            engine.play_round(Move::Rock).unwrap();
        }
        assert_eq!(engine.log().len(), 2);
        assert_eq!(engine.log().evicted(), 3);
        assert_eq!(engine.tally().computer_wins, 5);
        assert_eq!(engine.usage().cheat, 5);
        let rounds: Vec<u32> = engine.log().records().map(|r| r.round).collect();
        assert_eq!(rounds, vec![4, 5]);
    }

    #[test]
    fn config_accepts_unbounded_capacity_value() {
        let config = EngineConfig {
            seed: Some(1),
            log_capacity: Some(usize::MAX),
        };
        let seen = Seen::default();
        let mut engine = RoundEngine::from_config(roster(&seen), &config);
        engine.play_round(Move::Rock).unwrap();
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn config_builds_seeded_engine() {
        let config = EngineConfig {
            seed: Some(9),
            log_capacity: Some(3),
        };
        let seen = Seen::default();
        let mut engine = RoundEngine::from_config(roster(&seen), &config);
        for _ in 0..10 {
            engine.play_round(Move::Rock).unwrap();
        }
        assert_eq!(engine.log().capacity(), Some(3));
        assert_eq!(engine.tally().rounds(), 10);
    }
}
