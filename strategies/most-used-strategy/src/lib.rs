use rps_core::{GameError, HistorySnapshot, Move, RandomSource, Strategy, StrategyKind};

/// MostUsedStrategy bets on the player repeating their favourite move.
pub struct MostUsedStrategy;

impl Strategy for MostUsedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MostUsed
    }

    fn choose(
        &self,
        _player_move: Move,
        history: &HistorySnapshot,
        _rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError> {
        Ok(history.most_used().beaten_by())
    }
}
