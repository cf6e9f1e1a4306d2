use rps_core::{GameError, HistorySnapshot, Move, RandomSource, Strategy, StrategyKind};

/// LeastUsedStrategy counters the move the player has thrown least often.
/// Equal counts resolve in Rock, Paper, Scissors order.
pub struct LeastUsedStrategy;

impl Strategy for LeastUsedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LeastUsed
    }

    fn choose(
        &self,
        _player_move: Move,
        history: &HistorySnapshot,
        _rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError> {
        Ok(history.least_used().beaten_by())
    }
}
