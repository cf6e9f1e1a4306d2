use random_strategy::RandomStrategy;
use rps_core::{GameError, HistorySnapshot, Move, RandomSource, Strategy, StrategyKind};

/// LastUsedStrategy assumes the player repeats the move from the previous
/// round. With no previous round it plays at random.
pub struct LastUsedStrategy;

impl Strategy for LastUsedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LastUsed
    }

    fn choose(
        &self,
        _player_move: Move,
        history: &HistorySnapshot,
        rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError> {
        match history.last_player_move {
            Some(last) => Ok(last.beaten_by()),
            None => RandomStrategy::pick(rng),
        }
    }
}
