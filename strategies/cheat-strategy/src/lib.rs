use rps_core::{GameError, HistorySnapshot, Move, RandomSource, Strategy, StrategyKind};

/// CheatStrategy looks at the player's current move and plays whatever beats it.
pub struct CheatStrategy;

impl Strategy for CheatStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Cheat
    }

    fn choose(
        &self,
        player_move: Move,
        _history: &HistorySnapshot,
        _rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError> {
        Ok(player_move.beaten_by())
    }
}
