use rps_core::{GameError, HistorySnapshot, Move, RandomSource, Strategy, StrategyKind};

/// RandomStrategy picks Rock, Paper or Scissors uniformly.
pub struct RandomStrategy;

impl RandomStrategy {
    /// A uniform move, shared with strategies that fall back to chance.
    pub fn pick(rng: &mut dyn RandomSource) -> Result<Move, GameError> {
        let index = rng.draw(0, 2)?;
        Move::ALL
            .get(index as usize)
            .copied()
            .ok_or(GameError::DrawOutOfRange {
                value: index,
                low: 0,
                high: 2,
            })
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose(
        &self,
        _player_move: Move,
        _history: &HistorySnapshot,
        rng: &mut dyn RandomSource,
    ) -> Result<Move, GameError> {
        Self::pick(rng)
    }
}
