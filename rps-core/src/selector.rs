//! Maps the engine's selector draw onto a strategy.

use std::ops::RangeInclusive;

use crate::error::GameError;
use crate::StrategyKind;

/// Range of the selector draw.
pub const SELECTOR_LOW: u32 = 1;
pub const SELECTOR_HIGH: u32 = 100;

/// Closed bands, checked in order. Together they cover 1..=100 exactly once.
pub const BANDS: [(RangeInclusive<u32>, StrategyKind); 5] = [
    (1..=10, StrategyKind::Cheat),
    (11..=30, StrategyKind::LeastUsed),
    (31..=50, StrategyKind::MostUsed),
    (51..=70, StrategyKind::LastUsed),
    (71..=100, StrategyKind::Random),
];

/// Strategy for a selector draw in `[SELECTOR_LOW, SELECTOR_HIGH]`.
pub fn select(draw: u32) -> Result<StrategyKind, GameError> {
    BANDS
        .iter()
        .find(|(band, _)| band.contains(&draw))
        .map(|(_, kind)| *kind)
        .ok_or(GameError::DrawOutOfRange {
            value: draw,
            low: SELECTOR_LOW,
            high: SELECTOR_HIGH,
        })
}
