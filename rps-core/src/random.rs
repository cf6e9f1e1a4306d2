//! Injectable randomness for the selector draw and the random strategies.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::GameError;

/// Supplies uniform integers in a closed range chosen by the caller.
pub trait RandomSource {
    /// Draw a value in `[low, high]`.
    fn draw(&mut self, low: u32, high: u32) -> Result<u32, GameError>;
}

fn check_range(low: u32, high: u32) -> Result<(), GameError> {
    if low > high {
        return Err(GameError::EmptyRange { low, high });
    }
    Ok(())
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn draw(&mut self, low: u32, high: u32) -> Result<u32, GameError> {
        check_range(low, high)?;
        Ok(self.rng.gen_range(low..=high))
    }
}

/// Replays a fixed sequence of draws, for tests and scripted demos.
///
/// Each call consumes the next value. Running out, or a value that does not
/// fit the requested range, is an error rather than a silent fallback.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Queue more values after the existing ones.
    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, low: u32, high: u32) -> Result<u32, GameError> {
        check_range(low, high)?;
        let value = self.values.pop_front().ok_or(GameError::RandomnessExhausted)?;
        if !(low..=high).contains(&value) {
            return Err(GameError::DrawOutOfRange { value, low, high });
        }
        Ok(value)
    }
}
