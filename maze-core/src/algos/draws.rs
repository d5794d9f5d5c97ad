use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// The randomness every generation step consumes.
///
/// A single source is created by the caller and threaded through partitioning,
/// wall opening and endpoint placement, so a run is fully determined by the
/// sequence of values it hands out.
pub trait DrawSource {
    /// Returns an integer uniformly distributed over `[low, high]`.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

/// Draws backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraws<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        RngDraws { rng }
    }
}

impl RngDraws<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngDraws::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of draws, in order.
///
/// Running out of values, or being handed a value outside the requested range,
/// means the script no longer matches the run and panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    script: VecDeque<u32>,
}

impl ScriptedDraws {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        ScriptedDraws {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        let Some(value) = self.script.pop_front() else {
            panic!("Draw script exhausted while drawing from [{}, {}]", low, high);
        };

        if !(low..=high).contains(&value) {
            panic!(
                "Scripted draw {} is outside of the requested range [{}, {}]",
                value, low, high
            );
        }

        value
    }
}

/// Wraps another source and keeps every value it hands out, so a run can be
/// replayed later through [`ScriptedDraws`].
#[derive(Debug, Clone)]
pub struct RecordingDraws<D: DrawSource> {
    inner: D,
    record: Vec<u32>,
}

impl<D: DrawSource> RecordingDraws<D> {
    pub fn new(inner: D) -> Self {
        RecordingDraws {
            inner,
            record: Vec::new(),
        }
    }

    pub fn record(&self) -> &[u32] {
        &self.record
    }

    pub fn into_record(self) -> Vec<u32> {
        self.record
    }
}

impl<D: DrawSource> DrawSource for RecordingDraws<D> {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        let value = self.inner.draw(low, high);
        self.record.push(value);
        value
    }
}
