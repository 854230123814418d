//! Timing harness for comparing solver strategies.
//!
//! [`time_and_test`] calls a closure `loops` times per repeat, `repeats` times, and reports the best
//! and mean time per call together with the value the closure produced, so a report shows both
//! how fast a strategy is and what it answered.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(&'static str),
}

/// How many times to run a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    repeats: u32,
    loops: u32,
}

impl BenchConfig {
    /// ## Errors
    /// - `BenchError::InvalidConfig` if either count is zero.
    pub fn new(repeats: u32, loops: u32) -> Result<Self, BenchError> {
        if repeats == 0 {
            return Err(BenchError::InvalidConfig("repeats must be at least 1"));
        }
        if loops == 0 {
            return Err(BenchError::InvalidConfig("loops must be at least 1"));
        }
        Ok(BenchConfig { repeats, loops })
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig { repeats: 3, loops: 1000 }
    }
}

/// Timing result for one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport<T> {
    pub label: String,
    pub best_per_loop: Duration,
    pub mean_per_loop: Duration,
    pub output: T,
}

impl<T: fmt::Debug> fmt::Display for BenchReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} {:?} in best {:?}, mean {:?} per loop",
            format!("{}:", self.label),
            self.output,
            self.best_per_loop,
            self.mean_per_loop
        )
    }
}

/// Time `f` under `config` and keep its last output.
///
/// `f` runs once untimed before measurement starts.
pub fn time_and_test<T, F>(label: impl Into<String>, config: BenchConfig, mut f: F) -> BenchReport<T>
where
    F: FnMut() -> T,
{
    let label = label.into();
    let mut output = f();
    let mut best = Duration::MAX;
    let mut total = Duration::ZERO;

    for _ in 0..config.repeats {
        let start = Instant::now();
        for _ in 0..config.loops {
            output = black_box(f());
        }
        let per_loop = start.elapsed() / config.loops;
        best = best.min(per_loop);
        total += per_loop;
    }

    let report = BenchReport {
        best_per_loop: best,
        mean_per_loop: total / config.repeats,
        output,
        label,
    };
    tracing::debug!(label = %report.label, best = ?report.best_per_loop, "benchmark finished");
    report
}
