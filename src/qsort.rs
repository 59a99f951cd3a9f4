use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::case::{BenchmarkCase, CaseArg};

pub const FUN: &str = "quicksort";
pub const KIND: u32 = 2;
pub const EXECUTIONS: u32 = 100;

/// `min` and `max` are informational; the payload is always a permutation of
/// `0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QsortParams {
    pub count: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for QsortParams {
    fn default() -> Self {
        Self {
            count: 25_000_000,
            min: 0,
            max: 100_000,
        }
    }
}

impl QsortParams {
    pub fn name(&self) -> String {
        format!("quicksort_{}m", self.count / 1_000_000)
    }
}

pub fn generate<R: Rng + ?Sized>(params: &QsortParams, rng: &mut R) -> BenchmarkCase {
    info!(count = params.count, "shuffling");
    let mut numbers: Vec<u32> = (0..params.count).collect();
    numbers.shuffle(rng);

    info!("preparing case");
    BenchmarkCase {
        fun: FUN.to_string(),
        name: params.name(),
        kind: KIND,
        executions: EXECUTIONS,
        arg: CaseArg::Sequence(numbers),
    }
}
