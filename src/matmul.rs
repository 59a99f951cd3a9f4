use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::info;

use crate::case::{BenchmarkCase, CaseArg, MatrixArg};

pub const FUN: &str = "matrix_multiply";
pub const KIND: u32 = 4;
pub const EXECUTIONS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatmulParams {
    pub width: usize,
    pub height: usize,
    pub min: f64,
    pub max: f64,
}

impl Default for MatmulParams {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1000,
            min: 0.0,
            max: 100_000.0,
        }
    }
}

impl MatmulParams {
    pub fn name(&self) -> String {
        format!("matmul{}x{}", self.width, self.height)
    }

    /// Element count of each flattened matrix.
    pub(crate) fn len(&self) -> usize {
        self.width * self.height
    }
}

/// Builds a matrix-multiply case with `a` and `b` drawn independently from
/// `[min, max)`.
///
/// Panics if `min >= max`.
pub fn generate<R: Rng + ?Sized>(params: &MatmulParams, rng: &mut R) -> BenchmarkCase {
    let range = Uniform::new(params.min, params.max);

    info!("generating matrix A");
    let a: Vec<f64> = (0..params.len()).map(|_| range.sample(rng)).collect();
    info!("generating matrix B");
    let b: Vec<f64> = (0..params.len()).map(|_| range.sample(rng)).collect();

    info!("preparing case");
    BenchmarkCase {
        fun: FUN.to_string(),
        name: params.name(),
        kind: KIND,
        executions: EXECUTIONS,
        arg: CaseArg::Matrices(MatrixArg {
            a,
            b,
            width: params.width,
        }),
    }
}
