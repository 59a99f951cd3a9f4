//! Generators for the JSON input files read by the benchmark runner.
//!
//! Each generator builds one [`BenchmarkCase`] in memory and writes it to
//! `inputs/<name>.json`.

use tracing_subscriber::EnvFilter;

pub mod case;
pub mod matmul;
pub mod qsort;

pub use case::{BenchmarkCase, CaseArg, MatrixArg};
pub use matmul::MatmulParams;
pub use qsort::QsortParams;

/// Directory the binaries write into, relative to the working directory.
pub const INPUTS_DIR: &str = "inputs";

const DEFAULT_LOG_FILTER: &str = "info";

/// Progress goes to stderr. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();
}
