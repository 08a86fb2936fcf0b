//! pipeline-demo
//!
//! Chains every lazy operation of `iterr` over a small range and logs each
//! element as it flows through the `inspect` stages.
//!
//! # Usage
//!
//! ```bash
//! # Sum over 0..10 (default)
//! cargo run --bin pipeline-demo
//!
//! # Sum over 0..100 with trace events from the library
//! RUST_LOG=pipeline_demo=info,iterr=trace cargo run --bin pipeline-demo -- 100
//! ```

use iterr::iter::Iter;
use std::num::ParseIntError;

/// Upper bound used when no argument is given.
pub const DEFAULT_UPPER_BOUND: u32 = 10;

/// Errors raised while reading the demo configuration.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The upper bound argument is not a non-negative integer.
    #[error("invalid upper bound {input:?}: {source}")]
    InvalidUpperBound {
        /// The rejected argument.
        input: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },
}

/// Settings for a demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// The pipeline runs over `0..upper_bound`.
    pub upper_bound: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl DemoConfig {
    /// Reads the configuration from command line arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::InvalidUpperBound`] if the first argument is not a `u32`.
    pub fn from_args<I>(arguments: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = String>,
    {
        match arguments.into_iter().next() {
            None => Ok(Self::default()),
            Some(input) => input
                .trim()
                .parse()
                .map(|upper_bound| Self { upper_bound })
                .map_err(|source| DemoError::InvalidUpperBound { input, source }),
        }
    }
}

/// Runs the demonstration pipeline and returns the final sum.
///
/// Keeps the even numbers, expands each `x` into `[x, x * 2]`, adds 10 to
/// everything and sums the result.
pub fn run(config: DemoConfig) -> u64 {
    Iter::new(0..config.upper_bound)
        .filter(|x| x % 2 == 0)
        .inspect(|x| tracing::info!(stage = "even", value = x))
        .bind(|x| [x, x * 2])
        .map(|x| u64::from(x) + 10)
        .inspect(|x| tracing::info!(stage = "shifted", value = x))
        .fold(0, |sum, x| sum + x)
}
