//! # iterr
//!
//! Lazy, chainable sequence transformations for Rust.
//!
//! ## Overview
//!
//! [`Iter`](iter::Iter) wraps any iterable and layers deferred operations on
//! top of it. Nothing is evaluated until a terminal operation drives the
//! chain, and then every stage runs in a single front-to-back pass:
//!
//! - **Lazy**: `map`, `filter`, `filter_map`, `bind` (flat-map), `inspect`
//! - **Terminal**: `fold`, `try_fold`, `collect`, `to_list`, `try_to_list`
//!
//! Sequences are single-pass. Chaining consumes the wrapper, and a wrapper
//! whose source has been drained stays empty.
//!
//! ## Feature Flags
//!
//! - `tracing`: Emit `tracing` events from terminal operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use iterr::prelude::*;
//!
//! let total = Iter::new(vec![1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .fold(0, |sum, x| sum + x);
//!
//! assert_eq!(total, 60);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrapper, its adapters and the error type.
///
/// # Usage
///
/// ```rust
/// use iterr::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::iter::*;
}

pub mod error;
pub mod iter;

mod trace;
