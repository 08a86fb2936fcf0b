//! Lazy sequence transformation.
//!
//! This module provides [`Iter`], a wrapper around any single-pass source
//! that composes deferred operations without materializing intermediate
//! results:
//!
//! - [`Iter::map`], [`Iter::filter`], [`Iter::filter_map`], [`Iter::bind`]
//!   and [`Iter::inspect`] are lazy and return a new `Iter`
//! - [`Iter::fold`], [`Iter::try_fold`], [`Iter::collect`] and
//!   [`Iter::to_list`] are terminal and drive the chain in a single pass
//!
//! # Examples
//!
//! ## Deferred Evaluation
//!
//! ```rust
//! use iterr::iter::Iter;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let chain = Iter::new(1..=3).map(|x| {
//!     calls.set(calls.get() + 1);
//!     x * 2
//! });
//! // Nothing has run yet
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(chain.to_list(), vec![2, 4, 6]);
//! assert_eq!(calls.get(), 3);
//! ```
//!
//! ## Collecting Into Any Container
//!
//! ```rust
//! use iterr::iter::Lazily;
//! use std::collections::BTreeMap;
//!
//! let lengths: BTreeMap<&str, usize> = vec!["one", "three"]
//!     .lazily()
//!     .map(|word| (word, word.len()))
//!     .collect(BTreeMap::from_iter);
//!
//! assert_eq!(lengths["three"], 5);
//! ```

mod adapters;
mod lazy_iter;

pub use adapters::{Bind, Counted, Filter, FilterMap, Inspect, Map};
pub use lazy_iter::{Iter, Lazily};
