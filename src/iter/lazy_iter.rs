//! The lazy sequence wrapper.
//!
//! `Iter<S>` owns a single-pass source `S` and layers deferred stages on top
//! of it. Intermediate operations consume the wrapper and return a new one;
//! terminal operations pull the whole chain exactly once.
//!
//! # Examples
//!
//! ```rust
//! use iterr::iter::Iter;
//!
//! let total = Iter::new(0..10)
//!     .filter(|x| x % 2 == 0)
//!     .bind(|x| [x, x * 2])
//!     .map(|x| x + 10)
//!     .fold(0, |accumulator, x| accumulator + x);
//!
//! assert_eq!(total, 160);
//! ```

use std::cell::Cell;
use std::iter::{Empty, FusedIterator, Once};
use std::rc::Rc;

use super::adapters::{Bind, Counted, Filter, FilterMap, Inspect, Map};
use crate::error::DrainedError;
use crate::trace;

/// Whether the source has reported exhaustion yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceState {
    /// The source may still produce elements.
    Live,
    /// The source returned `None` once and is never pulled again.
    Drained,
}

/// A lazily evaluated, single-pass sequence.
///
/// `Iter<S>` wraps any iterator and offers chainable deferred operations
/// (`map`, `filter`, `filter_map`, `bind`, `inspect`) and terminal
/// operations (`fold`, `try_fold`, `collect`, `to_list`).
///
/// Nothing is pulled from the source until a terminal operation runs or
/// the wrapper is iterated by the caller. Every intermediate operation
/// takes `self` by value, so a wrapper cannot be used again once it has
/// been chained.
///
/// # Type Parameters
///
/// * `S` - The underlying source
///
/// # Single-pass contract
///
/// Once the source has returned `None`, the wrapper is drained: further
/// pulls, folds and collects observe an empty sequence without touching
/// the source again. Use [`Iter::fresh`] to turn that silent emptiness into
/// an error.
///
/// # Examples
///
/// ```rust
/// use iterr::iter::Iter;
///
/// let words = Iter::new(vec!["1", "two", "3"])
///     .filter_map(|text| text.parse::<i32>().ok())
///     .map(|number| number * 10)
///     .to_list();
///
/// assert_eq!(words, vec![10, 30]);
/// ```
///
/// Only iterable values can be wrapped; `Iter::new(42)` does not compile.
#[derive(Debug, Clone)]
#[must_use = "lazy sequences do nothing unless consumed"]
pub struct Iter<S> {
    source: S,
    state: SourceState,
}

static_assertions::assert_impl_all!(Iter<std::vec::IntoIter<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Iter<std::vec::IntoIter<std::rc::Rc<i32>>>: Send, Sync);

impl<S: Iterator> Iter<S> {
    /// Wraps an iterable without pulling any element from it.
    ///
    /// # Arguments
    ///
    /// * `source` - Anything that implements `IntoIterator`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let from_range = Iter::new(0..3);
    /// let from_vec = Iter::new(vec!['a', 'b']);
    /// assert_eq!(from_range.to_list(), vec![0, 1, 2]);
    /// assert_eq!(from_vec.to_list(), vec!['a', 'b']);
    /// ```
    #[inline]
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<IntoIter = S>,
    {
        Self {
            source: source.into_iter(),
            state: SourceState::Live,
        }
    }

    /// Returns whether the source has already reported exhaustion.
    ///
    /// A partially consumed wrapper is not drained; only one whose source
    /// has returned `None` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let mut sequence = Iter::new(vec![1]);
    /// assert!(!sequence.is_drained());
    /// assert_eq!(sequence.next(), Some(1));
    /// assert!(!sequence.is_drained());
    /// assert_eq!(sequence.next(), None);
    /// assert!(sequence.is_drained());
    /// ```
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.state == SourceState::Drained
    }

    /// Returns the wrapper unchanged, or an error if its source is drained.
    ///
    /// Running a terminal operation on a drained wrapper silently yields an
    /// empty result. Calling `fresh` first makes that case explicit.
    ///
    /// # Errors
    ///
    /// Returns [`DrainedError`] if the source has already reported exhaustion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let mut sequence = Iter::new(0..3);
    /// let _ = sequence.by_ref().to_list();
    ///
    /// assert!(sequence.fresh().is_err());
    /// ```
    pub fn fresh(self) -> Result<Self, DrainedError> {
        if self.is_drained() {
            let operation = "Iter::fresh";
            trace::rejected_drained(operation);
            Err(DrainedError { operation })
        } else {
            Ok(self)
        }
    }

    /// Borrows this wrapper as the source of a new chain.
    ///
    /// Elements pulled by the new chain are consumed from this one. The
    /// borrow ends when the new chain is dropped, after which this wrapper
    /// can continue from where the new chain stopped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let mut numbers = Iter::new(1..);
    /// let first_three: Vec<i32> = numbers.by_ref().map(|x| x * 10).take(3).collect();
    ///
    /// assert_eq!(first_three, vec![10, 20, 30]);
    /// assert_eq!(numbers.next(), Some(4));
    /// ```
    #[inline]
    pub fn by_ref(&mut self) -> Iter<&mut Self> {
        Iter::new(self)
    }

    // =========================================================================
    // Intermediate operations
    // =========================================================================

    /// Lazily applies `function` to every element.
    ///
    /// `function` runs once per element, in source order, only when the
    /// element is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// assert_eq!(Iter::new(1..=3).map(|x| x * x).to_list(), vec![1, 4, 9]);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Iter<Map<Self, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Iter::new(Map::new(self, function))
    }

    /// Lazily keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let evens = Iter::new(0..10).filter(|x| x % 2 == 0).to_list();
    /// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Iter<Filter<Self, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Iter::new(Filter::new(self, predicate))
    }

    /// Lazily maps and filters in one pass.
    ///
    /// `function` runs once per element. `None` drops the element; `Some`
    /// yields the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let present = Iter::new(vec![Some(1), None, Some(2), None, Some(3)])
    ///     .filter_map(|x| x)
    ///     .to_list();
    /// assert_eq!(present, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn filter_map<U, F>(self, function: F) -> Iter<FilterMap<Self, F>>
    where
        F: FnMut(S::Item) -> Option<U>,
    {
        Iter::new(FilterMap::new(self, function))
    }

    /// Lazily maps every element to a sub-sequence and flattens one level.
    ///
    /// Each sub-sequence is drained before `function` is called for the next
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let doubled = Iter::new(vec![1, 2]).bind(|x| vec![x, x]).to_list();
    /// assert_eq!(doubled, vec![1, 1, 2, 2]);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Iter<Bind<Self, F, U>>
    where
        F: FnMut(S::Item) -> U,
        U: IntoIterator,
    {
        Iter::new(Bind::new(self, function))
    }

    /// Lazily calls `function` on every element passing through.
    ///
    /// The element is handed over by reference and yielded unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let mut seen = Vec::new();
    /// let passed = Iter::new(vec![3, 1, 2])
    ///     .inspect(|x| seen.push(*x))
    ///     .to_list();
    ///
    /// assert_eq!(passed, vec![3, 1, 2]);
    /// assert_eq!(seen, vec![3, 1, 2]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Iter<Inspect<Self, F>>
    where
        F: FnMut(&S::Item),
    {
        Iter::new(Inspect::new(self, function))
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Drives the chain to exhaustion, threading an accumulator through it.
    ///
    /// Returns `initial` unchanged for an empty sequence. Never returns on
    /// an infinite source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// assert_eq!(Iter::new(1..=4).fold(0, |sum, x| sum + x), 10);
    /// assert_eq!(Iter::new(Vec::<i32>::new()).fold(5, |sum, x| sum + x), 5);
    /// ```
    pub fn fold<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        self.drive("fold", |mut counted| {
            let mut accumulator = initial;
            while let Some(element) = counted.next() {
                accumulator = function(accumulator, element);
            }
            accumulator
        })
    }

    /// Like [`Iter::fold`], but stops at the first error.
    ///
    /// The error is returned as produced by `function`; elements after the
    /// failing one are not pulled.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let checked_sum = Iter::new(vec![1u8, 200, 100])
    ///     .try_fold(0u8, |sum, x| sum.checked_add(x).ok_or("overflow"));
    /// assert_eq!(checked_sum, Err("overflow"));
    /// ```
    pub fn try_fold<B, E, F>(self, initial: B, mut function: F) -> Result<B, E>
    where
        F: FnMut(B, S::Item) -> Result<B, E>,
    {
        self.drive("try_fold", |mut counted| -> Result<B, E> {
            let mut accumulator = initial;
            while let Some(element) = counted.next() {
                accumulator = function(accumulator, element)?;
            }
            Ok(accumulator)
        })
    }

    /// Hands the sequence to `into` and returns whatever it builds.
    ///
    /// `into` receives the sequence still lazy, behind a [`Counted`] stage
    /// that tallies the elements it pulls. Any `from_iter` constructor
    /// works.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    /// use std::collections::HashSet;
    ///
    /// let unique: HashSet<i32> = Iter::new(vec![1, 2, 2, 3]).collect(HashSet::from_iter);
    /// assert_eq!(unique.len(), 3);
    /// ```
    #[inline]
    pub fn collect<U, F>(self, into: F) -> U
    where
        F: FnOnce(Iter<Counted<Self>>) -> U,
    {
        self.drive("collect", into)
    }

    /// Collects the sequence into a `Vec`, keeping order and duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// assert_eq!(Iter::new("abc".chars()).to_list(), vec!['a', 'b', 'c']);
    /// ```
    pub fn to_list(self) -> Vec<S::Item> {
        self.drive("to_list", Vec::from_iter)
    }

    /// Runs a terminal operation over the counted sequence, then reports
    /// how many elements it pulled.
    fn drive<U, F>(self, operation: &'static str, terminal: F) -> U
    where
        F: FnOnce(Iter<Counted<Self>>) -> U,
    {
        let visited = Rc::new(Cell::new(0));
        let result = terminal(Iter::new(Counted::new(self, Rc::clone(&visited))));
        trace::terminal(operation, visited.get());
        result
    }
}

impl<S, T, E> Iter<S>
where
    S: Iterator<Item = Result<T, E>>,
{
    /// Collects a sequence of results, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` element; later elements are not pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// let parsed = Iter::new(vec!["1", "2"]).map(str::parse::<i32>).try_to_list();
    /// assert_eq!(parsed, Ok(vec![1, 2]));
    ///
    /// let failed = Iter::new(vec!["1", "x"]).map(str::parse::<i32>).try_to_list();
    /// assert!(failed.is_err());
    /// ```
    pub fn try_to_list(self) -> Result<Vec<T>, E> {
        self.drive("try_to_list", Result::<Vec<T>, E>::from_iter)
    }
}

impl<T> Iter<Empty<T>> {
    /// Creates a sequence with no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// assert_eq!(Iter::<std::iter::Empty<i32>>::empty().fold(7, |a, x| a + x), 7);
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T> Iter<Once<T>> {
    /// Creates a sequence holding exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterr::iter::Iter;
    ///
    /// assert_eq!(Iter::once("only").to_list(), vec!["only"]);
    /// ```
    #[inline]
    pub fn once(value: T) -> Self {
        Self::new(std::iter::once(value))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S: Iterator> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            SourceState::Drained => None,
            SourceState::Live => {
                let element = self.source.next();
                if element.is_none() {
                    self.state = SourceState::Drained;
                }
                element
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            SourceState::Drained => (0, Some(0)),
            SourceState::Live => self.source.size_hint(),
        }
    }
}

impl<S: ExactSizeIterator> ExactSizeIterator for Iter<S> {}

impl<S: Iterator> FusedIterator for Iter<S> {}

/// Adds [`lazily`](Lazily::lazily) to everything that can be iterated.
///
/// # Examples
///
/// ```rust
/// use iterr::iter::Lazily;
///
/// let squares = vec![1, 2, 3].lazily().map(|x| x * x).to_list();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub trait Lazily: IntoIterator + Sized {
    /// Wraps `self` in an [`Iter`]. Equivalent to `Iter::new(self)`.
    fn lazily(self) -> Iter<Self::IntoIter> {
        Iter::new(self)
    }
}

impl<I: IntoIterator> Lazily for I {}
