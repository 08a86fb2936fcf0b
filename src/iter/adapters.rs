//! Adapter stages for [`Iter`](super::Iter).
//!
//! Every intermediate operation on `Iter` wraps the previous stage in one of
//! the structs below. An adapter holds the previous stage and the
//! caller-supplied function, and does nothing until its `next` is called.
//! Pulling from the outermost stage pulls through the whole chain, one
//! element at a time.
//!
//! These types are not constructed directly; they are returned (wrapped in
//! `Iter`) by [`Iter::map`](super::Iter::map), [`Iter::filter`](super::Iter::filter),
//! [`Iter::filter_map`](super::Iter::filter_map), [`Iter::bind`](super::Iter::bind)
//! and [`Iter::inspect`](super::Iter::inspect). [`Counted`] is the stage
//! [`Iter::collect`](super::Iter::collect) hands to its converter.

use std::cell::Cell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

// =============================================================================
// Map
// =============================================================================

/// Stage produced by [`Iter::map`](super::Iter::map).
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F, U> Iterator for Map<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next().map(&mut self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F, U> ExactSizeIterator for Map<S, F>
where
    S: ExactSizeIterator,
    F: FnMut(S::Item) -> U,
{
}

impl<S, F, U> FusedIterator for Map<S, F>
where
    S: FusedIterator,
    F: FnMut(S::Item) -> U,
{
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Stage produced by [`Iter::filter`](super::Iter::filter).
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Iterator for Filter<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // The predicate sees each element exactly once; rejected ones are dropped here.
        while let Some(element) = self.source.next() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<S, P> FusedIterator for Filter<S, P>
where
    S: FusedIterator,
    P: FnMut(&S::Item) -> bool,
{
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FilterMap
// =============================================================================

/// Stage produced by [`Iter::filter_map`](super::Iter::filter_map).
///
/// Filtering and mapping happen in the same call: the function is invoked
/// once per element, and `None` drops the element.
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct FilterMap<S, F> {
    source: S,
    function: F,
}

impl<S, F> FilterMap<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F, U> Iterator for FilterMap<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.source.next() {
            if let Some(mapped) = (self.function)(element) {
                return Some(mapped);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<S, F, U> FusedIterator for FilterMap<S, F>
where
    S: FusedIterator,
    F: FnMut(S::Item) -> Option<U>,
{
}

impl<S: fmt::Debug, F> fmt::Debug for FilterMap<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterMap")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Bind
// =============================================================================

/// Stage produced by [`Iter::bind`](super::Iter::bind).
///
/// Holds at most one sub-sequence at a time. The next call to the function
/// happens only after the current sub-sequence has been drained.
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Bind<S, F, U: IntoIterator> {
    source: S,
    function: F,
    current: Option<U::IntoIter>,
}

impl<S, F, U: IntoIterator> Bind<S, F, U> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self {
            source,
            function,
            current: None,
        }
    }
}

impl<S, F, U> Iterator for Bind<S, F, U>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(element) = inner.next() {
                    return Some(element);
                }
                self.current = None;
            }
            let element = self.source.next()?;
            self.current = Some((self.function)(element).into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, inner_upper) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        match self.source.size_hint() {
            (0, Some(0)) => (lower, inner_upper),
            _ => (lower, None),
        }
    }
}

impl<S, F, U> FusedIterator for Bind<S, F, U>
where
    S: FusedIterator,
    F: FnMut(S::Item) -> U,
    U: IntoIterator,
{
}

impl<S, F, U> Clone for Bind<S, F, U>
where
    S: Clone,
    F: Clone,
    U: IntoIterator,
    U::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: self.function.clone(),
            current: self.current.clone(),
        }
    }
}

impl<S, F, U> fmt::Debug for Bind<S, F, U>
where
    S: fmt::Debug,
    U: IntoIterator,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bind")
            .field("source", &self.source)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Inspect
// =============================================================================

/// Stage produced by [`Iter::inspect`](super::Iter::inspect).
///
/// The function only ever sees a shared reference, and its result is `()`.
/// The element that comes out is the element that went in.
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Inspect<S, F> {
    source: S,
    function: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F> Iterator for Inspect<S, F>
where
    S: Iterator,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.source.next()?;
        (self.function)(&element);
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F> ExactSizeIterator for Inspect<S, F>
where
    S: ExactSizeIterator,
    F: FnMut(&S::Item),
{
}

impl<S, F> FusedIterator for Inspect<S, F>
where
    S: FusedIterator,
    F: FnMut(&S::Item),
{
}

impl<S: fmt::Debug, F> fmt::Debug for Inspect<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Inspect")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Counted
// =============================================================================

/// Stage that terminal operations put in front of the chain they drive.
///
/// Counts every element that passes through into a tally shared with the
/// terminal, which reads it after the chain has been handed away. The
/// count wraps instead of overflowing.
#[must_use = "adapters are lazy and do nothing unless consumed"]
pub struct Counted<S> {
    source: S,
    visited: Rc<Cell<usize>>,
}

impl<S> Counted<S> {
    pub(crate) const fn new(source: S, visited: Rc<Cell<usize>>) -> Self {
        Self { source, visited }
    }
}

impl<S: Iterator> Iterator for Counted<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.source.next()?;
        self.visited.set(self.visited.get().wrapping_add(1));
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S: ExactSizeIterator> ExactSizeIterator for Counted<S> {}

impl<S: FusedIterator> FusedIterator for Counted<S> {}

impl<S: fmt::Debug> fmt::Debug for Counted<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Counted")
            .field("source", &self.source)
            .field("visited", &self.visited.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_applies_function_in_order() {
        let mapped: Vec<i32> = Map::new(vec![1, 2, 3].into_iter(), |x: i32| x * 2).collect();
        assert_eq!(mapped, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_map_preserves_exact_size() {
        let mapped = Map::new(vec![1, 2, 3].into_iter(), |x: i32| x + 1);
        assert_eq!(mapped.len(), 3);
    }

    #[rstest]
    fn test_filter_calls_predicate_once_per_element() {
        let calls = Cell::new(0);
        let filtered: Vec<i32> = Filter::new(1..=6, |x: &i32| {
            calls.set(calls.get() + 1);
            x % 3 == 0
        })
        .collect();
        assert_eq!(filtered, vec![3, 6]);
        assert_eq!(calls.get(), 6);
    }

    #[rstest]
    fn test_filter_size_hint_has_zero_lower_bound() {
        let filtered = Filter::new(0..10, |x: &i32| *x > 5);
        assert_eq!(filtered.size_hint(), (0, Some(10)));
    }

    #[rstest]
    fn test_filter_map_drops_none() {
        let kept: Vec<i32> =
            FilterMap::new(vec!["1", "x", "3"].into_iter(), |text: &str| text.parse().ok())
                .collect();
        assert_eq!(kept, vec![1, 3]);
    }

    #[rstest]
    fn test_filter_map_keeps_nested_none() {
        let source = vec![Some(None), None, Some(Some(2))].into_iter();
        let kept: Vec<Option<i32>> =
            FilterMap::new(source, |x: Option<Option<i32>>| x).collect();
        assert_eq!(kept, vec![None, Some(2)]);
    }

    #[rstest]
    fn test_bind_flattens_one_level() {
        let flattened: Vec<i32> = Bind::new(1..=3, |x: i32| vec![x; x as usize]).collect();
        assert_eq!(flattened, vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_bind_skips_empty_sub_sequences() {
        let flattened: Vec<i32> =
            Bind::new(0..5, |x: i32| if x % 2 == 0 { vec![] } else { vec![x] }).collect();
        assert_eq!(flattened, vec![1, 3]);
    }

    #[rstest]
    fn test_bind_size_hint_after_source_exhausted() {
        let mut bind = Bind::new(0..1, |x: i32| vec![x, x, x]);
        assert_eq!(bind.next(), Some(0));
        assert_eq!(bind.size_hint(), (2, Some(2)));
    }

    #[rstest]
    fn test_bind_size_hint_is_unbounded_while_source_remains() {
        let bind = Bind::new(0..3, |x: i32| vec![x]);
        assert_eq!(bind.size_hint(), (0, None));
    }

    #[rstest]
    fn test_inspect_sees_every_element_and_passes_it_through() {
        let seen = Cell::new(0);
        let passed: Vec<i32> = Inspect::new(vec![4, 5].into_iter(), |x: &i32| {
            seen.set(seen.get() + *x);
        })
        .collect();
        assert_eq!(passed, vec![4, 5]);
        assert_eq!(seen.get(), 9);
    }

    #[rstest]
    fn test_counted_tallies_pulled_elements() {
        let visited = Rc::new(Cell::new(0));
        let mut counted = Counted::new(vec![7, 8, 9].into_iter(), Rc::clone(&visited));
        assert_eq!(counted.next(), Some(7));
        assert_eq!(visited.get(), 1);
        assert_eq!(counted.by_ref().count(), 2);
        assert_eq!(counted.next(), None);
        assert_eq!(visited.get(), 3);
    }

    #[rstest]
    fn test_counted_wraps_instead_of_overflowing() {
        let visited = Rc::new(Cell::new(usize::MAX));
        let counted: Vec<i32> = Counted::new(0..2, Rc::clone(&visited)).collect();
        assert_eq!(counted, vec![0, 1]);
        assert_eq!(visited.get(), 1);
    }

    #[rstest]
    fn test_debug_shows_stage_name() {
        let map = Map::new(0..2, |x: i32| x);
        let debug_string = format!("{map:?}");
        assert!(debug_string.starts_with("Map"));
        assert!(debug_string.contains("source"));
    }
}
