//! Error types for lazy sequences.
//!
//! The library itself has a single failure mode: asking for a fresh
//! wrapper whose source has already been drained. [`IterError`] collects
//! the library's failures in one enum for callers that want a single error
//! type. Errors raised by caller-supplied functions are never wrapped; they
//! reach the caller of the terminal operation unchanged.

/// Represents an attempt to reuse an [`Iter`](crate::iter::Iter) whose source
/// has already reported exhaustion.
///
/// A lazy sequence is single-pass. Once its source has been drained, every
/// further pull yields nothing. By default that emptiness is silent; this
/// error is what [`Iter::fresh`](crate::iter::Iter::fresh) returns to make it
/// explicit.
///
/// # Examples
///
/// ```rust
/// use iterr::error::DrainedError;
///
/// let error = DrainedError { operation: "Iter::fresh" };
/// assert_eq!(
///     format!("{}", error),
///     "Iter::fresh: source already drained. A lazy sequence can be consumed only once."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainedError {
    /// The name of the operation that observed the drained source.
    pub operation: &'static str,
}

impl std::fmt::Display for DrainedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: source already drained. A lazy sequence can be consumed only once.",
            self.operation
        )
    }
}

impl std::error::Error for DrainedError {}

/// Failures raised by the library itself.
///
/// # Examples
///
/// ```rust
/// use iterr::error::{DrainedError, IterError};
/// use iterr::iter::Iter;
///
/// fn sum_once(sequence: Iter<std::ops::Range<i32>>) -> Result<i32, IterError> {
///     Ok(sequence.fresh()?.fold(0, |sum, x| sum + x))
/// }
///
/// let mut sequence = Iter::new(0..4);
/// assert_eq!(sequence.by_ref().fold(0, |sum, x| sum + x), 6);
/// assert_eq!(
///     sum_once(sequence),
///     Err(IterError::Drained(DrainedError { operation: "Iter::fresh" }))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterError {
    /// The source was already drained.
    Drained(DrainedError),
}

impl std::fmt::Display for IterError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drained(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for IterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Drained(error) => Some(error),
        }
    }
}

impl From<DrainedError> for IterError {
    fn from(error: DrainedError) -> Self {
        Self::Drained(error)
    }
}
