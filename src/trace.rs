//! Diagnostic events, compiled in only with the `tracing` feature.

#[cfg(feature = "tracing")]
pub(crate) fn terminal(operation: &'static str, visited: usize) {
    tracing::trace!(operation, visited, "lazy sequence evaluated");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn terminal(_operation: &'static str, _visited: usize) {}

#[cfg(feature = "tracing")]
pub(crate) fn rejected_drained(operation: &'static str) {
    tracing::debug!(operation, "rejected drained lazy sequence");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn rejected_drained(_operation: &'static str) {}
