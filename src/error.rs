use thiserror::Error;

/// Returned by [`FilteringIterator::try_new`](crate::FilteringIterator::try_new)
/// when one of its inputs is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("source must not be null")]
    MissingSource,
    #[error("filter must not be null")]
    MissingPredicate,
}
