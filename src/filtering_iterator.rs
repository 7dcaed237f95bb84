use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{InvalidArgument, Predicate};

/// An iterator that yields the elements of `source` accepted by `predicate`.
///
/// The next accepted element is kept in a one-element look-ahead buffer. Once
/// the buffer is empty the iterator is exhausted for good: the source is never
/// pulled again, even if it is not fused.
#[derive(Debug)]
#[must_use]
pub struct FilteringIterator<I: Iterator, P> {
    source: I,
    predicate: P,
    pending: Option<I::Item>,
}

impl<I, P> FilteringIterator<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    /// Creates the iterator and immediately scans `source` for the first
    /// element accepted by `predicate`.
    ///
    /// Construction is therefore not free: it may consume an arbitrary number
    /// of source elements, and a panicking predicate or source panics here.
    pub fn new(source: I, predicate: P) -> Self {
        let mut this = Self {
            source,
            predicate,
            pending: None,
        };
        this.pending = this.fetch_next();
        trace!(has_next = this.has_next(), "primed filtering iterator");
        this
    }

    /// Like [`new`](Self::new), but rejects a missing source or predicate.
    ///
    /// The source is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingSource`] if `source` is `None`, and
    /// otherwise [`InvalidArgument::MissingPredicate`] if `predicate` is `None`.
    pub fn try_new(source: Option<I>, predicate: Option<P>) -> Result<Self, InvalidArgument> {
        let Some(source) = source else {
            debug!("rejected filtering iterator without a source");
            return Err(InvalidArgument::MissingSource);
        };
        let Some(predicate) = predicate else {
            debug!("rejected filtering iterator without a predicate");
            return Err(InvalidArgument::MissingPredicate);
        };

        Ok(Self::new(source, predicate))
    }

    /// Returns `true` if another accepted element is available.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns a reference to the next accepted element without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&I::Item> {
        self.pending.as_ref()
    }

    fn fetch_next(&mut self) -> Option<I::Item> {
        for element in self.source.by_ref() {
            if self.predicate.test(&element) {
                return Some(element);
            }
        }

        trace!("filtering source exhausted");
        None
    }
}

impl<I, P> Iterator for FilteringIterator<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.pending.take()?;
        self.pending = self.fetch_next();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.has_next() {
            return (0, Some(0));
        }

        let (_, upper) = self.source.size_hint();
        (1, upper.and_then(|upper| upper.checked_add(1)))
    }
}

impl<I, P> FusedIterator for FilteringIterator<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
}
