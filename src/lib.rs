//! A lazily evaluated filtering iterator with a one-element look-ahead.
//!
//! [`FilteringIterator`] wraps a source iterator and a [`Predicate`] and yields
//! only the elements the predicate accepts. The next accepted element is always
//! fetched ahead of time, so [`FilteringIterator::has_next`] can answer without
//! touching the source.

mod error;
mod filtering_iterator;

pub use error::InvalidArgument;
pub use filtering_iterator::FilteringIterator;

/// Filtering criteria applied to each element of the source.
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `item` should be yielded.
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

pub trait FilteringExt: Iterator {
    /// Wraps `self` in a [`FilteringIterator`].
    ///
    /// The first accepted element is fetched immediately, see
    /// [`FilteringIterator::new`]. Closure arguments need an explicit
    /// parameter type, e.g. `|n: &i32| *n > 0`.
    fn filtering<P>(self, predicate: P) -> FilteringIterator<Self, P>
    where
        Self: Sized,
        P: Predicate<Self::Item>;
}

impl<I> FilteringExt for I
where
    I: Iterator,
{
    fn filtering<P>(self, predicate: P) -> FilteringIterator<Self, P>
    where
        Self: Sized,
        P: Predicate<Self::Item>,
    {
        FilteringIterator::new(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FilteringExt, Predicate};

    struct Threshold(i32);

    impl Predicate<i32> for Threshold {
        fn test(&mut self, item: &i32) -> bool {
            *item >= self.0
        }
    }

    #[test]
    fn closures_are_predicates() {
        let mut is_even = |n: &i32| n % 2 == 0;
        assert!(Predicate::test(&mut is_even, &4));
        assert!(!Predicate::test(&mut is_even, &5));
    }

    #[test]
    fn custom_predicate() {
        let out: Vec<_> = crate::FilteringIterator::new([3, 9, 1, 12].into_iter(), Threshold(3))
            .collect();
        assert_eq!(out, [3, 9, 12]);
    }

    #[test]
    fn custom_predicate_chains() {
        let out: Vec<_> = [5, -4, 2, 8, 3, 12, 7]
            .into_iter()
            .filtering(Threshold(3))
            .filtering(|n: &i32| n % 2 == 0)
            .collect();
        assert_eq!(out, [8, 12]);

        let out: Vec<_> = (0..10)
            .filtering(|n: &i32| n % 3 == 0)
            .filtering(Threshold(3))
            .collect();
        assert_eq!(out, [3, 6, 9]);
    }

    #[test]
    fn filters_compose() {
        let out: Vec<_> = (1..=30)
            .filtering(|n: &i32| n % 2 == 0)
            .filtering(|n: &i32| n % 3 == 0)
            .collect();
        assert_eq!(out, [6, 12, 18, 24, 30]);
    }

    #[test]
    fn borrowed_items() {
        let words = ["alpha", "be", "gamma", "d"];
        let out: Vec<&str> = words.into_iter().filtering(|w: &&str| w.len() > 2).collect();
        assert_eq!(out, ["alpha", "gamma"]);
    }
}
