//! Lazy separator insertion between adjacent sequence elements.

use std::iter::Peekable;

/// Iterator adaptor that yields a separator between every pair of adjacent
/// items of the underlying iterator.
///
/// Sequences of length 0 or 1 pass through unchanged; a sequence of length
/// n ≥ 2 yields 2n−1 items with the original items at even indices, in their
/// original order. The adaptor is lazy: the underlying iterator is advanced
/// only as output is requested, with at most one item of lookahead.
pub struct Intersperse<I: Iterator> {
    separator: I::Item,
    inner: Peekable<I>,
    separator_pending: bool,
}

/// Inserts `separator` between every pair of adjacent items of `items`.
///
/// # Example
///
/// ```
/// use decimus_words::intersperse;
///
/// let joined: Vec<i32> = intersperse(0, vec![1, 2, 3]).collect();
/// assert_eq!(joined, vec![1, 0, 2, 0, 3]);
/// ```
pub fn intersperse<I>(separator: I::Item, items: I) -> Intersperse<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Intersperse {
        separator,
        inner: items.into_iter().peekable(),
        separator_pending: false,
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // A separator is only emitted when another item follows it.
        if self.separator_pending && self.inner.peek().is_some() {
            self.separator_pending = false;
            return Some(self.separator.clone());
        }
        let item = self.inner.next()?;
        self.separator_pending = true;
        Some(item)
    }
}
