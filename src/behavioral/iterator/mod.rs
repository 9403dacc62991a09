//! # Iterator
//!
//! An [`Aggregate`] hands out a cursor over its elements without exposing how they are
//! stored. The cursor follows the explicit protocol: ask [`Cursor::has_next`] first, then
//! call [`Cursor::next_item`]. Calling `next_item` on an exhausted cursor is a
//! bounds violation reported as [`IteratorError::Exhausted`].
//!
//! [`ArrayIterator`] also implements [`std::iter::Iterator`], so it plugs into `for` loops
//! and adapters.
//!
//! ## Structure
//!
//! - [`error`] - [`IteratorError`] type

pub mod error;

pub use error::*;

use crate::framework::{pattern_demo, Console, DemoError};

/// Explicit has-next / next protocol.
pub trait Cursor {
    type Item;

    fn has_next(&self) -> bool;

    /// # Errors
    /// [`IteratorError::Exhausted`] when `has_next` is false.
    fn next_item(&mut self) -> Result<Self::Item, IteratorError>;
}

/// A collection able to create cursors over itself.
pub trait Aggregate {
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    fn create_iterator(&self) -> Self::Cursor<'_>;
}

/// Cursor over a slice.
#[derive(Debug, Clone)]
pub struct ArrayIterator<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> ArrayIterator<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> Cursor for ArrayIterator<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    fn next_item(&mut self) -> Result<&'a T, IteratorError> {
        let item = self.items.get(self.position).ok_or(IteratorError::Exhausted {
            position: self.position,
            len: self.items.len(),
        })?;
        self.position += 1;
        Ok(item)
    }
}

impl<'a, T> Iterator for ArrayIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ArrayIterator<'_, T> {}

/// Array-backed aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayCollection<T> {
    items: Vec<T>,
}

impl<T> ArrayCollection<T> {
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Aggregate for ArrayCollection<T> {
    type Cursor<'a> = ArrayIterator<'a, T> where Self: 'a;

    fn create_iterator(&self) -> ArrayIterator<'_, T> {
        ArrayIterator::new(&self.items)
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let collection = ArrayCollection::new([1, 2, 3, 4, 5]);
    let mut iterator = collection.create_iterator();

    while iterator.has_next() {
        writeln!(out, "{}", iterator.next_item()?)?;
    }
    Ok(())
}

pattern_demo!(
    iterator,
    Behavioral,
    "Iterator",
    "A collection hands out a cursor that walks its elements with has_next/next.",
    run
);
