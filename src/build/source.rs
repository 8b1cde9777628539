//! Finite sequence constructors.
//!
//! Every constructor here is total: it accepts any input and produces a
//! sequence of known, finite length.

use std::marker::PhantomData;

use num_traits::PrimInt;

use crate::{flow::Flow, seq::Cursor, Seq};

/// A realized, owned run of values.
///
/// Produced by [`of`], [`from_vec`] and [`from_slice`], and by the buffering
/// operators [`chunk`](Seq::chunk) and [`partition`](Seq::partition). Driving
/// clones each element out, so the values stay available for the next drive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Values<T> {
    items: Vec<T>,
}

impl<T> Values<T> {
    /// Number of values held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Values<T> {
    fn from(items: Vec<T>) -> Self {
        Values { items }
    }
}

impl<T> Seq for Values<T>
where
    T: Clone,
{
    type Item = T;

    fn drive(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        for item in &self.items {
            if sink(item.clone()).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, T> {
        Box::new(self.items.iter().cloned())
    }
}

/// Create a sequence from a list of values.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(of([1, 2, 3]).count(), 3);
/// ```
pub fn of<T, I>(items: I) -> Values<T>
where
    I: IntoIterator<Item = T>,
{
    Values {
        items: items.into_iter().collect(),
    }
}

/// Create a sequence that owns `items`.
pub fn from_vec<T>(items: Vec<T>) -> Values<T> {
    Values { items }
}

/// Create a sequence from a copy of `items`.
///
/// Later changes to the original slice's owner are not observed.
pub fn from_slice<T: Clone>(items: &[T]) -> Values<T> {
    Values {
        items: items.to_vec(),
    }
}

/// Wraps any cloneable iterable; each drive iterates a fresh clone.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iterable: I,
}

/// Create a sequence from an iterable that can be cloned to restart it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = from_iter((1..=3).map(|n| n * n));
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// ```
pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iterable }
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive(&self, sink: &mut dyn FnMut(I::Item) -> Flow) -> Flow {
        for item in self.iterable.clone() {
            if sink(item).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, I::Item> {
        Box::new(self.iterable.clone().into_iter())
    }
}

/// Half-open integer interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    start: T,
    end: T,
}

/// Create a sequence of integers from `start` (inclusive) to `end` (exclusive).
///
/// Empty when `end <= start`. No values are allocated up front.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(2, 6).to_vec(), vec![2, 3, 4, 5]);
/// assert!(range(5, 5).is_empty());
/// ```
pub fn range<T: PrimInt>(start: T, end: T) -> Range<T> {
    Range { start, end }
}

impl<T> Seq for Range<T>
where
    T: PrimInt,
{
    type Item = T;

    fn drive(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        let mut current = self.start;
        while current < self.end {
            if sink(current).is_stop() {
                return Flow::Stop;
            }
            match current.checked_add(&T::one()) {
                Some(next) => current = next,
                None => break,
            }
        }
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, T> {
        let end = self.end;
        let first = Some(self.start).filter(|s| *s < end);
        Box::new(std::iter::successors(first, move |current| {
            current.checked_add(&T::one()).filter(|next| *next < end)
        }))
    }
}

/// The sequence with no elements.
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _phantom: PhantomData,
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive(&self, _sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, T> {
        Box::new(std::iter::empty())
    }
}

/// `count` elements computed from their index.
pub struct Generate<F, T> {
    count: usize,
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

/// Create a sequence of `count` elements, `f(0)` through `f(count - 1)`.
///
/// `f` runs lazily, once per element per drive.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let labels = generate(3, |i| format!("item-{i}"));
/// assert_eq!(labels.to_vec(), vec!["item-0", "item-1", "item-2"]);
/// ```
pub fn generate<T, F>(count: usize, f: F) -> Generate<F, T>
where
    F: Fn(usize) -> T,
{
    Generate {
        count,
        f,
        _phantom: PhantomData,
    }
}

impl<F, T> Seq for Generate<F, T>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn drive(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        for index in 0..self.count {
            if sink((self.f)(index)).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, T> {
        Box::new((0..self.count).map(move |index| (self.f)(index)))
    }
}
