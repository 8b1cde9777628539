//! Core trait for lazy, replayable sequences.
//!
//! This module defines the [`Seq`] trait, the fundamental building block of the
//! library. A [`Seq`] is a *recipe*: it owns the procedure that produces its
//! elements, never a cursor into them. Every call to [`Seq::drive`] runs the
//! recipe from the start, so driving the same value twice yields the same
//! elements.
//!
//! # Push and pull
//!
//! Each sequence exposes its elements two ways:
//! - [`drive`](Seq::drive) pushes elements into a consumer callback until the
//!   source ends or the consumer returns [`Flow::Stop`].
//! - [`cursor`](Seq::cursor) hands out an external iterator over the same
//!   elements. It backs the pull adapter ([`Seq::pull`]) and through it
//!   [`zip`](Seq::zip).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = of([1, 2, 3, 4, 5]).filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! // Driving again replays the pipeline.
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! ```

use std::{cmp::Ordering, hash::Hash, rc::Rc};

use either::Either;

use crate::{
    buffer::{self, Reverse, Shuffle, Sort, SortByKey, TakeLast},
    build::Values,
    compose::{
        self, Chain, Concat, Distinct, DropWhile, Enumerate, Filter, FlatMap, Flatten, Map,
        MapIndexed, Peek, Skip, Take, TakeWhile, Zip,
    },
    flow::Flow,
    pull::Pull,
};

/// Pull-side view of a sequence: a boxed external iterator borrowing the
/// sequence it came from.
pub type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Ordered 2-tuple produced by [`Seq::zip`] and [`Seq::enumerate`].
pub type Pair<A, B> = (A, B);

/// A lazy, replayable description of a series of elements.
///
/// Implementors only provide [`drive`](Seq::drive) and
/// [`cursor`](Seq::cursor); every operator is a provided method returning a
/// new sequence that wraps `self`. Nothing runs until a terminal consumer
/// (see [`Consume`](crate::Consume)) drives the pipeline.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let firsts = naturals().map(|n| n * n).take(4);
/// assert_eq!(firsts.to_vec(), vec![0, 1, 4, 9]);
/// ```
pub trait Seq {
    /// Type of element produced
    type Item;

    /// Push every element into `sink` until the source ends or `sink` stops.
    ///
    /// Returns [`Flow::Stop`] when the consumer asked to stop and
    /// [`Flow::Continue`] when the sequence reached its own end.
    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow;

    /// An external iterator yielding the same elements as [`drive`](Seq::drive).
    ///
    /// Creating a cursor does no work; buffering operators materialize their
    /// source on the first call to `next`.
    fn cursor(&self) -> Cursor<'_, Self::Item>;

    /// Start a suspended pull over this sequence.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let letters = of(["a", "b"]);
    /// let mut handle = letters.pull();
    /// assert_eq!(handle.resume(), Some("a"));
    /// handle.cancel();
    /// assert_eq!(handle.resume(), None);
    /// ```
    fn pull(&self) -> Pull<'_, Self::Item> {
        Pull::new(self.cursor())
    }

    /// Erase the concrete pipeline type.
    fn boxed<'a>(self) -> Box<dyn Seq<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Forward only the elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        compose::filter(self, pred)
    }

    /// Forward only the elements *not* matching `pred`.
    fn reject<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        compose::reject(self, pred)
    }

    /// Forward the first `n` elements, then stop the source.
    ///
    /// This is how unbounded generators terminate. `take(0)` never drives the
    /// source.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        compose::take(self, n)
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        compose::skip(self, n)
    }

    /// Forward elements until the first one failing `pred`.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        compose::take_while(self, pred)
    }

    /// Discard elements while `pred` holds, then forward everything else.
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        compose::drop_while(self, pred)
    }

    /// Forward an element only the first time its key is seen in a drive.
    fn distinct_by<K, F>(self, key: F) -> Distinct<Self, F, K>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        compose::distinct_by(self, key)
    }

    /// Forward each distinct element once, keyed by the element itself.
    #[allow(clippy::type_complexity)]
    fn distinct(self) -> Distinct<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        compose::distinct_by(
            self,
            <Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item,
        )
    }

    /// Run a side effect on each element before forwarding it.
    fn peek<F>(self, f: F) -> Peek<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        compose::peek(self, f)
    }

    /// Drive `self` to its end, then `other`.
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Seq<Item = Self::Item>,
    {
        compose::chain(self, other)
    }

    /// Drive `self`, then each of `others` in order.
    fn chain_all<I>(self, others: I) -> Concat<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        compose::concat(std::iter::once(self).chain(others))
    }

    /// Transform each element.
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        compose::map(self, f)
    }

    /// Transform each element together with its position.
    fn map_indexed<U, F>(self, f: F) -> MapIndexed<Self, F, U>
    where
        Self: Sized,
        F: Fn(usize, Self::Item) -> U,
    {
        compose::map_indexed(self, f)
    }

    /// Transform each element into many and forward them in order.
    fn flat_map<I, F>(self, f: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        compose::flat_map(self, f)
    }

    /// Forward the elements of each element.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        compose::flatten(self)
    }

    /// Pair each element with its position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        compose::enumerate(self)
    }

    /// Pair elements positionally with `other`, stopping at the shorter side.
    fn zip<S>(self, other: S) -> Zip<Self, S>
    where
        Self: Sized,
        S: Seq,
    {
        compose::zip(self, other)
    }

    /// Buffer the source and forward it in the (stable) order given by `cmp`.
    fn sort_by<F>(self, cmp: F) -> Sort<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        buffer::sort_by(self, cmp)
    }

    /// Buffer the source and forward it in ascending order.
    #[allow(clippy::type_complexity)]
    fn sort(self) -> Sort<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        buffer::sort_by(
            self,
            <Self::Item as Ord>::cmp as fn(&Self::Item, &Self::Item) -> Ordering,
        )
    }

    /// Buffer the source and forward it in the (stable) order of `key`.
    fn sort_by_key<K, F>(self, key: F) -> SortByKey<Self, F, K>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        buffer::sort_by_key(self, key)
    }

    /// Buffer the source and forward it back to front.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        buffer::reverse(self)
    }

    /// Buffer the source and forward a uniformly random permutation of it.
    ///
    /// Every drive draws a new permutation.
    fn shuffle(self) -> Shuffle<Self>
    where
        Self: Sized,
    {
        buffer::shuffle(self, None)
    }

    /// Like [`shuffle`](Seq::shuffle), but every drive reuses the permutation
    /// derived from `seed`.
    fn shuffle_seeded(self, seed: u64) -> Shuffle<Self>
    where
        Self: Sized,
    {
        buffer::shuffle(self, Some(seed))
    }

    /// Buffer the source and forward its final `n` elements in order.
    fn take_last(self, n: usize) -> TakeLast<Self>
    where
        Self: Sized,
    {
        buffer::take_last(self, n)
    }

    /// Drive the source now and split it into realized groups of `size`.
    ///
    /// The last group may be smaller. `size == 0` yields no groups.
    fn chunk(&self, size: usize) -> Vec<Values<Self::Item>> {
        buffer::chunk(self, size)
    }

    /// Drive the source now and split it into `(matched, unmatched)`.
    fn partition<P>(&self, pred: P) -> (Values<Self::Item>, Values<Self::Item>)
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        buffer::partition(self, pred)
    }
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        (**self).drive(sink)
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        (**self).cursor()
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        (**self).drive(sink)
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        (**self).cursor()
    }
}

impl<S> Seq for Rc<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        (**self).drive(sink)
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        (**self).cursor()
    }
}

/// `None` is the empty sequence.
impl<S> Seq for Option<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        match self {
            Some(s) => s.drive(sink),
            None => Flow::Continue,
        }
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        match self {
            Some(s) => s.cursor(),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        match self {
            Either::Left(l) => l.drive(sink),
            Either::Right(r) => r.drive(sink),
        }
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        match self {
            Either::Left(l) => l.cursor(),
            Either::Right(r) => r.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::of, Consume};

    #[test]
    fn test_boxed_sequences_share_one_type() {
        let parts: Vec<Box<dyn Seq<Item = i32>>> = vec![
            of([1, 2]).boxed(),
            of([3, 4, 5]).filter(|n| n % 2 == 1).boxed(),
        ];
        let joined = compose::concat(parts);
        assert_eq!(joined.to_vec(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_option_none_is_empty() {
        let absent: Option<Values<i32>> = None;
        assert!(absent.to_vec().is_empty());
        assert_eq!(absent.cursor().next(), None);

        let present = Some(of([7]));
        assert_eq!(Seq::cursor(&present).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_either_picks_branch_at_construction() {
        let pick = |descending: bool| {
            if descending {
                Either::Left(of([3, 1, 2]).sort_by(|a, b| b.cmp(a)))
            } else {
                Either::Right(of([3, 1, 2]).sort())
            }
        };
        assert_eq!(pick(true).to_vec(), vec![3, 2, 1]);
        assert_eq!(pick(false).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rc_and_reference_drive_the_same_recipe() {
        let shared = Rc::new(of([1, 2, 3]).map(|n| n * 10));
        let by_ref = (&*shared).take(2);
        assert_eq!(by_ref.to_vec(), vec![10, 20]);
        assert_eq!(shared.to_vec(), vec![10, 20, 30]);
    }
}
