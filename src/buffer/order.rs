use std::{cmp::Ordering, marker::PhantomData};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, trace};

use super::{deferred, drain, emit};
use crate::{flow::Flow, seq::Cursor, Seq};

/// Buffers the source and forwards it in comparator order.
///
/// The sort is stable: elements comparing equal keep their source order.
pub struct Sort<S, F> {
    source: S,
    cmp: F,
}

/// Create a sequence that forwards `source` sorted by `cmp`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let sorted = of([3, 1, 4, 1, 5]).sort_by(|a, b| a.cmp(b));
/// assert_eq!(sorted.to_vec(), vec![1, 1, 3, 4, 5]);
/// ```
pub fn sort_by<S, F>(source: S, cmp: F) -> Sort<S, F>
where
    S: Seq,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    Sort { source, cmp }
}

impl<S, F> Sort<S, F>
where
    S: Seq,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    fn sorted(&self) -> Vec<S::Item> {
        let mut buffer = drain(&self.source);
        trace!(len = buffer.len(), "sort: buffered source");
        buffer.sort_by(|a, b| (self.cmp)(a, b));
        buffer
    }
}

impl<S, F> Seq for Sort<S, F>
where
    S: Seq,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        emit(self.sorted(), sink)
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        deferred(move || self.sorted())
    }
}

/// Buffers the source and forwards it ordered by an extracted key.
///
/// Stable like [`Sort`].
pub struct SortByKey<S, F, K> {
    source: S,
    key: F,
    _phantom: PhantomData<fn() -> K>,
}

pub fn sort_by_key<S, F, K>(source: S, key: F) -> SortByKey<S, F, K>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    SortByKey {
        source,
        key,
        _phantom: PhantomData,
    }
}

impl<S, F, K> SortByKey<S, F, K>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    fn sorted(&self) -> Vec<S::Item> {
        let mut buffer = drain(&self.source);
        trace!(len = buffer.len(), "sort_by_key: buffered source");
        buffer.sort_by(|a, b| (self.key)(a).cmp(&(self.key)(b)));
        buffer
    }
}

impl<S, F, K> Seq for SortByKey<S, F, K>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        emit(self.sorted(), sink)
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        deferred(move || self.sorted())
    }
}

/// Buffers the source and forwards it back to front.
pub struct Reverse<S> {
    source: S,
}

pub fn reverse<S: Seq>(source: S) -> Reverse<S> {
    Reverse { source }
}

impl<S> Seq for Reverse<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let buffer = drain(&self.source);
        trace!(len = buffer.len(), "reverse: buffered source");
        emit(buffer.into_iter().rev(), sink)
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        deferred(move || drain(&self.source).into_iter().rev())
    }
}

/// Buffers the source and forwards a random permutation of it.
pub struct Shuffle<S> {
    source: S,
    seed: Option<u64>,
}

/// Create a sequence that forwards `source` in random order.
///
/// With `seed` set, every drive applies the same permutation; without it,
/// every drive draws a fresh one from the thread RNG.
pub fn shuffle<S: Seq>(source: S, seed: Option<u64>) -> Shuffle<S> {
    Shuffle { source, seed }
}

impl<S> Shuffle<S>
where
    S: Seq,
{
    fn shuffled(&self) -> Vec<S::Item> {
        let mut buffer = drain(&self.source);
        match self.seed {
            Some(seed) => {
                debug!(seed, len = buffer.len(), "shuffle: seeded permutation");
                buffer.shuffle(&mut StdRng::seed_from_u64(seed));
            }
            None => {
                trace!(len = buffer.len(), "shuffle: thread rng permutation");
                buffer.shuffle(&mut rand::thread_rng());
            }
        }
        buffer
    }
}

impl<S> Seq for Shuffle<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        emit(self.shuffled(), sink)
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        deferred(move || self.shuffled())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Trade {
        symbol: &'static str,
        seq: u32,
    }

    fn trade(symbol: &'static str, seq: u32) -> Trade {
        Trade { symbol, seq }
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let trades = of([
            trade("EUR", 1),
            trade("AUD", 2),
            trade("EUR", 3),
            trade("AUD", 4),
        ]);
        let by_symbol = trades.sort_by(|a, b| a.symbol.cmp(b.symbol));
        let order: Vec<u32> = by_symbol.map(|t| t.seq).to_vec();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_key_orders_by_extracted_key() {
        let words = of(["pear", "fig", "banana", "kiwi"]).sort_by_key(|w| w.len());
        assert_eq!(words.to_vec(), vec!["fig", "pear", "kiwi", "banana"]);
    }

    #[test]
    fn test_sort_drains_source_once_per_drive() {
        let reads = Cell::new(0);
        let sorted = of([2, 1, 3]).peek(|_| reads.set(reads.get() + 1)).sort();
        assert_eq!(sorted.first(), Some(1));
        assert_eq!(reads.get(), 3);
        assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
        assert_eq!(reads.get(), 6);
    }

    #[test]
    fn test_sort_cursor_is_lazy() {
        let reads = Cell::new(0);
        let sorted = of([2, 1]).peek(|_| reads.set(reads.get() + 1)).sort();
        let mut cursor = sorted.cursor();
        assert_eq!(reads.get(), 0);
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_reverse_forwards_back_to_front() {
        let backwards = range(0, 4).reverse();
        assert_eq!(backwards.to_vec(), vec![3, 2, 1, 0]);
        assert_eq!(backwards.cursor().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(backwards.take(2).to_vec(), vec![3, 2]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut shuffled = range(0, 50).shuffle().to_vec();
        shuffled.sort();
        assert_eq!(shuffled, range(0, 50).to_vec());
    }

    #[test]
    fn test_seeded_shuffle_replays_the_same_permutation() {
        let shuffled = range(0, 30).shuffle_seeded(42);
        let first = shuffled.to_vec();
        assert_eq!(first, shuffled.to_vec());
        assert_eq!(first, shuffled.cursor().collect::<Vec<_>>());

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, range(0, 30).to_vec());
    }
}
