use std::marker::PhantomData;

use crate::{flow::Flow, seq::Cursor, Seq};

/// Transforms each element of the wrapped sequence.
///
/// Allows converting or formatting elements without changing how many there
/// are or their order.
pub struct Map<S, F, U> {
    source: S,
    f: F,
    _phantom: PhantomData<fn() -> U>,
}

/// Create a sequence that transforms every element with `f`.
pub fn map<S, F, U>(source: S, f: F) -> Map<S, F, U>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    Map {
        source,
        f,
        _phantom: PhantomData,
    }
}

impl<S, F, U> Seq for Map<S, F, U>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn drive(&self, sink: &mut dyn FnMut(U) -> Flow) -> Flow {
        self.source.drive(&mut |item| sink((self.f)(item)))
    }

    fn cursor(&self) -> Cursor<'_, U> {
        Box::new(self.source.cursor().map(move |item| (self.f)(item)))
    }
}

/// Transforms each element together with its zero-based position.
pub struct MapIndexed<S, F, U> {
    source: S,
    f: F,
    _phantom: PhantomData<fn() -> U>,
}

pub fn map_indexed<S, F, U>(source: S, f: F) -> MapIndexed<S, F, U>
where
    S: Seq,
    F: Fn(usize, S::Item) -> U,
{
    MapIndexed {
        source,
        f,
        _phantom: PhantomData,
    }
}

impl<S, F, U> Seq for MapIndexed<S, F, U>
where
    S: Seq,
    F: Fn(usize, S::Item) -> U,
{
    type Item = U;

    fn drive(&self, sink: &mut dyn FnMut(U) -> Flow) -> Flow {
        let mut index = 0;
        self.source.drive(&mut |item| {
            let mapped = (self.f)(index, item);
            index += 1;
            sink(mapped)
        })
    }

    fn cursor(&self) -> Cursor<'_, U> {
        Box::new(
            self.source
                .cursor()
                .enumerate()
                .map(move |(index, item)| (self.f)(index, item)),
        )
    }
}

/// Expands each element into any number of elements.
pub struct FlatMap<S, F, I> {
    source: S,
    f: F,
    _phantom: PhantomData<fn() -> I>,
}

/// Create a sequence that replaces each element with the contents of `f(element)`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let spread = of([1, 2, 3]).flat_map(|n| vec![n; n]);
/// assert_eq!(spread.to_vec(), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<S, F, I>(source: S, f: F) -> FlatMap<S, F, I>
where
    S: Seq,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    FlatMap {
        source,
        f,
        _phantom: PhantomData,
    }
}

impl<S, F, I> Seq for FlatMap<S, F, I>
where
    S: Seq,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn drive(&self, sink: &mut dyn FnMut(I::Item) -> Flow) -> Flow {
        self.source.drive(&mut |item| {
            for inner in (self.f)(item) {
                if sink(inner).is_stop() {
                    return Flow::Stop;
                }
            }
            Flow::Continue
        })
    }

    fn cursor(&self) -> Cursor<'_, I::Item> {
        Box::new(self.source.cursor().flat_map(move |item| (self.f)(item)))
    }
}

/// Forwards the contents of each element in order.
pub struct Flatten<S> {
    source: S,
}

pub fn flatten<S>(source: S) -> Flatten<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    Flatten { source }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        self.source.drive(&mut |group| {
            for inner in group {
                if sink(inner).is_stop() {
                    return Flow::Stop;
                }
            }
            Flow::Continue
        })
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        Box::new(self.source.cursor().flatten())
    }
}

/// Pairs each element with its zero-based position.
pub struct Enumerate<S> {
    source: S,
}

pub fn enumerate<S: Seq>(source: S) -> Enumerate<S> {
    Enumerate { source }
}

impl<S> Seq for Enumerate<S>
where
    S: Seq,
{
    type Item = (usize, S::Item);

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        let mut index = 0;
        self.source.drive(&mut |item| {
            let position = index;
            index += 1;
            sink((position, item))
        })
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        Box::new(self.source.cursor().enumerate())
    }
}

/// Runs a side effect on each element, then forwards it unchanged.
///
/// Useful for debugging or logging within a lazy chain.
pub struct Peek<S, F> {
    source: S,
    f: F,
}

pub fn peek<S, F>(source: S, f: F) -> Peek<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    Peek { source, f }
}

impl<S, F> Seq for Peek<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        self.source.drive(&mut |item| {
            (self.f)(&item);
            sink(item)
        })
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.source.cursor().inspect(move |item| (self.f)(item)))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::RefCell;

    #[test]
    fn test_map_changes_element_type() {
        let labels = of([1, 2, 3]).map(|n| format!("#{n}"));
        assert_eq!(labels.to_vec(), vec!["#1", "#2", "#3"]);
        assert_eq!(labels.cursor().last(), Some("#3".to_string()));
    }

    #[test]
    fn test_map_indexed_restarts_index_each_drive() {
        let tagged = of(['a', 'b']).map_indexed(|i, c| format!("{i}{c}"));
        assert_eq!(tagged.to_vec(), vec!["0a", "1b"]);
        assert_eq!(tagged.to_vec(), vec!["0a", "1b"]);
        assert_eq!(tagged.cursor().collect::<Vec<_>>(), vec!["0a", "1b"]);
    }

    #[test]
    fn test_flat_map_stops_inside_inner_group() {
        let spread = of([3, 3]).flat_map(|n| 0..n).take(4);
        assert_eq!(spread.to_vec(), vec![0, 1, 2, 0]);
        assert_eq!(spread.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_flatten_nested_vectors() {
        let nested = of([vec![1, 2], vec![], vec![3]]);
        assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_enumerate_yields_pairs() {
        let indexed = of(["a", "b", "c"]).enumerate();
        assert_eq!(indexed.to_vec(), vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_peek_preserves_order_and_cardinality() {
        let log = RefCell::new(Vec::new());
        let observed = of([3, 1, 2]).peek(|n| log.borrow_mut().push(*n));
        assert_eq!(observed.to_vec(), vec![3, 1, 2]);
        assert_eq!(*log.borrow(), vec![3, 1, 2]);
    }

    #[test]
    fn test_peek_sees_only_what_downstream_pulls() {
        let log = RefCell::new(Vec::new());
        let observed = naturals().peek(|n| log.borrow_mut().push(*n)).take(3);
        assert_eq!(observed.to_vec(), vec![0, 1, 2]);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }
}
