//! Operators that must see the whole source before emitting anything
//!
//! Each operator here drains its source exactly once per drive into a buffer
//! owned by that drive, rearranges it, then forwards from the buffer with the
//! usual stop handling. Buffers are never kept between drives, so replaying a
//! buffered pipeline re-reads its source.
//!
//! None of these operators terminate on an unbounded source.

mod order;
mod split;
mod tail;

pub use order::{reverse, shuffle, sort_by, sort_by_key, Reverse, Shuffle, Sort, SortByKey};
pub use split::{chunk, partition};
pub use tail::{take_last, TakeLast};

use crate::{flow::Flow, seq::Cursor, Seq};

/// Drive `source` to its end, keeping every element.
pub(crate) fn drain<S>(source: &S) -> Vec<S::Item>
where
    S: Seq + ?Sized,
{
    let mut buffer = Vec::new();
    source.drive(&mut |item| {
        buffer.push(item);
        Flow::Continue
    });
    buffer
}

/// Forward buffered elements until `sink` stops.
pub(crate) fn emit<I>(items: I, sink: &mut dyn FnMut(I::Item) -> Flow) -> Flow
where
    I: IntoIterator,
{
    for item in items {
        if sink(item).is_stop() {
            return Flow::Stop;
        }
    }
    Flow::Continue
}

/// A cursor that fills its buffer on the first call to `next`.
pub(crate) fn deferred<'a, T, I, F>(fill: F) -> Cursor<'a, T>
where
    F: FnOnce() -> I + 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    T: 'a,
{
    Box::new(std::iter::once_with(fill).flatten())
}
