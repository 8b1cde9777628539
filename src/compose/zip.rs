use tracing::trace;

use crate::{flow::Flow, seq::Cursor, Pair, Seq};

/// Pairs elements of two sequences by position.
///
/// Created via [`zip`] or [`Seq::zip`].
pub struct Zip<L, R> {
    left: L,
    right: R,
}

/// Create a sequence of pairs, ending with the shorter of `left` and `right`.
///
/// `left` is driven as the outer loop. For each of its elements one element
/// is pulled from `right` through a [`Pull`](crate::Pull) handle. The handle
/// is cancelled as soon as the outer loop ends, whether by exhaustion of
/// either side or by a downstream stop.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = of([1, 2, 3, 4, 5]).zip(of(["a", "b"]));
/// assert_eq!(pairs.to_vec(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<L, R>(left: L, right: R) -> Zip<L, R>
where
    L: Seq,
    R: Seq,
{
    Zip { left, right }
}

impl<L, R> Seq for Zip<L, R>
where
    L: Seq,
    R: Seq,
{
    type Item = Pair<L::Item, R::Item>;

    fn drive(&self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        let mut right = self.right.pull();
        let mut downstream = Flow::Continue;
        self.left.drive(&mut |a| match right.resume() {
            Some(b) => {
                downstream = sink((a, b));
                downstream
            }
            None => {
                trace!("zip: right side exhausted first");
                Flow::Stop
            }
        });
        right.cancel();
        downstream
    }

    fn cursor(&self) -> Cursor<'_, Self::Item> {
        Box::new(self.left.cursor().zip(self.right.cursor()))
    }
}
