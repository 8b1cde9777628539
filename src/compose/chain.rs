use crate::{flow::Flow, seq::Cursor, Seq};

/// Run the first sequence to its end, then the second.
///
/// A stop inside the first sequence ends the drive without touching the
/// second.
pub fn chain<L, R>(first: L, second: R) -> Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    Chain { first, second }
}

/// Two sequences driven back to back.
///
/// Created via [`chain`] or [`Seq::chain`].
pub struct Chain<L, R> {
    first: L,
    second: R,
}

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(&self, sink: &mut dyn FnMut(L::Item) -> Flow) -> Flow {
        match self.first.drive(sink) {
            Flow::Stop => Flow::Stop,
            Flow::Continue => self.second.drive(sink),
        }
    }

    fn cursor(&self) -> Cursor<'_, L::Item> {
        Box::new(self.first.cursor().chain(self.second.cursor()))
    }
}

/// Any number of same-typed sequences driven in order.
///
/// Mix different pipelines by boxing them first (see [`Seq::boxed`]).
pub struct Concat<S> {
    parts: Vec<S>,
}

/// Create a sequence that drives each of `parts` in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let all = concat([of([1, 2]), of([]), of([3])]);
/// assert_eq!(all.to_vec(), vec![1, 2, 3]);
/// ```
pub fn concat<S, I>(parts: I) -> Concat<S>
where
    S: Seq,
    I: IntoIterator<Item = S>,
{
    Concat {
        parts: parts.into_iter().collect(),
    }
}

impl<S> Seq for Concat<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        for part in &self.parts {
            if part.drive(sink).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.parts.iter().flat_map(|part| part.cursor()))
    }
}
