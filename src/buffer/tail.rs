use std::collections::VecDeque;

use tracing::trace;

use super::{deferred, emit};
use crate::{flow::Flow, seq::Cursor, Seq};

/// Forwards the final `n` elements of its source, in source order.
pub struct TakeLast<S> {
    source: S,
    n: usize,
}

/// Create a sequence holding the last `n` elements of `source`.
///
/// Only a window of `n` elements is buffered while the source runs. When
/// `n == 0` the source is never driven.
pub fn take_last<S: Seq>(source: S, n: usize) -> TakeLast<S> {
    TakeLast { source, n }
}

impl<S> TakeLast<S>
where
    S: Seq,
{
    fn window(&self) -> VecDeque<S::Item> {
        let mut window = VecDeque::new();
        if self.n == 0 {
            return window;
        }
        self.source.drive(&mut |item| {
            if window.len() == self.n {
                window.pop_front();
            }
            window.push_back(item);
            Flow::Continue
        });
        trace!(n = self.n, len = window.len(), "take_last: buffered window");
        window
    }
}

impl<S> Seq for TakeLast<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        emit(self.window(), sink)
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        deferred(move || self.window())
    }
}
