use crate::{flow::Flow, seq::Cursor, Seq};

/// Forwards at most `count` elements.
pub struct Take<S> {
    source: S,
    count: usize,
}

/// Create a sequence of the first `count` elements of `source`.
///
/// Stops the source right after the `count`-th element, so it bounds
/// unbounded generators. A `count` of zero never drives the source.
pub fn take<S: Seq>(source: S, count: usize) -> Take<S> {
    Take { source, count }
}

impl<S> Seq for Take<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        if self.count == 0 {
            return Flow::Continue;
        }
        let mut remaining = self.count;
        let mut downstream = Flow::Continue;
        self.source.drive(&mut |item| {
            remaining -= 1;
            downstream = sink(item);
            if remaining == 0 {
                Flow::Stop
            } else {
                downstream
            }
        });
        downstream
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.source.cursor().take(self.count))
    }
}

/// Discards the first `count` elements.
pub struct Skip<S> {
    source: S,
    count: usize,
}

/// Create a sequence without the first `count` elements of `source`.
pub fn skip<S: Seq>(source: S, count: usize) -> Skip<S> {
    Skip { source, count }
}

impl<S> Seq for Skip<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut skipped = 0;
        self.source.drive(&mut |item| {
            if skipped < self.count {
                skipped += 1;
                Flow::Continue
            } else {
                sink(item)
            }
        })
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.source.cursor().skip(self.count))
    }
}

/// Forwards elements until the predicate first fails.
pub struct TakeWhile<S, P> {
    source: S,
    pred: P,
}

/// Create a sequence of the leading elements of `source` that satisfy `pred`.
pub fn take_while<S, P>(source: S, pred: P) -> TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile { source, pred }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut downstream = Flow::Continue;
        self.source.drive(&mut |item| {
            if (self.pred)(&item) {
                downstream = sink(item);
                downstream
            } else {
                Flow::Stop
            }
        });
        downstream
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.source.cursor().take_while(move |item| (self.pred)(item)))
    }
}

/// Discards elements while the predicate holds, then forwards the rest.
pub struct DropWhile<S, P> {
    source: S,
    pred: P,
}

/// Create a sequence that skips the leading elements satisfying `pred`.
pub fn drop_while<S, P>(source: S, pred: P) -> DropWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    DropWhile { source, pred }
}

enum Phase {
    Dropping,
    Forwarding,
}

impl<S, P> Seq for DropWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut phase = Phase::Dropping;
        self.source.drive(&mut |item| {
            if let Phase::Dropping = phase {
                if (self.pred)(&item) {
                    return Flow::Continue;
                }
                phase = Phase::Forwarding;
            }
            sink(item)
        })
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(self.source.cursor().skip_while(move |item| (self.pred)(item)))
    }
}
