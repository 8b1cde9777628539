use crate::{flow::Flow, seq::Cursor, Seq};

/// Forwards the elements whose predicate result equals `keep`.
///
/// Created via [`filter`] or [`reject`].
pub struct Filter<S, P> {
    source: S,
    pred: P,
    keep: bool,
}

/// Create a sequence forwarding only the elements matching `pred`.
pub fn filter<S, P>(source: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter {
        source,
        pred,
        keep: true,
    }
}

/// Create a sequence forwarding only the elements *not* matching `pred`.
pub fn reject<S, P>(source: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter {
        source,
        pred,
        keep: false,
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        self.source.drive(&mut |item| {
            if (self.pred)(&item) == self.keep {
                sink(item)
            } else {
                Flow::Continue
            }
        })
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        Box::new(
            self.source
                .cursor()
                .filter(move |item| (self.pred)(item) == self.keep),
        )
    }
}
