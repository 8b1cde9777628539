use tracing::trace;

use super::drain;
use crate::{build::Values, flow::Flow, Seq};

/// Drive `source` and split it into consecutive groups of `size` elements.
///
/// Every group holds exactly `size` elements except possibly the last. A
/// `size` of zero yields no groups and never drives the source.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let groups = range(1, 8).chunk(3);
/// let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
/// assert_eq!(sizes, vec![3, 3, 1]);
/// ```
pub fn chunk<S>(source: &S, size: usize) -> Vec<Values<S::Item>>
where
    S: Seq + ?Sized,
{
    if size == 0 {
        return Vec::new();
    }
    let mut groups = Vec::new();
    let mut current = Vec::new();
    source.drive(&mut |item| {
        current.push(item);
        if current.len() == size {
            groups.push(Values::from(std::mem::take(&mut current)));
        }
        Flow::Continue
    });
    if !current.is_empty() {
        groups.push(Values::from(current));
    }
    trace!(size, groups = groups.len(), "chunk: split source");
    groups
}

/// Drive `source` and split it into `(matched, unmatched)` by `pred`.
///
/// Both halves keep source order.
pub fn partition<S, P>(source: &S, mut pred: P) -> (Values<S::Item>, Values<S::Item>)
where
    S: Seq + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let (matched, unmatched): (Vec<_>, Vec<_>) =
        drain(source).into_iter().partition(|item| pred(item));
    trace!(
        matched = matched.len(),
        unmatched = unmatched.len(),
        "partition: split source"
    );
    (Values::from(matched), Values::from(unmatched))
}
