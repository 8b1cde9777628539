//! Numeric summaries over sequences
//!
//! [`Number`] is the constraint for element types that can be summed,
//! compared, and converted to `f64` for averaging. It is implemented for
//! every primitive integer and float through [`num_traits`].

use num_traits::{ToPrimitive, Zero};

use crate::{flow::Flow, Seq};

/// An element type the numeric summaries understand.
pub trait Number: Copy + PartialOrd + Zero + ToPrimitive {}

impl<N> Number for N where N: Copy + PartialOrd + Zero + ToPrimitive {}

/// Numeric consumers for every [`Seq`].
///
/// `sum` of an empty sequence is zero; the other summaries return `None`
/// for one.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let readings = of([2.5, 4.0, 1.5]);
/// assert_eq!(readings.sum(), 8.0);
/// assert_eq!(readings.max(), Some(4.0));
/// assert_eq!(of(["a", "bcd"]).average_by(|s| s.len()), Some(2.0));
/// ```
pub trait Summarize: Seq {
    fn sum(&self) -> Self::Item
    where
        Self::Item: Number,
    {
        self.sum_by(|n| n)
    }

    /// Arithmetic mean as `f64`.
    fn average(&self) -> Option<f64>
    where
        Self::Item: Number,
    {
        self.average_by(|n| n)
    }

    /// Smallest element; the first wins among equals. Unordered values such
    /// as NaN never replace the current minimum.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Number,
    {
        extreme(self, |item, best| item < best)
    }

    /// Largest element; the first wins among equals.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Number,
    {
        extreme(self, |item, best| item > best)
    }

    fn sum_by<N, F>(&self, f: F) -> N
    where
        N: Number,
        F: Fn(Self::Item) -> N,
    {
        let mut total = N::zero();
        self.drive(&mut |item| {
            total = total + f(item);
            Flow::Continue
        });
        total
    }

    /// Mean of `f(element)` as `f64`; `None` when the sequence is empty or a
    /// value cannot be represented as `f64`.
    fn average_by<N, F>(&self, f: F) -> Option<f64>
    where
        N: Number,
        F: Fn(Self::Item) -> N,
    {
        let mut total = 0.0;
        let mut count = 0usize;
        let mut representable = true;
        self.drive(&mut |item| match f(item).to_f64() {
            Some(value) => {
                total += value;
                count += 1;
                Flow::Continue
            }
            None => {
                representable = false;
                Flow::Stop
            }
        });
        (representable && count > 0).then(|| total / count as f64)
    }
}

impl<S> Summarize for S where S: Seq + ?Sized {}

fn extreme<S, F>(source: &S, replaces: F) -> Option<S::Item>
where
    S: Seq + ?Sized,
    S::Item: Number,
    F: Fn(S::Item, S::Item) -> bool,
{
    let mut best: Option<S::Item> = None;
    source.drive(&mut |item| {
        best = match best {
            Some(current) if !replaces(item, current) => Some(current),
            _ => Some(item),
        };
        Flow::Continue
    });
    best
}
