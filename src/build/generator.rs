//! Unbounded, seed-driven generators.
//!
//! [`repeat`], [`iterate`] and [`naturals`] never end on their own: a drive
//! over them finishes only when a consumer returns [`Flow::Stop`]. Put
//! [`take`](crate::Seq::take) or [`take_while`](crate::Seq::take_while)
//! between a generator and anything else, or consume it with `first`, `find`
//! or `any`.
//!
//! Feeding an unbounded generator to a buffering operator (`sort`, `reverse`,
//! `shuffle`, `take_last`, `chunk`, `partition`) or to a consumer that reads
//! everything (`count`, `last`, `to_vec`, ...) never returns. This is not
//! detected.

use crate::{flow::Flow, seq::Cursor, Seq};

/// Yields the same value, forever or a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    times: Option<usize>,
}

/// Create an unbounded sequence of `value`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat('-').take(3).to_vec(), vec!['-', '-', '-']);
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value, times: None }
}

/// Create a sequence yielding `value` exactly `times` times.
pub fn repeat_n<T: Clone>(value: T, times: usize) -> Repeat<T> {
    Repeat {
        value,
        times: Some(times),
    }
}

impl<T> Seq for Repeat<T>
where
    T: Clone,
{
    type Item = T;

    fn drive(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        match self.times {
            Some(times) => {
                for _ in 0..times {
                    if sink(self.value.clone()).is_stop() {
                        return Flow::Stop;
                    }
                }
                Flow::Continue
            }
            None => loop {
                if sink(self.value.clone()).is_stop() {
                    return Flow::Stop;
                }
            },
        }
    }

    fn cursor(&self) -> Cursor<'_, T> {
        let forever = std::iter::repeat(self.value.clone());
        match self.times {
            Some(times) => Box::new(forever.take(times)),
            None => Box::new(forever),
        }
    }
}

/// Yields `seed`, `step(seed)`, `step(step(seed))`, ...
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    seed: T,
    step: F,
}

/// Create an unbounded sequence by repeatedly applying `step` to `seed`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let powers = iterate(1, |n| n * 2).take(5);
/// assert_eq!(powers.to_vec(), vec![1, 2, 4, 8, 16]);
///
/// // Fibonacci, carrying the pair as state.
/// let fib = iterate((0u64, 1u64), |&(a, b)| (b, a + b)).map(|(a, _)| a);
/// assert_eq!(fib.take(7).to_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
pub fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    Iterate { seed, step }
}

impl<T, F> Seq for Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn drive(&self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        let mut current = self.seed.clone();
        loop {
            if sink(current.clone()).is_stop() {
                return Flow::Stop;
            }
            current = (self.step)(&current);
        }
    }

    fn cursor(&self) -> Cursor<'_, T> {
        // `step` runs only when the element after `previous` is requested.
        let mut previous: Option<T> = None;
        Box::new(std::iter::from_fn(move || {
            let next = match previous.take() {
                None => self.seed.clone(),
                Some(prev) => (self.step)(&prev),
            };
            previous = Some(next.clone());
            Some(next)
        }))
    }
}

/// The natural numbers `0, 1, 2, ...`.
#[allow(clippy::type_complexity)]
pub fn naturals() -> Iterate<u64, fn(&u64) -> u64> {
    fn succ(n: &u64) -> u64 {
        n + 1
    }
    iterate(0, succ as fn(&u64) -> u64)
}
