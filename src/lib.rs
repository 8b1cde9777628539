//! # lazyseq: Composable, Replayable Sequence Pipelines
//!
//! Describe a series of elements as a pipeline of operators, then drive it
//! with a terminal consumer. Nothing runs until a consumer asks, and each
//! consumer replays the pipeline from the start.
//!
//! ## Core Traits
//!
//! - **[`Seq`]**: A lazy recipe for elements, with every operator as a method
//! - **[`Consume`]**: Terminal operations that drive a [`Seq`] to a result
//! - **[`Summarize`]**: Numeric summaries over elements that are [`Number`]s
//!
//! ## Key Features
//!
//! - **Short-circuiting**: A consumer that has its answer stops every layer
//!   above it, so unbounded generators are fine under `take`, `find` or `any`
//! - **Replayable**: A pipeline holds no cursor; drive it as often as you like
//! - **Pullable**: [`Seq::pull`] suspends a sequence between elements, which
//!   is how [`Seq::zip`] walks two sequences in lockstep
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Powers of two below 100, labelled by position
//! let powers = iterate(1u32, |n| n * 2)
//!     .take_while(|n| *n < 100)
//!     .map_indexed(|i, n| format!("2^{i}={n}"));
//!
//! assert_eq!(powers.first(), Some("2^0=1".to_string()));
//! assert_eq!(powers.count(), 7);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`of(items)`](of) - A fixed list of elements
//! - [`range(start, end)`](range) - Half-open integer range
//! - [`generate(n, f)`](generate) - `f(0)` through `f(n - 1)`, computed lazily
//! - [`iterate(seed, step)`](iterate) - `seed`, `step(seed)`, ... without end
//! - [`naturals()`](naturals) - `0, 1, 2, ...` as `u64`
//!
//! **Combining:**
//! - [`concat(parts)`](concat) - Drive each part in order
//! - [`Seq::zip`] - Pair elements by position, ending with the shorter side
//!
//! **Buffering** (reads the whole source first, never use on unbounded input):
//! - [`Seq::sort`], [`Seq::reverse`], [`Seq::shuffle`], [`Seq::take_last`],
//!   [`Seq::chunk`], [`Seq::partition`]

pub mod buffer;
pub mod build;
pub mod compose;
mod consume;
mod flow;
mod numeric;
pub mod prelude;
mod pull;
mod seq;

pub use build::{
    empty, from_iter, from_slice, from_vec, generate, iterate, naturals, of, range, repeat,
    repeat_n, Values,
};
pub use compose::{concat, zip};
pub use consume::Consume;
pub use flow::Flow;
pub use numeric::{Number, Summarize};
pub use pull::{Pull, PullError};
pub use seq::{Cursor, Pair, Seq};
