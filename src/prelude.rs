//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the traits and the
//! most common constructors.

// Core traits
pub use crate::{Consume, Seq, Summarize};

// Control
pub use crate::{Flow, Pull, PullError};

// Most common constructors
pub use crate::build::{
    empty, from_iter, from_slice, from_vec, generate, iterate, naturals, of, range, repeat,
    repeat_n,
};

// Composition
pub use crate::compose::concat;
