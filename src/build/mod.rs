//! Building sequences from scratch
//!
//! This module provides the finite constructors and the unbounded generators
//! every pipeline starts from.

mod generator;
mod source;

// Re-export building blocks
pub use generator::{iterate, naturals, repeat, repeat_n, Iterate, Repeat};
pub use source::{
    empty, from_iter, from_slice, from_vec, generate, of, range, Empty, FromIter, Generate, Range,
    Values,
};
