//! Suspended, resumable consumption of a sequence
//!
//! A [`Pull`] turns a push-style sequence into something the caller steps
//! through one element at a time. It holds the sequence's
//! [cursor](crate::Seq::cursor) between calls, so work happens only when
//! [`resume`](Pull::resume) asks for the next element.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares = naturals().map(|n| n * n);
//! let mut handle = squares.pull();
//! assert_eq!(handle.resume(), Some(0));
//! assert_eq!(handle.resume(), Some(1));
//! assert_eq!(handle.resume(), Some(4));
//! handle.cancel();
//! assert!(handle.try_resume().is_err());
//! ```

use std::{fmt, iter::FusedIterator};

use thiserror::Error;
use tracing::trace;

use crate::seq::Cursor;

/// Errors reported by a [`Pull`] handle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PullError {
    #[error("pull handle was cancelled")]
    Cancelled,
}

enum PullState<'a, T> {
    Suspended(Cursor<'a, T>),
    Exhausted,
    Cancelled,
}

/// A suspended pull over a sequence.
///
/// Created via [`Seq::pull`](crate::Seq::pull). Once the source is exhausted
/// or the handle is cancelled, every later resume yields nothing. Dropping
/// the handle cancels it.
pub struct Pull<'a, T> {
    state: PullState<'a, T>,
}

impl<'a, T> Pull<'a, T> {
    /// Wrap a cursor in a suspended handle.
    pub fn new(cursor: Cursor<'a, T>) -> Self {
        Self {
            state: PullState::Suspended(cursor),
        }
    }

    /// Advance to the next element.
    ///
    /// Returns `None` on exhaustion and on every call after exhaustion or
    /// cancellation.
    pub fn resume(&mut self) -> Option<T> {
        let PullState::Suspended(cursor) = &mut self.state else {
            return None;
        };
        let next = cursor.next();
        if next.is_none() {
            self.state = PullState::Exhausted;
        }
        next
    }

    /// Like [`resume`](Pull::resume), but tells a cancelled handle apart
    /// from an exhausted one.
    pub fn try_resume(&mut self) -> Result<Option<T>, PullError> {
        match self.state {
            PullState::Cancelled => Err(PullError::Cancelled),
            _ => Ok(self.resume()),
        }
    }

    /// Release the suspended source without resuming it.
    ///
    /// Any buffer the source was holding is dropped here. Cancelling twice,
    /// or after exhaustion, has no further effect.
    pub fn cancel(&mut self) {
        match self.state {
            PullState::Suspended(_) => {
                trace!("pull: cancelled before exhaustion");
                self.state = PullState::Cancelled;
            }
            PullState::Exhausted => self.state = PullState::Cancelled,
            PullState::Cancelled => {}
        }
    }

    /// `true` once [`cancel`](Pull::cancel) has run, including on drop.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, PullState::Cancelled)
    }

    /// `true` after the source ran out and before any cancel.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PullState::Exhausted)
    }
}

impl<T> Drop for Pull<'_, T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> Iterator for Pull<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.resume()
    }
}

impl<T> FusedIterator for Pull<'_, T> {}

impl<T> fmt::Debug for Pull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            PullState::Suspended(_) => "Suspended",
            PullState::Exhausted => "Exhausted",
            PullState::Cancelled => "Cancelled",
        };
        f.debug_struct("Pull").field("state", &state).finish()
    }
}
