use std::ops::ControlFlow;

/// Signal returned by a consumer after receiving one element.
///
/// `Flow` is to a consumer what [`Option`] is to an iterator's `next`: the only
/// channel through which a downstream stage can tell the producer to stop.
/// Once a consumer has returned [`Flow::Stop`], no further elements are
/// delivered for that drive.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Flow;
///
/// let keep_going = Flow::Continue;
/// let halt = Flow::Stop;
///
/// assert!(keep_going.is_continue());
/// assert!(halt.is_stop());
/// assert_eq!(Flow::from_continue(false), Flow::Stop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// Deliver the next element
    #[default]
    Continue,
    /// Deliver nothing more
    Stop,
}

impl Flow {
    /// Returns `true` if the flow is `Continue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Flow;
    ///
    /// assert!(Flow::Continue.is_continue());
    /// assert!(!Flow::Stop.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue)
    }

    /// Returns `true` if the flow is `Stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Flow;
    ///
    /// assert!(Flow::Stop.is_stop());
    /// assert!(!Flow::Continue.is_stop());
    /// ```
    #[inline]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Flow::Stop)
    }

    /// Builds a flow from a "keep going?" answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Flow;
    ///
    /// assert_eq!(Flow::from_continue(true), Flow::Continue);
    /// assert_eq!(Flow::from_continue(false), Flow::Stop);
    /// ```
    #[inline]
    pub const fn from_continue(keep_going: bool) -> Self {
        if keep_going {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }

    /// Returns `Stop` if either flow is `Stop`.
    ///
    /// Stop is absorbing, so combining the flows of nested stages never
    /// resurrects a stopped drive.
    ///
    /// ```rust
    /// use lazyseq::Flow;
    ///
    /// assert_eq!(Flow::Continue.and(Flow::Stop), Flow::Stop);
    /// assert_eq!(Flow::Continue.and(Flow::Continue), Flow::Continue);
    /// ```
    #[inline]
    pub const fn and(self, other: Flow) -> Flow {
        match (self, other) {
            (Flow::Continue, Flow::Continue) => Flow::Continue,
            _ => Flow::Stop,
        }
    }
}

impl From<bool> for Flow {
    fn from(keep_going: bool) -> Self {
        Flow::from_continue(keep_going)
    }
}

impl From<ControlFlow<()>> for Flow {
    fn from(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => Flow::Continue,
            ControlFlow::Break(()) => Flow::Stop,
        }
    }
}

impl From<Flow> for ControlFlow<()> {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue => ControlFlow::Continue(()),
            Flow::Stop => ControlFlow::Break(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_absorbing() {
        assert_eq!(Flow::Stop.and(Flow::Continue), Flow::Stop);
        assert_eq!(Flow::Stop.and(Flow::Stop), Flow::Stop);
        assert_eq!(Flow::Continue.and(Flow::Continue), Flow::Continue);
    }

    #[test]
    fn test_control_flow_round_trip() {
        let cf: ControlFlow<()> = Flow::Stop.into();
        assert_eq!(cf, ControlFlow::Break(()));
        assert_eq!(Flow::from(ControlFlow::Continue(())), Flow::Continue);
    }

    #[test]
    fn test_default_is_continue() {
        assert_eq!(Flow::default(), Flow::Continue);
        assert_eq!(Flow::from(true), Flow::Continue);
    }
}
