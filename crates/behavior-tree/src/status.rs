//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// A node either finishes within the current tick (`Success`/`Failure`) or
/// defers the rest of its work to the next tick (`Running`). Running is a
/// purely logical suspension: the call returns immediately, and the owning
/// composite remembers which child to re-enter on the next evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: the condition was met.
    /// For actions: the action ran to completion.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be carried out.
    Failure,

    /// The behavior has not finished yet and must be re-entered next tick.
    ///
    /// Composites holding a Running child keep their cursor on that child
    /// instead of resetting it.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// Running is not a terminal result and passes through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Maps a boolean result into the status domain.
    ///
    /// Boolean callables have no Running capability; work that spans ticks
    /// must return [`Status`] natively.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}
