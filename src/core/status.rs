use std::fmt;

/// Lifecycle status of a broadcaster.
///
/// Transitions are one-way: `Active → Completed` or `Active → Errored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Accepting values.
    Active,
    /// `complete()` was called.
    Completed,
    /// `error(..)` was called.
    Errored,
}

impl Status {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Completed => "completed",
            Status::Errored => "errored",
        }
    }

    /// True for `Completed` and `Errored`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Terminal state with the error payload kept for late subscribers.
#[derive(Debug, Clone)]
pub(crate) enum Terminal<E> {
    Active,
    Completed,
    Errored(E),
}

impl<E> Terminal<E> {
    pub(crate) fn status(&self) -> Status {
        match self {
            Terminal::Active => Status::Active,
            Terminal::Completed => Status::Completed,
            Terminal::Errored(_) => Status::Errored,
        }
    }
}
