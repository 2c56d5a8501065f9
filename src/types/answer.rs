use std::fmt;
use std::ops::Not;

/// Tri-state outcome of evaluating a condition node.
///
/// Never a plain boolean: a leaf lookup may require an out-of-band round
/// trip, in which case the leaf reports [`Answer::Pending`] and the walk
/// suspends until the driver resumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Matched,
    NotMatched,
    Pending,
}

impl Answer {
    /// True for `Matched` and `NotMatched`; false while a lookup is in flight.
    #[must_use]
    pub fn is_decisive(self) -> bool {
        self != Answer::Pending
    }

    #[must_use]
    pub fn matched(self) -> bool {
        self == Answer::Matched
    }
}

impl From<bool> for Answer {
    fn from(matched: bool) -> Self {
        if matched {
            Answer::Matched
        } else {
            Answer::NotMatched
        }
    }
}

impl Not for Answer {
    type Output = Answer;

    /// Complements decisive answers. Negation of an undetermined answer is
    /// undetermined, so `Pending` passes through unchanged.
    fn not(self) -> Answer {
        match self {
            Answer::Matched => Answer::NotMatched,
            Answer::NotMatched => Answer::Matched,
            Answer::Pending => Answer::Pending,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Matched => write!(f, "matched"),
            Answer::NotMatched => write!(f, "not-matched"),
            Answer::Pending => write!(f, "pending"),
        }
    }
}
