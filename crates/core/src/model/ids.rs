use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for one question instance in a session queue.
///
/// A freshly generated question carries `attempt == 0`. Every retry clone
/// derives its id from the instance it replaces via [`QuestionId::retry`],
/// bumping the attempt counter, so each queue entry stays unique while
/// [`QuestionId::base_id`] stays stable across all attempts at the same
/// logical question.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId {
    base: u64,
    attempt: u32,
}

impl QuestionId {
    /// Creates the id for a freshly generated question.
    #[must_use]
    pub fn new(base: u64) -> Self {
        Self { base, attempt: 0 }
    }

    /// Derives the id for a retry clone of this instance.
    #[must_use]
    pub fn retry(&self) -> Self {
        Self {
            base: self.base,
            attempt: self.attempt + 1,
        }
    }

    /// The stable identifier shared by every attempt at the same question.
    #[must_use]
    pub fn base_id(&self) -> u64 {
        self.base
    }

    /// Which attempt this instance is (0 for the original).
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({self})")
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attempt == 0 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}-r{}", self.base, self.attempt)
        }
    }
}

/// Error type for parsing a `QuestionId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse QuestionId from string")
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("-r") {
            Some((base, attempt)) => {
                let base = base.parse::<u64>().map_err(|_| ParseIdError)?;
                let attempt = attempt.parse::<u32>().map_err(|_| ParseIdError)?;
                if attempt == 0 {
                    return Err(ParseIdError);
                }
                Ok(Self { base, attempt })
            }
            None => s
                .parse::<u64>()
                .map(QuestionId::new)
                .map_err(|_| ParseIdError),
        }
    }
}
