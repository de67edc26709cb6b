use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::question::OperationChoice;

/// Smallest and largest operand the generator samples.
pub const OPERAND_MIN: u8 = 1;
pub const OPERAND_MAX: u8 = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    #[error("target number {0} is outside {OPERAND_MIN}..={OPERAND_MAX}")]
    OutOfRange(u8),
}

/// The fixed operand (the "times-table" number) constraining generated
/// questions. Validated into `1..=10` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNumber(u8);

impl TargetNumber {
    /// # Errors
    ///
    /// Returns `TargetError::OutOfRange` when the value is not in `1..=10`.
    pub fn new(value: u8) -> Result<Self, TargetError> {
        if (OPERAND_MIN..=OPERAND_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TargetError::OutOfRange(value))
        }
    }

    #[must_use]
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seconds allotted per question. A closed set, not free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLimit {
    Five,
    Ten,
}

impl TimeLimit {
    #[must_use]
    pub fn seconds(&self) -> u32 {
        match self {
            TimeLimit::Five => 5,
            TimeLimit::Ten => 10,
        }
    }

    /// # Errors
    ///
    /// Returns `None` for any value outside the enumerated set.
    #[must_use]
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        match seconds {
            5 => Some(TimeLimit::Five),
            10 => Some(TimeLimit::Ten),
            _ => None,
        }
    }
}

/// Snapshot of the menu choices for one session. Immutable while the
/// session runs; review mode copies it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub operation: OperationChoice,
    pub target: Option<TargetNumber>,
    pub time_limit: TimeLimit,
}

impl GameConfig {
    #[must_use]
    pub fn new(
        operation: OperationChoice,
        target: Option<TargetNumber>,
        time_limit: TimeLimit,
    ) -> Self {
        Self {
            operation,
            target,
            time_limit,
        }
    }
}
