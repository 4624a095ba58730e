//! Validated score type

use crate::errors::ScoreBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative match score
///
/// No upper bound is enforced beyond the integer width.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Validate a raw score value
    ///
    /// Fails with `InvalidArgument` if the value is negative.
    pub fn try_new(value: i32) -> Result<Self, ScoreBoardError> {
        if value < 0 {
            return Err(ScoreBoardError::invalid_argument(format!(
                "score cannot be negative: {value}"
            )));
        }
        Ok(Self(value as u32))
    }

    /// Zero score (kick-off)
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
