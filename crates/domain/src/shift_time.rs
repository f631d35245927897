// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A wall-clock time of day in `HH:MM` 24-hour format.
///
/// Shift windows are wall-clock times not tied to any date: a shift template
/// describes a recurring daily window, and lexicographic ordering of the
/// zero-padded representation matches chronological ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftTime {
    value: String,
}

impl ShiftTime {
    /// Creates a new `ShiftTime` from an `HH:MM` string.
    ///
    /// # Arguments
    ///
    /// * `value` - The time string (e.g., `"07:30"`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShiftTime` if the string is not a valid
    /// zero-padded 24-hour `HH:MM` value.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !is_valid_wall_clock(value) {
            return Err(DomainError::InvalidShiftTime {
                value: value.to_string(),
            });
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the `HH:MM` string representation.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Checks whether a string is a zero-padded 24-hour `HH:MM` value.
fn is_valid_wall_clock(value: &str) -> bool {
    let bytes: &[u8] = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return false;
    }
    let hours: u8 = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes: u8 = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours <= 23 && minutes <= 59
}
