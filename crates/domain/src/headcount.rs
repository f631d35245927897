// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default minimum headcount applied when a shift is created without one.
pub const DEFAULT_MIN_MEMBERS: i32 = 3;

/// Default maximum headcount applied when a shift is created without one.
pub const DEFAULT_MAX_MEMBERS: i32 = 5;

/// The staffing headcount range of a shift.
///
/// Invariant: `1 <= min_members <= max_members`. The maximum is the shift's
/// capacity: on any single date, at most `max_members` employees may hold an
/// `assigned`-status assignment for the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountRange {
    min_members: i32,
    max_members: i32,
}

impl HeadcountRange {
    /// Creates a new headcount range, applying defaults for omitted bounds.
    ///
    /// # Arguments
    ///
    /// * `min_members` - The minimum headcount, or `None` for the default (3)
    /// * `max_members` - The maximum headcount, or `None` for the default (5)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HeadcountBelowOne` if the minimum is below 1,
    /// or `DomainError::HeadcountRangeInverted` if the maximum is below the
    /// minimum.
    pub fn new(min_members: Option<i32>, max_members: Option<i32>) -> Result<Self, DomainError> {
        let min_members: i32 = min_members.unwrap_or(DEFAULT_MIN_MEMBERS);
        let max_members: i32 = max_members.unwrap_or(DEFAULT_MAX_MEMBERS);
        Self::from_bounds(min_members, max_members)
    }

    /// Creates a headcount range from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the invariant `1 <= min <= max` does not hold.
    pub const fn from_bounds(min_members: i32, max_members: i32) -> Result<Self, DomainError> {
        if min_members < 1 {
            return Err(DomainError::HeadcountBelowOne { min_members });
        }
        if max_members < min_members {
            return Err(DomainError::HeadcountRangeInverted {
                min_members,
                max_members,
            });
        }
        Ok(Self {
            min_members,
            max_members,
        })
    }

    /// Returns the minimum headcount.
    #[must_use]
    pub const fn min_members(&self) -> i32 {
        self.min_members
    }

    /// Returns the maximum headcount (the shift's capacity).
    #[must_use]
    pub const fn max_members(&self) -> i32 {
        self.max_members
    }
}
