// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A shift name (either language) is empty or invalid.
    InvalidShiftName(String),
    /// A shift time is not a valid `HH:MM` 24-hour wall-clock value.
    InvalidShiftTime {
        /// The invalid time string.
        value: String,
    },
    /// The minimum headcount is below one.
    HeadcountBelowOne {
        /// The invalid minimum.
        min_members: i32,
    },
    /// The maximum headcount is below the minimum.
    HeadcountRangeInverted {
        /// The minimum headcount.
        min_members: i32,
        /// The maximum headcount.
        max_members: i32,
    },
    /// An exclusion reason is empty or invalid.
    InvalidReason(String),
    /// An assigning actor identifier is empty.
    InvalidActor(String),
    /// An assignment status string is not recognized.
    InvalidStatus(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A month number is outside 1-12.
    InvalidMonth {
        /// The invalid 1-based month.
        month: u8,
    },
    /// A calendar date could not be constructed.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A date range starts after it ends.
    InvalidDateRange {
        /// The range start (ISO 8601).
        start: String,
        /// The range end (ISO 8601).
        end: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShiftName(msg) => write!(f, "Invalid shift name: {msg}"),
            Self::InvalidShiftTime { value } => {
                write!(f, "Invalid shift time '{value}': must be HH:MM (24-hour)")
            }
            Self::HeadcountBelowOne { min_members } => {
                write!(
                    f,
                    "Invalid headcount: min_members must be at least 1, got {min_members}"
                )
            }
            Self::HeadcountRangeInverted {
                min_members,
                max_members,
            } => {
                write!(
                    f,
                    "Invalid headcount: max_members ({max_members}) must not be below min_members ({min_members})"
                )
            }
            Self::InvalidReason(msg) => write!(f, "Invalid exclusion reason: {msg}"),
            Self::InvalidActor(msg) => write!(f, "Invalid actor: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid assignment status: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
