// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers for day-granularity scheduling.
//!
//! Assignments and exclusions are day-granular: dates are parsed from and
//! rendered to ISO 8601 (`YYYY-MM-DD`), and the zero-padded text form sorts
//! chronologically, which the storage layer relies on for range filters.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 (`YYYY-MM-DD`) calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as ISO 8601 (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the first and last day (inclusive) of a 1-based month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The 1-based month (1 = January)
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is outside 1-12, or
/// `DomainError::DateArithmeticOverflow` if the year is outside the
/// supported calendar range.
pub fn month_bounds(year: i32, month: u8) -> Result<(Date, Date), DomainError> {
    let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth { month })?;
    let first: Date = Date::from_calendar_date(year, month, 1).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("computing the first day of {year}-{month}"),
        }
    })?;
    let last_day: u8 = time::util::days_in_year_month(year, month);
    let last: Date = Date::from_calendar_date(year, month, last_day).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("computing the last day of {year}-{month}"),
        }
    })?;
    Ok((first, last))
}

/// An inclusive range of calendar dates.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange {
                start: format_date(start),
                end: format_date(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Checks whether a date falls within the range (inclusive).
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}
