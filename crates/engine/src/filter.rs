// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::{format_date, month_bounds, parse_date};
use shift_roster_persistence::AssignmentQuery;

use crate::error::EngineError;

/// An explicit, enumerated filter for assignment listings.
///
/// Every supported narrowing is a named optional field; there is no
/// dynamically-shaped query object. `month` is 1-based and must be paired
/// with `year`. `date` names a single day and cannot be combined with a
/// month window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    /// Restrict to a single employee.
    pub employee_id: Option<i64>,
    /// Restrict to a single date (ISO 8601).
    pub date: Option<String>,
    /// Restrict to a calendar month (1-based; requires `year`).
    pub month: Option<u8>,
    /// The year the `month` belongs to.
    pub year: Option<i32>,
}

impl AssignmentFilter {
    /// Resolves the filter to a storage-level date window.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the date is unparseable, the month is
    /// invalid, `month` and `year` are not paired, or a date is combined
    /// with a month window.
    pub(crate) fn resolve(&self) -> Result<AssignmentQuery, EngineError> {
        let (start_date, end_date) = match (&self.date, self.month, self.year) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(EngineError::Validation(String::from(
                    "A date filter cannot be combined with month or year",
                )));
            }
            (Some(date), None, None) => {
                parse_date(date)?;
                (Some(date.clone()), Some(date.clone()))
            }
            (None, Some(month), Some(year)) => {
                let (first, last) = month_bounds(year, month)?;
                (Some(format_date(first)), Some(format_date(last)))
            }
            (None, Some(_), None) => {
                return Err(EngineError::Validation(String::from(
                    "A month filter requires a year",
                )));
            }
            (None, None, Some(_)) => {
                return Err(EngineError::Validation(String::from(
                    "A year filter requires a month",
                )));
            }
            (None, None, None) => (None, None),
        };

        Ok(AssignmentQuery {
            employee_id: self.employee_id,
            start_date,
            end_date,
        })
    }
}
