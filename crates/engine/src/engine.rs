// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment engine.
//!
//! `assign` is the guarded operation: the store runs the existence,
//! duplicate, availability, and capacity checks inside one transaction and
//! this layer translates the outcome into the `EngineError` classes. The
//! bulk resets are idempotent and always report how many rows they removed.

use std::str::FromStr;

use tracing::{debug, info};

use shift_roster_domain::{
    AssigningActor, AssignmentStatus, DateRange, format_date, month_bounds, parse_date,
};
use shift_roster_persistence::{AssignmentChangeset, AssignmentView, Persistence};

use crate::error::EngineError;
use crate::filter::AssignmentFilter;

/// Partial update for an assignment. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    pub status: Option<String>,
    pub assigned_by: Option<String>,
}

/// The assignment engine, constructed over an injected store.
pub struct AssignmentEngine<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> AssignmentEngine<'a> {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Seats an employee into a shift on a date.
    ///
    /// The checks run in order: the employee must exist, the shift must
    /// exist, the employee must not already hold an assignment that date,
    /// the employee must not be excluded that date, and the shift must have
    /// an open slot. All five run inside one storage transaction.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unparseable date or empty actor,
    /// `NotFound` for a missing employee or shift, `Conflict` for a
    /// duplicate seat or an exclusion, and `Capacity` for a full shift,
    /// in that order of precedence.
    pub fn assign(
        &mut self,
        date: &str,
        shift_id: i64,
        employee_id: i64,
        assigned_by: &str,
    ) -> Result<AssignmentView, EngineError> {
        info!(
            "Assigning employee {} to shift {} on {}",
            employee_id, shift_id, date
        );

        parse_date(date)?;
        let actor: AssigningActor = AssigningActor::new(assigned_by)?;

        Ok(self
            .persistence
            .create_assignment(date, shift_id, employee_id, actor.id())?)
    }

    /// Applies a partial update to an assignment.
    ///
    /// Capacity and availability are not re-validated; the seat's date and
    /// shift are immutable. An update with no fields set returns the
    /// current record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the assignment does not exist, or `Validation`
    /// for an unknown status value or an empty actor.
    pub fn update(
        &mut self,
        assignment_id: i64,
        update: &AssignmentUpdate,
    ) -> Result<AssignmentView, EngineError> {
        debug!("Updating assignment {}", assignment_id);

        let status: Option<String> = match &update.status {
            Some(value) => Some(AssignmentStatus::from_str(value)?.as_str().to_string()),
            None => None,
        };
        let assigned_by: Option<String> = match &update.assigned_by {
            Some(value) => Some(AssigningActor::new(value)?.id().to_string()),
            None => None,
        };

        let changeset = AssignmentChangeset {
            status,
            assigned_by,
        };

        Ok(self.persistence.update_assignment(assignment_id, &changeset)?)
    }

    /// Removes an assignment, vacating its seat.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the assignment does not exist.
    pub fn remove(&mut self, assignment_id: i64) -> Result<(), EngineError> {
        debug!("Removing assignment {}", assignment_id);

        Ok(self.persistence.delete_assignment(assignment_id)?)
    }

    /// Lists assignments matching the filter, joined for display.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the filter is malformed (unparseable date,
    /// unpaired month/year, invalid month).
    pub fn list(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<AssignmentView>, EngineError> {
        let query = filter.resolve()?;
        Ok(self.persistence.list_assignments(&query)?)
    }

    /// Clears every assigned-status assignment on a date. Returns the
    /// number of rows deleted; zero when the day was already empty.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the date is unparseable.
    pub fn reset_day(&mut self, date: &str) -> Result<usize, EngineError> {
        parse_date(date)?;
        Ok(self.persistence.delete_assignments_on_date(date)?)
    }

    /// Clears an employee's assignments within a 1-based calendar month.
    /// Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the month is not in `1..=12`.
    pub fn reset_employee_month(
        &mut self,
        employee_id: i64,
        year: i32,
        month: u8,
    ) -> Result<usize, EngineError> {
        let (first, last) = month_bounds(year, month)?;
        Ok(self.persistence.delete_assignments_for_employee_in_range(
            employee_id,
            &format_date(first),
            &format_date(last),
        )?)
    }

    /// Clears every assigned-status assignment an employee holds, across
    /// all dates. Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store fails.
    pub fn reset_employee_all(&mut self, employee_id: i64) -> Result<usize, EngineError> {
        Ok(self.persistence.delete_assignments_for_employee(employee_id)?)
    }

    /// Clears every assignment in a 1-based calendar month, any status.
    /// Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the month is not in `1..=12`.
    pub fn reset_month(&mut self, year: i32, month: u8) -> Result<usize, EngineError> {
        let (first, last) = month_bounds(year, month)?;
        Ok(self
            .persistence
            .delete_assignments_in_range(&format_date(first), &format_date(last))?)
    }

    /// Clears every assignment in the inclusive `[start, end]` date range,
    /// any status. Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if either date is unparseable or the range is
    /// inverted.
    pub fn reset_range(&mut self, start_date: &str, end_date: &str) -> Result<usize, EngineError> {
        DateRange::new(parse_date(start_date)?, parse_date(end_date)?)?;
        Ok(self
            .persistence
            .delete_assignments_in_range(start_date, end_date)?)
    }
}
