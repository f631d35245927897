// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reassignment workflow.
//!
//! Pulls an employee off the roster for a date: their assigned seat is
//! located and vacated, an exclusion is recorded, and the first eligible
//! candidate from the caller-supplied pool is seated into the same shift.
//! A pool with no eligible candidate is still a success; the report carries
//! a warning and the seat stays open. The store runs the whole sequence in
//! one transaction.

use tracing::{info, warn};

use shift_roster_domain::{AssigningActor, parse_date};
use shift_roster_persistence::{AbsenceDetails, AssignmentView, Persistence, ReassignmentOutcome};

use crate::error::EngineError;
use crate::ledger::validate_reason;

/// The note attached to exclusions the workflow records.
const AUTO_REASSIGN_NOTE: &str = "Recorded by automatic reassignment";

/// The outcome of a reassignment, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentReport {
    /// The assignment that was vacated.
    pub vacated_assignment_id: i64,
    /// The exclusion now covering the employee on the date.
    pub exclusion_id: i64,
    /// The replacement seated into the vacated shift, if one was found.
    pub replacement: Option<AssignmentView>,
    /// Set when the seat was left open.
    pub warning: Option<String>,
}

/// The reassignment workflow, constructed over an injected store.
pub struct ReassignmentWorkflow<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> ReassignmentWorkflow<'a> {
    /// Creates a workflow over the given store.
    #[must_use]
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Vacates the employee's seat on a date and refills it from the pool.
    ///
    /// Candidates are considered in pool order; the original employee,
    /// anyone excluded on the date, anyone already assigned on the date,
    /// and IDs not present in the directory are skipped. Both the exclusion
    /// and any replacement are recorded by the system actor.
    ///
    /// An already-present exclusion for the employee and date is kept
    /// rather than duplicated. An empty-after-filtering pool is not an
    /// error: the exclusion and vacate stand, and the report carries a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unparseable date or an empty reason, or
    /// `NotFound` if the employee holds no assigned-status assignment on
    /// the date.
    pub fn auto_reassign(
        &mut self,
        employee_id: i64,
        date: &str,
        reason: &str,
        selected_employees: &[i64],
    ) -> Result<ReassignmentReport, EngineError> {
        info!(
            "Auto-reassigning employee {} on {} ({} candidates)",
            employee_id,
            date,
            selected_employees.len()
        );

        parse_date(date)?;
        validate_reason(reason)?;

        let actor: AssigningActor = AssigningActor::system();
        let absence = AbsenceDetails {
            reason: reason.to_string(),
            reason_ar: None,
            note: Some(String::from(AUTO_REASSIGN_NOTE)),
        };

        let outcome: ReassignmentOutcome =
            self.persistence
                .reassign(employee_id, date, &absence, selected_employees, actor.id())?;

        let warning: Option<String> = if outcome.replacement.is_none() {
            warn!(
                "No replacement seated for shift {} on {}",
                outcome.vacated.shift_id, date
            );
            Some(format!(
                "No eligible replacement was found for {date}; the shift slot is left unfilled"
            ))
        } else {
            None
        };

        Ok(ReassignmentReport {
            vacated_assignment_id: outcome.vacated.assignment_id,
            exclusion_id: outcome.exclusion_id,
            replacement: outcome.replacement,
            warning,
        })
    }
}
