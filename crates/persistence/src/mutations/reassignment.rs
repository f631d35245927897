// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reassignment workflow.
//!
//! Reassignment vacates an employee's seat for a date, records why they are
//! unavailable, and tries to refill the seat from a caller-supplied candidate
//! pool. The whole workflow runs in one immediate transaction: either the
//! seat is vacated with the exclusion recorded (and possibly refilled), or
//! nothing changes.
//!
//! An unfilled seat is not an error. The caller receives
//! `replacement: None` and decides how loudly to warn.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{info, warn};

use crate::data_models::{AssignmentRecord, AssignmentView, NewExclusionRow};
use crate::diesel_schema::{assignments, employees};
use crate::error::PersistenceError;
use crate::mutations::assignments::insert_assignment_row;
use crate::queries::assignments::{assigned_employee_ids_on_date, find_for_employee_on_date};
use crate::queries::exclusions::{self, excluded_employee_ids_on_date};
use crate::sqlite::get_last_insert_rowid;
use shift_roster_domain::AssignmentStatus;

/// The outcome of a reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentOutcome {
    /// The assignment that was vacated.
    pub vacated: AssignmentRecord,
    /// The exclusion covering the employee on the date. This is either a
    /// newly recorded exclusion or one that already existed.
    pub exclusion_id: i64,
    /// The replacement seated into the vacated shift, if one was found.
    pub replacement: Option<AssignmentView>,
}

/// Details of the absence being recorded for the vacating employee.
#[derive(Debug, Clone)]
pub struct AbsenceDetails {
    /// The reason for the absence.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
}

/// Picks the replacement from the candidate pool.
///
/// Candidates are considered in pool order. A candidate is eligible when
/// they are not the vacating employee, exist in the directory, have no
/// exclusion on the date, and hold no assignment on the date. Unknown IDs
/// are skipped rather than rejected, so a stale pool entry does not abort
/// the workflow.
#[must_use]
pub fn select_replacement(
    pool: &[i64],
    vacating_employee_id: i64,
    known_ids: &[i64],
    excluded_ids: &[i64],
    assigned_ids: &[i64],
) -> Option<i64> {
    pool.iter()
        .copied()
        .find(|candidate| {
            *candidate != vacating_employee_id
                && known_ids.contains(candidate)
                && !excluded_ids.contains(candidate)
                && !assigned_ids.contains(candidate)
        })
}

/// Runs the full reassignment workflow for an employee on a date.
///
/// Steps, all inside one immediate transaction:
///
/// 1. Locate the employee's assigned-status assignment on the date.
/// 2. Record an availability exclusion for the employee on the date, or
///    keep the one already there.
/// 3. Delete the located assignment, vacating the seat.
/// 4. Pick the first eligible candidate from the pool and seat them into
///    the vacated shift, or leave the seat open if none qualifies.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee being pulled off the roster
/// * `date` - The date (ISO 8601)
/// * `absence` - The reason, Arabic reason, and note for the exclusion
/// * `pool` - Candidate employee IDs, in preference order
/// * `actor` - The actor recording the exclusion and any replacement
///
/// # Errors
///
/// Returns `AssignmentNotFoundForDate` if the employee holds no
/// assigned-status assignment on the date.
pub fn reassign(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
    absence: &AbsenceDetails,
    pool: &[i64],
    actor: &str,
) -> Result<ReassignmentOutcome, PersistenceError> {
    info!("Reassigning employee {} on {}", employee_id, date);

    conn.immediate_transaction(|conn| {
        let vacated: AssignmentRecord = find_for_employee_on_date(conn, employee_id, date)?
            .filter(|record| record.status == AssignmentStatus::Assigned.as_str())
            .ok_or(PersistenceError::AssignmentNotFoundForDate {
                employee_id,
                date: date.to_string(),
            })?;

        // Keep an existing exclusion rather than failing on the duplicate.
        let exclusion_id: i64 =
            match exclusions::find_for_employee_on_date(conn, employee_id, date)? {
                Some(existing) => existing.exclusion_id,
                None => {
                    let new_exclusion = NewExclusionRow {
                        employee_id,
                        date: date.to_string(),
                        reason: absence.reason.clone(),
                        reason_ar: absence.reason_ar.clone(),
                        note: absence.note.clone(),
                        created_by: actor.to_string(),
                    };
                    diesel::insert_into(crate::diesel_schema::availability_exclusions::table)
                        .values(&new_exclusion)
                        .execute(conn)?;
                    get_last_insert_rowid(conn)?
                }
            };

        diesel::delete(assignments::table)
            .filter(assignments::assignment_id.eq(vacated.assignment_id))
            .execute(conn)?;

        let excluded_ids: Vec<i64> = excluded_employee_ids_on_date(conn, date)?;
        let assigned_ids: Vec<i64> = assigned_employee_ids_on_date(conn, date)?;
        let known_ids: Vec<i64> = employees::table
            .filter(employees::employee_id.eq_any(pool))
            .select(employees::employee_id)
            .load(conn)?;

        let replacement: Option<AssignmentView> = match select_replacement(
            pool,
            employee_id,
            &known_ids,
            &excluded_ids,
            &assigned_ids,
        ) {
            Some(candidate_id) => {
                info!(
                    "Seating replacement {} into shift {} on {}",
                    candidate_id, vacated.shift_id, date
                );
                Some(insert_assignment_row(
                    conn,
                    date,
                    vacated.shift_id,
                    candidate_id,
                    actor,
                )?)
            }
            None => {
                warn!(
                    "No eligible replacement for shift {} on {}; seat left open",
                    vacated.shift_id, date
                );
                None
            }
        };

        Ok(ReassignmentOutcome {
            vacated,
            exclusion_id,
            replacement,
        })
    })
}
