// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler translates a request into engine calls over the injected
//! store and shapes the outcome into a response type. Engine errors are
//! translated to `ApiError` at this boundary.

use tracing::info;

use shift_roster::{
    AssignmentEngine, AssignmentFilter, AssignmentUpdate, AvailabilityLedger, ExclusionUpdate,
    NewExclusion, NewShift, Persistence, ReassignmentReport, ReassignmentWorkflow, ShiftCatalog,
    ShiftUpdate,
};

use crate::error::ApiError;
use crate::request_response::{
    AssignmentInfo, AssignmentListQuery, CreateAssignmentRequest, CreateExclusionRequest,
    CreateShiftRequest, DeletedResponse, ExclusionInfo, ExclusionListQuery,
    ListAssignmentsResponse, ListExclusionsResponse, ListShiftsResponse, ReassignRequest,
    ReassignResponse, ResetDayRequest, ResetEmployeeAllRequest, ResetEmployeeMonthRequest,
    ResetMonthRequest, ResetRangeRequest, ResetResponse, ShiftInfo, UpdateAssignmentRequest,
    UpdateExclusionRequest, UpdateShiftRequest,
};

/// Lists every shift in the catalog.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_shifts(persistence: &mut Persistence) -> Result<ListShiftsResponse, ApiError> {
    let mut catalog: ShiftCatalog<'_> = ShiftCatalog::new(persistence);

    let shifts: Vec<ShiftInfo> = catalog
        .list()?
        .into_iter()
        .map(ShiftInfo::from)
        .collect();

    Ok(ListShiftsResponse { shifts })
}

/// Creates a shift in the catalog.
///
/// # Arguments
///
/// * `persistence` - The store to write through
/// * `request` - The shift definition; omitted headcounts use the defaults
///
/// # Errors
///
/// Returns an error if any field fails validation or the store write fails.
pub fn create_shift(
    persistence: &mut Persistence,
    request: CreateShiftRequest,
) -> Result<ShiftInfo, ApiError> {
    let mut catalog: ShiftCatalog<'_> = ShiftCatalog::new(persistence);

    let new_shift = NewShift {
        name: request.name,
        name_ar: request.name_ar,
        start_time: request.start_time,
        end_time: request.end_time,
        min_members: request.min_members,
        max_members: request.max_members,
    };

    Ok(ShiftInfo::from(catalog.create(&new_shift)?))
}

/// Applies a partial update to a shift.
///
/// # Errors
///
/// Returns an error if the shift does not exist or a merged field fails
/// validation.
pub fn update_shift(
    persistence: &mut Persistence,
    shift_id: i64,
    request: UpdateShiftRequest,
) -> Result<ShiftInfo, ApiError> {
    let mut catalog: ShiftCatalog<'_> = ShiftCatalog::new(persistence);

    let update = ShiftUpdate {
        name: request.name,
        name_ar: request.name_ar,
        start_time: request.start_time,
        end_time: request.end_time,
        min_members: request.min_members,
        max_members: request.max_members,
    };

    Ok(ShiftInfo::from(catalog.update(shift_id, &update)?))
}

/// Deletes a shift from the catalog.
///
/// # Errors
///
/// Returns an error if the shift does not exist or is still referenced by
/// assignments.
pub fn delete_shift(
    persistence: &mut Persistence,
    shift_id: i64,
) -> Result<DeletedResponse, ApiError> {
    let mut catalog: ShiftCatalog<'_> = ShiftCatalog::new(persistence);

    catalog.delete(shift_id)?;

    Ok(DeletedResponse {
        message: format!("Shift {shift_id} deleted"),
    })
}

/// Lists assignments matching the query.
///
/// # Errors
///
/// Returns an error if the query combines a date with a month window,
/// pairs a month with no year (or a year with no month), or names an
/// unparseable date.
pub fn list_assignments(
    persistence: &mut Persistence,
    query: AssignmentListQuery,
) -> Result<ListAssignmentsResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let filter = AssignmentFilter {
        employee_id: query.employee_id,
        date: query.date,
        month: query.month,
        year: query.year,
    };

    let assignments: Vec<AssignmentInfo> = engine
        .list(&filter)?
        .into_iter()
        .map(AssignmentInfo::from)
        .collect();

    Ok(ListAssignmentsResponse { assignments })
}

/// Seats an employee into a shift on a date.
///
/// # Errors
///
/// Returns an error if the date or actor fails validation, the employee or
/// shift does not exist, the employee already holds a seat or is excluded
/// on the date, or the shift is at capacity.
pub fn create_assignment(
    persistence: &mut Persistence,
    request: CreateAssignmentRequest,
) -> Result<AssignmentInfo, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let view = engine.assign(
        &request.date,
        request.shift_id,
        request.employee_id,
        &request.assigned_by,
    )?;

    Ok(AssignmentInfo::from(view))
}

/// Applies a partial update to an assignment.
///
/// An update with no fields set returns the current record unchanged.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, the status value is
/// unknown, or the actor is empty.
pub fn update_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
    request: UpdateAssignmentRequest,
) -> Result<AssignmentInfo, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let update = AssignmentUpdate {
        status: request.status,
        assigned_by: request.assigned_by,
    };

    Ok(AssignmentInfo::from(engine.update(assignment_id, &update)?))
}

/// Removes an assignment, vacating its seat.
///
/// # Errors
///
/// Returns an error if the assignment does not exist.
pub fn delete_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
) -> Result<DeletedResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    engine.remove(assignment_id)?;

    Ok(DeletedResponse {
        message: format!("Assignment {assignment_id} deleted"),
    })
}

/// Clears every assigned-status assignment on a date.
///
/// Idempotent; a date with nothing to clear reports a count of zero.
///
/// # Errors
///
/// Returns an error if the date is unparseable.
pub fn reset_day(
    persistence: &mut Persistence,
    request: ResetDayRequest,
) -> Result<ResetResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let deleted_count: usize = engine.reset_day(&request.date)?;
    info!("Reset day {}: {} removed", request.date, deleted_count);

    Ok(ResetResponse { deleted_count })
}

/// Clears an employee's assignments within a calendar month.
///
/// # Errors
///
/// Returns an error if the month is out of range.
pub fn reset_employee_month(
    persistence: &mut Persistence,
    request: ResetEmployeeMonthRequest,
) -> Result<ResetResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let deleted_count: usize =
        engine.reset_employee_month(request.employee_id, request.year, request.month)?;
    info!(
        "Reset employee {} for {}-{:02}: {} removed",
        request.employee_id, request.year, request.month, deleted_count
    );

    Ok(ResetResponse { deleted_count })
}

/// Clears every assigned-status assignment an employee holds.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn reset_employee_all(
    persistence: &mut Persistence,
    request: ResetEmployeeAllRequest,
) -> Result<ResetResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let deleted_count: usize = engine.reset_employee_all(request.employee_id)?;
    info!(
        "Reset employee {}: {} removed",
        request.employee_id, deleted_count
    );

    Ok(ResetResponse { deleted_count })
}

/// Clears every assignment within a calendar month.
///
/// # Errors
///
/// Returns an error if the month is out of range.
pub fn reset_month(
    persistence: &mut Persistence,
    request: ResetMonthRequest,
) -> Result<ResetResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let deleted_count: usize = engine.reset_month(request.year, request.month)?;
    info!(
        "Reset month {}-{:02}: {} removed",
        request.year, request.month, deleted_count
    );

    Ok(ResetResponse { deleted_count })
}

/// Clears every assignment within an inclusive date range.
///
/// # Errors
///
/// Returns an error if either date is unparseable or the range is
/// inverted.
pub fn reset_range(
    persistence: &mut Persistence,
    request: ResetRangeRequest,
) -> Result<ResetResponse, ApiError> {
    let mut engine: AssignmentEngine<'_> = AssignmentEngine::new(persistence);

    let deleted_count: usize = engine.reset_range(&request.start_date, &request.end_date)?;
    info!(
        "Reset range {}..={}: {} removed",
        request.start_date, request.end_date, deleted_count
    );

    Ok(ResetResponse { deleted_count })
}

/// Lists exclusions matching the query.
///
/// # Errors
///
/// Returns an error if the date is unparseable.
pub fn list_exclusions(
    persistence: &mut Persistence,
    query: ExclusionListQuery,
) -> Result<ListExclusionsResponse, ApiError> {
    let mut ledger: AvailabilityLedger<'_> = AvailabilityLedger::new(persistence);

    let exclusions: Vec<ExclusionInfo> = ledger
        .list(query.employee_id, query.date.as_deref())?
        .into_iter()
        .map(ExclusionInfo::from)
        .collect();

    Ok(ListExclusionsResponse { exclusions })
}

/// Records an availability exclusion for an employee on a date.
///
/// # Errors
///
/// Returns an error if the date, reason, or actor fails validation, the
/// employee does not exist, or the employee is already excluded on the
/// date.
pub fn create_exclusion(
    persistence: &mut Persistence,
    request: CreateExclusionRequest,
) -> Result<ExclusionInfo, ApiError> {
    let mut ledger: AvailabilityLedger<'_> = AvailabilityLedger::new(persistence);

    let new_exclusion = NewExclusion {
        employee_id: request.employee_id,
        date: request.date,
        reason: request.reason,
        reason_ar: request.reason_ar,
        note: request.note,
        created_by: request.created_by,
    };

    Ok(ExclusionInfo::from(ledger.exclude(&new_exclusion)?))
}

/// Applies a partial update to an exclusion.
///
/// # Errors
///
/// Returns an error if the exclusion does not exist or the new reason is
/// empty.
pub fn update_exclusion(
    persistence: &mut Persistence,
    exclusion_id: i64,
    request: UpdateExclusionRequest,
) -> Result<ExclusionInfo, ApiError> {
    let mut ledger: AvailabilityLedger<'_> = AvailabilityLedger::new(persistence);

    let update = ExclusionUpdate {
        reason: request.reason,
        reason_ar: request.reason_ar,
        note: request.note,
    };

    Ok(ExclusionInfo::from(ledger.update(exclusion_id, &update)?))
}

/// Deletes an exclusion, restoring the employee's availability.
///
/// # Errors
///
/// Returns an error if the exclusion does not exist.
pub fn delete_exclusion(
    persistence: &mut Persistence,
    exclusion_id: i64,
) -> Result<DeletedResponse, ApiError> {
    let mut ledger: AvailabilityLedger<'_> = AvailabilityLedger::new(persistence);

    ledger.delete(exclusion_id)?;

    Ok(DeletedResponse {
        message: format!("Exclusion {exclusion_id} deleted"),
    })
}

/// Pulls an employee off the roster for a date and refills the seat from
/// the supplied candidate pool.
///
/// A pool with no eligible candidate is still a success; the response
/// carries a warning and no replacement.
///
/// # Errors
///
/// Returns an error if the date or reason fails validation, or the
/// employee holds no assigned-status assignment on the date.
pub fn auto_reassign(
    persistence: &mut Persistence,
    request: ReassignRequest,
) -> Result<ReassignResponse, ApiError> {
    let mut workflow: ReassignmentWorkflow<'_> = ReassignmentWorkflow::new(persistence);

    let report: ReassignmentReport = workflow.auto_reassign(
        request.employee_id,
        &request.date,
        &request.reason,
        &request.selected_employees,
    )?;

    Ok(ReassignResponse {
        vacated_assignment_id: report.vacated_assignment_id,
        exclusion_id: report.exclusion_id,
        replacement: report.replacement.map(AssignmentInfo::from),
        warning: report.warning,
    })
}
