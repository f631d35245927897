// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! Dates cross the boundary as ISO-8601 strings and are validated by the
//! engine. `*Info` structs are the display shapes; they are built from the
//! store's joined views.

use serde::{Deserialize, Serialize};

use shift_roster::{AssignmentView, ExclusionView, ShiftRecord};

/// A shift as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInfo {
    /// The shift identifier.
    pub shift_id: i64,
    /// The primary display name.
    pub name: String,
    /// The Arabic display name.
    pub name_ar: String,
    /// Window start (`HH:MM`).
    pub start_time: String,
    /// Window end (`HH:MM`).
    pub end_time: String,
    /// Minimum headcount.
    pub min_members: i32,
    /// Maximum headcount.
    pub max_members: i32,
}

impl From<ShiftRecord> for ShiftInfo {
    fn from(record: ShiftRecord) -> Self {
        Self {
            shift_id: record.shift_id,
            name: record.name,
            name_ar: record.name_ar,
            start_time: record.start_time,
            end_time: record.end_time,
            min_members: record.min_members,
            max_members: record.max_members,
        }
    }
}

/// API request for creating a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The primary display name.
    pub name: String,
    /// The Arabic display name.
    pub name_ar: String,
    /// Window start (`HH:MM`).
    pub start_time: String,
    /// Window end (`HH:MM`).
    pub end_time: String,
    /// Minimum headcount; defaults when omitted.
    pub min_members: Option<i32>,
    /// Maximum headcount; defaults when omitted.
    pub max_members: Option<i32>,
}

/// API request for updating a shift. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShiftRequest {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub min_members: Option<i32>,
    pub max_members: Option<i32>,
}

/// API response for listing shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListShiftsResponse {
    /// The shifts, ordered by window start.
    pub shifts: Vec<ShiftInfo>,
}

/// An assignment as returned by the API, joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInfo {
    /// The assignment identifier.
    pub assignment_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The assignment status.
    pub status: String,
    /// The actor who created the assignment.
    pub assigned_by: String,
    /// Creation timestamp.
    pub created_at: String,
    /// The assigned employee.
    pub employee_id: i64,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department, if any.
    pub department: Option<String>,
    /// The shift held.
    pub shift_id: i64,
    /// The shift's primary display name.
    pub shift_name: String,
    /// The shift's Arabic display name.
    pub shift_name_ar: String,
    /// The shift window start (`HH:MM`).
    pub shift_start_time: String,
    /// The shift window end (`HH:MM`).
    pub shift_end_time: String,
}

impl From<AssignmentView> for AssignmentInfo {
    fn from(view: AssignmentView) -> Self {
        Self {
            assignment_id: view.assignment_id,
            date: view.date,
            status: view.status,
            assigned_by: view.assigned_by,
            created_at: view.created_at,
            employee_id: view.employee_id,
            employee_name: view.employee_name,
            department: view.department,
            shift_id: view.shift_id,
            shift_name: view.shift_name,
            shift_name_ar: view.shift_name_ar,
            shift_start_time: view.shift_start_time,
            shift_end_time: view.shift_end_time,
        }
    }
}

/// API request for creating an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The shift to seat into.
    pub shift_id: i64,
    /// The employee to seat.
    pub employee_id: i64,
    /// The actor recording the assignment.
    pub assigned_by: String,
}

/// API request for updating an assignment. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub status: Option<String>,
    pub assigned_by: Option<String>,
}

/// Query parameters for listing assignments.
///
/// `month` is 1-based and must be paired with `year`; `date` names a single
/// day and cannot be combined with a month window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentListQuery {
    pub employee_id: Option<i64>,
    pub date: Option<String>,
    pub month: Option<u8>,
    pub year: Option<i32>,
}

/// API response for listing assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAssignmentsResponse {
    /// The assignments, ordered by date then shift window start.
    pub assignments: Vec<AssignmentInfo>,
}

/// API request for clearing a day's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetDayRequest {
    /// The calendar date (ISO 8601).
    pub date: String,
}

/// API request for clearing an employee's month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEmployeeMonthRequest {
    /// The employee whose month is cleared.
    pub employee_id: i64,
    /// The year.
    pub year: i32,
    /// The 1-based month.
    pub month: u8,
}

/// API request for clearing an employee's entire roster history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEmployeeAllRequest {
    /// The employee whose assignments are cleared.
    pub employee_id: i64,
}

/// API request for clearing a whole month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetMonthRequest {
    /// The year.
    pub year: i32,
    /// The 1-based month.
    pub month: u8,
}

/// API request for clearing an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRangeRequest {
    /// The inclusive start date (ISO 8601).
    pub start_date: String,
    /// The inclusive end date (ISO 8601).
    pub end_date: String,
}

/// API response for every bulk reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// The number of assignments removed; zero when the scope was empty.
    pub deleted_count: usize,
}

/// An availability exclusion as returned by the API, joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionInfo {
    /// The exclusion identifier.
    pub exclusion_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The reason for the exclusion.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
    /// The actor who recorded the exclusion.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: String,
    /// The excluded employee.
    pub employee_id: i64,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department, if any.
    pub department: Option<String>,
}

impl From<ExclusionView> for ExclusionInfo {
    fn from(view: ExclusionView) -> Self {
        Self {
            exclusion_id: view.exclusion_id,
            date: view.date,
            reason: view.reason,
            reason_ar: view.reason_ar,
            note: view.note,
            created_by: view.created_by,
            created_at: view.created_at,
            employee_id: view.employee_id,
            employee_name: view.employee_name,
            department: view.department,
        }
    }
}

/// API request for recording an exclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExclusionRequest {
    /// The employee to exclude.
    pub employee_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The reason for the exclusion.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
    /// The actor recording the exclusion.
    pub created_by: String,
}

/// API request for updating an exclusion. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExclusionRequest {
    pub reason: Option<String>,
    pub reason_ar: Option<String>,
    pub note: Option<String>,
}

/// Query parameters for listing exclusions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionListQuery {
    pub employee_id: Option<i64>,
    pub date: Option<String>,
}

/// API response for listing exclusions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExclusionsResponse {
    /// The exclusions, ordered by date then employee name.
    pub exclusions: Vec<ExclusionInfo>,
}

/// API request for the reassignment workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignRequest {
    /// The employee being pulled off the roster.
    pub employee_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The reason recorded on the exclusion.
    pub reason: String,
    /// Candidate employee IDs, in preference order.
    pub selected_employees: Vec<i64>,
}

/// API response for the reassignment workflow.
///
/// A reassignment that finds no replacement is still a success: the
/// `warning` field is set and `replacement` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignResponse {
    /// The assignment that was vacated.
    pub vacated_assignment_id: i64,
    /// The exclusion now covering the employee on the date.
    pub exclusion_id: i64,
    /// The replacement seated into the vacated shift, if one was found.
    pub replacement: Option<AssignmentInfo>,
    /// Set when the seat was left open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// A human-readable confirmation.
    pub message: String,
}
