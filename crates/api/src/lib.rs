// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the shift roster.
//!
//! This crate defines the request/response shapes that cross the HTTP
//! boundary and the handler functions that drive the scheduling components.
//! Engine errors are translated into the [`ApiError`] contract here; the
//! server layer only maps `ApiError` variants onto status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use handlers::{
    auto_reassign, create_assignment, create_exclusion, create_shift, delete_assignment,
    delete_exclusion, delete_shift, list_assignments, list_exclusions, list_shifts, reset_day,
    reset_employee_all, reset_employee_month, reset_month, reset_range, update_assignment,
    update_exclusion, update_shift,
};
pub use request_response::{
    AssignmentInfo, AssignmentListQuery, CreateAssignmentRequest, CreateExclusionRequest,
    CreateShiftRequest, DeletedResponse, ExclusionInfo, ExclusionListQuery,
    ListAssignmentsResponse, ListExclusionsResponse, ListShiftsResponse, ReassignRequest,
    ReassignResponse, ResetDayRequest, ResetEmployeeAllRequest, ResetEmployeeMonthRequest,
    ResetMonthRequest, ResetRangeRequest, ResetResponse, ShiftInfo, UpdateAssignmentRequest,
    UpdateExclusionRequest, UpdateShiftRequest,
};
