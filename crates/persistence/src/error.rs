// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested employee was not found in the directory.
    EmployeeNotFound(i64),
    /// The requested shift was not found.
    ShiftNotFound(i64),
    /// The requested assignment was not found.
    AssignmentNotFound(i64),
    /// The requested availability exclusion was not found.
    ExclusionNotFound(i64),
    /// No assigned-status assignment exists for the employee on the date.
    AssignmentNotFoundForDate {
        /// The employee.
        employee_id: i64,
        /// The date (ISO 8601).
        date: String,
    },
    /// An assignment already exists for the employee on the date.
    DuplicateAssignment {
        /// The employee.
        employee_id: i64,
        /// The date (ISO 8601).
        date: String,
    },
    /// The employee has an availability exclusion on the date.
    EmployeeUnavailable {
        /// The employee.
        employee_id: i64,
        /// The date (ISO 8601).
        date: String,
    },
    /// The shift already holds its maximum headcount on the date.
    ShiftAtCapacity {
        /// The shift.
        shift_id: i64,
        /// The date (ISO 8601).
        date: String,
        /// The shift's maximum headcount.
        max_members: i32,
    },
    /// The shift cannot be deleted because assignments reference it.
    ShiftReferenced {
        /// The shift.
        shift_id: i64,
    },
    /// An exclusion already exists for the employee on the date.
    DuplicateExclusion {
        /// The employee.
        employee_id: i64,
        /// The date (ISO 8601).
        date: String,
    },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::ShiftNotFound(id) => write!(f, "Shift {id} not found"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment {id} not found"),
            Self::ExclusionNotFound(id) => write!(f, "Availability exclusion {id} not found"),
            Self::AssignmentNotFoundForDate { employee_id, date } => {
                write!(
                    f,
                    "No assigned-status assignment for employee {employee_id} on {date}"
                )
            }
            Self::DuplicateAssignment { employee_id, date } => {
                write!(
                    f,
                    "Employee {employee_id} already has an assignment on {date}"
                )
            }
            Self::EmployeeUnavailable { employee_id, date } => {
                write!(
                    f,
                    "Employee {employee_id} has an availability exclusion on {date}"
                )
            }
            Self::ShiftAtCapacity {
                shift_id,
                date,
                max_members,
            } => {
                write!(
                    f,
                    "Shift {shift_id} already holds {max_members} members on {date}"
                )
            }
            Self::ShiftReferenced { shift_id } => {
                write!(
                    f,
                    "Shift {shift_id} cannot be deleted: assignments reference it"
                )
            }
            Self::DuplicateExclusion { employee_id, date } => {
                write!(
                    f,
                    "Employee {employee_id} already has an exclusion on {date}"
                )
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
