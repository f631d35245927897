// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use shift_roster::Persistence;
use shift_roster_api::{
    ApiError, AssignmentInfo, AssignmentListQuery, CreateAssignmentRequest,
    CreateExclusionRequest, CreateShiftRequest, DeletedResponse, ExclusionInfo,
    ExclusionListQuery, ListAssignmentsResponse, ListExclusionsResponse, ListShiftsResponse,
    ReassignRequest, ReassignResponse, ResetDayRequest, ResetEmployeeAllRequest,
    ResetEmployeeMonthRequest, ResetMonthRequest, ResetRangeRequest, ResetResponse, ShiftInfo,
    UpdateAssignmentRequest, UpdateExclusionRequest, UpdateShiftRequest,
};

/// Shift Roster Server - HTTP server for shift scheduling and assignment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The store every handler reads and writes through.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Conflict { .. } | ApiError::CapacityExceeded { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for GET `/shifts` endpoint.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListShiftsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListShiftsResponse = shift_roster_api::list_shifts(&mut persistence)?;

    Ok(Json(response))
}

/// Handler for POST `/shifts` endpoint.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<ShiftInfo>, HttpError> {
    info!(name = %req.name, "Handling create_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ShiftInfo = shift_roster_api::create_shift(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for PUT `/shifts/{shift_id}` endpoint.
async fn handle_update_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Json(req): Json<UpdateShiftRequest>,
) -> Result<Json<ShiftInfo>, HttpError> {
    info!(shift_id, "Handling update_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ShiftInfo = shift_roster_api::update_shift(&mut persistence, shift_id, req)?;

    Ok(Json(response))
}

/// Handler for DELETE `/shifts/{shift_id}` endpoint.
async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(shift_id, "Handling delete_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletedResponse = shift_roster_api::delete_shift(&mut persistence, shift_id)?;

    Ok(Json(response))
}

/// Handler for GET `/assignments` endpoint.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AssignmentListQuery>,
) -> Result<Json<ListAssignmentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAssignmentsResponse =
        shift_roster_api::list_assignments(&mut persistence, query)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments` endpoint.
async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Json<AssignmentInfo>, HttpError> {
    info!(
        employee_id = req.employee_id,
        shift_id = req.shift_id,
        date = %req.date,
        "Handling create_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentInfo = shift_roster_api::create_assignment(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for PUT `/assignments/{assignment_id}` endpoint.
async fn handle_update_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<UpdateAssignmentRequest>,
) -> Result<Json<AssignmentInfo>, HttpError> {
    info!(assignment_id, "Handling update_assignment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentInfo =
        shift_roster_api::update_assignment(&mut persistence, assignment_id, req)?;

    Ok(Json(response))
}

/// Handler for DELETE `/assignments/{assignment_id}` endpoint.
async fn handle_delete_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(assignment_id, "Handling delete_assignment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletedResponse =
        shift_roster_api::delete_assignment(&mut persistence, assignment_id)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments/reset/day` endpoint.
async fn handle_reset_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ResetDayRequest>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!(date = %req.date, "Handling reset_day request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = shift_roster_api::reset_day(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments/reset/employee_month` endpoint.
async fn handle_reset_employee_month(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ResetEmployeeMonthRequest>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!(
        employee_id = req.employee_id,
        year = req.year,
        month = req.month,
        "Handling reset_employee_month request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = shift_roster_api::reset_employee_month(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments/reset/employee_all` endpoint.
async fn handle_reset_employee_all(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ResetEmployeeAllRequest>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!(
        employee_id = req.employee_id,
        "Handling reset_employee_all request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = shift_roster_api::reset_employee_all(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments/reset/month` endpoint.
async fn handle_reset_month(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ResetMonthRequest>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!(
        year = req.year,
        month = req.month,
        "Handling reset_month request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = shift_roster_api::reset_month(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for POST `/assignments/reset/range` endpoint.
async fn handle_reset_range(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ResetRangeRequest>,
) -> Result<Json<ResetResponse>, HttpError> {
    info!(
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Handling reset_range request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ResetResponse = shift_roster_api::reset_range(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for GET `/exclusions` endpoint.
async fn handle_list_exclusions(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ExclusionListQuery>,
) -> Result<Json<ListExclusionsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListExclusionsResponse =
        shift_roster_api::list_exclusions(&mut persistence, query)?;

    Ok(Json(response))
}

/// Handler for POST `/exclusions` endpoint.
async fn handle_create_exclusion(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateExclusionRequest>,
) -> Result<Json<ExclusionInfo>, HttpError> {
    info!(
        employee_id = req.employee_id,
        date = %req.date,
        "Handling create_exclusion request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ExclusionInfo = shift_roster_api::create_exclusion(&mut persistence, req)?;

    Ok(Json(response))
}

/// Handler for PUT `/exclusions/{exclusion_id}` endpoint.
async fn handle_update_exclusion(
    AxumState(app_state): AxumState<AppState>,
    Path(exclusion_id): Path<i64>,
    Json(req): Json<UpdateExclusionRequest>,
) -> Result<Json<ExclusionInfo>, HttpError> {
    info!(exclusion_id, "Handling update_exclusion request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ExclusionInfo =
        shift_roster_api::update_exclusion(&mut persistence, exclusion_id, req)?;

    Ok(Json(response))
}

/// Handler for DELETE `/exclusions/{exclusion_id}` endpoint.
async fn handle_delete_exclusion(
    AxumState(app_state): AxumState<AppState>,
    Path(exclusion_id): Path<i64>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(exclusion_id, "Handling delete_exclusion request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletedResponse =
        shift_roster_api::delete_exclusion(&mut persistence, exclusion_id)?;

    Ok(Json(response))
}

/// Handler for POST `/reassign` endpoint.
async fn handle_reassign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ReassignRequest>,
) -> Result<Json<ReassignResponse>, HttpError> {
    info!(
        employee_id = req.employee_id,
        date = %req.date,
        candidates = req.selected_employees.len(),
        "Handling reassign request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ReassignResponse = shift_roster_api::auto_reassign(&mut persistence, req)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/shifts", get(handle_list_shifts))
        .route("/shifts", post(handle_create_shift))
        .route(
            "/shifts/{shift_id}",
            put(handle_update_shift).delete(handle_delete_shift),
        )
        .route("/assignments", get(handle_list_assignments))
        .route("/assignments", post(handle_create_assignment))
        .route(
            "/assignments/{assignment_id}",
            put(handle_update_assignment).delete(handle_delete_assignment),
        )
        .route("/assignments/reset/day", post(handle_reset_day))
        .route(
            "/assignments/reset/employee_month",
            post(handle_reset_employee_month),
        )
        .route(
            "/assignments/reset/employee_all",
            post(handle_reset_employee_all),
        )
        .route("/assignments/reset/month", post(handle_reset_month))
        .route("/assignments/reset/range", post(handle_reset_range))
        .route("/exclusions", get(handle_list_exclusions))
        .route("/exclusions", post(handle_create_exclusion))
        .route(
            "/exclusions/{exclusion_id}",
            put(handle_update_exclusion).delete(handle_delete_exclusion),
        )
        .route("/reassign", post(handle_reassign))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shift Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
