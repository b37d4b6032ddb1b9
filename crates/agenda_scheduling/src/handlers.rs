// File: crates/agenda_scheduling/src/handlers.rs
use crate::availability::DaySchedule;
use crate::booking::{BookingRequest, BookingTransactor};
use crate::day::DayInputs;
use crate::error::SchedulingError;
use crate::reminders::{business_zone, reminder_filter, tomorrow_in};
use crate::slots::Slot;
use crate::working_hours::{validate_window, validate_working_hours};
use agenda_common::models::{
    Appointment, AppointmentFilter, AppointmentStatus, DayOfWeek, NewScheduleWindow,
    ScheduleWindow, WorkingHours,
};
use agenda_common::{AgendaError, TenantContext};
use agenda_config::AppConfig;
use agenda_db::{
    AppointmentRepository, DbError, ScheduleWindowRepository, SqlScheduleStore, WindowKind,
    WorkingHoursRepository,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Shared state of the scheduling routes.
#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub store: SqlScheduleStore,
    pub booking: BookingTransactor<SqlScheduleStore>,
}

fn store_error(err: DbError) -> AgendaError {
    SchedulingError::Store(err).into()
}

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub professional_id: i64,
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2025-06-03"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: i64,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub professional_id: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub slots: Vec<Slot>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AgendaQuery {
    pub professional_id: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2025-06-03"))]
    pub date: NaiveDate,
    /// Grid size; defaults to the configured admin grid
    pub duration_minutes: Option<i64>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AgendaResponse {
    pub professional_id: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub duration_minutes: i64,
    #[serde(flatten)]
    pub schedule: DaySchedule,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListQuery {
    pub professional_id: Option<i64>,
    pub client_id: Option<i64>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub date: Option<NaiveDate>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub date_from: Option<NaiveDate>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub date_to: Option<NaiveDate>,
    /// Comma separated, e.g. `pending,confirmed`
    #[cfg_attr(feature = "openapi", schema(example = "pending,confirmed"))]
    pub status: Option<String>,
    /// `asc` or `desc` (default)
    pub order: Option<String>,
}

impl AppointmentListQuery {
    pub fn into_filter(self) -> Result<AppointmentFilter, AgendaError> {
        let statuses = match self.status.as_deref() {
            None | Some("") => Vec::new(),
            Some(list) => list
                .split(',')
                .map(|s| s.trim().parse::<AppointmentStatus>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(AgendaError::ParseError)?,
        };
        let ascending = match self.order.as_deref() {
            None | Some("desc") => false,
            Some("asc") => true,
            Some(other) => {
                return Err(AgendaError::ParseError(format!(
                    "order must be asc or desc, got '{}'",
                    other
                )))
            }
        };
        Ok(AppointmentFilter {
            professional_id: self.professional_id,
            client_id: self.client_id,
            date: self.date,
            date_from: self.date_from,
            date_to: self.date_to,
            statuses,
            ascending,
        })
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
}

/// Body of the working-hours upsert; the professional and day come from the path.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursUpdate {
    #[serde(default)]
    pub morning_start: Option<String>,
    #[serde(default)]
    pub morning_end: Option<String>,
    #[serde(default)]
    pub afternoon_start: Option<String>,
    #[serde(default)]
    pub afternoon_end: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursResponse {
    pub professional_id: i64,
    pub days: Vec<WorkingHours>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct WindowQuery {
    pub professional_id: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2025-06-03"))]
    pub date: NaiveDate,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WindowsResponse {
    pub windows: Vec<ScheduleWindow>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}

// --- Availability ---

/// Handler to get bookable slots for one professional and date.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Bookable slots", body = AvailabilityResponse),
        (status = 400, description = "Invalid duration or missing tenant header"),
        (status = 500, description = "Internal error")
    ),
    tag = "Scheduling"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AgendaError> {
    // Rejected before touching the store
    if query.duration_minutes <= 0 {
        return Err(SchedulingError::InvalidDuration(query.duration_minutes).into());
    }
    let day = DayInputs::load(&state.store, &tenant, query.professional_id, query.date).await?;
    let slots = day.available(query.duration_minutes)?;
    Ok(Json(AvailabilityResponse {
        professional_id: query.professional_id,
        date: query.date,
        duration_minutes: query.duration_minutes,
        slots,
    }))
}

/// Handler for the classified admin day view.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/agenda",
    params(AgendaQuery),
    responses(
        (status = 200, description = "Every slot of the day with its state", body = AgendaResponse),
        (status = 400, description = "Invalid duration or missing tenant header")
    ),
    tag = "Admin"
))]
pub async fn get_agenda_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Query(query): Query<AgendaQuery>,
) -> Result<Json<AgendaResponse>, AgendaError> {
    let duration = query
        .duration_minutes
        .unwrap_or_else(|| state.config.scheduling().admin_grid_minutes());
    if duration <= 0 {
        return Err(SchedulingError::InvalidDuration(duration).into());
    }
    let day = DayInputs::load(&state.store, &tenant, query.professional_id, query.date).await?;
    let schedule = day.schedule(duration)?;
    Ok(Json(AgendaResponse {
        professional_id: query.professional_id,
        date: query.date,
        duration_minutes: duration,
        schedule,
    }))
}

// --- Appointments ---

/// Handler to book a slot.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/appointments",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Appointment created", body = Appointment),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "this time is already reserved"),
        (status = 500, description = "Booking failed")
    ),
    tag = "Scheduling"
))]
pub async fn book_appointment_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Appointment>), AgendaError> {
    let appointment = state.booking.book(&tenant, request).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentListQuery),
    responses(
        (status = 200, description = "Matching appointments", body = AppointmentsResponse),
        (status = 400, description = "Unknown status or order")
    ),
    tag = "Admin"
))]
pub async fn list_appointments_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<AppointmentsResponse>, AgendaError> {
    let filter = query.into_filter()?;
    let appointments = state
        .store
        .list_appointments(&tenant, &filter)
        .await
        .map_err(store_error)?;
    Ok(Json(AppointmentsResponse { appointments }))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments/{id}",
    params(("id" = i64, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "The appointment", body = Appointment),
        (status = 404, description = "Unknown id")
    ),
    tag = "Scheduling"
))]
pub async fn get_appointment_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, AgendaError> {
    state
        .store
        .find_appointment(&tenant, id)
        .await
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| AgendaError::NotFoundError(format!("appointment {}", id)))
}

/// Handler for status transitions, including cancellation.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/appointments/{id}/status",
    params(("id" = i64, Path, description = "Appointment id")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Updated appointment", body = Appointment),
        (status = 404, description = "Unknown id"),
        (status = 409, description = "Reviving a cancelled appointment whose slot was rebooked")
    ),
    tag = "Scheduling"
))]
pub async fn update_status_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(id): Path<i64>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Appointment>, AgendaError> {
    let updated = state
        .store
        .update_appointment_status(&tenant, id, request.status)
        .await
        .map_err(store_error)?
        .ok_or_else(|| AgendaError::NotFoundError(format!("appointment {}", id)))?;
    info!(
        "Appointment {} of business {} is now {}",
        id, tenant.business_id, updated.status
    );
    Ok(Json(updated))
}

/// Hard delete is retired; cancellation is a status change.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(("id" = i64, Path, description = "Appointment id")),
    responses(
        (status = 410, description = "Use PUT /appointments/{id}/status with status cancelled")
    ),
    tag = "Scheduling"
))]
pub async fn delete_appointment_handler(
    tenant: TenantContext,
    Path(id): Path<i64>,
) -> Result<StatusCode, AgendaError> {
    warn!(
        "Rejected hard delete of appointment {} for business {}",
        id, tenant.business_id
    );
    Err(AgendaError::GoneError(format!(
        "deleting appointments is no longer supported; use PUT /api/appointments/{}/status with status \"cancelled\"",
        id
    )))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/clients/{id}/appointments",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Appointment history, newest first", body = AppointmentsResponse)
    ),
    tag = "Scheduling"
))]
pub async fn client_history_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(client_id): Path<i64>,
) -> Result<Json<AppointmentsResponse>, AgendaError> {
    let filter = AppointmentFilter {
        client_id: Some(client_id),
        ..AppointmentFilter::default()
    };
    let appointments = state
        .store
        .list_appointments(&tenant, &filter)
        .await
        .map_err(store_error)?;
    Ok(Json(AppointmentsResponse { appointments }))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/reminders",
    responses(
        (status = 200, description = "Open appointments of tomorrow", body = RemindersResponse)
    ),
    tag = "Admin"
))]
pub async fn reminders_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
) -> Result<Json<RemindersResponse>, AgendaError> {
    let zone = business_zone(state.config.scheduling().time_zone());
    let date = tomorrow_in(zone, Utc::now())
        .ok_or_else(|| AgendaError::InternalError("date out of range".to_string()))?;
    let appointments = state
        .store
        .list_appointments(&tenant, &reminder_filter(date))
        .await
        .map_err(store_error)?;
    Ok(Json(RemindersResponse { date, appointments }))
}

// --- Working hours ---

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/professionals/{id}/working-hours",
    params(("id" = i64, Path, description = "Professional id")),
    responses(
        (status = 200, description = "Active days of the weekly template", body = WorkingHoursResponse)
    ),
    tag = "Scheduling"
))]
pub async fn active_working_hours_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(professional_id): Path<i64>,
) -> Result<Json<WorkingHoursResponse>, AgendaError> {
    list_working_hours(&state, &tenant, professional_id, true).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/professionals/{id}/working-hours",
    params(("id" = i64, Path, description = "Professional id")),
    responses(
        (status = 200, description = "Every stored day, active or not", body = WorkingHoursResponse)
    ),
    tag = "Admin"
))]
pub async fn all_working_hours_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(professional_id): Path<i64>,
) -> Result<Json<WorkingHoursResponse>, AgendaError> {
    list_working_hours(&state, &tenant, professional_id, false).await
}

async fn list_working_hours(
    state: &SchedulingState,
    tenant: &TenantContext,
    professional_id: i64,
    active_only: bool,
) -> Result<Json<WorkingHoursResponse>, AgendaError> {
    let days = state
        .store
        .list_working_hours(tenant, professional_id, active_only)
        .await
        .map_err(store_error)?;
    Ok(Json(WorkingHoursResponse {
        professional_id,
        days,
    }))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/admin/professionals/{id}/working-hours/{day}",
    params(
        ("id" = i64, Path, description = "Professional id"),
        ("day" = String, Path, description = "Weekday name, e.g. monday")
    ),
    request_body = WorkingHoursUpdate,
    responses(
        (status = 200, description = "Stored row", body = WorkingHours),
        (status = 400, description = "Invalid times or weekday")
    ),
    tag = "Admin"
))]
pub async fn upsert_working_hours_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path((professional_id, day)): Path<(i64, String)>,
    Json(update): Json<WorkingHoursUpdate>,
) -> Result<Json<WorkingHours>, AgendaError> {
    let day_of_week = day.parse::<DayOfWeek>().map_err(AgendaError::ParseError)?;
    let hours = validate_working_hours(WorkingHours {
        professional_id,
        day_of_week,
        morning_start: update.morning_start,
        morning_end: update.morning_end,
        afternoon_start: update.afternoon_start,
        afternoon_end: update.afternoon_end,
        active: update.active,
    })?;
    let stored = state
        .store
        .upsert_working_hours(&tenant, hours)
        .await
        .map_err(store_error)?;
    Ok(Json(stored))
}

// --- Overtime and blocked windows ---

async fn list_windows(
    state: &SchedulingState,
    tenant: &TenantContext,
    kind: WindowKind,
    query: WindowQuery,
) -> Result<Json<WindowsResponse>, AgendaError> {
    let windows = state
        .store
        .list_windows(tenant, kind, query.professional_id, query.date)
        .await
        .map_err(store_error)?;
    Ok(Json(WindowsResponse { windows }))
}

async fn create_window(
    state: &SchedulingState,
    tenant: &TenantContext,
    kind: WindowKind,
    window: NewScheduleWindow,
) -> Result<(StatusCode, Json<ScheduleWindow>), AgendaError> {
    let window = validate_window(window)?;
    let created = state
        .store
        .create_window(tenant, kind, window)
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_window(
    state: &SchedulingState,
    tenant: &TenantContext,
    kind: WindowKind,
    id: i64,
) -> Result<StatusCode, AgendaError> {
    let deleted = state
        .store
        .delete_window(tenant, kind, id)
        .await
        .map_err(store_error)?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AgendaError::NotFoundError(format!("{} window {}", kind, id)))
    }
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/overtime",
    params(WindowQuery),
    responses((status = 200, description = "Overtime windows of the day", body = WindowsResponse)),
    tag = "Admin"
))]
pub async fn list_overtime_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Query(query): Query<WindowQuery>,
) -> Result<Json<WindowsResponse>, AgendaError> {
    list_windows(&state, &tenant, WindowKind::Overtime, query).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/overtime",
    request_body = NewScheduleWindow,
    responses(
        (status = 201, description = "Overtime window created", body = ScheduleWindow),
        (status = 400, description = "Invalid times")
    ),
    tag = "Admin"
))]
pub async fn create_overtime_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Json(window): Json<NewScheduleWindow>,
) -> Result<(StatusCode, Json<ScheduleWindow>), AgendaError> {
    create_window(&state, &tenant, WindowKind::Overtime, window).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/admin/overtime/{id}",
    params(("id" = i64, Path, description = "Window id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Admin"
))]
pub async fn delete_overtime_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(id): Path<i64>,
) -> Result<StatusCode, AgendaError> {
    delete_window(&state, &tenant, WindowKind::Overtime, id).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/blocked",
    params(WindowQuery),
    responses((status = 200, description = "Blocked windows of the day", body = WindowsResponse)),
    tag = "Admin"
))]
pub async fn list_blocked_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Query(query): Query<WindowQuery>,
) -> Result<Json<WindowsResponse>, AgendaError> {
    list_windows(&state, &tenant, WindowKind::Blocked, query).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/blocked",
    request_body = NewScheduleWindow,
    responses(
        (status = 201, description = "Blocked window created", body = ScheduleWindow),
        (status = 400, description = "Invalid times")
    ),
    tag = "Admin"
))]
pub async fn create_blocked_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Json(window): Json<NewScheduleWindow>,
) -> Result<(StatusCode, Json<ScheduleWindow>), AgendaError> {
    create_window(&state, &tenant, WindowKind::Blocked, window).await
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/admin/blocked/{id}",
    params(("id" = i64, Path, description = "Window id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id")
    ),
    tag = "Admin"
))]
pub async fn delete_blocked_handler(
    State(state): State<Arc<SchedulingState>>,
    tenant: TenantContext,
    Path(id): Path<i64>,
) -> Result<StatusCode, AgendaError> {
    delete_window(&state, &tenant, WindowKind::Blocked, id).await
}

// --- Health ---

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    ),
    tag = "Health"
))]
pub async fn health_handler(
    State(state): State<Arc<SchedulingState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = state.store.db_client().is_healthy().await;
    let (code, status) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            database,
        }),
    )
}
