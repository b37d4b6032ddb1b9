// File: crates/agenda_scheduling/src/routes.rs
use crate::handlers::{
    active_working_hours_handler, all_working_hours_handler, book_appointment_handler,
    client_history_handler, create_blocked_handler, create_overtime_handler,
    delete_appointment_handler, delete_blocked_handler, delete_overtime_handler,
    get_agenda_handler, get_appointment_handler, get_availability_handler, health_handler,
    list_appointments_handler, list_blocked_handler, list_overtime_handler, reminders_handler,
    update_status_handler, upsert_working_hours_handler, SchedulingState,
};
use axum::{
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;

/// Creates a router containing every scheduling route, relative to `/api`.
///
/// All routes except `/health` require the `X-Business-Id` header.
pub fn routes(state: Arc<SchedulingState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/availability", get(get_availability_handler))
        .route(
            "/appointments",
            get(list_appointments_handler).post(book_appointment_handler),
        )
        .route(
            "/appointments/{id}",
            get(get_appointment_handler).delete(delete_appointment_handler),
        )
        .route("/appointments/{id}/status", put(update_status_handler))
        .route("/clients/{id}/appointments", get(client_history_handler))
        .route(
            "/professionals/{id}/working-hours",
            get(active_working_hours_handler),
        )
        .route("/admin/agenda", get(get_agenda_handler))
        .route("/admin/reminders", get(reminders_handler))
        .route(
            "/admin/professionals/{id}/working-hours",
            get(all_working_hours_handler),
        )
        .route(
            "/admin/professionals/{id}/working-hours/{day}",
            put(upsert_working_hours_handler),
        )
        .route(
            "/admin/overtime",
            get(list_overtime_handler).post(create_overtime_handler),
        )
        .route("/admin/overtime/{id}", delete(delete_overtime_handler))
        .route(
            "/admin/blocked",
            get(list_blocked_handler).post(create_blocked_handler),
        )
        .route("/admin/blocked/{id}", delete(delete_blocked_handler))
        .with_state(state)
}
