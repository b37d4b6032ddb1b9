// File: crates/agenda_scheduling/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::availability::{DayEntry, DaySchedule, SlotState};
use crate::booking::BookingRequest;
use crate::handlers::{
    AgendaQuery, AgendaResponse, AppointmentListQuery, AppointmentsResponse, AvailabilityQuery,
    AvailabilityResponse, HealthResponse, RemindersResponse, StatusUpdateRequest, WindowQuery,
    WindowsResponse, WorkingHoursResponse, WorkingHoursUpdate,
};
use crate::slots::{Slot, SlotOrigin};
use agenda_common::models::{
    Appointment, AppointmentDraft, AppointmentStatus, DayOfWeek, NewScheduleWindow,
    ScheduleWindow, WorkingHours,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_availability_handler,
        crate::handlers::book_appointment_handler,
        crate::handlers::list_appointments_handler,
        crate::handlers::get_appointment_handler,
        crate::handlers::update_status_handler,
        crate::handlers::delete_appointment_handler,
        crate::handlers::client_history_handler,
        crate::handlers::reminders_handler,
        crate::handlers::get_agenda_handler,
        crate::handlers::active_working_hours_handler,
        crate::handlers::all_working_hours_handler,
        crate::handlers::upsert_working_hours_handler,
        crate::handlers::list_overtime_handler,
        crate::handlers::create_overtime_handler,
        crate::handlers::delete_overtime_handler,
        crate::handlers::list_blocked_handler,
        crate::handlers::create_blocked_handler,
        crate::handlers::delete_blocked_handler,
        crate::handlers::health_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            AgendaQuery,
            AgendaResponse,
            AppointmentListQuery,
            AppointmentsResponse,
            BookingRequest,
            StatusUpdateRequest,
            RemindersResponse,
            WorkingHoursUpdate,
            WorkingHoursResponse,
            WindowQuery,
            WindowsResponse,
            HealthResponse,
            Slot,
            SlotOrigin,
            SlotState,
            DayEntry,
            DaySchedule,
            Appointment,
            AppointmentDraft,
            AppointmentStatus,
            DayOfWeek,
            WorkingHours,
            ScheduleWindow,
            NewScheduleWindow
        )
    ),
    tags(
        (name = "Scheduling", description = "Availability and booking"),
        (name = "Admin", description = "Agenda, templates and dated windows"),
        (name = "Health", description = "Service health")
    ),
    servers(
        (url = "/api", description = "Agenda API server")
    )
)]
pub struct SchedulingApiDoc;
