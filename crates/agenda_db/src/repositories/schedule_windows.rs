//! Repository for dated overtime and blocked windows

use crate::error::DbError;
use agenda_common::models::{NewScheduleWindow, ScheduleWindow};
use agenda_common::TenantContext;
use chrono::NaiveDate;
use std::fmt;

/// Which kind of dated window a call is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Overtime,
    Blocked,
}

impl WindowKind {
    pub(crate) fn table(&self) -> &'static str {
        match self {
            WindowKind::Overtime => "overtime_windows",
            WindowKind::Blocked => "blocked_windows",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Overtime => f.write_str("overtime"),
            WindowKind::Blocked => f.write_str("blocked"),
        }
    }
}

pub trait ScheduleWindowRepository {
    fn create_window(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        window: NewScheduleWindow,
    ) -> impl std::future::Future<Output = Result<ScheduleWindow, DbError>> + Send;

    /// Returns `false` when no row with that id exists for the tenant.
    fn delete_window(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        id: i64,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Windows of one professional on one date, ordered by start.
    fn list_windows(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        professional_id: i64,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<ScheduleWindow>, DbError>> + Send;
}
