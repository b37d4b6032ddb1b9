//! Repository for linked external-calendar credentials

use crate::error::DbError;
use agenda_common::models::CalendarCredentials;
use agenda_common::TenantContext;

pub trait CalendarCredentialsRepository {
    fn find_credentials(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<CalendarCredentials>, DbError>> + Send;

    /// Replaces any previous credentials of the professional.
    fn save_credentials(
        &self,
        tenant: &TenantContext,
        credentials: CalendarCredentials,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;
}
