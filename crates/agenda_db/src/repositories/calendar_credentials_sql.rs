//! SQL implementation of [`CalendarCredentialsRepository`]

use crate::error::DbError;
use crate::repositories::calendar_credentials::CalendarCredentialsRepository;
use crate::store::SqlScheduleStore;
use agenda_common::models::CalendarCredentials;
use agenda_common::TenantContext;
use sqlx::Row;
use tracing::{debug, error};

impl CalendarCredentialsRepository for SqlScheduleStore {
    async fn find_credentials(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
    ) -> Result<Option<CalendarCredentials>, DbError> {
        let row = sqlx::query(
            "SELECT refresh_token FROM calendar_credentials \
             WHERE business_id = $1 AND professional_id = $2",
        )
        .bind(tenant.business_id)
        .bind(professional_id)
        .fetch_optional(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to read calendar credentials: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        match row {
            Some(row) => Ok(Some(CalendarCredentials {
                professional_id,
                refresh_token: row.try_get("refresh_token")?,
            })),
            None => Ok(None),
        }
    }

    async fn save_credentials(
        &self,
        tenant: &TenantContext,
        credentials: CalendarCredentials,
    ) -> Result<(), DbError> {
        debug!(
            "Saving calendar credentials for professional {}",
            credentials.professional_id
        );

        sqlx::query(
            r#"
            INSERT INTO calendar_credentials (business_id, professional_id, refresh_token)
            VALUES ($1, $2, $3)
            ON CONFLICT (business_id, professional_id) DO UPDATE SET
                refresh_token = excluded.refresh_token
            "#,
        )
        .bind(tenant.business_id)
        .bind(credentials.professional_id)
        .bind(credentials.refresh_token)
        .execute(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to save calendar credentials: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        Ok(())
    }
}
