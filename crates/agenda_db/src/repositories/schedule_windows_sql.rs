//! SQL implementation of [`ScheduleWindowRepository`]

use crate::error::DbError;
use crate::repositories::rows::{date_to_sql, window_from_row, WINDOW_COLUMNS};
use crate::repositories::schedule_windows::{ScheduleWindowRepository, WindowKind};
use crate::store::SqlScheduleStore;
use agenda_common::models::{NewScheduleWindow, ScheduleWindow};
use agenda_common::TenantContext;
use chrono::NaiveDate;
use tracing::{debug, error, info};

impl ScheduleWindowRepository for SqlScheduleStore {
    async fn create_window(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        window: NewScheduleWindow,
    ) -> Result<ScheduleWindow, DbError> {
        debug!(
            "Creating {} window {}-{} on {} for professional {}",
            kind, window.start, window.end, window.date, window.professional_id
        );

        let query = format!(
            "INSERT INTO {} (business_id, professional_id, date, start_time, end_time, reason) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            kind.table(),
            WINDOW_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(window.professional_id)
            .bind(date_to_sql(window.date))
            .bind(window.start)
            .bind(window.end)
            .bind(window.reason)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert {} window: {}", kind, e);
                DbError::QueryError(e.to_string())
            })?;

        let created = window_from_row(&row)?;
        info!("{} window {} created", kind, created.id);
        Ok(created)
    }

    async fn delete_window(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        id: i64,
    ) -> Result<bool, DbError> {
        debug!("Deleting {} window {}", kind, id);

        let query = format!(
            "DELETE FROM {} WHERE business_id = $1 AND id = $2",
            kind.table()
        );

        let result = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete {} window: {}", kind, e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_windows(
        &self,
        tenant: &TenantContext,
        kind: WindowKind,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<ScheduleWindow>, DbError> {
        let query = format!(
            "SELECT {} FROM {} \
             WHERE business_id = $1 AND professional_id = $2 AND date = $3 \
             ORDER BY start_time, id",
            WINDOW_COLUMNS,
            kind.table()
        );

        let rows = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(professional_id)
            .bind(date_to_sql(date))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list {} windows: {}", kind, e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(window_from_row).collect()
    }
}
