//! SQL implementation of [`WorkingHoursRepository`]

use crate::error::DbError;
use crate::repositories::rows::{working_hours_from_row, WORKING_HOURS_COLUMNS};
use crate::repositories::working_hours::WorkingHoursRepository;
use crate::store::SqlScheduleStore;
use agenda_common::models::{DayOfWeek, WorkingHours};
use agenda_common::TenantContext;
use tracing::{debug, error, info};

impl WorkingHoursRepository for SqlScheduleStore {
    async fn upsert_working_hours(
        &self,
        tenant: &TenantContext,
        hours: WorkingHours,
    ) -> Result<WorkingHours, DbError> {
        debug!(
            "Upserting working hours for professional {} on {}",
            hours.professional_id, hours.day_of_week
        );

        let query = r#"
            INSERT INTO working_hours (
                business_id, professional_id, day_of_week,
                morning_start, morning_end, afternoon_start, afternoon_end, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (business_id, professional_id, day_of_week) DO UPDATE SET
                morning_start = excluded.morning_start,
                morning_end = excluded.morning_end,
                afternoon_start = excluded.afternoon_start,
                afternoon_end = excluded.afternoon_end,
                active = excluded.active
        "#;

        sqlx::query(query)
            .bind(tenant.business_id)
            .bind(hours.professional_id)
            .bind(hours.day_of_week.as_str())
            .bind(hours.morning_start.clone())
            .bind(hours.morning_end.clone())
            .bind(hours.afternoon_start.clone())
            .bind(hours.afternoon_end.clone())
            .bind(if hours.active { 1_i64 } else { 0_i64 })
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to upsert working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        info!(
            "Working hours for professional {} on {} saved",
            hours.professional_id, hours.day_of_week
        );
        Ok(hours)
    }

    async fn find_working_hours(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        day: DayOfWeek,
    ) -> Result<Option<WorkingHours>, DbError> {
        let query = format!(
            "SELECT {} FROM working_hours \
             WHERE business_id = $1 AND professional_id = $2 AND day_of_week = $3",
            WORKING_HOURS_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(professional_id)
            .bind(day.as_str())
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(working_hours_from_row).transpose()
    }

    async fn list_working_hours(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        active_only: bool,
    ) -> Result<Vec<WorkingHours>, DbError> {
        let mut query = format!(
            "SELECT {} FROM working_hours WHERE business_id = $1 AND professional_id = $2",
            WORKING_HOURS_COLUMNS
        );
        if active_only {
            query.push_str(" AND active = 1");
        }

        let rows = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(professional_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let mut hours = rows
            .iter()
            .map(working_hours_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        hours.sort_by_key(|h| DayOfWeek::ALL.iter().position(|d| *d == h.day_of_week));
        Ok(hours)
    }
}
