//! SQL implementation of [`AppointmentRepository`]

use crate::error::{is_unique_violation, map_write_error, DbError};
use crate::repositories::appointment_filter::FilterQuery;
use crate::repositories::appointments::AppointmentRepository;
use crate::repositories::rows::{appointment_from_row, date_to_sql, APPOINTMENT_COLUMNS};
use crate::store::SqlScheduleStore;
use agenda_common::models::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointment};
use agenda_common::TenantContext;
use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

impl AppointmentRepository for SqlScheduleStore {
    async fn reserve_slot(
        &self,
        tenant: &TenantContext,
        appointment: NewAppointment,
    ) -> Result<Appointment, DbError> {
        let NewAppointment {
            professional_id,
            date,
            start,
            end,
            draft,
        } = appointment;
        let date_sql = date_to_sql(date);

        let mut tx = self.db_client.begin().await?;

        // The live-slot check is part of the INSERT so the first statement of the
        // transaction is a write. SQLite then queues concurrent bookers on the busy
        // timeout instead of failing a read-to-write lock upgrade.
        let insert = format!(
            r#"
            INSERT INTO appointments (
                business_id, service_id, professional_id, client_id, client_name, client_phone,
                date, start_time, end_time, status, amount_paid, amount_due, notes
            )
            SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
            WHERE NOT EXISTS (
                SELECT 1 FROM appointments
                WHERE business_id = $1 AND professional_id = $3 AND date = $7
                  AND start_time = $8 AND status <> 'cancelled'
            )
            RETURNING {}
            "#,
            APPOINTMENT_COLUMNS
        );

        let inserted = sqlx::query(&insert)
            .bind(tenant.business_id)
            .bind(draft.service_id)
            .bind(professional_id)
            .bind(draft.client_id)
            .bind(draft.client_name)
            .bind(draft.client_phone)
            .bind(date_sql.as_str())
            .bind(start.as_str())
            .bind(end.as_str())
            .bind(AppointmentStatus::Pending.as_str())
            .bind(draft.amount_paid)
            .bind(draft.amount_due)
            .bind(draft.notes)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                let err = map_write_error(e, "insert appointment");
                if !err.is_conflict() {
                    error!("Failed to insert appointment: {}", err);
                }
                err
            })?;

        let Some(row) = inserted else {
            debug!(
                "Slot {} on {} for professional {} is held by a live appointment",
                start, date, professional_id
            );
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
            return Err(DbError::SlotTaken {
                professional_id,
                date,
                start,
            });
        };

        let created = appointment_from_row(&row)?;

        tx.commit().await.map_err(|e| {
            if is_unique_violation(&e) {
                DbError::UniqueViolation(e.to_string())
            } else {
                error!("Failed to commit appointment {}: {}", created.id, e);
                DbError::TransactionError(e.to_string())
            }
        })?;

        info!(
            "Appointment {} reserved: professional {} {} {}-{}",
            created.id, professional_id, date, created.start, created.end
        );
        Ok(created)
    }

    async fn find_appointment(
        &self,
        tenant: &TenantContext,
        id: i64,
    ) -> Result<Option<Appointment>, DbError> {
        let query = format!(
            "SELECT {} FROM appointments WHERE business_id = $1 AND id = $2",
            APPOINTMENT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(tenant.business_id)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find appointment {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(appointment_from_row).transpose()
    }

    async fn list_appointments(
        &self,
        tenant: &TenantContext,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, DbError> {
        let filter_query = FilterQuery::appointments(tenant, filter);
        debug!("Listing appointments with {:?}", filter);

        let rows = filter_query
            .query()
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list appointments: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(appointment_from_row).collect()
    }

    async fn list_appointments_for_day(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DbError> {
        let filter = AppointmentFilter {
            professional_id: Some(professional_id),
            date: Some(date),
            ascending: true,
            ..Default::default()
        };
        self.list_appointments(tenant, &filter).await
    }

    async fn update_appointment_status(
        &self,
        tenant: &TenantContext,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, DbError> {
        debug!("Setting appointment {} to {}", id, status);

        let result = sqlx::query(
            "UPDATE appointments SET status = $1 WHERE business_id = $2 AND id = $3",
        )
        .bind(status.as_str())
        .bind(tenant.business_id)
        .bind(id)
        .execute(self.db_client.pool())
        .await
        .map_err(|e| {
            // Reviving a cancelled row whose slot was rebooked trips the live-slot index
            let err = map_write_error(e, "update appointment status");
            if err.is_conflict() {
                warn!("Appointment {} cannot become {}: {}", id, status, err);
            } else {
                error!("Failed to update appointment {}: {}", id, err);
            }
            err
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Appointment {} is now {}", id, status);
        self.find_appointment(tenant, id).await
    }
}
