//! Translates an [`AppointmentFilter`] into a WHERE clause with bound parameters.
//!
//! Only fixed column fragments end up in the SQL text; every value is a bind.

use crate::repositories::rows::{date_to_sql, APPOINTMENT_COLUMNS};
use agenda_common::models::AppointmentFilter;
use agenda_common::TenantContext;
use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::Any;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FilterValue {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilterQuery {
    pub(crate) sql: String,
    pub(crate) values: Vec<FilterValue>,
}

impl FilterQuery {
    /// Builds the SELECT for `filter`, always scoped to the tenant.
    pub(crate) fn appointments(tenant: &TenantContext, filter: &AppointmentFilter) -> Self {
        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<FilterValue> = Vec::new();

        let mut push = |clause: &str, value: FilterValue, values: &mut Vec<FilterValue>| {
            values.push(value);
            clauses.push(format!("{} ${}", clause, values.len()));
        };

        push("business_id =", FilterValue::Int(tenant.business_id), &mut values);
        if let Some(id) = filter.professional_id {
            push("professional_id =", FilterValue::Int(id), &mut values);
        }
        if let Some(id) = filter.client_id {
            push("client_id =", FilterValue::Int(id), &mut values);
        }
        if let Some(date) = filter.date {
            push("date =", FilterValue::Text(date_to_sql(date)), &mut values);
        }
        if let Some(from) = filter.date_from {
            push("date >=", FilterValue::Text(date_to_sql(from)), &mut values);
        }
        if let Some(to) = filter.date_to {
            push("date <=", FilterValue::Text(date_to_sql(to)), &mut values);
        }

        if !filter.statuses.is_empty() {
            let placeholders: Vec<String> = filter
                .statuses
                .iter()
                .map(|status| {
                    values.push(FilterValue::Text(status.as_str().to_string()));
                    format!("${}", values.len())
                })
                .collect();
            clauses.push(format!("status IN ({})", placeholders.join(", ")));
        }

        let order = if filter.ascending {
            "date ASC, start_time ASC, id ASC"
        } else {
            "date DESC, start_time DESC, id DESC"
        };

        let sql = format!(
            "SELECT {} FROM appointments WHERE {} ORDER BY {}",
            APPOINTMENT_COLUMNS,
            clauses.join(" AND "),
            order
        );

        Self { sql, values }
    }

    /// Binds the collected values, in order, onto a query over `self.sql`.
    pub(crate) fn query(&self) -> Query<'_, Any, AnyArguments<'_>> {
        self.values
            .iter()
            .fold(sqlx::query(&self.sql), |query, value| match value {
                FilterValue::Int(v) => query.bind(*v),
                FilterValue::Text(v) => query.bind(v.as_str()),
            })
    }
}
