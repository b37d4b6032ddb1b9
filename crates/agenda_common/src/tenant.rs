//! Request-scoped tenant context.
//!
//! Every store call takes a [`TenantContext`]; handlers obtain it from the
//! `X-Business-Id` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

pub const TENANT_HEADER: &str = "x-business-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantContext {
    pub business_id: i64,
}

impl TenantContext {
    pub fn new(business_id: i64) -> Self {
        Self { business_id }
    }
}

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AgendaError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(TENANT_HEADER)
            .ok_or_else(|| AgendaError::ValidationError(format!("missing {} header", TENANT_HEADER)))?;

        let business_id = raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| AgendaError::ParseError(format!("invalid {} header", TENANT_HEADER)))?;

        Ok(TenantContext { business_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpStatusCode;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<TenantContext, AgendaError> {
        let mut builder = Request::builder().uri("/api/availability");
        if let Some(value) = header {
            builder = builder.header(TENANT_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        TenantContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_business_id_header() {
        assert_eq!(extract(Some("42")).await.unwrap(), TenantContext::new(42));
    }

    #[tokio::test]
    async fn missing_or_bad_header_is_client_error() {
        assert_eq!(extract(None).await.unwrap_err().status_code(), 400);
        assert_eq!(extract(Some("paula")).await.unwrap_err().status_code(), 400);
        assert_eq!(extract(Some("0")).await.unwrap_err().status_code(), 400);
    }
}
