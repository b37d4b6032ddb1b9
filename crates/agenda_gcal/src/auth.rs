// File: crates/agenda_gcal/src/auth.rs
use crate::error::GcalPushError;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{authorized_user::AuthorizedUserSecret, AuthorizedUserAuthenticator},
    CalendarHub,
};

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// OAuth client the professionals authorized; their refresh tokens are issued to it.
#[derive(Clone)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

pub(crate) fn authorized_user_secret(
    client: &OAuthClient,
    refresh_token: &str,
) -> AuthorizedUserSecret {
    AuthorizedUserSecret {
        client_id: client.client_id.clone(),
        client_secret: client.client_secret.clone(),
        refresh_token: refresh_token.to_string(),
        key_type: "authorized_user".to_string(),
    }
}

/// Builds a hub acting as the professional who granted `refresh_token`.
pub async fn create_calendar_hub(
    client: &OAuthClient,
    refresh_token: &str,
) -> Result<HubType, GcalPushError> {
    let secret = authorized_user_secret(client, refresh_token);

    let auth = AuthorizedUserAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|e| GcalPushError::AuthError(e.to_string()))?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
