// File: crates/calbridge_gcal/src/auth.rs
use calbridge_config::GcalConfig;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{
        authenticator::ApplicationDefaultCredentialsTypes, read_service_account_key,
        ApplicationDefaultCredentialsAuthenticator, ApplicationDefaultCredentialsFlowOpts,
        ServiceAccountAuthenticator,
    },
    CalendarHub,
};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Errors raised while building the authenticated hub.
#[derive(Error, Debug)]
pub enum AuthError {
    /// An explicit credential configuration was given but is unusable.
    #[error("invalid credentials configuration: {0}")]
    Config(String),
    /// No explicit credentials were given and none could be discovered
    /// from the environment.
    #[error("ambient credentials unavailable: {0}")]
    AmbientCredentials(String),
}

/// Builds an authenticated `CalendarHub`.
///
/// With `key_path` set, the service account key at that path is used;
/// otherwise application default credentials are resolved from the
/// environment. Either flow is refresh-token capable; token handling is the
/// credential library's. Calls issued through the hub carry the full
/// calendar read/write scope. No calendar request is issued here.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, AuthError> {
    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| AuthError::Config(format!("failed to load native TLS roots: {e}")))?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let auth = match config.key_path.as_deref() {
        Some(key_path) => {
            let sa_key = read_service_account_key(Path::new(key_path))
                .await
                .map_err(|e| AuthError::Config(format!("{key_path}: {e}")))?;

            ServiceAccountAuthenticator::builder(sa_key)
                .build()
                .await
                .map_err(|e| AuthError::Config(e.to_string()))?
        }
        None => {
            debug!("no key_path configured, resolving application default credentials");
            let opts = ApplicationDefaultCredentialsFlowOpts::default();
            match ApplicationDefaultCredentialsAuthenticator::builder(opts).await {
                ApplicationDefaultCredentialsTypes::ServiceAccount(builder) => builder
                    .build()
                    .await
                    .map_err(|e| AuthError::AmbientCredentials(e.to_string()))?,
                ApplicationDefaultCredentialsTypes::InstanceMetadata(builder) => builder
                    .build()
                    .await
                    .map_err(|e| AuthError::AmbientCredentials(e.to_string()))?,
            }
        }
    };

    let mut hub = CalendarHub::new(client, auth);
    hub.user_agent(config.application_name().to_string());

    Ok(hub)
}
