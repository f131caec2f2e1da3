// --- File: crates/calbridge_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Google Calendar Config ---
// Holds non-secret calendar config. Key material is referenced by path and
// may be injected via the `secret_from_env` marker.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    /// Path to a service account key file. Absent means ambient
    /// application default credentials are used instead.
    pub key_path: Option<String>,
    /// User agent reported to the calendar service.
    pub application_name: Option<String>,
    /// Default calendar to operate on.
    pub calendar_id: Option<String>,
    /// IANA timezone name used when callers do not supply one.
    pub time_zone: Option<String>,
}

impl GcalConfig {
    pub fn application_name(&self) -> &str {
        self.application_name.as_deref().unwrap_or("calbridge")
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}
