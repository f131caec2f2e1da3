// --- File: crates/calbridge_common/src/services.rs ---
//! Shared records for calendar operations.
//!
//! These types describe requests in the shim's own terms so the calling code
//! stays decoupled from the vendor SDK's object shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// An event to be created on a calendar.
///
/// `start` and `end` are free-form date/time strings; the client normalizes
/// them to RFC 3339 with offset before the request leaves the process.
/// Empty optional collections are omitted from the transmitted payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// The summary or title of the event.
    pub summary: String,
    /// The start date/time of the event.
    pub start: String,
    /// The end date/time of the event.
    pub end: String,
    /// IANA timezone attached to both start and end.
    pub time_zone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// RRULE strings, passed through verbatim.
    #[serde(default)]
    pub recurrence: Vec<String>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub reminders: Option<Reminders>,
}

impl EventRequest {
    /// A request with the required fields set and every optional field empty.
    pub fn new(summary: &str, start: &str, end: &str, time_zone: &str) -> Self {
        Self {
            summary: summary.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            time_zone: time_zone.to_string(),
            location: String::new(),
            description: String::new(),
            recurrence: Vec::new(),
            attendees: Vec::new(),
            reminders: None,
        }
    }
}

/// An event attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
}

/// Reminder configuration for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminders {
    pub use_default: bool,
    #[serde(default)]
    pub overrides: Vec<ReminderOverride>,
}

/// A single reminder override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderOverride {
    /// Delivery method, e.g. "email" or "popup".
    pub method: String,
    /// Minutes before the event start.
    pub minutes: i32,
}

/// An optional time filter for event listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindow {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    /// Timezone used by the remote service when interpreting the listing.
    pub time_zone: Option<String>,
}

/// A free/busy query scoped to one calendar and one window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub calendar_id: String,
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub time_zone: String,
}
