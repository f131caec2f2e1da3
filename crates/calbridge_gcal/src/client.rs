// --- File: crates/calbridge_gcal/src/client.rs ---
//! The calendar client: construction plus the three pass-through operations.

use crate::auth::{create_calendar_hub, AuthError};
use crate::service::{CalendarConnection, GoogleCalendarConnection};
use crate::time::{self, DateParseError};
use calbridge_common::{AvailabilityRequest, BoxedError, EventRequest, TimeWindow};
use calbridge_config::GcalConfig;
use chrono::{DateTime, Utc};
use google_calendar3::api::Event;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum GcalError {
    /// An explicit credential configuration was given but is unusable.
    #[error("invalid credentials configuration: {0}")]
    AuthConfig(String),
    /// No explicit credentials were given and none could be discovered.
    #[error("no ambient credentials discoverable: {0}")]
    AmbientCredentials(String),
    /// A start/end/date string could not be parsed.
    #[error(transparent)]
    DateParse(#[from] DateParseError),
    /// Any failure reported by the remote service, vendor detail preserved.
    #[error("Google Calendar API error: {0}")]
    Remote(BoxedError),
    /// The free/busy response did not contain the requested calendar.
    #[error("calendar {0:?} missing from free/busy response")]
    UnknownCalendar(String),
}

impl From<AuthError> for GcalError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Config(msg) => GcalError::AuthConfig(msg),
            AuthError::AmbientCredentials(msg) => GcalError::AmbientCredentials(msg),
        }
    }
}

impl GcalError {
    fn remote<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GcalError::Remote(BoxedError(Box::new(err)))
    }
}

/// A thin client over one calendar connection.
///
/// Every operation is a single request/response cycle: parameter
/// normalization, one remote call, envelope unwrapping. No retries, no
/// caching, no synchronization beyond the shared connection handle.
pub struct CalendarClient<C: CalendarConnection = GoogleCalendarConnection> {
    connection: Arc<C>,
}

impl CalendarClient<GoogleCalendarConnection> {
    /// Builds a client backed by the real Google Calendar API.
    ///
    /// Fails with [`GcalError::AuthConfig`] when the configured service
    /// account key is unusable, or [`GcalError::AmbientCredentials`] when no
    /// key is configured and default credentials cannot be resolved.
    pub async fn connect(config: &GcalConfig) -> Result<Self, GcalError> {
        let hub = create_calendar_hub(config).await?;
        let connection = GoogleCalendarConnection::new(Arc::new(hub));
        Ok(Self::with_connection(Arc::new(connection)))
    }
}

impl<C: CalendarConnection> CalendarClient<C> {
    /// Wraps an existing connection.
    pub fn with_connection(connection: Arc<C>) -> Self {
        Self { connection }
    }

    /// Creates an event on `calendar_id` and returns the created vendor
    /// record, including the assigned event id.
    ///
    /// `start` and `end` accept free-form date/time text; both are
    /// normalized to RFC 3339 with offset before transmission, so
    /// equivalent spellings of the same instant produce identical payloads.
    /// Not idempotent: two identical calls create two events.
    pub async fn create_event(
        &self,
        calendar_id: &str,
        mut request: EventRequest,
    ) -> Result<Event, GcalError> {
        let tz = time::resolve_timezone(&request.time_zone);
        let start = time::parse_datetime(&request.start, tz)?;
        let end = time::parse_datetime(&request.end, tz)?;
        request.start = start.to_rfc3339();
        request.end = end.to_rfc3339();

        debug!(calendar_id, summary = %request.summary, "inserting calendar event");
        self.connection
            .insert_event(calendar_id, request)
            .await
            .map_err(GcalError::remote)
    }

    /// Lists events on `calendar_id`.
    ///
    /// With no `date` the listing is unfiltered and the vendor's default
    /// paging and ordering apply. With a `date` the listing is bounded to
    /// that day's `[00:00:00, 23:59:59]` window in `time_zone` (UTC when
    /// absent). No matching events is an empty list, not an error.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        date: Option<&str>,
        time_zone: Option<&str>,
    ) -> Result<Vec<Event>, GcalError> {
        let window = match date {
            Some(date) if !date.trim().is_empty() => {
                let tz = time::resolve_timezone(time_zone.unwrap_or(""));
                let (time_min, time_max) = time::day_bounds(date, tz)?;
                Some(TimeWindow {
                    time_min,
                    time_max,
                    time_zone: time_zone.map(str::to_string),
                })
            }
            _ => None,
        };

        debug!(calendar_id, windowed = window.is_some(), "listing calendar events");
        self.connection
            .list_events(calendar_id, window)
            .await
            .map_err(GcalError::remote)
    }

    /// Returns the busy intervals on `calendar_id` within `[start, end]`,
    /// sorted by interval start.
    ///
    /// Fails with [`GcalError::UnknownCalendar`] when the response does not
    /// carry the requested calendar key, which is how the vendor signals an
    /// unknown or inaccessible calendar.
    pub async fn check_availability(
        &self,
        calendar_id: &str,
        start: &str,
        end: &str,
        time_zone: &str,
    ) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>, GcalError> {
        let tz = time::resolve_timezone(time_zone);
        let time_min = time::parse_datetime(start, tz)?.with_timezone(&Utc);
        let time_max = time::parse_datetime(end, tz)?.with_timezone(&Utc);

        let request = AvailabilityRequest {
            calendar_id: calendar_id.to_string(),
            time_min,
            time_max,
            time_zone: time_zone.to_string(),
        };

        debug!(calendar_id, %time_min, %time_max, "querying free/busy");
        let response = self
            .connection
            .query_free_busy(request)
            .await
            .map_err(GcalError::remote)?;

        let calendars = response.calendars.unwrap_or_default();
        let calendar_info = match calendars.get(calendar_id) {
            Some(info) => info,
            None => return Err(GcalError::UnknownCalendar(calendar_id.to_string())),
        };

        let mut busy_periods = Vec::new();
        if let Some(busy_times) = &calendar_info.busy {
            for period in busy_times {
                if let (Some(start_dt), Some(end_dt)) = (period.start, period.end) {
                    busy_periods.push((start_dt, end_dt));
                } else {
                    info!(
                        "skipping busy period with missing start/end: {:?}",
                        period
                    );
                }
            }
        }
        // Sort busy periods for easier processing
        busy_periods.sort_by_key(|k| k.0);
        Ok(busy_periods)
    }
}
