// --- File: crates/calbridge_gcal/src/service.rs ---
//! Google Calendar connection implementation.
//!
//! [`CalendarConnection`] is the narrow seam between the shim's request
//! records and the vendor SDK's object shape; [`GoogleCalendarConnection`]
//! is the real implementation over an authenticated hub.

use calbridge_common::{AvailabilityRequest, BoxFuture, EventRequest, TimeWindow};
use chrono::{DateTime, Utc};
use google_calendar3::api::{
    Event, EventAttendee, EventDateTime, EventReminder, EventReminders, FreeBusyRequest,
    FreeBusyRequestItem, FreeBusyResponse,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::HubType;

/// Errors that can occur when talking to Google Calendar.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Google API error: {0}")]
    Api(#[from] google_calendar3::Error),
    #[error("failed to parse time: {0}")]
    TimeParse(String),
}

/// One outbound operation per method, no retries, no local state.
pub trait CalendarConnection: Send + Sync {
    /// Error type returned by connection operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert an event into the given calendar and return the created
    /// vendor record.
    fn insert_event(
        &self,
        calendar_id: &str,
        event: EventRequest,
    ) -> BoxFuture<'_, Event, Self::Error>;

    /// List events, optionally restricted to a time window. No window means
    /// the vendor's default paging and ordering apply.
    fn list_events(
        &self,
        calendar_id: &str,
        window: Option<TimeWindow>,
    ) -> BoxFuture<'_, Vec<Event>, Self::Error>;

    /// Query free/busy information and return the raw vendor response.
    fn query_free_busy(
        &self,
        request: AvailabilityRequest,
    ) -> BoxFuture<'_, FreeBusyResponse, Self::Error>;
}

/// Google Calendar connection over an authenticated hub.
pub struct GoogleCalendarConnection {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarConnection {
    /// Create a new Google Calendar connection.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

/// Builds the vendor event payload from a normalized request.
///
/// Empty optional collections map to `None` so the transmitted JSON omits
/// those fields instead of sending nulls. Recurrence rules and attendee
/// emails pass through verbatim; the request timezone is attached to both
/// start and end.
pub(crate) fn build_event(event: &EventRequest) -> Result<Event, ConnectionError> {
    let start_dt = DateTime::parse_from_rfc3339(&event.start)
        .map_err(|e| ConnectionError::TimeParse(format!("invalid start: {e}")))?
        .with_timezone(&Utc);
    let end_dt = DateTime::parse_from_rfc3339(&event.end)
        .map_err(|e| ConnectionError::TimeParse(format!("invalid end: {e}")))?
        .with_timezone(&Utc);

    Ok(Event {
        summary: Some(event.summary.clone()),
        location: non_empty(&event.location),
        description: non_empty(&event.description),
        start: Some(EventDateTime {
            date_time: Some(start_dt),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end_dt),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        recurrence: if event.recurrence.is_empty() {
            None
        } else {
            Some(event.recurrence.clone())
        },
        attendees: if event.attendees.is_empty() {
            None
        } else {
            Some(
                event
                    .attendees
                    .iter()
                    .map(|attendee| EventAttendee {
                        email: Some(attendee.email.clone()),
                        ..Default::default()
                    })
                    .collect(),
            )
        },
        reminders: event.reminders.as_ref().map(|reminders| EventReminders {
            use_default: Some(reminders.use_default),
            overrides: if reminders.overrides.is_empty() {
                None
            } else {
                Some(
                    reminders
                        .overrides
                        .iter()
                        .map(|o| EventReminder {
                            method: Some(o.method.clone()),
                            minutes: Some(o.minutes),
                            ..Default::default()
                        })
                        .collect(),
                )
            },
        }),
        ..Default::default()
    })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl CalendarConnection for GoogleCalendarConnection {
    type Error = ConnectionError;

    fn insert_event(
        &self,
        calendar_id: &str,
        event: EventRequest,
    ) -> BoxFuture<'_, Event, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = build_event(&event)?;

            // Make the API call to insert the event
            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            debug!(%calendar_id, event_id = ?created_event.id, "event inserted");
            Ok(created_event)
        })
    }

    fn list_events(
        &self,
        calendar_id: &str,
        window: Option<TimeWindow>,
    ) -> BoxFuture<'_, Vec<Event>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let mut request = calendar_hub.events().list(&calendar_id);

            if let Some(window) = &window {
                request = request.time_min(window.time_min).time_max(window.time_max);
                if let Some(time_zone) = &window.time_zone {
                    request = request.time_zone(time_zone);
                }
            }

            // Make the API call
            let (_response, events_list) = request.doit().await?;

            Ok(events_list.items.unwrap_or_default())
        })
    }

    fn query_free_busy(
        &self,
        request: AvailabilityRequest,
    ) -> BoxFuture<'_, FreeBusyResponse, Self::Error> {
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let req = FreeBusyRequest {
                time_min: Some(request.time_min),
                time_max: Some(request.time_max),
                time_zone: Some(request.time_zone.clone()),
                items: Some(vec![FreeBusyRequestItem {
                    id: Some(request.calendar_id.clone()),
                    ..Default::default()
                }]),
                ..Default::default()
            };

            // Make the API call
            let (_response, freebusy_response) = calendar_hub.freebusy().query(req).doit().await?;

            Ok(freebusy_response)
        })
    }
}

/// Mock connection for exercising the client without the network.
#[cfg(test)]
pub mod mock {
    use super::*;
    use google_calendar3::api::{FreeBusyCalendar, TimePeriod};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Error, Debug)]
    #[error("mock transport failure: {0}")]
    pub struct MockFailure(pub String);

    /// Records every call it receives; optionally fails each operation or
    /// serves canned free/busy data.
    #[derive(Default)]
    pub struct MockConnection {
        fail: bool,
        busy_calendar: Option<String>,
        busy: Vec<(DateTime<Utc>, DateTime<Utc>)>,
        pub inserted: Mutex<Vec<(String, EventRequest)>>,
        pub listed: Mutex<Vec<(String, Option<TimeWindow>)>>,
        pub queried: Mutex<Vec<AvailabilityRequest>>,
    }

    impl MockConnection {
        pub fn new() -> Self {
            Self::default()
        }

        /// A connection whose every operation fails at the transport.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// A connection whose free/busy response contains `calendar_id`
        /// with the given busy periods.
        pub fn with_busy(
            calendar_id: &str,
            busy: Vec<(DateTime<Utc>, DateTime<Utc>)>,
        ) -> Self {
            Self {
                busy_calendar: Some(calendar_id.to_string()),
                busy,
                ..Self::default()
            }
        }

        /// Total remote calls observed across all operations.
        pub fn call_count(&self) -> usize {
            self.inserted.lock().unwrap().len()
                + self.listed.lock().unwrap().len()
                + self.queried.lock().unwrap().len()
        }
    }

    impl CalendarConnection for MockConnection {
        type Error = MockFailure;

        fn insert_event(
            &self,
            calendar_id: &str,
            event: EventRequest,
        ) -> BoxFuture<'_, Event, Self::Error> {
            let calendar_id = calendar_id.to_string();

            Box::pin(async move {
                self.inserted
                    .lock()
                    .unwrap()
                    .push((calendar_id, event.clone()));

                if self.fail {
                    return Err(MockFailure("insert rejected".to_string()));
                }

                Ok(Event {
                    id: Some(format!("mock-event-{}", uuid::Uuid::new_v4())),
                    summary: Some(event.summary),
                    status: Some("confirmed".to_string()),
                    ..Default::default()
                })
            })
        }

        fn list_events(
            &self,
            calendar_id: &str,
            window: Option<TimeWindow>,
        ) -> BoxFuture<'_, Vec<Event>, Self::Error> {
            let calendar_id = calendar_id.to_string();

            Box::pin(async move {
                self.listed.lock().unwrap().push((calendar_id, window));

                if self.fail {
                    return Err(MockFailure("list rejected".to_string()));
                }

                Ok(Vec::new())
            })
        }

        fn query_free_busy(
            &self,
            request: AvailabilityRequest,
        ) -> BoxFuture<'_, FreeBusyResponse, Self::Error> {
            Box::pin(async move {
                self.queried.lock().unwrap().push(request);

                if self.fail {
                    return Err(MockFailure("query rejected".to_string()));
                }

                let mut calendars = HashMap::new();
                if let Some(calendar_id) = &self.busy_calendar {
                    let periods = self
                        .busy
                        .iter()
                        .map(|(start, end)| TimePeriod {
                            start: Some(*start),
                            end: Some(*end),
                            ..Default::default()
                        })
                        .collect();
                    calendars.insert(
                        calendar_id.clone(),
                        FreeBusyCalendar {
                            busy: Some(periods),
                            ..Default::default()
                        },
                    );
                }

                Ok(FreeBusyResponse {
                    calendars: Some(calendars),
                    ..Default::default()
                })
            })
        }
    }
}
