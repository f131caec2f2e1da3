// --- File: crates/calbridge_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod services; // Shared request/response records and plumbing types

// Re-export the service records for easier access
pub use services::{
    Attendee, AvailabilityRequest, BoxFuture, BoxedError, EventRequest, ReminderOverride,
    Reminders, TimeWindow,
};
