// --- File: crates/calbridge_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod client;
pub mod service;
pub mod time;
#[cfg(test)]
mod time_proptest;
#[cfg(test)]
mod time_test;

pub use client::{CalendarClient, GcalError};
pub use service::{CalendarConnection, ConnectionError, GoogleCalendarConnection};
