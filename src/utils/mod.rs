//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`console`] - Browser console logging
//! - [`dom`] - Window, history and link helpers
//! - [`fetch_json`] - Network fetching with timeout
//! - [`format`] - Date and tag label formatting

pub mod console;
pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{RaceResult, fetch_json, race_with_timeout};
