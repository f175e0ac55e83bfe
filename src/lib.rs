//! AI news feed browser.
//!
//! A client-side rendered Leptos application over a hosted PostgREST
//! database. The routing rules, state controller and query building are
//! plain Rust and usable outside the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
