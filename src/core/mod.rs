//! Core application logic.
//!
//! This module provides:
//! - [`Backend`] data access with [`SupabaseClient`] as the remote store
//! - [`Controller`] owning the [`AppState`] and its load operations
//! - [`Router`] path dispatch over a [`History`]
//! - [`nav_rows`] and [`heading`] view models

pub mod backend;
mod controller;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod router;
mod state;
mod supabase;
mod view;

pub use backend::{Backend, PostQuery, ProductScope, fetch_all_posts, fetch_posts, resolve_scope};
pub use controller::{Controller, LoadOutcome, Ticket};
pub use error::{DataError, FetchError};
#[cfg(any(test, feature = "mock"))]
pub use router::MemoryHistory;
pub use router::{BrowserHistory, History, Router, link_target};
pub use state::{AppState, LoadKind, Page};
pub use supabase::SupabaseClient;
pub use view::{Heading, NavIcon, NavRow, heading, nav_rows};
