//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Backend coordinates can be overridden at build time through environment
//! variables read with `option_env!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar.
pub const APP_NAME: &str = "AI News";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Base URL of the backend project (`AINEWS_BACKEND_URL`).
pub const BACKEND_URL: &str = match option_env!("AINEWS_BACKEND_URL") {
    Some(url) => url,
    None => "https://exzkrdamofzmuuguadrh.supabase.co",
};

/// Publishable (anonymous) API key (`AINEWS_BACKEND_KEY`).
pub const BACKEND_KEY: &str = match option_env!("AINEWS_BACKEND_KEY") {
    Some(key) => key,
    None => "sb_publishable_nCcLus9un19eKMEKfLdZLQ_xgGZGr-Q",
};

/// Path prefix of the REST interface.
pub const REST_PREFIX: &str = "/rest/v1";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Maximum number of records requested per paginated fetch.
pub const PAGE_SIZE: usize = 50;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query under which the navigation sidebar collapses.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
