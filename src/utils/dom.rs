//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

/// Marker attribute of links handled by the router.
pub const ROUTE_ATTR: &str = "data-route";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location path (e.g. `/company/acme`).
pub fn get_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Push a path onto the session history without reloading.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Find the router link an event originated from, if any.
///
/// Returns the raw `href` attribute and the marker value of the closest
/// `a[data-route]` ancestor of the event target.
pub fn route_link(event: &Event) -> Option<(Option<String>, String)> {
    let target = event.target()?;
    let element = target.dyn_into::<Element>().ok()?;
    let link = element
        .closest(&format!("a[{}]", ROUTE_ATTR))
        .ok()
        .flatten()?;
    let marker = link.get_attribute(ROUTE_ATTR).unwrap_or_default();
    Some((link.get_attribute("href"), marker))
}
