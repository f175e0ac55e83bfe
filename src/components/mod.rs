//! UI components built with Leptos.
//!
//! - [`layout`] - Application shell (sidebar, top bar, banners)
//! - [`nav`] - Sidebar navigation tree
//! - [`feed`] - Filters, post cards and the paginated feed
//! - [`pages`] - Companies, products and detail pages
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod feed;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod pages;

pub use layout::Layout;
