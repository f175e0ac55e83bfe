//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Company`], [`Product`], [`Post`], [`Category`], [`PostType`] - Feed records
//! - [`Route`], [`RouteName`] - Path-based navigation
//! - [`FilterSelection`], [`Pagination`] - Feed query state
//! - [`NavState`], [`NavItem`], [`ItemState`] - Navigation tree state

mod feed;
mod filters;
mod nav;
mod route;

pub use feed::{
    Category, Company, Post, PostType, Product, ProductGroup, UnknownLabel, group_by_company,
};
pub use filters::{FilterSelection, Pagination};
pub use nav::{ItemState, NavItem, NavState};
pub use route::{Route, RouteName};
