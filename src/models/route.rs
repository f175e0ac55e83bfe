//! Path-based routes of the application.
//!
//! | Path              | Route              |
//! |-------------------|--------------------|
//! | `/`               | [`Route::Home`]    |
//! | `/companies`      | [`Route::Companies`] |
//! | `/company/<slug>` | [`Route::Company`] |
//! | `/products`       | [`Route::Products`] |
//! | `/product/<slug>` | [`Route::Product`] |
//!
//! Anything else does not resolve and is redirected to `/` by the router.

use std::fmt;

/// Name of a route, used as the handler registration key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Companies,
    Company,
    Products,
    Product,
}

impl RouteName {
    pub const ALL: [RouteName; 5] = [
        RouteName::Home,
        RouteName::Companies,
        RouteName::Company,
        RouteName::Products,
        RouteName::Product,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Companies => "companies",
            Self::Company => "company",
            Self::Products => "products",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved route with its path parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Chronological feed: `/`
    Home,
    /// All companies: `/companies`
    Companies,
    /// Company detail: `/company/<slug>`
    Company { slug: String },
    /// All products: `/products`
    Products,
    /// Product detail: `/product/<slug>`
    Product { slug: String },
}

impl Route {
    /// Resolve a URL path.
    ///
    /// Only the exact root maps to [`Route::Home`]. The slug is the second
    /// non-empty segment taken verbatim; segments after it are ignored.
    /// Returns `None` when nothing matches.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.is_empty() || path == "/" {
            return Some(Self::Home);
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["companies"] => Some(Self::Companies),
            ["company", slug, ..] => Some(Self::Company {
                slug: (*slug).to_string(),
            }),
            ["products"] => Some(Self::Products),
            ["product", slug, ..] => Some(Self::Product {
                slug: (*slug).to_string(),
            }),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Companies => "/companies".to_string(),
            Self::Company { slug } => format!("/company/{}", slug),
            Self::Products => "/products".to_string(),
            Self::Product { slug } => format!("/product/{}", slug),
        }
    }

    pub fn name(&self) -> RouteName {
        match self {
            Self::Home => RouteName::Home,
            Self::Companies => RouteName::Companies,
            Self::Company { .. } => RouteName::Company,
            Self::Products => RouteName::Products,
            Self::Product { .. } => RouteName::Product,
        }
    }
}
