//! Application state value.
//!
//! [`AppState`] is owned by the [`Controller`](crate::core::Controller) and
//! mutated only through its operations. The UI reads cloned snapshots.

use crate::models::{
    Company, FilterSelection, NavState, Pagination, Post, Product, ProductGroup, Route, RouteName,
};

/// Content currently shown in the main pane.
///
/// Replaced only when a load succeeds, so a failed navigation leaves the
/// previous page on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Nothing loaded yet.
    #[default]
    Blank,
    /// The filtered feed; posts live in [`AppState::posts`].
    Feed,
    Companies(Vec<Company>),
    Company {
        company: Company,
        products: Vec<Product>,
        posts: Vec<Post>,
    },
    Products(Vec<ProductGroup>),
    Product {
        product: Product,
        company: Company,
        posts: Vec<Post>,
    },
}

/// Which load an error banner refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    Posts,
    Filters,
    Companies,
    Company,
    Products,
    Product,
}

impl LoadKind {
    /// User-visible banner text for a failed load.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Posts => "Failed to load posts. Please try again.",
            Self::Filters => "Failed to load filters.",
            Self::Companies => "Failed to load companies page. Please try again.",
            Self::Company => "Failed to load company page. Please try again.",
            Self::Products => "Failed to load products page. Please try again.",
            Self::Product => "Failed to load product page. Please try again.",
        }
    }

    /// Short label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Filters => "filters",
            Self::Companies => "companies page",
            Self::Company => "company page",
            Self::Products => "products page",
            Self::Product => "product page",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Most recently entered route.
    pub route: Option<Route>,
    /// Accumulated feed posts across loaded pages.
    pub posts: Vec<Post>,
    /// Catalog for filter dropdowns and the navigation tree.
    pub companies: Vec<Company>,
    pub products: Vec<Product>,
    pub filters: FilterSelection,
    pub pagination: Pagination,
    pub current_company: Option<Company>,
    pub current_product: Option<Product>,
    pub nav: NavState,
    pub page: Page,
    pub loading: bool,
    /// Error banner text.
    pub error: Option<String>,
}

impl AppState {
    pub fn route_name(&self) -> Option<RouteName> {
        self.route.as_ref().map(Route::name)
    }

    pub fn current_company_id(&self) -> Option<i64> {
        self.current_company.as_ref().map(|c| c.id)
    }

    pub fn current_product_id(&self) -> Option<i64> {
        self.current_product.as_ref().map(|p| p.id)
    }

    /// Store a fetched feed page requested at `offset`.
    ///
    /// The first page replaces the list, later pages append.
    pub fn accept_feed_page(&mut self, offset: usize, page: Vec<Post>) {
        self.pagination.record_page(page.len());
        if offset == 0 {
            self.posts = page;
        } else {
            self.posts.extend(page);
        }
        if self.route_name() == Some(RouteName::Home) {
            self.page = Page::Feed;
        }
    }

    /// Re-derive navigation expansion from the active route.
    pub fn expand_nav_for_route(&mut self) {
        if let Some(route) = self.route_name() {
            let company = self.current_company_id();
            self.nav.expand_for_route(route, company);
        }
    }

    /// Whether the feed filter controls are shown: on the home route, and
    /// wherever the feed is still the displayed page.
    pub fn shows_filters(&self) -> bool {
        matches!(self.page, Page::Feed) || self.route_name() == Some(RouteName::Home)
    }

    /// Whether the "load more" control is shown.
    pub fn shows_load_more(&self) -> bool {
        self.shows_filters() && self.pagination.has_more
    }

    /// Products of one company, in catalog order.
    pub fn products_of(&self, company_id: i64) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.company_id == company_id)
    }
}
