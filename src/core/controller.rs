//! View and navigation state controller.
//!
//! The [`Controller`] owns the [`AppState`] and is the only place it is
//! mutated. Every commit publishes a snapshot to the subscribed listener,
//! which the UI turns into a signal update.
//!
//! # Overlapping loads
//!
//! Page loads (feed pages, list pages, detail pages) take a [`Ticket`] from
//! a generation counter when they start. A load only commits if its ticket
//! is still the latest when it finishes; otherwise its result is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::backend::{Backend, ProductScope, fetch_all_posts, fetch_posts};
use crate::core::error::DataError;
use crate::core::state::{AppState, LoadKind, Page};
use crate::models::{FilterSelection, NavItem, Route, RouteName, group_by_company};
use crate::utils::console;

/// Generation number taken by a load when it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// How a load ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Results were written to the state.
    Committed,
    /// The load failed; the error banner is set.
    Failed,
    /// A newer load started meanwhile; results were dropped.
    Superseded,
    /// Nothing to load.
    Skipped,
}

type Listener = Rc<dyn Fn(&AppState)>;

/// Shared handle to the application state and its operations.
///
/// Cloning is cheap; clones share the same state.
pub struct Controller<B> {
    backend: Rc<B>,
    state: Rc<RefCell<AppState>>,
    generation: Rc<Cell<u64>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl<B> Clone for Controller<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: Rc::clone(&self.state),
            generation: Rc::clone(&self.generation),
            listener: Rc::clone(&self.listener),
        }
    }
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
            state: Rc::new(RefCell::new(AppState::default())),
            generation: Rc::new(Cell::new(0)),
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register the snapshot listener and publish the current state to it.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
        self.publish();
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state.borrow_mut());
        self.publish();
    }

    fn publish(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.snapshot();
            listener(&snapshot);
        }
    }

    // =========================================================================
    // Load bookkeeping
    // =========================================================================

    /// Start a page load: supersede running loads, show the loading
    /// indicator and clear the error banner.
    fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Commit or report the result of a load started with `ticket`.
    fn finish<T>(
        &self,
        ticket: Ticket,
        kind: LoadKind,
        result: Result<T, DataError>,
        apply: impl FnOnce(&mut AppState, T),
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            console::debug(&format!("Discarding superseded {} load", kind.label()));
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(value) => {
                self.update(|s| {
                    apply(s, value);
                    s.loading = false;
                });
                LoadOutcome::Committed
            }
            Err(e) => {
                self.fail(kind, &e);
                self.update(|s| s.loading = false);
                LoadOutcome::Failed
            }
        }
    }

    fn fail(&self, kind: LoadKind, error: &DataError) {
        console::error(&format!("Error loading {}: {}", kind.label(), error));
        self.update(|s| s.error = Some(kind.failure_message().to_string()));
    }

    // =========================================================================
    // Catalog and feed
    // =========================================================================

    /// Fetch all companies and products for the filter controls and the
    /// navigation tree.
    ///
    /// Companies are committed as soon as they arrive, so a failed product
    /// listing still leaves the company controls filled in.
    pub async fn populate_filters(&self) -> LoadOutcome {
        let result = async {
            let companies = self.backend.list_companies().await?;
            self.update(|s| s.companies = companies);
            let products = self.backend.list_products(None).await?;
            self.update(|s| s.products = products);
            Ok::<_, DataError>(())
        }
        .await;

        match result {
            Ok(()) => {
                let (companies, products) =
                    self.with_state(|s| (s.companies.len(), s.products.len()));
                console::info(&format!(
                    "Loaded {} companies and {} products",
                    companies, products
                ));
                LoadOutcome::Committed
            }
            Err(e) => {
                self.fail(LoadKind::Filters, &e);
                LoadOutcome::Failed
            }
        }
    }

    /// Fetch the feed page at the current offset with the current filters.
    pub async fn load_posts(&self) -> LoadOutcome {
        let ticket = self.begin();
        let (filters, offset, limit) = self.with_state(|s| {
            (s.filters.clone(), s.pagination.offset, s.pagination.limit)
        });

        let result = fetch_posts(&*self.backend, &filters, offset, limit).await;
        self.finish(ticket, LoadKind::Posts, result, |s, posts| {
            s.accept_feed_page(offset, posts)
        })
    }

    /// Fetch the next feed page, if the last one was full.
    pub async fn load_more(&self) -> LoadOutcome {
        if !self.with_state(|s| s.pagination.has_more) {
            return LoadOutcome::Skipped;
        }
        self.load_posts().await
    }

    /// Replace the filter selection and reload the feed from the first page.
    pub async fn apply_filters(&self, filters: FilterSelection) -> LoadOutcome {
        self.update(|s| {
            s.filters = filters;
            s.pagination.reset();
            s.posts.clear();
        });
        self.load_posts().await
    }

    pub async fn clear_filters(&self) -> LoadOutcome {
        self.apply_filters(FilterSelection::default()).await
    }

    // =========================================================================
    // Routes
    // =========================================================================

    /// Enter a route and load its content.
    pub async fn show(&self, route: Route) -> LoadOutcome {
        console::debug(&format!("Entering route {}", route.name()));
        self.enter(&route);

        match route {
            Route::Home => self.show_home().await,
            Route::Companies => self.show_companies().await,
            Route::Company { slug } => self.show_company(&slug).await,
            Route::Products => self.show_products().await,
            Route::Product { slug } => self.show_product(&slug).await,
        }
    }

    /// Record the active route and drop entity pointers it does not use.
    fn enter(&self, route: &Route) {
        self.update(|s| {
            match route.name() {
                RouteName::Home | RouteName::Companies | RouteName::Products => {
                    s.current_company = None;
                    s.current_product = None;
                }
                RouteName::Company => s.current_product = None,
                RouteName::Product => {}
            }
            s.route = Some(route.clone());
        });
    }

    async fn show_home(&self) -> LoadOutcome {
        self.update(|s| {
            s.pagination.reset();
            s.expand_nav_for_route();
        });
        self.load_posts().await
    }

    async fn show_companies(&self) -> LoadOutcome {
        let ticket = self.begin();
        let result = self.backend.list_companies().await;
        self.finish(ticket, LoadKind::Companies, result, |s, companies| {
            s.companies = companies.clone();
            s.page = Page::Companies(companies);
            s.expand_nav_for_route();
        })
    }

    async fn show_products(&self) -> LoadOutcome {
        let ticket = self.begin();
        let result = async {
            let products = self.backend.list_products(None).await?;
            let companies = self.backend.list_companies().await?;
            Ok::<_, DataError>((products, companies))
        }
        .await;

        self.finish(ticket, LoadKind::Products, result, |s, (products, companies)| {
            s.page = Page::Products(group_by_company(&companies, &products));
            s.products = products;
            s.companies = companies;
            s.expand_nav_for_route();
        })
    }

    async fn show_company(&self, slug: &str) -> LoadOutcome {
        let ticket = self.begin();
        let result = async {
            let company = self.backend.company_by_slug(slug).await?;
            let products = self.backend.list_products(Some(company.id)).await?;
            let scope = ProductScope::AnyOf(products.iter().map(|p| p.id).collect());
            let posts = fetch_all_posts(&*self.backend, scope).await?;
            Ok::<_, DataError>((company, products, posts))
        }
        .await;

        self.finish(ticket, LoadKind::Company, result, |s, (company, products, posts)| {
            s.current_company = Some(company.clone());
            s.page = Page::Company {
                company,
                products,
                posts,
            };
            s.expand_nav_for_route();
        })
    }

    async fn show_product(&self, slug: &str) -> LoadOutcome {
        let ticket = self.begin();
        let result = async {
            let product = self.backend.product_by_slug(slug).await?;
            let company = self.backend.company_by_id(product.company_id).await?;
            let posts = fetch_all_posts(&*self.backend, ProductScope::One(product.id)).await?;
            Ok::<_, DataError>((product, company, posts))
        }
        .await;

        self.finish(ticket, LoadKind::Product, result, |s, (product, company, posts)| {
            s.current_product = Some(product.clone());
            s.current_company = Some(company.clone());
            s.page = Page::Product {
                product,
                company,
                posts,
            };
            s.expand_nav_for_route();
        })
    }

    // =========================================================================
    // Navigation tree
    // =========================================================================

    /// Chevron click: toggle a folder without navigating.
    pub fn toggle_folder(&self, item: NavItem) {
        self.update(|s| s.nav.toggle(item));
    }

    /// Row click: apply the row's expansion before navigating to it.
    pub fn activate_row(&self, item: NavItem) {
        self.update(|s| s.nav.activate(item));
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll, Waker};

    use super::*;
    use crate::config::PAGE_SIZE;
    use crate::core::mock::{MockBackend, SEEDED_POSTS};
    use crate::models::{Category, PostType};

    fn controller() -> Controller<MockBackend> {
        Controller::new(MockBackend::seeded())
    }

    fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
        future.poll(&mut Context::from_waker(Waker::noop()))
    }

    fn company_route(slug: &str) -> Route {
        Route::Company {
            slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn test_home_loads_first_page() {
        let ctrl = controller();
        assert_eq!(ctrl.show(Route::Home).await, LoadOutcome::Committed);

        let state = ctrl.snapshot();
        assert_eq!(state.posts.len(), PAGE_SIZE);
        assert_eq!(state.posts[0].id, SEEDED_POSTS);
        assert_eq!(state.page, Page::Feed);
        assert!(state.pagination.has_more);
        assert_eq!(state.pagination.offset, PAGE_SIZE);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_load_more_until_short_page() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        assert_eq!(ctrl.load_more().await, LoadOutcome::Committed);
        assert_eq!(ctrl.load_more().await, LoadOutcome::Committed);

        let state = ctrl.snapshot();
        assert_eq!(state.posts.len(), SEEDED_POSTS as usize);
        assert!(!state.pagination.has_more);
        assert_eq!(state.pagination.offset, SEEDED_POSTS as usize);

        let listings = ctrl.backend().post_listings();
        assert_eq!(ctrl.load_more().await, LoadOutcome::Skipped);
        assert_eq!(ctrl.backend().post_listings(), listings);
    }

    #[tokio::test]
    async fn test_apply_filters_resets_list() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.load_more().await;

        let filters = FilterSelection {
            post_type: Some(PostType::Tutorial),
            ..Default::default()
        };
        ctrl.apply_filters(filters).await;

        let state = ctrl.snapshot();
        let expected = ctrl
            .backend()
            .count_posts(|p| p.post_type == PostType::Tutorial);
        assert_eq!(state.posts.len(), expected);
        assert!(state.posts.iter().all(|p| p.post_type == PostType::Tutorial));
        assert_eq!(state.pagination.offset, expected);
        assert!(!state.pagination.has_more);
    }

    #[tokio::test]
    async fn test_filters_are_and_combined() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        let filters = FilterSelection {
            company_id: Some(1),
            category: Some(Category::Research),
            ..Default::default()
        };
        ctrl.apply_filters(filters).await;

        let state = ctrl.snapshot();
        let expected = ctrl
            .backend()
            .count_posts(|p| p.company.id == 1 && p.category == Category::Research);
        assert!(expected > 0);
        assert_eq!(state.posts.len(), expected);
    }

    #[tokio::test]
    async fn test_clear_filters() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.apply_filters(FilterSelection {
            product_id: Some(12),
            ..Default::default()
        })
        .await;
        ctrl.clear_filters().await;

        let state = ctrl.snapshot();
        assert!(state.filters.is_empty());
        assert_eq!(state.posts.len(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_failed_load_more_keeps_posts() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.backend().fail_posts(true);

        assert_eq!(ctrl.load_more().await, LoadOutcome::Failed);
        let state = ctrl.snapshot();
        assert_eq!(state.posts.len(), PAGE_SIZE);
        assert_eq!(state.pagination.offset, PAGE_SIZE);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load posts. Please try again.")
        );
        assert!(!state.loading);

        // Retrying clears the banner.
        ctrl.backend().fail_posts(false);
        assert_eq!(ctrl.load_more().await, LoadOutcome::Committed);
        assert_eq!(ctrl.snapshot().error, None);
        assert_eq!(ctrl.snapshot().posts.len(), 2 * PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_superseded_filter_load_is_dropped() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.backend().delay_next_posts(3);

        let tutorials = FilterSelection {
            post_type: Some(PostType::Tutorial),
            ..Default::default()
        };
        let news = FilterSelection {
            post_type: Some(PostType::News),
            ..Default::default()
        };

        let mut slow = std::pin::pin!(ctrl.apply_filters(tutorials));
        assert!(poll_once(slow.as_mut()).is_pending());

        assert_eq!(ctrl.apply_filters(news).await, LoadOutcome::Committed);
        assert_eq!(slow.await, LoadOutcome::Superseded);

        let state = ctrl.snapshot();
        assert!(!state.posts.is_empty());
        assert!(state.posts.iter().all(|p| p.post_type == PostType::News));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_company_page_pages_through_everything() {
        let ctrl = controller();
        assert_eq!(ctrl.show(company_route("acme")).await, LoadOutcome::Committed);

        let state = ctrl.snapshot();
        let Page::Company {
            company,
            products,
            posts,
        } = &state.page
        else {
            panic!("expected company page, got {:?}", state.page);
        };
        assert_eq!(company.slug, "acme");
        assert_eq!(products.len(), 2);
        assert_eq!(posts.len(), ctrl.backend().posts_of_company(1));
        assert!(posts.len() > PAGE_SIZE);
        assert!(posts.iter().all(|p| p.company.id == 1));
        assert_eq!(state.current_company_id(), Some(1));

        assert!(state.nav.companies_expanded);
        assert!(!state.nav.products_expanded);
        assert!(state.nav.is_company_expanded(1));
    }

    #[tokio::test]
    async fn test_company_route_twice_same_expansion() {
        let ctrl = controller();
        ctrl.show(company_route("acme")).await;
        let once = ctrl.snapshot().nav;
        ctrl.show(company_route("acme")).await;
        assert_eq!(ctrl.snapshot().nav, once);
    }

    #[tokio::test]
    async fn test_product_page() {
        let ctrl = controller();
        let route = Route::Product {
            slug: "hammock".to_string(),
        };
        assert_eq!(ctrl.show(route).await, LoadOutcome::Committed);

        let state = ctrl.snapshot();
        assert_eq!(state.current_product_id(), Some(12));
        assert_eq!(state.current_company_id(), Some(2));
        let Page::Product { posts, .. } = &state.page else {
            panic!("expected product page");
        };
        assert_eq!(posts.len(), ctrl.backend().count_posts(|p| p.product_id == 12));
        assert!(state.nav.is_company_expanded(2));
    }

    #[tokio::test]
    async fn test_missing_product_keeps_page() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        let before = ctrl.snapshot();

        let route = Route::Product {
            slug: "widget".to_string(),
        };
        assert_eq!(ctrl.show(route).await, LoadOutcome::Failed);

        let state = ctrl.snapshot();
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load product page. Please try again.")
        );
        assert_eq!(state.page, before.page);
        assert_eq!(state.posts, before.posts);
        assert_eq!(state.current_product, None);
    }

    #[tokio::test]
    async fn test_list_pages() {
        let ctrl = controller();
        ctrl.show(Route::Companies).await;
        let state = ctrl.snapshot();
        assert!(matches!(&state.page, Page::Companies(c) if c.len() == 3));
        assert!(state.nav.companies_expanded && !state.nav.products_expanded);

        ctrl.show(Route::Products).await;
        let state = ctrl.snapshot();
        let Page::Products(groups) = &state.page else {
            panic!("expected products page");
        };
        let names: Vec<&str> = groups.iter().map(|g| g.company.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
        assert!(!state.nav.companies_expanded && state.nav.products_expanded);
    }

    #[tokio::test]
    async fn test_populate_filters() {
        let ctrl = controller();
        assert_eq!(ctrl.populate_filters().await, LoadOutcome::Committed);
        let state = ctrl.snapshot();
        assert_eq!(state.companies.len(), 3);
        assert_eq!(state.products.len(), 3);

        let ctrl = controller();
        ctrl.backend().fail_catalog(true);
        assert_eq!(ctrl.populate_filters().await, LoadOutcome::Failed);
        assert_eq!(
            ctrl.snapshot().error.as_deref(),
            Some("Failed to load filters.")
        );
    }

    #[tokio::test]
    async fn test_populate_filters_keeps_companies_when_products_fail() {
        let ctrl = controller();
        ctrl.backend().fail_products(true);
        assert_eq!(ctrl.populate_filters().await, LoadOutcome::Failed);

        let state = ctrl.snapshot();
        assert_eq!(state.companies.len(), 3);
        assert!(state.products.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to load filters."));
    }

    #[tokio::test]
    async fn test_unknown_category_empties_feed() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.load_more().await;

        let filters = FilterSelection::from_controls("", "", "Tutorial", "");
        assert_eq!(ctrl.apply_filters(filters).await, LoadOutcome::Committed);

        let state = ctrl.snapshot();
        assert!(state.posts.is_empty());
        assert_eq!(state.pagination.offset, 0);
        assert!(!state.pagination.has_more);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_home_collapses_tree_and_clears_entities() {
        let ctrl = controller();
        ctrl.show(company_route("acme")).await;
        ctrl.show(Route::Home).await;

        let state = ctrl.snapshot();
        assert_eq!(state.current_company, None);
        assert_eq!(state.nav, Default::default());
        assert_eq!(state.page, Page::Feed);
    }

    #[tokio::test]
    async fn test_toggle_folder_keeps_route() {
        let ctrl = controller();
        ctrl.show(Route::Home).await;
        ctrl.toggle_folder(NavItem::Companies);

        let state = ctrl.snapshot();
        assert!(state.nav.companies_expanded);
        assert_eq!(state.route, Some(Route::Home));
    }

    #[tokio::test]
    async fn test_listener_receives_snapshots() {
        let ctrl = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ctrl.subscribe(move |s| sink.borrow_mut().push(s.loading));

        ctrl.show(Route::Home).await;
        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&false));
        assert!(seen.contains(&true));
        assert_eq!(seen.last(), Some(&false));
    }
}
