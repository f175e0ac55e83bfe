//! End-to-end flows: router dispatch into the controller against the
//! in-memory backend.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ainews::config::PAGE_SIZE;
use ainews::core::mock::{MockBackend, SEEDED_POSTS};
use ainews::core::{
    AppState, Controller, History, MemoryHistory, Page, Router, link_target, nav_rows,
};
use ainews::models::{FilterSelection, NavItem, PostType, Route, RouteName};

/// Router and controller wired the way the application wires them, with
/// dispatched routes queued instead of spawned.
struct Harness {
    router: Router<MemoryHistory>,
    controller: Controller<MockBackend>,
    pending: Rc<RefCell<VecDeque<Route>>>,
}

impl Harness {
    fn new(path: &str) -> Self {
        let router = Router::new(MemoryHistory::new(path));
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        for name in RouteName::ALL {
            let queue = Rc::clone(&pending);
            router.register(name, move |route| queue.borrow_mut().push_back(route));
        }
        Self {
            router,
            controller: Controller::new(MockBackend::seeded()),
            pending,
        }
    }

    /// Load the catalog and dispatch the initial location.
    async fn start(&self) {
        self.controller.populate_filters().await;
        self.router.handle_route();
        self.settle().await;
    }

    /// Run every dispatched route to completion, in order.
    async fn settle(&self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(route) = next else { break };
            self.controller.show(route).await;
        }
    }

    async fn navigate(&self, path: &str) {
        self.router.navigate(path);
        self.settle().await;
    }

    /// Click a link whose attributes are `href` and `data-route`.
    async fn click_link(&self, href: Option<&str>, marker: &str) {
        let target = link_target(href.map(str::to_string), marker.to_string());
        self.navigate(&target).await;
    }

    /// Click the body of a navigation row.
    async fn click_row(&self, item: NavItem) {
        let href = nav_rows(&self.state())
            .into_iter()
            .find(|row| row.item == item)
            .map(|row| row.href)
            .expect("row is visible");
        self.controller.activate_row(item);
        self.navigate(&href).await;
    }

    fn state(&self) -> AppState {
        self.controller.snapshot()
    }
}

#[tokio::test]
async fn test_home_feed_first_page() {
    let app = Harness::new("/");
    app.start().await;

    let state = app.state();
    assert_eq!(app.router.current_route(), Some(RouteName::Home));
    assert_eq!(state.page, Page::Feed);
    assert_eq!(state.posts.len(), PAGE_SIZE);
    assert_eq!(state.posts[0].id, SEEDED_POSTS);
    assert!(state.posts.windows(2).all(|w| {
        w[0].date > w[1].date || (w[0].date == w[1].date && w[0].id > w[1].id)
    }));
    assert!(state.shows_filters());
    assert!(state.shows_load_more());
    assert_eq!(state.companies.len(), 3);
}

#[tokio::test]
async fn test_post_type_filter_resets_offset() {
    let app = Harness::new("/");
    app.start().await;
    app.controller.load_more().await;
    assert_eq!(app.state().pagination.offset, 2 * PAGE_SIZE);

    // The UI rereads every control; only the type control is set.
    let filters = FilterSelection::from_controls("", "", "", "Tutorial");
    assert_eq!(filters.post_type, Some(PostType::Tutorial));
    app.controller.apply_filters(filters).await;

    let state = app.state();
    let expected = app
        .controller
        .backend()
        .count_posts(|p| p.post_type == PostType::Tutorial);
    assert_eq!(state.posts.len(), expected);
    assert!(state.posts.iter().all(|p| p.post_type == PostType::Tutorial));
    assert_eq!(state.pagination.offset, expected);
    assert!(!state.shows_load_more());
}

#[tokio::test]
async fn test_category_filter_resets_offset() {
    let app = Harness::new("/");
    app.start().await;
    app.controller.load_more().await;
    let listings = app.controller.backend().post_listings();

    // No post carries the category "Tutorial", so the AND-combined
    // filter matches nothing.
    let filters = FilterSelection::from_controls("", "", "Tutorial", "");
    app.controller.apply_filters(filters).await;

    let state = app.state();
    assert!(state.posts.iter().all(|p| p.category.label() == "Tutorial"));
    assert!(state.posts.is_empty());
    assert_eq!(state.pagination.offset, 0);
    assert!(!state.pagination.has_more);
    assert!(!state.shows_load_more());
    assert!(state.shows_filters());
    assert_eq!(app.controller.backend().post_listings(), listings);
}

#[tokio::test]
async fn test_company_page_is_fully_paged() {
    let app = Harness::new("/company/acme");
    app.start().await;

    let state = app.state();
    let Page::Company { company, posts, .. } = &state.page else {
        panic!("expected company page, got {:?}", state.page);
    };
    assert_eq!(company.name, "Acme");
    assert_eq!(posts.len(), app.controller.backend().posts_of_company(1));
    assert!(posts.len() > PAGE_SIZE);
    assert!(!state.shows_filters());

    // One post listing per page, ending with a short page.
    let listings = app.controller.backend().post_listings();
    assert_eq!(listings, posts.len() / PAGE_SIZE + 1);
}

#[tokio::test]
async fn test_missing_product_keeps_content() {
    let app = Harness::new("/");
    app.start().await;
    let before = app.state();

    app.navigate("/product/widget").await;

    let state = app.state();
    assert_eq!(app.router.current_route(), Some(RouteName::Product));
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load product page. Please try again.")
    );
    assert_eq!(state.page, before.page);
    assert_eq!(state.posts, before.posts);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_chevron_toggle_keeps_route() {
    let app = Harness::new("/");
    app.start().await;
    let history = app.router.history().entries();

    app.controller.toggle_folder(NavItem::Companies);

    let state = app.state();
    assert!(state.nav.companies_expanded);
    assert_eq!(state.route, Some(Route::Home));
    assert_eq!(app.router.current_route(), Some(RouteName::Home));
    assert_eq!(app.router.history().entries(), history);

    // Company rows are now listed under the folder.
    let rows = nav_rows(&state);
    assert!(rows.iter().any(|r| r.item == NavItem::Company(2)));
}

#[tokio::test]
async fn test_row_click_navigates_and_expands() {
    let app = Harness::new("/");
    app.start().await;

    app.controller.toggle_folder(NavItem::Companies);
    app.click_row(NavItem::Company(1)).await;

    let state = app.state();
    assert_eq!(app.router.history().pathname(), "/company/acme");
    assert_eq!(state.current_company_id(), Some(1));
    assert!(state.nav.companies_expanded);
    assert!(state.nav.is_company_expanded(1));

    app.click_row(NavItem::Product(10)).await;
    let state = app.state();
    assert_eq!(app.router.history().pathname(), "/product/rocket");
    assert_eq!(state.current_product_id(), Some(10));
    assert!(matches!(state.page, Page::Product { .. }));

    app.click_row(NavItem::Feed).await;
    let state = app.state();
    assert_eq!(state.page, Page::Feed);
    assert_eq!(state.nav, Default::default());
}

#[tokio::test]
async fn test_link_clicks_and_back() {
    let app = Harness::new("/");
    app.start().await;

    app.click_link(Some("/products"), "products").await;
    assert!(matches!(app.state().page, Page::Products(_)));

    app.click_link(None, "/companies").await;
    assert!(matches!(app.state().page, Page::Companies(_)));

    app.router.history().back();
    app.router.handle_route();
    app.settle().await;
    assert!(matches!(app.state().page, Page::Products(_)));
    assert!(app.state().nav.products_expanded);
}

#[tokio::test]
async fn test_unknown_path_redirects_home() {
    let app = Harness::new("/company/");
    app.start().await;

    assert_eq!(app.router.history().pathname(), "/");
    assert_eq!(app.router.current_route(), Some(RouteName::Home));
    assert_eq!(app.state().page, Page::Feed);
}

#[tokio::test]
async fn test_company_filter_without_products_is_empty() {
    let app = Harness::new("/");
    app.start().await;
    let listings = app.controller.backend().post_listings();

    app.controller
        .apply_filters(FilterSelection {
            company_id: Some(3),
            ..Default::default()
        })
        .await;

    let state = app.state();
    assert!(state.posts.is_empty());
    assert!(!state.pagination.has_more);
    assert_eq!(app.controller.backend().post_listings(), listings);
}
