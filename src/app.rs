//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the wiring
//! between the router, the state controller and the browser.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Layout;
#[cfg(target_arch = "wasm32")]
use crate::core::link_target;
use crate::core::{AppState, BrowserHistory, Controller, LoadOutcome, Router, SupabaseClient};
use crate::models::{FilterSelection, NavItem, RouteName};
#[cfg(target_arch = "wasm32")]
use crate::utils::{console, dom};

type AppController = Controller<SupabaseClient>;
type AppRouter = Rc<Router<BrowserHistory>>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **`state`**: latest [`AppState`] snapshot published by the controller
/// - **controller**: the only writer of application state
/// - **router**: path dispatch; handlers ask the controller to show a route
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest state snapshot. Components only read it.
    pub state: RwSignal<AppState>,

    /// Whether the navigation sidebar is shown on narrow screens.
    pub sidebar_open: RwSignal<bool>,

    controller: StoredValue<AppController, LocalStorage>,
    router: StoredValue<AppRouter, LocalStorage>,
}

impl AppContext {
    /// Creates the context and registers a route handler for every route.
    pub fn new() -> Self {
        let controller = Controller::new(SupabaseClient::default());
        let router: AppRouter = Rc::new(Router::new(BrowserHistory));

        let state = RwSignal::new(controller.snapshot());
        controller.subscribe(move |snapshot| state.set(snapshot.clone()));

        for name in RouteName::ALL {
            let controller = controller.clone();
            router.register(name, move |route| {
                let controller = controller.clone();
                spawn_local(async move {
                    controller.show(route).await;
                });
            });
        }

        Self {
            state,
            sidebar_open: RwSignal::new(false),
            controller: StoredValue::new_local(controller),
            router: StoredValue::new_local(router),
        }
    }

    /// Run a controller operation in the background.
    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = LoadOutcome> + 'static,
    {
        let fut = op(self.controller.get_value());
        spawn_local(async move {
            fut.await;
        });
    }

    /// Push a path and dispatch it. Closes the sidebar on narrow screens.
    pub fn navigate(&self, path: &str) {
        self.sidebar_open.set(false);
        self.router.with_value(|router| router.navigate(path));
    }

    /// Re-dispatch the current location (initial load and back/forward).
    pub fn handle_route(&self) {
        self.router.with_value(|router| router.handle_route());
    }

    pub fn apply_filters(&self, filters: FilterSelection) {
        self.spawn(move |c| async move { c.apply_filters(filters).await });
    }

    pub fn clear_filters(&self) {
        self.spawn(|c| async move { c.clear_filters().await });
    }

    pub fn load_more(&self) {
        self.spawn(|c| async move { c.load_more().await });
    }

    /// Chevron click: toggle without navigating.
    pub fn toggle_folder(&self, item: NavItem) {
        self.controller.with_value(|c| c.toggle_folder(item));
    }

    /// Row click: apply the row's expansion, then navigate to it.
    pub fn open_row(&self, item: NavItem, href: &str) {
        self.controller.with_value(|c| c.activate_row(item));
        self.navigate(href);
    }

    /// Load the catalog, then dispatch the current location.
    fn start(&self) {
        let ctx = *self;
        self.spawn(move |c| async move {
            let outcome = c.populate_filters().await;
            ctx.handle_route();
            outcome
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Browser Events
// ============================================================================

/// Install the window `popstate` listener and the delegated link listener.
///
/// Runs once; the closures live for the lifetime of the app.
#[cfg(target_arch = "wasm32")]
fn install_listeners(ctx: AppContext) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(window) = dom::window() else {
        console::error("No window, browser listeners not installed");
        return;
    };

    let on_popstate = Closure::wrap(Box::new(move || {
        ctx.handle_route();
    }) as Box<dyn Fn()>);
    let _ = window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    on_popstate.forget();

    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some((href, marker)) = dom::route_link(&event) {
            event.prevent_default();
            ctx.navigate(&link_target(href, marker));
        }
    }) as Box<dyn Fn(web_sys::Event)>);
    if let Some(document) = window.document() {
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Installs the history and link listeners
/// - Loads the catalog and dispatches the initial route
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    #[cfg(target_arch = "wasm32")]
    install_listeners(ctx);
    ctx.start();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7f7f8;
                    color: #1f2328;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #cf222e; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #59636e; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #59636e;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #cf222e;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0969da;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Layout />
        </ErrorBoundary>
    }
}
