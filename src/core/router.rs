//! Path-based client-side router.
//!
//! Maps `location.pathname` to a [`Route`] and dispatches it to the handler
//! registered for its [`RouteName`]. The browser history sits behind the
//! [`History`] trait so routing can be exercised without a DOM.
//!
//! # Behavior
//!
//! - Unknown paths redirect to `/`
//! - Registering a handler again replaces the previous one
//! - The current route name only changes when a handler ran

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{Route, RouteName};
use crate::utils::{console, dom};

/// Session history the router reads from and pushes to.
pub trait History {
    /// Current location path.
    fn pathname(&self) -> String;

    /// Push a new entry without reloading.
    fn push(&self, path: &str);
}

/// `window.history` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn pathname(&self) -> String {
        dom::get_pathname()
    }

    fn push(&self, path: &str) {
        dom::push_path(path);
    }
}

/// In-memory history stack.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "mock"))]
impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_string()]),
        }
    }

    /// Every entry pushed so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Drop the newest entry, like the browser back button.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries.borrow_mut();
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().cloned()
    }
}

#[cfg(any(test, feature = "mock"))]
impl History for MemoryHistory {
    fn pathname(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }
}

type Handler = Rc<dyn Fn(Route)>;

pub struct Router<H> {
    history: H,
    handlers: RefCell<HashMap<RouteName, Handler>>,
    current: Cell<Option<RouteName>>,
}

impl<H: History> Router<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            handlers: RefCell::new(HashMap::new()),
            current: Cell::new(None),
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Register the handler of a route, replacing any previous one.
    pub fn register(&self, name: RouteName, handler: impl Fn(Route) + 'static) {
        self.handlers.borrow_mut().insert(name, Rc::new(handler));
    }

    /// Name of the most recently dispatched route.
    pub fn current_route(&self) -> Option<RouteName> {
        self.current.get()
    }

    /// Push `path` onto the history and dispatch it.
    pub fn navigate(&self, path: &str) {
        self.history.push(path);
        self.handle_route();
    }

    /// Dispatch the current location. Unknown paths redirect to `/`.
    pub fn handle_route(&self) {
        let path = self.history.pathname();
        match Route::from_path(&path) {
            Some(route) => self.dispatch(route),
            None => {
                console::warn(&format!("No route for {}, redirecting home", path));
                self.navigate(&Route::Home.to_path());
            }
        }
    }

    fn dispatch(&self, route: Route) {
        let name = route.name();
        let handler = self.handlers.borrow().get(&name).cloned();
        match handler {
            Some(handler) => {
                self.current.set(Some(name));
                handler(route);
            }
            None => console::warn(&format!("No handler registered for route {}", name)),
        }
    }
}

/// Destination of a clicked router link: its `href`, or the marker value
/// when the link has no usable `href`.
pub fn link_target(href: Option<String>, marker: String) -> String {
    href.filter(|h| !h.is_empty()).unwrap_or(marker)
}
