//! Navigation state
//!
//! The only session-lived mutable state of the dashboard. The shell owns one
//! instance; the routing controller drives `current_path`, the menu control
//! drives `sidebar_open`, and neither event touches the other field.

use crate::routing::{self, Resolution, Route};

/// Side navigation visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sidebar {
    Open,
    Closed,
}

/// Current route and sidebar visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: Route,
    sidebar_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NavigationState {
    /// Fresh state on shell mount: default route, sidebar as configured
    pub fn new(sidebar_open: bool) -> Self {
        Self {
            current: Route::default(),
            sidebar_open,
        }
    }

    pub fn current_route(&self) -> Route {
        self.current
    }

    /// Always a path from the route table
    pub fn current_path(&self) -> &'static str {
        self.current.path()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn sidebar(&self) -> Sidebar {
        if self.sidebar_open {
            Sidebar::Open
        } else {
            Sidebar::Closed
        }
    }

    /// Flip sidebar visibility, returning the new value
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        tracing::debug!(open = self.sidebar_open, "Sidebar toggled");
        self.sidebar_open
    }

    /// Resolve `path` and make the resulting view current
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = routing::resolve(path);
        self.current = resolution.route();
        resolution
    }

    /// Exact-path match, same rule as the page title
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path() == path
    }

    pub fn page_title(&self) -> &'static str {
        self.current.title()
    }
}
