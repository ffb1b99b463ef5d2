//! Routing Controller
//!
//! One static table of route descriptors drives everything path-related:
//! view dispatch, side navigation links, active-link matching and page titles.
//! Matching is exact-path. Any path not in the table resolves to the default
//! route, so resolution is total.

use serde::{Deserialize, Serialize};

/// Path every unknown location is redirected to
pub const DEFAULT_PATH: &str = "/";

/// The seven navigable views, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Overview,
    Adoption,
    Efficiency,
    Revenue,
    Roi,
    Quality,
    Engagement,
}

/// Icon shown next to a side navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Bot,
    LineChart,
    TrendingUp,
    BadgeDollar,
    ShieldCheck,
    Users,
}

/// Static record binding a navigable path to its view, label, icon and title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub component: Route,
    pub nav_label: &'static str,
    pub nav_icon: NavIcon,
    pub title: &'static str,
}

/// Route table in navigation order
pub const ROUTES: [RouteDescriptor; 7] = [
    RouteDescriptor {
        path: "/",
        component: Route::Overview,
        nav_label: "Overview",
        nav_icon: NavIcon::Home,
        title: "Overview",
    },
    RouteDescriptor {
        path: "/adoption",
        component: Route::Adoption,
        nav_label: "Adoption",
        nav_icon: NavIcon::Bot,
        title: "Adoption Metrics",
    },
    RouteDescriptor {
        path: "/efficiency",
        component: Route::Efficiency,
        nav_label: "Efficiency & Cost",
        nav_icon: NavIcon::LineChart,
        title: "Efficiency & Cost Savings",
    },
    RouteDescriptor {
        path: "/revenue",
        component: Route::Revenue,
        nav_label: "Revenue",
        nav_icon: NavIcon::TrendingUp,
        title: "Revenue Impact",
    },
    RouteDescriptor {
        path: "/roi",
        component: Route::Roi,
        nav_label: "Business Value & ROI",
        nav_icon: NavIcon::BadgeDollar,
        title: "Business Value & ROI",
    },
    RouteDescriptor {
        path: "/quality",
        component: Route::Quality,
        nav_label: "Quality & Risk",
        nav_icon: NavIcon::ShieldCheck,
        title: "Quality & Risk",
    },
    RouteDescriptor {
        path: "/engagement",
        component: Route::Engagement,
        nav_label: "Engagement",
        nav_icon: NavIcon::Users,
        title: "Engagement & Change Mgmt",
    },
];

impl Route {
    /// All routes in table order
    pub fn all() -> impl Iterator<Item = Route> {
        ROUTES.iter().map(|d| d.component)
    }

    /// Exact-path lookup
    pub fn from_path(path: &str) -> Option<Route> {
        ROUTES
            .iter()
            .find(|d| d.path == path)
            .map(|d| d.component)
    }

    pub fn descriptor(self) -> &'static RouteDescriptor {
        // Table order matches variant order.
        &ROUTES[self as usize]
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Overview
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path names a known view
    Matched(Route),
    /// Unknown path; the location must be replaced by `to`
    Redirect { from: String, to: Route },
}

impl Resolution {
    /// The view that ends up displayed
    pub fn route(&self) -> Route {
        match self {
            Resolution::Matched(route) => *route,
            Resolution::Redirect { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

/// Resolve a location path to exactly one view
pub fn resolve(path: &str) -> Resolution {
    match Route::from_path(path) {
        Some(route) => Resolution::Matched(route),
        None => {
            let to = Route::default();
            tracing::debug!(from = %path, to = %to, "Unknown path, redirecting");
            Resolution::Redirect {
                from: path.to_string(),
                to,
            }
        }
    }
}

/// Page title for a path, `fallback` when the path is not in the table
pub fn title_for_path<'a>(path: &str, fallback: &'a str) -> &'a str {
    match Route::from_path(path) {
        Some(route) => route.title(),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_variants() {
        for (idx, route) in Route::all().enumerate() {
            assert_eq!(route as usize, idx);
            assert_eq!(route.descriptor().component, route);
        }
        assert_eq!(Route::all().count(), 7);
    }

    #[test]
    fn test_resolve_known_paths() {
        for descriptor in ROUTES.iter() {
            assert_eq!(
                resolve(descriptor.path),
                Resolution::Matched(descriptor.component)
            );
        }
    }

    #[test]
    fn test_resolve_unknown_redirects_to_default() {
        let resolution = resolve("/unknown");
        assert!(resolution.is_redirect());
        assert_eq!(resolution.route(), Route::Overview);
        assert_eq!(resolution.route().path(), DEFAULT_PATH);
    }

    #[test]
    fn test_resolve_is_exact() {
        assert!(resolve("/roi/").is_redirect());
        assert!(resolve("/roi/detail").is_redirect());
        assert!(resolve("/ROI").is_redirect());
        assert!(resolve("").is_redirect());
    }

    #[test]
    fn test_title_for_path() {
        let fallback = "Global AI Business Control Center";
        assert_eq!(title_for_path("/roi", fallback), Route::Roi.title());
        assert_eq!(title_for_path("/roi", fallback), "Business Value & ROI");
        assert_eq!(title_for_path("/", fallback), "Overview");
        assert_eq!(title_for_path("/nowhere", fallback), fallback);
    }
}
