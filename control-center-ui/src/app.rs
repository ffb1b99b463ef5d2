//! App Root Component
//!
//! Owns the navigation state and wires the routing controller to the browser
//! location. Exactly one view is hosted at a time.

use control_center::{Config, DashboardData, NavigationState, Resolution, SeededGenerator};
use leptos::*;
use leptos_router::*;

use crate::components::Shell;
use crate::pages::Page;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    let data = store_value(DashboardData::sample());
    let generator = config.heatmap.generator();

    // The only mutable session state; passed down, never put in context
    let nav = create_rw_signal(NavigationState::new(config.dashboard.sidebar_open));

    view! {
        <Router>
            <Shell nav=nav config=config.dashboard>
                <RouteHost nav=nav data=data generator=generator />
            </Shell>
        </Router>
    }
}

/// Routing controller: location path → one view, unknown paths → `/`
#[component]
fn RouteHost(
    nav: RwSignal<NavigationState>,
    data: StoredValue<DashboardData>,
    generator: SeededGenerator,
) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let path = location.pathname.get();
        let mut resolution = None;
        nav.update(|state| resolution = Some(state.navigate(&path)));

        // `resolve` has already logged the redirect
        if let Some(Resolution::Redirect { to, .. }) = resolution {
            navigate(
                to.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let route = create_memo(move |_| nav.with(|state| state.current_route()));

    move || view! { <Page route=route.get() data=data generator=generator /> }
}
