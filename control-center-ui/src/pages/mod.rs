//! Page host
//!
//! Composes the active route's layout and renders it. A primitive that
//! rejects its input fails only this view; the shell stays usable.

use control_center::{compose, DashboardData, MalformedInputError, Route, SeededGenerator};
use leptos::*;

use crate::components::SectionView;

#[component]
pub fn Page(
    route: Route,
    data: StoredValue<DashboardData>,
    generator: SeededGenerator,
) -> impl IntoView {
    match data.with_value(|data| compose(route, data, &generator)) {
        Ok(layout) => view! {
            <div class="space-y-4">
                {layout
                    .sections
                    .into_iter()
                    .map(|section| view! { <SectionView section=section /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Err(error) => {
            tracing::error!(route = %route, error = %error, "View failed to compose");
            view! { <ComposeFailure route=route error=error /> }.into_view()
        }
    }
}

#[component]
fn ComposeFailure(route: Route, error: MalformedInputError) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-red-200 bg-red-50 p-4">
            <div class="font-semibold text-red-700">{format!("{} is unavailable", route.title())}</div>
            <div class="text-sm text-red-600 mt-1">{error.to_string()}</div>
        </div>
    }
}
