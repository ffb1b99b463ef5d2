//! Navigation Shell
//!
//! Sticky header with the sidebar toggle and page title, a collapsible side
//! navigation listing every route, and the content area.

use control_center::{title_for_path, DashboardConfig, NavIcon, NavigationState, RouteDescriptor, ROUTES};
use leptos::*;
use leptos_router::*;

/// Application frame around the active view
#[component]
pub fn Shell(
    nav: RwSignal<NavigationState>,
    config: DashboardConfig,
    children: Children,
) -> impl IntoView {
    let DashboardConfig {
        product_title,
        fallback_title,
        logo_url,
        ..
    } = config;

    let open = move || nav.with(|state| state.sidebar_open());
    // Titled from the raw location, so an unknown path shows the fallback
    // until the redirect lands
    let location = use_location();
    let page_title = move || {
        location
            .pathname
            .with(|path| title_for_path(path, &fallback_title).to_string())
    };

    view! {
        <div class="min-h-screen bg-white text-[#111]">
            <header class="sticky top-0 z-10 backdrop-blur bg-white/80 border-b border-[#ddd]">
                <div class="mx-auto max-w-7xl px-4 py-3 flex items-center gap-3">
                    <button
                        aria-label="Toggle menu"
                        class="p-2 rounded-xl border border-[#ddd] hover:bg-[#f4f4f8]"
                        on:click=move |_| nav.update(|state| {
                            state.toggle_sidebar();
                        })
                    >
                        {move || if open() { "✕" } else { "☰" }}
                    </button>
                    <span class="text-xl">"📊"</span>
                    <div class="font-semibold">{product_title}</div>
                    <div class="ml-auto flex items-center gap-3">
                        <div class="text-xs sm:text-sm font-medium whitespace-nowrap">{page_title}</div>
                        {logo_url.map(|src| view! {
                            <img src=src alt="Brand logo" class="h-6 w-auto object-contain" />
                        })}
                    </div>
                </div>
            </header>

            <div class="mx-auto max-w-7xl px-4 py-4 grid grid-cols-12 gap-4">
                <Show when=open>
                    <aside class="col-span-12 sm:col-span-3 lg:col-span-2">
                        <nav class="space-y-1">
                            {ROUTES
                                .iter()
                                .map(|descriptor| view! { <SideLink nav=nav descriptor=*descriptor /> })
                                .collect_view()}
                        </nav>
                    </aside>
                </Show>
                <main class=move || {
                    if open() {
                        "col-span-12 sm:col-span-9 lg:col-span-10 space-y-4"
                    } else {
                        "col-span-12 space-y-4"
                    }
                }>
                    {children()}
                </main>
            </div>
        </div>
    }
}

/// One navigation entry; active on an exact path match
#[component]
fn SideLink(nav: RwSignal<NavigationState>, descriptor: RouteDescriptor) -> impl IntoView {
    let path = descriptor.path;
    let class = move || {
        let base = "flex items-center gap-2 px-3 py-2 rounded-xl border transition-colors";
        if nav.with(|state| state.is_active(path)) {
            format!("{} bg-[#e0e0f9] border-[#c5c5e8]", base)
        } else {
            format!("{} bg-white border-[#e8e8ee] hover:border-[#cfcfe2]", base)
        }
    };

    view! {
        <A href=path exact=true class=class>
            <span>{glyph(descriptor.nav_icon)}</span>
            <span class="text-sm">{descriptor.nav_label}</span>
        </A>
    }
}

fn glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "🏠",
        NavIcon::Bot => "🤖",
        NavIcon::LineChart => "📈",
        NavIcon::TrendingUp => "💹",
        NavIcon::BadgeDollar => "💲",
        NavIcon::ShieldCheck => "🛡",
        NavIcon::Users => "👥",
    }
}
