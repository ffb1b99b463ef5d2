//! Summary Card Component
//!
//! Label, prominent value and optional caption. KPI cards headline a view;
//! stat cards sit inside panels.

use control_center::primitives::CardSize;
use control_center::SummaryCard;
use leptos::*;

#[component]
pub fn SummaryCardView(card: SummaryCard) -> impl IntoView {
    let SummaryCard {
        label,
        value,
        caption,
        size,
    } = card;

    let (container, value_class) = match size {
        CardSize::Kpi => (
            "rounded-2xl border border-[#e8e8ee] bg-white p-4 shadow-sm",
            "text-2xl font-semibold mt-1",
        ),
        CardSize::Stat => (
            "rounded-xl border border-[#eee] bg-[#fafafe] p-3",
            "text-lg font-semibold",
        ),
    };

    view! {
        <div class=container>
            <div class="text-xs text-[#555]">{label}</div>
            <div class=value_class>{value}</div>
            {caption.map(|text| view! { <div class="text-xs text-[#777] mt-1">{text}</div> })}
        </div>
    }
}
