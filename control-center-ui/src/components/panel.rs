//! Panel and section layout

use control_center::{Block, Columns, Panel, Section};
use leptos::*;

use super::{
    DataTable, Heatmap, HighlightListView, KeyValueListView, ShareChartView, SummaryCardView,
    TrendChartView,
};

fn grid_class(columns: Columns) -> &'static str {
    match columns {
        Columns::One => "grid gap-4",
        Columns::Two => "grid lg:grid-cols-2 gap-4",
        Columns::Three => "grid lg:grid-cols-3 gap-4",
    }
}

/// A KPI row or a grid of panels
#[component]
pub fn SectionView(section: Section) -> impl IntoView {
    match section {
        Section::Cards(cards) => view! {
            <div class="grid md:grid-cols-2 xl:grid-cols-4 gap-4">
                {cards
                    .into_iter()
                    .map(|card| view! { <SummaryCardView card=card /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Section::Panels { columns, panels } => view! {
            <div class=grid_class(columns)>
                {panels
                    .into_iter()
                    .map(|panel| view! { <PanelView panel=panel /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}

/// Titled card with its blocks
#[component]
pub fn PanelView(panel: Panel) -> impl IntoView {
    let Panel {
        title,
        wide,
        columns,
        blocks,
    } = panel;

    let class = if wide {
        "rounded-2xl border border-[#e8e8ee] bg-white p-4 shadow-sm lg:col-span-2"
    } else {
        "rounded-2xl border border-[#e8e8ee] bg-white p-4 shadow-sm"
    };
    let body_class = match columns {
        Columns::One => "space-y-3",
        Columns::Two | Columns::Three => "grid lg:grid-cols-2 gap-4",
    };

    view! {
        <div class=class>
            <div class="text-sm text-[#555] mb-2">{title}</div>
            <div class=body_class>
                {blocks.into_iter().map(block_view).collect_view()}
            </div>
        </div>
    }
}

fn block_view(block: Block) -> View {
    match block {
        Block::Stats(cards) => view! {
            <div class="grid sm:grid-cols-2 gap-3">
                {cards
                    .into_iter()
                    .map(|card| view! { <SummaryCardView card=card /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Block::Highlights(list) => view! { <HighlightListView list=list /> }.into_view(),
        Block::KeyValues(list) => view! { <KeyValueListView list=list /> }.into_view(),
        Block::Table(table) => view! { <DataTable table=table /> }.into_view(),
        Block::Heatmap(matrix) => view! { <Heatmap matrix=matrix /> }.into_view(),
        Block::Trend(chart) => view! { <TrendChartView chart=chart /> }.into_view(),
        Block::Share(chart) => view! { <ShareChartView chart=chart /> }.into_view(),
        Block::Note(text) => view! { <div class="text-xs text-[#555] leading-snug">{text}</div> }.into_view(),
    }
}
