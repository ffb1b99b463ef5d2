//! Overview: headline KPIs, adoption and revenue charts, and the highlight
//! panels of every other topic

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::format::{or_dash, thousands};
use crate::model::latest;
use crate::primitives::{ChartKind, HighlightList, SeriesSpec, ShareChart, SummaryCard, TrendChart};

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let adoption = &data.adoption.trend;
    let savings = &data.efficiency.savings;

    let kpis = vec![
        SummaryCard::kpi(
            "Workflows Automated",
            or_dash(latest(adoption, "workflows"), thousands),
        )
        .caption(format!("% eligible automated: {}", data.overview.automated_share)),
        SummaryCard::kpi("Agent MAU", or_dash(latest(adoption, "agent_mau"), thousands))
            .caption(format!("% employees assisted: {}", data.overview.assisted_share)),
        SummaryCard::kpi("Hours Saved (QTD)", or_dash(latest(savings, "hours"), thousands)),
        SummaryCard::kpi("AI ROI (Blended)", data.roi.blended.clone())
            .caption(format!("Top case: {}", data.overview.top_roi_case)),
    ];

    let trend = TrendChart::new(
        ChartKind::Area,
        adoption.clone(),
        vec![
            SeriesSpec::new("workflows", "Workflows Automated"),
            SeriesSpec::new("agent_mau", "Agent MAU"),
        ],
    )?;
    let mix = ShareChart::new(data.revenue.mix.clone())?;

    let highlights = [
        ("Adoption & Agentic AI Signals", &data.adoption.highlights),
        ("Efficiency & Cost Focus", &data.efficiency.highlights),
        ("Revenue Acceleration", &data.revenue.highlights),
        ("Business Value & ROI Readout", &data.roi.highlights),
        ("Quality, Risk & Compliance Watch", &data.quality.highlights),
        ("Engagement & Change Management Pulse", &data.engagement.highlights),
    ]
    .into_iter()
    .map(|(title, items)| {
        Panel::new(title).block(Block::Highlights(HighlightList::new(items.clone())))
    })
    .collect();

    Ok(vec![
        Section::Cards(kpis),
        Section::panels(
            Columns::Three,
            vec![
                Panel::new("Adoption Trend").wide().block(Block::Trend(trend)),
                Panel::new("Revenue Mix (AI-enabled)").block(Block::Share(mix)),
            ],
        ),
        Section::panels(Columns::Three, highlights),
    ])
}
