//! Efficiency & cost: savings, per-workflow cost, vendor replacement,
//! benchmarking and SLA compression

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::format::currency;
use crate::primitives::{ChartKind, SeriesSpec, Table, TrendChart};

const SLA_NOTE: &str = "Tracking SLA compression highlights service reliability gains beyond \
pure ROI. For example, ticket resolution accelerates from three hours manually to ten minutes \
with an agent.";

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let slice = &data.efficiency;

    let savings = TrendChart::new(
        ChartKind::Bar,
        slice.savings.clone(),
        vec![
            SeriesSpec::new("hours", "Hours Saved"),
            SeriesSpec::new("cost", "Cost Saved"),
        ],
    )?;

    let per_workflow = TrendChart::new(
        ChartKind::Bar,
        slice.cost_per_workflow.clone(),
        vec![
            SeriesSpec::new("ai", "AI ($ per task)"),
            SeriesSpec::new("manual", "Manual ($ per task)"),
        ],
    )?;

    let vendors = Table::with_headers(
        &["Legacy Tool", "Monthly Cost", "Replaced By", "Status"],
        slice
            .vendors
            .iter()
            .map(|v| {
                vec![
                    v.tool.clone(),
                    currency(v.monthly_cost),
                    v.replaced_by.clone(),
                    v.status.clone(),
                ]
            })
            .collect(),
    )?;

    let benchmarks = Table::with_headers(
        &["Division", "AI Hours Saved/Q", "Cost Saved/Q", "Coverage %"],
        slice.benchmarks.clone(),
    )?;

    let sla = Table::with_headers(
        &["Workflow", "Manual SLA", "Agent SLA", "Improvement"],
        slice
            .sla
            .iter()
            .map(|s| {
                vec![
                    s.process.clone(),
                    s.manual.clone(),
                    s.agent.clone(),
                    s.improvement.clone(),
                ]
            })
            .collect(),
    )?;

    Ok(vec![
        Section::single(Panel::new("Hours & Cost Saved").block(Block::Trend(savings))),
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Cost per Workflow (AI vs Manual)").block(Block::Trend(per_workflow)),
                Panel::new("Vendor Replacement & Cost Avoided").block(Block::Table(vendors)),
            ],
        ),
        Section::single(Panel::new("Efficiency Benchmarking").block(Block::Table(benchmarks))),
        Section::single(
            Panel::new("SLA Improvement Metrics")
                .block(Block::Table(sla))
                .block(Block::Note(SLA_NOTE.to_string())),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Primitive;
    use crate::routing::Route;
    use crate::views::{test_support, ViewLayout};

    fn layout(data: &DashboardData) -> ComposeResult<ViewLayout> {
        Ok(ViewLayout {
            route: Route::Efficiency,
            sections: compose(data)?,
        })
    }

    #[test]
    fn test_vendor_costs_formatted() {
        let layout = layout(&DashboardData::sample()).unwrap();
        let vendors = test_support::table(&layout, "Vendor Replacement & Cost Avoided");
        assert_eq!(vendors.rows()[0][1], "$22,000");
    }

    #[test]
    fn test_ragged_benchmark_row_fails_view() {
        let mut data = DashboardData::sample();
        data.efficiency.benchmarks.push(vec!["Sports & Leisure".to_string()]);
        let err = layout(&data).unwrap_err();
        assert_eq!(err.primitive, Primitive::Table);
    }

    #[test]
    fn test_sla_panel_carries_note() {
        let layout = layout(&DashboardData::sample()).unwrap();
        let panel = layout.panel("SLA Improvement Metrics").unwrap();
        assert!(matches!(panel.blocks.last(), Some(Block::Note(_))));
    }
}
