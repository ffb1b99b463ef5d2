//! Adoption: coverage and catalog, trend, utilization heatmap, backlog

use super::{Block, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::format::multiple;
use crate::primitives::{
    ChartKind, IntensityGenerator, IntensityGrid, SeriesSpec, SummaryCard, Table, TrendChart,
};

pub(super) fn compose(
    data: &DashboardData,
    generator: &dyn IntensityGenerator,
) -> ComposeResult<Vec<Section>> {
    let slice = &data.adoption;

    let stats = slice.coverage.iter().map(SummaryCard::from).collect();
    let catalog = Table::with_headers(
        &["Workflow/Agent", "Owner", "Status", "ROI"],
        slice
            .catalog
            .iter()
            .map(|w| vec![w.name.clone(), w.owner.clone(), w.status.clone(), multiple(w.roi)])
            .collect(),
    )?;

    let trend = TrendChart::new(
        ChartKind::Line,
        slice.trend.clone(),
        vec![
            SeriesSpec::new("agent_mau", "Agent MAU"),
            SeriesSpec::new("workflows", "Workflows Automated"),
        ],
    )?;

    let utilization = IntensityGrid::generate(&slice.business_units, &data.periods, generator);

    let backlog = Table::with_headers(
        &["Name", "Type", "Owner", "Impact", "Status"],
        slice
            .backlog
            .iter()
            .map(|b| {
                vec![
                    b.name.clone(),
                    b.kind.clone(),
                    b.owner.clone(),
                    b.impact.clone(),
                    b.status.clone(),
                ]
            })
            .collect(),
    )?;

    Ok(vec![
        Section::single(
            Panel::new("Automation Coverage & Catalog")
                .split()
                .block(Block::Stats(stats))
                .block(Block::Table(catalog)),
        ),
        Section::single(Panel::new("Adoption Trend").block(Block::Trend(trend))),
        Section::single(
            Panel::new("Automation Utilization Heatmap").block(Block::Heatmap(utilization)),
        ),
        Section::single(Panel::new("Bottleneck Backlog").block(Block::Table(backlog))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::SeededGenerator;
    use crate::routing::Route;
    use crate::views::{test_support, ViewLayout};

    fn layout(data: &DashboardData, seed: u64) -> ViewLayout {
        ViewLayout {
            route: Route::Adoption,
            sections: compose(data, &SeededGenerator::new(seed)).unwrap(),
        }
    }

    #[test]
    fn test_catalog_rows_formatted() {
        let layout = layout(&DashboardData::sample(), 1);
        let catalog = test_support::table(&layout, "Automation Coverage & Catalog");
        assert_eq!(catalog.rows().len(), 5);
        assert_eq!(catalog.rows()[0][3], "3.8x");
    }

    #[test]
    fn test_heatmap_covers_units_by_periods() {
        let data = DashboardData::sample();
        let layout = layout(&data, 1);
        let heatmap = layout
            .blocks()
            .find_map(|b| match b {
                Block::Heatmap(m) => Some(m),
                _ => None,
            })
            .unwrap();
        assert_eq!(heatmap.row_labels(), data.adoption.business_units.as_slice());
        assert_eq!(heatmap.column_labels(), data.periods.as_slice());
        assert_eq!(heatmap.rows().count(), 7);
    }

    #[test]
    fn test_heatmap_stable_for_same_seed() {
        let data = DashboardData::sample();
        assert_eq!(layout(&data, 5), layout(&data, 5));
    }

    #[test]
    fn test_trend_series_order() {
        let layout = layout(&DashboardData::sample(), 1);
        let trend = test_support::trend(&layout, "Adoption Trend");
        assert_eq!(trend.kind(), ChartKind::Line);
        assert_eq!(trend.series()[0].field, "agent_mau");
    }
}
