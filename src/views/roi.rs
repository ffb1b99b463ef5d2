//! Business value & ROI: invest vs benefit, top use cases, investment summary,
//! scenario modeling

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::primitives::{ChartKind, KeyValueList, SeriesSpec, Table, TrendChart};

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let slice = &data.roi;

    let timeline = TrendChart::new(
        ChartKind::Area,
        slice.timeline.clone(),
        vec![
            SeriesSpec::new("benefit", "Benefit ($)"),
            SeriesSpec::new("invest", "Investment ($)"),
        ],
    )?;
    let use_cases = Table::with_headers(
        &["Use Case", "Owner", "ROI", "Stage"],
        slice.use_cases.clone(),
    )?;
    let scenarios = Table::with_headers(
        &["Scenario", "Adoption +", "Benefit ($)", "Payback (mo)"],
        slice.scenarios.clone(),
    )?;

    Ok(vec![
        Section::single(
            Panel::new("ROI Timeline (Invest vs Benefit)").block(Block::Trend(timeline)),
        ),
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Use Case ROI (Top 5)").block(Block::Table(use_cases)),
                Panel::new("Investment Summary")
                    .block(Block::KeyValues(KeyValueList::new(slice.summary.clone()))),
            ],
        ),
        Section::single(Panel::new("Scenario Modeling (What-if)").block(Block::Table(scenarios))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;
    use crate::views::{test_support, ViewLayout};

    #[test]
    fn test_roi_layout() {
        let data = DashboardData::sample();
        let layout = ViewLayout {
            route: Route::Roi,
            sections: compose(&data).unwrap(),
        };

        let scenarios = test_support::table(&layout, "Scenario Modeling (What-if)");
        assert_eq!(scenarios.rows()[1][2], "$1,120,000");

        let summary = layout.panel("Investment Summary").unwrap();
        let Block::KeyValues(list) = &summary.blocks[0] else {
            panic!("expected key/value list");
        };
        assert_eq!(list.entries()[3].value, "30,100 hrs");
    }
}
