//! Engagement & change management

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::primitives::{ChartKind, SeriesSpec, Table, TrendChart};

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let slice = &data.engagement;

    let activity = TrendChart::new(
        ChartKind::Bar,
        slice.activity.clone(),
        vec![
            SeriesSpec::new("exec_visits", "Executive Visits"),
            SeriesSpec::new("trainings", "Training Completions"),
        ],
    )?;
    // Adopter counts are proxied by automated workflows.
    let curve = TrendChart::new(
        ChartKind::Area,
        data.adoption.trend.clone(),
        vec![SeriesSpec::new("workflows", "Cumulative Adopters (proxy)")],
    )?;
    let satisfaction =
        Table::with_headers(&["Team", "Satisfaction", "NPS"], slice.satisfaction.clone())?;

    Ok(vec![
        Section::single(
            Panel::new("Executive & Training Engagement").block(Block::Trend(activity)),
        ),
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Change Adoption Curve").block(Block::Trend(curve)),
                Panel::new("Satisfaction & NPS").block(Block::Table(satisfaction)),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;
    use crate::views::{test_support, ViewLayout};

    #[test]
    fn test_adoption_curve_reuses_adoption_series() {
        let data = DashboardData::sample();
        let layout = ViewLayout {
            route: Route::Engagement,
            sections: compose(&data).unwrap(),
        };
        let curve = test_support::trend(&layout, "Change Adoption Curve");
        assert_eq!(curve.categories().len(), data.adoption.trend.len());
        assert_eq!(curve.values(0).last(), Some(&178.0));
    }
}
