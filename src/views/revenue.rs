//! Revenue: mix, uplift and conversion, upsell/cross-sell, innovation pipeline

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::primitives::{ChartKind, SeriesSpec, ShareChart, Table, TrendChart};

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let slice = &data.revenue;

    let mix = ShareChart::new(slice.mix.clone())?;
    let uplift = TrendChart::new(
        ChartKind::Line,
        slice.uplift.clone(),
        vec![
            SeriesSpec::new("uplift", "Sales Uplift %"),
            SeriesSpec::new("conversion", "Lead Conversion %"),
        ],
    )?;
    let cross_sell = TrendChart::new(
        ChartKind::Bar,
        slice.cross_sell.clone(),
        vec![
            SeriesSpec::new("upsell", "Upsell ($k)"),
            SeriesSpec::new("cross_sell", "Cross-sell ($k)"),
        ],
    )?;
    let pipeline = Table::with_headers(
        &["Idea", "Stage", "Owner", "Est. ARR"],
        slice.pipeline.clone(),
    )?;

    Ok(vec![
        Section::panels(
            Columns::Three,
            vec![
                Panel::new("Revenue Mix (AI-enabled)").block(Block::Share(mix)),
                Panel::new("Sales Uplift & Conversion")
                    .wide()
                    .block(Block::Trend(uplift)),
            ],
        ),
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Upsell & Cross-Sell (Incremental)").block(Block::Trend(cross_sell)),
                Panel::new("Innovation Pipeline").block(Block::Table(pipeline)),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Primitive, Problem};
    use crate::model::CategoryShare;

    #[test]
    fn test_mix_passed_through_in_order() {
        let data = DashboardData::sample();
        let sections = compose(&data).unwrap();
        let Section::Panels { panels, .. } = &sections[0] else {
            panic!("expected panel grid");
        };
        let Block::Share(mix) = &panels[0].blocks[0] else {
            panic!("expected share chart");
        };
        assert_eq!(mix.shares(), data.revenue.mix.as_slice());
    }

    #[test]
    fn test_negative_share_fails_view() {
        let mut data = DashboardData::sample();
        data.revenue.mix.push(CategoryShare::new("Refunds", -4.0));
        let err = compose(&data).unwrap_err();
        assert_eq!(err.primitive, Primitive::ShareChart);
        assert!(matches!(err.problem, Problem::Negative { index: 5, .. }));
    }
}
