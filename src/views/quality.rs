//! Quality & risk: accuracy and incidents, drift, compliance, incident log

use super::{Block, Columns, Panel, Section};
use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::primitives::{ChartKind, SeriesSpec, Table, TrendChart};

pub(super) fn compose(data: &DashboardData) -> ComposeResult<Vec<Section>> {
    let slice = &data.quality;

    let accuracy = TrendChart::new(
        ChartKind::Line,
        slice.series.clone(),
        vec![
            SeriesSpec::new("accuracy", "Workflow Accuracy (%)"),
            SeriesSpec::new("incidents", "Incidents"),
        ],
    )?;
    let drift = TrendChart::new(
        ChartKind::Area,
        slice.series.clone(),
        vec![SeriesSpec::new("drift", "Drift Score")],
    )?;
    let compliance = Table::with_headers(&["Control", "Status", "Notes"], slice.compliance.clone())?;
    let incidents = Table::with_headers(
        &["ID", "Severity", "Area", "Description", "SLA"],
        slice
            .incidents
            .iter()
            .map(|i| {
                vec![
                    i.id.clone(),
                    i.severity.clone(),
                    i.area.clone(),
                    i.description.clone(),
                    i.sla.clone(),
                ]
            })
            .collect(),
    )?;

    Ok(vec![
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Accuracy & Incidents").block(Block::Trend(accuracy)),
                Panel::new("Model Drift (KL/PSI proxy)").block(Block::Trend(drift)),
            ],
        ),
        Section::panels(
            Columns::Two,
            vec![
                Panel::new("Compliance & Governance").block(Block::Table(compliance)),
                Panel::new("Incident Management").block(Block::Table(incidents)),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Primitive, Problem};
    use crate::model::MetricPoint;

    #[test]
    fn test_missing_drift_reading_fails_view() {
        let mut data = DashboardData::sample();
        data.quality.series.push(
            MetricPoint::new("Jan")
                .field("accuracy", 96.8)
                .field("incidents", 1.0),
        );
        let err = compose(&data).unwrap_err();
        assert_eq!(err.primitive, Primitive::TrendChart);
        assert_eq!(err.field, "series.drift");
        assert!(matches!(err.problem, Problem::MissingField { index: 12, .. }));
    }
}
