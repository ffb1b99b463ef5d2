//! Chart models
//!
//! `TrendChart` plots named fields of an ordered series as lines, areas or
//! grouped bars; `ShareChart` shows category shares as slices of a whole. Both
//! validate their numbers up front so the canvas renderer can draw without
//! checks of its own.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ComposeResult, MalformedInputError, Primitive, Problem};
use crate::model::{CategoryShare, MetricPoint};

/// How a trend chart draws its series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
}

/// One plotted field and its legend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    pub field: String,
    pub name: String,
}

impl SeriesSpec {
    pub fn new(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            name: name.into(),
        }
    }
}

/// Ordered series plotted against its categorical keys
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    kind: ChartKind,
    points: Vec<MetricPoint>,
    series: Vec<SeriesSpec>,
}

impl TrendChart {
    /// Every series field must be present and finite in every point
    pub fn new(
        kind: ChartKind,
        points: Vec<MetricPoint>,
        series: Vec<SeriesSpec>,
    ) -> ComposeResult<Self> {
        for spec in &series {
            for (index, point) in points.iter().enumerate() {
                let field = format!("series.{}", spec.field);
                match point.value(&spec.field) {
                    None => {
                        return Err(MalformedInputError::new(
                            Primitive::TrendChart,
                            field,
                            Problem::MissingField {
                                index,
                                key: point.key.clone(),
                            },
                        ))
                    }
                    Some(v) if !v.is_finite() => {
                        return Err(MalformedInputError::new(
                            Primitive::TrendChart,
                            field,
                            Problem::NonFinite { index },
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self {
            kind,
            points,
            series,
        })
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn series(&self) -> &[SeriesSpec] {
        &self.series
    }

    /// X-axis keys in supplied order
    pub fn categories(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.key.as_str()).collect()
    }

    /// Values of the series at `index`, one per category
    pub fn values(&self, index: usize) -> Vec<f64> {
        let Some(spec) = self.series.get(index) else {
            return Vec::new();
        };
        self.points
            .iter()
            .filter_map(|p| p.value(&spec.field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.series.is_empty()
    }

    /// Y-axis range covering every plotted value
    pub fn scale(&self) -> ValueScale {
        ValueScale::fit(
            (0..self.series.len()).flat_map(|i| self.values(i)),
        )
    }
}

/// Vertical value range of a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Zero-based range with 10% head room; flat or empty data gets a unit span
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }

        if !lo.is_finite() || !hi.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }

        let mut min = lo.min(0.0);
        let mut max = hi.max(0.0);
        let span = max - min;
        if span == 0.0 {
            max += 1.0;
        } else {
            if max > 0.0 {
                max += span * 0.1;
            }
            if min < 0.0 {
                min -= span * 0.1;
            }
        }

        Self { min, max }
    }

    /// Fraction of the range from the bottom, 0.0..=1.0 for in-range values
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Pixel offset from the top of a plot area `height` tall
    pub fn project(&self, value: f64, height: f64) -> f64 {
        (1.0 - self.normalize(value)) * height
    }

    /// `count + 1` evenly spaced tick values from max down to min
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.max - (i as f64 / count as f64) * (self.max - self.min))
            .collect()
    }
}

/// One slice of a share chart
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSlice {
    pub name: String,
    pub value: f64,
    pub fraction: f64,
    /// Radians, clockwise from twelve o'clock
    pub start_angle: f64,
    pub sweep: f64,
}

/// Category shares rendered as parts of a whole
#[derive(Debug, Clone, PartialEq)]
pub struct ShareChart {
    shares: Vec<CategoryShare>,
}

impl ShareChart {
    /// Shares must be finite and non-negative; they need not sum to 100
    pub fn new(shares: Vec<CategoryShare>) -> ComposeResult<Self> {
        for (index, share) in shares.iter().enumerate() {
            if !share.value.is_finite() {
                return Err(MalformedInputError::new(
                    Primitive::ShareChart,
                    "value",
                    Problem::NonFinite { index },
                ));
            }
            if share.value < 0.0 {
                return Err(MalformedInputError::new(
                    Primitive::ShareChart,
                    "value",
                    Problem::Negative {
                        index,
                        value: share.value,
                    },
                ));
            }
        }

        Ok(Self { shares })
    }

    pub fn shares(&self) -> &[CategoryShare] {
        &self.shares
    }

    pub fn total(&self) -> f64 {
        self.shares.iter().map(|s| s.value).sum()
    }

    /// Slices in supplied order; a zero total yields zero-sweep slices
    pub fn slices(&self) -> Vec<ShareSlice> {
        let total = self.total();
        let mut angle = -FRAC_PI_2;

        self.shares
            .iter()
            .map(|share| {
                let fraction = if total > 0.0 { share.value / total } else { 0.0 };
                let sweep = fraction * 2.0 * PI;
                let slice = ShareSlice {
                    name: share.name.clone(),
                    value: share.value,
                    fraction,
                    start_angle: angle,
                    sweep,
                };
                angle += sweep;
                slice
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarters() -> Vec<MetricPoint> {
        vec![
            MetricPoint::new("Q1").field("invest", 260000.0).field("benefit", 540000.0),
            MetricPoint::new("Q2").field("invest", 280000.0).field("benefit", 690000.0),
        ]
    }

    #[test]
    fn test_trend_chart_categories_and_values() {
        let chart = TrendChart::new(
            ChartKind::Area,
            quarters(),
            vec![SeriesSpec::new("benefit", "Benefit ($)")],
        )
        .unwrap();
        assert_eq!(chart.categories(), vec!["Q1", "Q2"]);
        assert_eq!(chart.values(0), vec![540000.0, 690000.0]);
        assert!(chart.values(3).is_empty());
    }

    #[test]
    fn test_trend_chart_missing_field() {
        let err = TrendChart::new(
            ChartKind::Line,
            quarters(),
            vec![SeriesSpec::new("drift", "Drift")],
        )
        .unwrap_err();
        assert_eq!(err.primitive, Primitive::TrendChart);
        assert_eq!(err.field, "series.drift");
        assert!(matches!(err.problem, Problem::MissingField { index: 0, .. }));
    }

    #[test]
    fn test_trend_chart_non_finite() {
        let points = vec![MetricPoint::new("Jan").field("accuracy", f64::NAN)];
        let err = TrendChart::new(ChartKind::Line, points, vec![SeriesSpec::new("accuracy", "Accuracy")])
            .unwrap_err();
        assert_eq!(err.problem, Problem::NonFinite { index: 0 });
    }

    #[test]
    fn test_empty_trend_chart_is_valid() {
        let chart = TrendChart::new(ChartKind::Bar, Vec::new(), vec![SeriesSpec::new("hours", "Hours")])
            .unwrap();
        assert!(chart.is_empty());
        assert_eq!(chart.scale(), ValueScale { min: 0.0, max: 1.0 });
    }

    #[test]
    fn test_value_scale() {
        let scale = ValueScale::fit([10.0, 50.0, 100.0]);
        assert_eq!(scale.min, 0.0);
        assert!((scale.max - 110.0).abs() < 1e-9);
        assert!((scale.project(0.0, 200.0) - 200.0).abs() < 1e-9);
        assert!((scale.project(110.0, 200.0)).abs() < 1e-9);

        let flat = ValueScale::fit([0.0, 0.0]);
        assert_eq!(flat, ValueScale { min: 0.0, max: 1.0 });

        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[5] - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_slices() {
        let chart = ShareChart::new(vec![
            CategoryShare::new("Upsell Reco", 38.0),
            CategoryShare::new("Lead Scoring", 22.0),
            CategoryShare::new("Other", 40.0),
        ])
        .unwrap();
        let slices = chart.slices();
        assert_eq!(slices.len(), 3);
        assert!((slices[0].fraction - 0.38).abs() < 1e-9);
        assert!((slices[1].start_angle - (slices[0].start_angle + slices[0].sweep)).abs() < 1e-9);
        let swept: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((swept - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_share_chart_rejects_negative() {
        let err = ShareChart::new(vec![
            CategoryShare::new("Pricing", 12.0),
            CategoryShare::new("Refunds", -3.0),
        ])
        .unwrap_err();
        assert_eq!(err.primitive, Primitive::ShareChart);
        assert_eq!(err.problem, Problem::Negative { index: 1, value: -3.0 });
    }

    #[test]
    fn test_zero_total_shares() {
        let chart = ShareChart::new(vec![CategoryShare::new("None", 0.0)]).unwrap();
        assert_eq!(chart.slices()[0].sweep, 0.0);
    }
}
