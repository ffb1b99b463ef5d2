//! Supplied dataset
//!
//! The aggregation collaborator hands the dashboard one [`DashboardData`]
//! at startup, either built in-process ([`DashboardData::sample`]) or as JSON.
//! Each view reads only its own slice.

mod sample;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::model::{
    BacklogItem, CategoryShare, HighlightItem, Incident, KeyFigure, MetricPoint, SlaImprovement,
    TableRow, VendorReplacement, WorkflowEntry,
};

/// Everything the seven views display
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    /// Period labels (months) shared by the monthly series and the heatmap
    #[serde(default)]
    pub periods: Vec<String>,
    #[serde(default)]
    pub overview: OverviewSlice,
    #[serde(default)]
    pub adoption: AdoptionSlice,
    #[serde(default)]
    pub efficiency: EfficiencySlice,
    #[serde(default)]
    pub revenue: RevenueSlice,
    #[serde(default)]
    pub roi: RoiSlice,
    #[serde(default)]
    pub quality: QualitySlice,
    #[serde(default)]
    pub engagement: EngagementSlice,
}

/// Captions for the overview KPI row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewSlice {
    /// Share of eligible workflows automated, pre-formatted
    #[serde(default)]
    pub automated_share: String,
    /// Share of employees assisted by agents, pre-formatted
    #[serde(default)]
    pub assisted_share: String,
    #[serde(default)]
    pub top_roi_case: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdoptionSlice {
    /// Monthly points with `workflows` and `agent_mau`
    #[serde(default)]
    pub trend: Vec<MetricPoint>,
    #[serde(default)]
    pub coverage: Vec<KeyFigure>,
    #[serde(default)]
    pub catalog: Vec<WorkflowEntry>,
    #[serde(default)]
    pub backlog: Vec<BacklogItem>,
    /// Heatmap rows; columns are [`DashboardData::periods`]
    #[serde(default)]
    pub business_units: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EfficiencySlice {
    /// Quarterly points with `hours` and `cost`
    #[serde(default)]
    pub savings: Vec<MetricPoint>,
    /// Per-workflow points with `ai` and `manual`
    #[serde(default)]
    pub cost_per_workflow: Vec<MetricPoint>,
    #[serde(default)]
    pub vendors: Vec<VendorReplacement>,
    #[serde(default)]
    pub benchmarks: Vec<TableRow>,
    #[serde(default)]
    pub sla: Vec<SlaImprovement>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueSlice {
    #[serde(default)]
    pub mix: Vec<CategoryShare>,
    /// Monthly points with `uplift` and `conversion`
    #[serde(default)]
    pub uplift: Vec<MetricPoint>,
    /// Per-segment points with `upsell` and `cross_sell`
    #[serde(default)]
    pub cross_sell: Vec<MetricPoint>,
    #[serde(default)]
    pub pipeline: Vec<TableRow>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoiSlice {
    /// Blended return, pre-formatted
    #[serde(default)]
    pub blended: String,
    /// Quarterly points with `invest` and `benefit`
    #[serde(default)]
    pub timeline: Vec<MetricPoint>,
    #[serde(default)]
    pub use_cases: Vec<TableRow>,
    #[serde(default)]
    pub summary: Vec<KeyFigure>,
    #[serde(default)]
    pub scenarios: Vec<TableRow>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QualitySlice {
    /// Monthly points with `accuracy`, `incidents` and `drift`
    #[serde(default)]
    pub series: Vec<MetricPoint>,
    #[serde(default)]
    pub compliance: Vec<TableRow>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngagementSlice {
    /// Monthly points with `exec_visits` and `trainings`
    #[serde(default)]
    pub activity: Vec<MetricPoint>,
    #[serde(default)]
    pub satisfaction: Vec<TableRow>,
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
}

impl DashboardData {
    /// Reference dataset shipped with the dashboard
    pub fn sample() -> Self {
        sample::build()
    }

    /// Parse a dataset; missing slices default to empty
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: DashboardData = serde_json::from_str(json)?;
        tracing::debug!(periods = data.periods.len(), "Parsed dashboard dataset");
        Ok(data)
    }

    /// Read and parse a dataset file
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let data = Self::from_json(&content)?;
        tracing::info!("Loaded dataset from {:?}", path);
        Ok(data)
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_shapes() {
        let data = DashboardData::sample();
        assert_eq!(data.periods.len(), 12);
        assert_eq!(data.periods[0], "Jan");
        assert_eq!(data.adoption.trend.len(), 12);
        assert_eq!(data.adoption.business_units.len(), 7);
        assert_eq!(data.efficiency.savings.len(), 4);
        assert_eq!(data.revenue.mix.len(), 5);
        assert_eq!(data.quality.series.len(), 12);
        assert_eq!(data.engagement.activity.len(), 12);
        for slice in [
            &data.adoption.highlights,
            &data.efficiency.highlights,
            &data.revenue.highlights,
            &data.roi.highlights,
            &data.quality.highlights,
            &data.engagement.highlights,
        ] {
            assert_eq!(slice.len(), 4);
        }
    }

    #[test]
    fn test_adoption_series_formula() {
        let data = DashboardData::sample();
        let last = data.adoption.trend.last().unwrap();
        assert_eq!(last.key, "Dec");
        // i = 11: 80 + 88 + 10, 1200 + 1320 + 180
        assert_eq!(last.value("workflows"), Some(178.0));
        assert_eq!(last.value("agent_mau"), Some(2700.0));
    }

    #[test]
    fn test_formatted_highlights() {
        let data = DashboardData::sample();
        assert_eq!(data.efficiency.highlights[0].value, "30,100");
        assert_eq!(data.efficiency.highlights[1].value, "$940,000");
    }

    #[test]
    fn test_partial_json_defaults_missing_slices() {
        let json = r#"{
            "periods": ["Jan"],
            "revenue": { "mix": [{ "name": "Pricing", "value": 12.0 }] }
        }"#;
        let data = DashboardData::from_json(json).unwrap();
        assert_eq!(data.revenue.mix.len(), 1);
        assert!(data.adoption.trend.is_empty());
        assert!(data.roi.blended.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = DashboardData::from_json(r#"{"periods": 3}"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let data = DashboardData::sample();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data.to_json().unwrap().as_bytes()).unwrap();

        let loaded = DashboardData::load(file.path()).unwrap();
        assert_eq!(loaded.periods, data.periods);
        assert_eq!(loaded.adoption.backlog, data.adoption.backlog);
        assert_eq!(loaded.quality.incidents, data.quality.incidents);
        assert_eq!(loaded.revenue.uplift.len(), data.revenue.uplift.len());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardData::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
