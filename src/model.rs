//! Core value types for the dashboard
//!
//! Every entity here is an immutable value handed in by the aggregation
//! collaborator. The composition layer reads them and never mutates them:
//! - `MetricPoint`: one categorical key with ordered numeric fields
//! - `CategoryShare`: a named part of a whole
//! - `HighlightItem`, `KeyFigure`: pre-formatted label/value pairs
//! - record types that the views format into table rows

use serde::{Deserialize, Serialize};

/// One row of display cells, parallel to a table's headers
pub type TableRow = Vec<String>;

/// A categorical key (month, quarter, segment) with one or more numeric fields.
///
/// Field order is insertion order; a `Vec<MetricPoint>` is rendered in the
/// order given, which for trends is chronological.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricPoint {
    pub key: String,
    #[serde(default)]
    pub fields: Vec<(String, f64)>,
}

impl MetricPoint {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Builder method: append a field
    pub fn field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Look up a field by name
    pub fn value(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| *value)
    }
}

/// Value of `field` in the last point of a series
pub fn latest(points: &[MetricPoint], field: &str) -> Option<f64> {
    points.last().and_then(|p| p.value(field))
}

/// A `{name, value}` pair rendered as one part of a whole
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
}

impl CategoryShare {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named, pre-formatted metric with a short caption
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightItem {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl HighlightItem {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

/// A pre-formatted label/value pair without caption
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyFigure {
    pub label: String,
    pub value: String,
}

impl KeyFigure {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Automated workflow or agent in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowEntry {
    pub name: String,
    pub owner: String,
    pub status: String,
    /// Return multiple, e.g. 3.8 for "3.8x"
    pub roi: f64,
}

/// Candidate automation waiting on the backlog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BacklogItem {
    pub name: String,
    pub kind: String,
    pub owner: String,
    pub impact: String,
    pub status: String,
}

/// Legacy tool retired in favour of an automation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorReplacement {
    pub tool: String,
    /// Monthly spend in dollars
    pub monthly_cost: f64,
    pub replaced_by: String,
    pub status: String,
}

/// Manual vs agent service level for one process
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlaImprovement {
    pub process: String,
    pub manual: String,
    pub agent: String,
    pub improvement: String,
}

/// AI-related incident escalated for review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub severity: String,
    pub area: String,
    pub description: String,
    pub sla: String,
}
