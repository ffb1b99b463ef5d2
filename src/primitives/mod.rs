//! Visualization Primitives
//!
//! Stateless, validated display models every view is assembled from. Each
//! constructor either accepts its input as-is or fails with a
//! [`MalformedInputError`](crate::error::MalformedInputError); none of them
//! sorts, filters or clamps what it is given.
//!
//! - **card**: `SummaryCard` (KPI and stat tiles)
//! - **lists**: `HighlightList`, `KeyValueList`
//! - **table**: `Table`
//! - **heatmap**: `IntensityGrid`, `IntensityMatrix`, generators and color ramp
//! - **chart**: `TrendChart`, `ShareChart`, `ValueScale`

pub mod card;
pub mod chart;
pub mod heatmap;
pub mod lists;
pub mod table;

pub use card::{CardSize, SummaryCard};
pub use chart::{ChartKind, SeriesSpec, ShareChart, ShareSlice, TrendChart, ValueScale};
pub use heatmap::{
    intensity_color, HslColor, IntensityGenerator, IntensityGrid, IntensityMatrix,
    SeededGenerator,
};
pub use lists::{HighlightList, KeyValueList};
pub use table::Table;
