//! UI Components
//!
//! Reusable Leptos components, one per visualization primitive plus the
//! navigation shell.

pub mod chart;
pub mod heatmap;
pub mod highlight_list;
pub mod panel;
pub mod shell;
pub mod summary_card;
pub mod table;

pub use chart::{ShareChartView, TrendChartView};
pub use heatmap::Heatmap;
pub use highlight_list::{HighlightListView, KeyValueListView};
pub use panel::{PanelView, SectionView};
pub use shell::Shell;
pub use summary_card::SummaryCardView;
pub use table::DataTable;
