//! # Control Center
//!
//! Presentation composition layer for the Global AI Business Control Center, a
//! single-page dashboard over pre-aggregated business metrics (adoption,
//! efficiency, revenue, ROI, quality, engagement).
//!
//! ## Modules
//!
//! - [`routing`]: route table and the path → view resolver
//! - [`navigation`]: the session's navigation state (current route, sidebar)
//! - [`views`]: one pure composer per route, producing a [`ViewLayout`]
//! - [`primitives`]: validated display models (cards, lists, tables,
//!   heatmap, charts)
//! - [`data`]: the supplied dataset and its per-view slices
//! - [`config`]: TOML configuration with environment overrides
//!
//! The Leptos front end in `control-center-ui` renders these layouts; this
//! crate holds no rendering code and performs no I/O at render time.
//!
//! ## Quick Start
//!
//! ```rust
//! use control_center::{compose, Config, DashboardData, NavigationState};
//!
//! let config = Config::default();
//! let data = DashboardData::sample();
//! let generator = config.heatmap.generator();
//!
//! let mut nav = NavigationState::new(config.dashboard.sidebar_open);
//! nav.navigate("/adoption");
//!
//! let layout = compose(nav.current_route(), &data, &generator).unwrap();
//! assert_eq!(nav.page_title(), "Adoption Metrics");
//! assert!(layout.panel("Automation Utilization Heatmap").is_some());
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod model;
pub mod navigation;
pub mod primitives;
pub mod routing;
pub mod views;

pub use config::{generate_default_config, Config, ConfigError, DashboardConfig, HeatmapConfig, LoggingConfig};

pub use data::{
    AdoptionSlice, DashboardData, EfficiencySlice, EngagementSlice, OverviewSlice, QualitySlice,
    RevenueSlice, RoiSlice,
};

pub use error::{ComposeResult, DataError, MalformedInputError, Primitive, Problem};

pub use model::{CategoryShare, HighlightItem, KeyFigure, MetricPoint, TableRow};

pub use navigation::{NavigationState, Sidebar};

pub use primitives::{
    intensity_color, ChartKind, HighlightList, IntensityGenerator, IntensityGrid,
    IntensityMatrix, KeyValueList, SeededGenerator, SeriesSpec, ShareChart, SummaryCard, Table,
    TrendChart,
};

pub use routing::{resolve, title_for_path, NavIcon, Resolution, Route, RouteDescriptor, ROUTES};

pub use views::{compose, Block, Columns, Panel, Section, ViewLayout};
