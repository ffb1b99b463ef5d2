//! View Composer
//!
//! One composer per route, each a pure function from its data slice to a
//! [`ViewLayout`]: a fixed arrangement of sections, panels and primitive
//! blocks. Composers pass data through unmodified; the only failure is a
//! primitive rejecting malformed input.
//!
//! ```text
//! Route ──compose──▶ ViewLayout
//!                     └─ Section (KPI row | panel grid)
//!                         └─ Panel (title, width)
//!                             └─ Block (stats | table | chart | heatmap | ...)
//! ```

mod adoption;
mod efficiency;
mod engagement;
mod overview;
mod quality;
mod revenue;
mod roi;

use crate::data::DashboardData;
use crate::error::ComposeResult;
use crate::primitives::{
    HighlightList, IntensityGenerator, IntensityMatrix, KeyValueList, ShareChart, SummaryCard,
    Table, TrendChart,
};
use crate::routing::Route;

/// Grid width of a section or of a panel body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    One,
    Two,
    Three,
}

/// A primitive placed inside a panel
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Stats(Vec<SummaryCard>),
    Highlights(HighlightList),
    KeyValues(KeyValueList),
    Table(Table),
    Heatmap(IntensityMatrix),
    Trend(TrendChart),
    Share(ShareChart),
    /// Explanatory caption under the panel's other blocks
    Note(String),
}

/// Titled card holding one or more blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    /// Spans two grid columns
    pub wide: bool,
    /// Layout of the blocks inside the panel
    pub columns: Columns,
    pub blocks: Vec<Block>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            wide: false,
            columns: Columns::One,
            blocks: Vec::new(),
        }
    }

    /// Builder method: span two columns
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// Builder method: lay blocks out side by side
    pub fn split(mut self) -> Self {
        self.columns = Columns::Two;
        self
    }

    /// Builder method: append a block
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// Vertical slice of a view
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Row of headline KPI cards
    Cards(Vec<SummaryCard>),
    /// Grid of panels
    Panels { columns: Columns, panels: Vec<Panel> },
}

impl Section {
    pub fn panels(columns: Columns, panels: Vec<Panel>) -> Self {
        Section::Panels { columns, panels }
    }

    /// Single full-width panel
    pub fn single(panel: Panel) -> Self {
        Section::Panels {
            columns: Columns::One,
            panels: vec![panel],
        }
    }
}

/// The complete, static layout of one view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLayout {
    pub route: Route,
    pub sections: Vec<Section>,
}

impl ViewLayout {
    /// Every panel in document order
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.sections.iter().flat_map(|section| match section {
            Section::Panels { panels, .. } => panels.as_slice(),
            Section::Cards(_) => &[][..],
        })
    }

    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels().find(|p| p.title == title)
    }

    /// Every block in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.panels().flat_map(|p| p.blocks.iter())
    }
}

/// Compose the view bound to `route`
pub fn compose(
    route: Route,
    data: &DashboardData,
    generator: &dyn IntensityGenerator,
) -> ComposeResult<ViewLayout> {
    let sections = match route {
        Route::Overview => overview::compose(data)?,
        Route::Adoption => adoption::compose(data, generator)?,
        Route::Efficiency => efficiency::compose(data)?,
        Route::Revenue => revenue::compose(data)?,
        Route::Roi => roi::compose(data)?,
        Route::Quality => quality::compose(data)?,
        Route::Engagement => engagement::compose(data)?,
    };

    tracing::debug!(route = %route, sections = sections.len(), "Composed view");
    Ok(ViewLayout { route, sections })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn table<'a>(layout: &'a ViewLayout, title: &str) -> &'a Table {
        layout
            .panel(title)
            .and_then(|p| {
                p.blocks.iter().find_map(|b| match b {
                    Block::Table(t) => Some(t),
                    _ => None,
                })
            })
            .unwrap_or_else(|| panic!("no table in panel {title}"))
    }

    pub fn trend<'a>(layout: &'a ViewLayout, title: &str) -> &'a TrendChart {
        layout
            .panel(title)
            .and_then(|p| {
                p.blocks.iter().find_map(|b| match b {
                    Block::Trend(c) => Some(c),
                    _ => None,
                })
            })
            .unwrap_or_else(|| panic!("no trend chart in panel {title}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::SeededGenerator;

    #[test]
    fn test_every_route_composes_sample() {
        let data = DashboardData::sample();
        let generator = SeededGenerator::default();
        for route in Route::all() {
            let layout = compose(route, &data, &generator).unwrap();
            assert_eq!(layout.route, route);
            assert!(!layout.sections.is_empty());
        }
    }

    #[test]
    fn test_every_route_composes_empty_data() {
        let data = DashboardData::default();
        let generator = SeededGenerator::default();
        for route in Route::all() {
            let layout = compose(route, &data, &generator).unwrap();
            assert!(layout.panels().count() > 0);
        }
    }

    #[test]
    fn test_composition_is_repeatable() {
        let data = DashboardData::sample();
        let generator = SeededGenerator::new(9);
        for route in Route::all() {
            assert_eq!(
                compose(route, &data, &generator).unwrap(),
                compose(route, &data, &generator).unwrap()
            );
        }
    }
}
