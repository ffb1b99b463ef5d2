//! Highlight and key/value lists
//!
//! Both keep the caller's order exactly; there is nothing to validate beyond
//! what the types already guarantee.

use crate::model::{HighlightItem, KeyFigure};

/// Ordered label/value/description triples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightList {
    items: Vec<HighlightItem>,
}

impl HighlightList {
    pub fn new(items: Vec<HighlightItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[HighlightItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered label/value rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueList {
    entries: Vec<KeyFigure>,
}

impl KeyValueList {
    pub fn new(entries: Vec<KeyFigure>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[KeyFigure] {
        &self.entries
    }
}
