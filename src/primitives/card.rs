//! Summary card model

use crate::model::KeyFigure;

/// Visual weight of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    /// Headline tile in a KPI row
    Kpi,
    /// Compact tile inside a panel
    Stat,
}

/// One label, one formatted value, optional caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
    pub caption: Option<String>,
    pub size: CardSize,
}

impl SummaryCard {
    pub fn kpi(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            caption: None,
            size: CardSize::Kpi,
        }
    }

    pub fn stat(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            caption: None,
            size: CardSize::Stat,
        }
    }

    /// Builder method: attach a caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl From<&KeyFigure> for SummaryCard {
    fn from(figure: &KeyFigure) -> Self {
        SummaryCard::stat(figure.label.clone(), figure.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let card = SummaryCard::kpi("AI ROI (Blended)", "2.9x").caption("Top case: Finance");
        assert_eq!(card.size, CardSize::Kpi);
        assert_eq!(card.caption.as_deref(), Some("Top case: Finance"));

        let stat = SummaryCard::from(&KeyFigure::new("Active Agents", "128"));
        assert_eq!(stat.size, CardSize::Stat);
        assert_eq!(stat.value, "128");
        assert!(stat.caption.is_none());
    }
}
