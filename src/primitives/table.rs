//! Table model
//!
//! A fixed header row followed by body rows in the given order. No sorting,
//! pagination or virtualization: the renderer emits every row directly, which
//! is fine for a few dozen rows and degrades past a few hundred.

use crate::error::{ComposeResult, MalformedInputError, Primitive, Problem};
use crate::model::TableRow;

/// Header-rowed data grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    /// Build a table, rejecting any row whose length differs from the headers
    pub fn new(headers: Vec<String>, rows: Vec<TableRow>) -> ComposeResult<Self> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(MalformedInputError::new(
                Primitive::Table,
                "rows",
                Problem::LengthMismatch {
                    index,
                    expected: headers.len(),
                    found: row.len(),
                },
            ));
        }

        Ok(Self { headers, rows })
    }

    /// Convenience for static header lists
    pub fn with_headers(headers: &[&str], rows: Vec<TableRow>) -> ComposeResult<Self> {
        Self::new(headers.iter().map(|h| h.to_string()).collect(), rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> TableRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_header_and_body_order() {
        let table = Table::with_headers(&["A", "B"], vec![row(&["x", "y"])]).unwrap();
        assert_eq!(table.headers(), &["A".to_string(), "B".to_string()]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0], row(&["x", "y"]));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Table::with_headers(
            &["ID", "Severity", "Area"],
            vec![row(&["INC-1", "Low", "Sales"]), row(&["INC-2", "High"])],
        )
        .unwrap_err();

        assert_eq!(err.primitive, Primitive::Table);
        assert_eq!(err.field, "rows");
        assert_eq!(
            err.problem,
            Problem::LengthMismatch {
                index: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_empty_body_is_valid() {
        let table = Table::with_headers(&["Team", "NPS"], Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }
}
