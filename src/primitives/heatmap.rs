//! Intensity grid (heatmap)
//!
//! Cell values come from a collaborator-supplied [`IntensityGenerator`]. The
//! provided [`SeededGenerator`] is a pure function of
//! `(row_label, column_label, seed)`: the same labels always produce the same
//! grid, across renders and across sessions.

use std::fmt;

use crate::error::{ComposeResult, MalformedInputError, Primitive, Problem};

/// Produces one intensity (percent) for a cell
pub trait IntensityGenerator {
    fn intensity(&self, row: &str, column: &str) -> u8;
}

impl<F> IntensityGenerator for F
where
    F: Fn(&str, &str) -> u8,
{
    fn intensity(&self, row: &str, column: &str) -> u8 {
        self(row, column)
    }
}

/// Deterministic generator keyed on the cell's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededGenerator {
    seed: u64,
    floor: u8,
    ceiling: u8,
}

impl Default for SeededGenerator {
    fn default() -> Self {
        Self::new(1337)
    }
}

impl SeededGenerator {
    /// Values in 30..=99 percent
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            floor: 30,
            ceiling: 99,
        }
    }

    /// Builder method: inclusive value range, capped at 100
    pub fn range(mut self, floor: u8, ceiling: u8) -> Self {
        let (lo, hi) = if floor <= ceiling {
            (floor, ceiling)
        } else {
            (ceiling, floor)
        };
        self.floor = lo.min(100);
        self.ceiling = hi.min(100);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl IntensityGenerator for SeededGenerator {
    fn intensity(&self, row: &str, column: &str) -> u8 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(row.as_bytes());
        // Unit separator keeps ("ab", "c") and ("a", "bc") apart.
        hasher.update(&[0x1f]);
        hasher.update(column.as_bytes());
        let hash = hasher.finalize();

        let span = u32::from(self.ceiling - self.floor) + 1;
        self.floor + (hash % span) as u8
    }
}

/// Row-by-column grid of intensities with its labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    cells: Vec<Vec<u8>>,
}

impl IntensityMatrix {
    /// Wrap externally supplied cells, checking they cover exactly the labels
    pub fn new(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        cells: Vec<Vec<u8>>,
    ) -> ComposeResult<Self> {
        if cells.len() != row_labels.len() {
            return Err(MalformedInputError::new(
                Primitive::IntensityGrid,
                "cells",
                Problem::CountMismatch {
                    expected: row_labels.len(),
                    found: cells.len(),
                },
            ));
        }

        if let Some((index, row)) = cells
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_labels.len())
        {
            return Err(MalformedInputError::new(
                Primitive::IntensityGrid,
                "cells",
                Problem::LengthMismatch {
                    index,
                    expected: column_labels.len(),
                    found: row.len(),
                },
            ));
        }

        Ok(Self {
            row_labels,
            column_labels,
            cells,
        })
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Cell by position
    pub fn cell(&self, row: usize, column: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Cell by label
    pub fn get(&self, row: &str, column: &str) -> Option<u8> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.column_labels.iter().position(|l| l == column)?;
        self.cell(r, c)
    }

    /// Rows with their labels, in order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.row_labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

/// Builds intensity matrices from label sets
pub struct IntensityGrid;

impl IntensityGrid {
    /// One generator call per `(row, column)` pair
    pub fn generate(
        row_labels: &[String],
        column_labels: &[String],
        generator: &dyn IntensityGenerator,
    ) -> IntensityMatrix {
        let cells = row_labels
            .iter()
            .map(|row| {
                column_labels
                    .iter()
                    .map(|column| generator.intensity(row, column))
                    .collect()
            })
            .collect();

        IntensityMatrix {
            row_labels: row_labels.to_vec(),
            column_labels: column_labels.to_vec(),
            cells,
        }
    }
}

/// CSS `hsl()` color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.0}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Fixed hue ramp: low intensity is a light, low-hue background; high
/// intensity a darker, higher-hue one
pub fn intensity_color(value: u8) -> HslColor {
    let v = f64::from(value);
    HslColor {
        hue: 120.0 * (v / 100.0),
        saturation: 60.0,
        lightness: 92.0 - v * 0.35,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_seeded_generation_is_stable() {
        let rows = labels(&["R1"]);
        let cols = labels(&["C1"]);
        let generator = SeededGenerator::new(42);

        let first = IntensityGrid::generate(&rows, &cols, &generator);
        let second = IntensityGrid::generate(&rows, &cols, &generator);
        assert_eq!(first.cell(0, 0), second.cell(0, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_cell_depends_on_labels_not_position() {
        let generator = SeededGenerator::new(7);
        let a = IntensityGrid::generate(&labels(&["Finance", "Sales"]), &labels(&["Jan"]), &generator);
        let b = IntensityGrid::generate(&labels(&["Sales"]), &labels(&["Jan"]), &generator);
        assert_eq!(a.get("Sales", "Jan"), b.get("Sales", "Jan"));
    }

    #[test]
    fn test_values_within_range() {
        let generator = SeededGenerator::new(1).range(40, 60);
        let rows = labels(&["Finance", "Sales", "Support", "Ops", "HR"]);
        let cols = labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        let matrix = IntensityGrid::generate(&rows, &cols, &generator);
        for (_, cells) in matrix.rows() {
            assert!(cells.iter().all(|v| (40..=60).contains(v)));
        }
    }

    #[test]
    fn test_default_range_matches_thirty_to_ninety_nine() {
        let generator = SeededGenerator::default();
        for row in ["a", "b", "c", "d"] {
            for col in ["w", "x", "y", "z"] {
                let v = generator.intensity(row, col);
                assert!((30..=99).contains(&v));
            }
        }
    }

    #[test]
    fn test_closure_generator() {
        let constant = |_: &str, _: &str| 55u8;
        let matrix = IntensityGrid::generate(&labels(&["R1", "R2"]), &labels(&["C1"]), &constant);
        assert_eq!(matrix.cell(1, 0), Some(55));
        assert_eq!(matrix.cell(2, 0), None);
    }

    #[test]
    fn test_matrix_dimensions_validated() {
        let err = IntensityMatrix::new(labels(&["R1", "R2"]), labels(&["C1"]), vec![vec![10]])
            .unwrap_err();
        assert_eq!(err.primitive, Primitive::IntensityGrid);
        assert_eq!(err.problem, Problem::CountMismatch { expected: 2, found: 1 });

        let err = IntensityMatrix::new(labels(&["R1"]), labels(&["C1", "C2"]), vec![vec![10]])
            .unwrap_err();
        assert!(matches!(err.problem, Problem::LengthMismatch { index: 0, expected: 2, found: 1 }));
    }

    #[test]
    fn test_color_ramp() {
        assert_eq!(intensity_color(0).to_string(), "hsl(0.0, 60%, 92.0%)");
        assert_eq!(intensity_color(50).to_string(), "hsl(60.0, 60%, 74.5%)");
        assert_eq!(intensity_color(100).to_string(), "hsl(120.0, 60%, 57.0%)");

        let low = intensity_color(30);
        let high = intensity_color(90);
        assert!(high.hue > low.hue);
        assert!(high.lightness < low.lightness);
    }
}
