//! In-memory model of a fixed-width character grid.
//!
//! Rows keep their line terminators as trailing cells, so an unmutated grid
//! serializes back to the exact input bytes.

use crate::errors::{RepairError, RepairResult};

/// Number of rows in the digit band (rows 0..4 are inspected and mutated).
pub const BAND_HEIGHT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parse file content into rows of chars, terminators included.
    pub fn parse(content: &str) -> Self {
        let rows = content
            .split_inclusive('\n')
            .map(|line| line.chars().collect())
            .collect();
        Grid { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Width of the digit band, taken from row 0 as the original does.
    pub fn band_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check that the digit band exists and that rows 1..4 are at least as
    /// wide as row 0. Rows wider than row 0 are fine: columns past row 0's
    /// width are never inspected.
    pub fn validate_band(&self) -> RepairResult<()> {
        if self.rows.len() < BAND_HEIGHT {
            return Err(RepairError::BandTooShort {
                rows: self.rows.len(),
                required: BAND_HEIGHT,
            });
        }
        let expected = self.band_width();
        for (row, cells) in self.rows.iter().enumerate().take(BAND_HEIGHT).skip(1) {
            if cells.len() < expected {
                return Err(RepairError::RaggedBand {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, ch: char) {
        self.rows[row][col] = ch;
    }

    /// Serialize by concatenating rows in order, no added separators.
    pub fn to_content(&self) -> String {
        self.rows.iter().flatten().collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_content())
    }
}
