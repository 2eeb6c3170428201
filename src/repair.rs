//! Column-wise repair of the digit band.
//!
//! A column "carries digits" when any of rows 0..4 holds an ASCII digit at
//! that position. In such columns every blank space within the band is a
//! dropped digit and gets filled with '0'. Everything else is left alone.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{RepairError, RepairResult};
use crate::grid::{Grid, BAND_HEIGHT};
use crate::util::path::ensure_file_exists;

/// Outcome of a scan or repair pass over the digit band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Columns with at least one digit in the band.
    pub digit_columns: usize,
    /// Blank cells inside digit-bearing columns (filled by repair).
    pub blank_cells: usize,
    /// Indices of digit-bearing columns that still contain blanks.
    pub dirty_columns: Vec<usize>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.blank_cells == 0
    }
}

/// Inspect the band without mutating it.
pub fn scan(grid: &Grid) -> RepairResult<ScanReport> {
    grid.validate_band()?;

    let mut report = ScanReport {
        digit_columns: 0,
        blank_cells: 0,
        dirty_columns: Vec::new(),
    };
    for col in 0..grid.band_width() {
        if !column_has_digit(grid, col) {
            continue;
        }
        report.digit_columns += 1;
        let blanks = (0..BAND_HEIGHT)
            .filter(|&row| grid.cell(row, col) == ' ')
            .count();
        if blanks > 0 {
            report.blank_cells += blanks;
            report.dirty_columns.push(col);
        }
    }
    Ok(report)
}

/// Fill blanks with '0' in every digit-bearing column of the band.
///
/// Rows past the band and columns without digits are untouched. Running the
/// pass again on its own output is a no-op.
pub fn repair(grid: &mut Grid) -> RepairResult<ScanReport> {
    let report = scan(grid)?;
    for &col in &report.dirty_columns {
        for row in 0..BAND_HEIGHT {
            if grid.cell(row, col) == ' ' {
                grid.set_cell(row, col, '0');
            }
        }
    }
    debug!(
        filled = report.blank_cells,
        columns = report.dirty_columns.len(),
        "repair pass done"
    );
    Ok(report)
}

fn column_has_digit(grid: &Grid, col: usize) -> bool {
    (0..BAND_HEIGHT).any(|row| grid.cell(row, col).is_ascii_digit())
}

/// Read `input`, repair the band, write the result as the full content of
/// `output` (overwriting it).
#[instrument(level = "debug")]
pub fn repair_file(input: &Path, output: &Path) -> RepairResult<ScanReport> {
    let mut grid = read_grid(input)?;
    let report = repair(&mut grid)?;
    fs::write(output, grid.to_content()).map_err(|source| RepairError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(report)
}

/// Read `input` and report what a repair would change, writing nothing.
#[instrument(level = "debug")]
pub fn check_file(input: &Path) -> RepairResult<ScanReport> {
    let grid = read_grid(input)?;
    scan(&grid)
}

fn read_grid(path: &Path) -> RepairResult<Grid> {
    ensure_file_exists(path)?;
    let content = fs::read_to_string(path).map_err(|source| RepairError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Grid::parse(&content))
}
