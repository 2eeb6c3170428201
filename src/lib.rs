//! bandfix: repair fixed-width digit grids.
//!
//! The first four rows of the input form the "digit band". A column that
//! contains at least one digit in the band is a number column; blank spaces
//! inside it are dropped digits and get filled with '0'. All other content
//! is preserved byte-for-byte.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod grid;
pub mod repair;
pub mod util;

pub use errors::{RepairError, RepairResult};
pub use grid::{Grid, BAND_HEIGHT};
pub use repair::{check_file, repair, repair_file, scan, ScanReport};
