use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepairError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Digit band needs {required} rows, input has {rows}")]
    BandTooShort { rows: usize, required: usize },

    #[error("Ragged digit band: row {row} has {len} columns, expected at least {expected}")]
    RaggedBand {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type RepairResult<T> = Result<T, RepairError>;
