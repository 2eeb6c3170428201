//! CLI-level errors (wraps repair errors)

use thiserror::Error;

use crate::errors::RepairError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Repair(#[from] RepairError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Repair(e) => match e {
                RepairError::FileNotFound(_) | RepairError::NotAFile(_) => {
                    crate::exitcode::NOINPUT
                }
                RepairError::Read { .. } => crate::exitcode::IOERR,
                RepairError::Write { .. } => crate::exitcode::CANTCREAT,
                RepairError::BandTooShort { .. } | RepairError::RaggedBand { .. } => {
                    crate::exitcode::DATAERR
                }
            },
        }
    }
}
