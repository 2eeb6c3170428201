use std::path::Path;

use crate::errors::{RepairError, RepairResult};

pub fn ensure_file_exists(path: &Path) -> RepairResult<()> {
    if !path.exists() {
        Err(RepairError::FileNotFound(path.to_path_buf()))
    } else if !path.is_file() {
        Err(RepairError::NotAFile(path.to_path_buf()))
    } else {
        Ok(())
    }
}
