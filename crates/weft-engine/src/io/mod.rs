//! Reading sources and writing outputs. Outputs go through
//! [`write_if_changed`] so a rerun over unchanged input leaves every file,
//! and its modification time, alone.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::WeftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Read a source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, WeftError> {
    fs::read_to_string(path).map_err(|source| WeftError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` unless the file already holds exactly that.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome, WeftError> {
    let write_error = |source: std::io::Error| WeftError::Write {
        path: path.to_path_buf(),
        source,
    };

    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            log::info!("unchanged {}", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(write_error(e)),
    }

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, content).map_err(write_error)?;
    log::info!("wrote {}", path.display());
    Ok(WriteOutcome::Written)
}
