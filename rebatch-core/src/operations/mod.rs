use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub mod preset;
pub mod rename;
pub mod undo;

pub use preset::{
    add_preset_operation, delete_presets_operation, list_presets_operation, set_default_operation,
    show_default_operation,
};
pub use rename::{rename_operation, RegexSource, RenameReport};
pub use undo::undo_operation;

/// Validate that `path` names an existing directory and canonicalize it, so
/// the history key is stable across relative and absolute spellings.
pub(crate) fn canonical_target(path: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::PathNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(path.canonicalize()?)
}
