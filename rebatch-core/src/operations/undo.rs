use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ConfigStore;
use crate::error::Error;
use crate::executor::{execute_batch, RenameMode};
use crate::observer::RenameObserver;
use crate::operations::canonical_target;
use crate::operations::rename::RenameReport;
use crate::transform::RenamePair;

/// Replay the stored batch for `path` in reverse, restoring the prior
/// names. The replay is recorded as a batch of its own, so an undo can
/// itself be undone.
pub fn undo_operation(
    path: &Path,
    config: &mut ConfigStore,
    observer: &mut dyn RenameObserver,
) -> Result<RenameReport> {
    let dir = canonical_target(path)?;
    let recorded = config
        .history(&dir)
        .ok_or_else(|| Error::NoHistory(dir.clone()))?;
    let pairs: Vec<RenamePair> = recorded.pairs().collect();

    let history = execute_batch(pairs, RenameMode::Undo, observer)?;

    let renamed = history.len();
    config.record_history(&dir, history);
    config
        .save()
        .context("failed to persist the rename history")?;

    Ok(RenameReport { renamed })
}
