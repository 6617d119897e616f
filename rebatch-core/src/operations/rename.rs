use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::ConfigStore;
use crate::error::Error;
use crate::executor::{execute_batch, RenameMode};
use crate::filter::{build_predicates, filtered_entries, FilterOptions};
use crate::observer::RenameObserver;
use crate::operations::canonical_target;
use crate::transform::rename_pairs;

/// Where the pattern for a batch comes from. Resolution order: explicit
/// pattern, then named preset, then the stored default.
#[derive(Debug, Clone, Default)]
pub struct RegexSource {
    pub pattern: Option<String>,
    pub preset: Option<String>,
}

/// What a batch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameReport {
    /// Renames that completed, no-ops included.
    pub renamed: usize,
}

fn resolve_pattern(source: &RegexSource, config: &ConfigStore) -> Result<Regex, Error> {
    let pattern = if let Some(pattern) = &source.pattern {
        pattern.clone()
    } else if let Some(name) = &source.preset {
        config.preset(name)?.to_string()
    } else if let Some(default) = config.default_pattern() {
        default.to_string()
    } else {
        return Err(Error::NoRegexAvailable);
    };
    Ok(Regex::new(&pattern)?)
}

/// Run one rename batch: resolve the pattern, filter the directory,
/// transform the names, execute, and store the batch as the directory's
/// history.
///
/// The entry list is materialized before the first rename, so listing
/// failures abort while the directory is still untouched and the walker
/// never observes its own renames.
pub fn rename_operation(
    path: &Path,
    replacement: &str,
    source: &RegexSource,
    filter: &FilterOptions,
    config: &mut ConfigStore,
    observer: &mut dyn RenameObserver,
) -> Result<RenameReport> {
    let dir = canonical_target(path)?;
    let pattern = resolve_pattern(source, config)?;

    let predicates = build_predicates(filter);
    let entries = filtered_entries(&dir, predicates)?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to list {}", dir.display()))?;

    let pairs = rename_pairs(&dir, &pattern, replacement, entries.into_iter());
    let history = execute_batch(pairs, RenameMode::Apply, observer)?;

    let renamed = history.len();
    config.record_history(&dir, history);
    config
        .save()
        .context("failed to persist the rename history")?;

    Ok(RenameReport { renamed })
}
