use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::transform::RenamePair;

/// One batch's completed renames for a single directory, keyed by the path a
/// rename started from and valued by the path it ended at (disambiguation
/// included). Insertion order is the order the renames happened in, which
/// undo relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameHistory(IndexMap<String, String>);

impl RenameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record a completed rename. A later rename from the same source
    /// replaces the earlier record.
    pub fn record(&mut self, from: &Path, to: &Path) {
        self.0.insert(path_key(from), path_key(to));
    }

    /// The recorded renames as pairs, in the order they were applied.
    pub fn pairs(&self) -> impl Iterator<Item = RenamePair> + '_ {
        self.0.iter().map(|(from, to)| RenamePair {
            original: PathBuf::from(from),
            proposed: PathBuf::from(to),
        })
    }
}

pub(crate) fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
