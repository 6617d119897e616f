use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::history::{path_key, RenameHistory};

/// Default ceiling on the number of saved presets.
pub const DEFAULT_PRESET_LIMIT: usize = 5;

/// Reserved for the default pattern; never a preset name.
pub const RESERVED_PRESET_NAME: &str = "default";

/// On-disk layout of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigData {
    /// Pattern used when no explicit regex or preset is given. Empty means
    /// unset.
    #[serde(default)]
    regex_default: String,
    /// Named patterns, in insertion order.
    #[serde(default)]
    presets: IndexMap<String, String>,
    /// Most recent batch per target directory.
    #[serde(default)]
    last_changes: IndexMap<String, RenameHistory>,
}

/// Store for presets, the default pattern, and per-directory rename history,
/// with an explicit lifecycle: load once, mutate in memory, save once.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    limit: usize,
    data: ConfigData,
}

impl ConfigStore {
    /// Load from `path`; a missing file starts from defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_limit(path, DEFAULT_PRESET_LIMIT)
    }

    pub fn with_limit(path: impl Into<PathBuf>, limit: usize) -> Result<Self> {
        let path = path.into();
        let data = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| Error::Config {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, limit, data })
    }

    /// Write the whole file back with pretty indentation.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&self.data).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preset_limit(&self) -> usize {
        self.limit
    }

    pub fn default_pattern(&self) -> Option<&str> {
        if self.data.regex_default.is_empty() {
            None
        } else {
            Some(&self.data.regex_default)
        }
    }

    /// Set the default pattern; an empty pattern clears it.
    pub fn set_default_pattern(&mut self, pattern: &str) -> Result<()> {
        if !pattern.is_empty() {
            Regex::new(pattern)?;
        }
        self.data.regex_default = pattern.to_string();
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Result<&str> {
        if name == RESERVED_PRESET_NAME {
            return Err(Error::ReservedPresetName);
        }
        self.data
            .presets
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::PresetNotFound(name.to_string()))
    }

    /// Insert or overwrite a preset. Inserting a new name past the limit is
    /// rejected without mutating anything; overwriting an existing name is
    /// always allowed.
    pub fn add_preset(&mut self, name: &str, pattern: &str) -> Result<()> {
        if name == RESERVED_PRESET_NAME {
            return Err(Error::ReservedPresetName);
        }
        Regex::new(pattern)?;
        if !self.data.presets.contains_key(name) && self.data.presets.len() >= self.limit {
            return Err(Error::PresetCapacity { limit: self.limit });
        }
        self.data
            .presets
            .insert(name.to_string(), pattern.to_string());
        Ok(())
    }

    /// Delete a preset by name. The reserved name `default` clears the
    /// default pattern instead of touching the presets.
    pub fn remove_preset(&mut self, name: &str) -> Result<()> {
        if name == RESERVED_PRESET_NAME {
            self.data.regex_default.clear();
            return Ok(());
        }
        self.data
            .presets
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::PresetNotFound(name.to_string()))
    }

    /// Saved presets in insertion order.
    pub fn presets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .presets
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }

    pub fn preset_count(&self) -> usize {
        self.data.presets.len()
    }

    pub fn history(&self, dir: &Path) -> Option<&RenameHistory> {
        self.data.last_changes.get(&path_key(dir))
    }

    /// Replace the stored batch for `dir`.
    pub fn record_history(&mut self, dir: &Path, history: RenameHistory) {
        self.data.last_changes.insert(path_key(dir), history);
    }
}
