use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Fatal conditions surfaced by the core library.
///
/// Collisions and per-entry rename failures are not represented here:
/// collisions are disambiguated by the executor, and permission/not-found
/// failures on a single pair are reported through the observer while the
/// batch continues.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(
        "no pattern to apply: pass --regex or --preset, or set a default with `config --default <pattern>`"
    )]
    NoRegexAvailable,

    #[error("no preset named '{0}'. `config --list` shows the saved presets")]
    PresetNotFound(String),

    #[error("'default' is reserved for the default pattern and cannot name a preset")]
    ReservedPresetName,

    #[error("cannot store more than {limit} presets. Remove one with `config --delete <name>`")]
    PresetCapacity { limit: usize },

    #[error("no rename history for {0}")]
    NoHistory(PathBuf),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
