#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod executor;
pub mod filter;
pub mod history;
pub mod observer;
pub mod operations;
pub mod transform;

pub use config::{ConfigStore, DEFAULT_PRESET_LIMIT, RESERVED_PRESET_NAME};
pub use error::Error;
pub use executor::{execute_batch, RenameMode};
pub use filter::{
    accepts, build_predicates, filtered_entries, DirectoryEntry, FilterOptions, Predicate,
};
pub use history::RenameHistory;
pub use observer::{ConsoleObserver, RecordingObserver, RenameObserver};
pub use operations::{
    add_preset_operation, delete_presets_operation, list_presets_operation, rename_operation,
    set_default_operation, show_default_operation, undo_operation, RegexSource, RenameReport,
};
pub use transform::{rename_pairs, RenamePair};
