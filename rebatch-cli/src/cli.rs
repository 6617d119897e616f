use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Bulk renames files and directories by regular expression, with saved
/// presets and per-directory undo
#[derive(Parser, Debug)]
#[command(name = "rebatch")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "PATH", env = "REBATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the entries of a directory in one batch
    Rename {
        /// Directory holding the entries to rename
        path: PathBuf,

        /// Matched text is replaced with this; omitting it deletes the match
        #[arg(default_value = "")]
        replacewith: String,

        /// Pattern to match in entry names
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "preset")]
        regex: Option<String>,

        /// Use a saved preset as the pattern
        #[arg(short, long)]
        preset: Option<String>,

        /// Skip entries with these extensions
        #[arg(
            short,
            long,
            num_args = 0..,
            value_name = "EXT",
            conflicts_with = "only"
        )]
        ignore: Option<Vec<String>>,

        /// Only rename entries with these extensions
        #[arg(short, long, num_args = 0.., value_name = "EXT")]
        only: Option<Vec<String>>,

        /// Match directories. With --only, directories and the listed
        /// extensions; with --ignore, files only, minus the listed
        /// extensions
        #[arg(short, long)]
        directory: bool,

        /// Revert the previous batch for this directory
        #[arg(short, long)]
        undo: bool,

        /// Don't display the changes
        #[arg(short, long)]
        quiet: bool,
    },

    /// Manage the default pattern and the saved presets
    Config {
        /// Set the default pattern; without a value, show the current one
        #[arg(
            short,
            long,
            value_name = "PATTERN",
            num_args = 0..=1,
            allow_hyphen_values = true
        )]
        default: Option<Option<String>>,

        /// Save a named preset
        #[arg(
            short,
            long,
            num_args = 2,
            value_names = ["NAME", "PATTERN"],
            allow_hyphen_values = true
        )]
        add: Option<Vec<String>>,

        /// Delete presets by name ('default' clears the default pattern)
        #[arg(long, num_args = 1.., value_name = "NAME")]
        delete: Option<Vec<String>>,

        /// Show the default pattern and all presets
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
