use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rebatch_core::{ConfigStore, Error};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

mod cli;
mod config_cmd;
mod rename;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    match run(cli, use_color) {
        Ok(()) => {},
        Err(e) => {
            eprintln!("Error: {e:#}");

            // Usage and configuration problems exit 2, everything else 3.
            let exit_code = match e.downcast_ref::<Error>() {
                Some(
                    Error::PathNotFound(_)
                    | Error::NotADirectory(_)
                    | Error::NoRegexAvailable
                    | Error::PresetNotFound(_)
                    | Error::ReservedPresetName
                    | Error::PresetCapacity { .. }
                    | Error::NoHistory(_)
                    | Error::InvalidPattern(_),
                ) => 2,
                _ => 3,
            };
            process::exit(exit_code);
        },
    }
}

fn run(cli: Cli, use_color: bool) -> Result<()> {
    let Cli {
        command, config, ..
    } = cli;

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        },
        Commands::Rename {
            path,
            replacewith,
            regex,
            preset,
            ignore,
            only,
            directory,
            undo,
            quiet,
        } => {
            let mut store = load_config(config)?;
            rename::handle_rename(
                &path,
                &replacewith,
                regex,
                preset,
                ignore,
                only,
                directory,
                undo,
                quiet,
                &mut store,
                use_color,
            )
        },
        Commands::Config {
            default,
            add,
            delete,
            list,
        } => {
            let mut store = load_config(config)?;
            config_cmd::handle_config(default, add, delete, list, &mut store)
        },
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ConfigStore> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let store = ConfigStore::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok(store)
}

fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .context("could not determine a config directory; pass --config <PATH>")?;
    Ok(base.join("rebatch").join("config.json"))
}
