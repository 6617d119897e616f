use anyhow::Result;
use rebatch_core::{
    rename_operation, undo_operation, ConfigStore, ConsoleObserver, FilterOptions, RegexSource,
};
use std::path::Path;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_rename(
    path: &Path,
    replacewith: &str,
    regex: Option<String>,
    preset: Option<String>,
    ignore: Option<Vec<String>>,
    only: Option<Vec<String>>,
    directory: bool,
    undo: bool,
    quiet: bool,
    config: &mut ConfigStore,
    use_color: bool,
) -> Result<()> {
    let mut observer = ConsoleObserver::new(quiet, use_color);

    if undo {
        undo_operation(path, config, &mut observer)?;
    } else {
        let source = RegexSource {
            pattern: regex,
            preset,
        };
        let filter = FilterOptions {
            directories: directory,
            only,
            ignore,
        };
        rename_operation(path, replacewith, &source, &filter, config, &mut observer)?;
    }

    Ok(())
}
