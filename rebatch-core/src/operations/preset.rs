use anyhow::Result;
use comfy_table::Table;

use crate::config::ConfigStore;
use crate::error::Error;

/// Set the default pattern (empty clears it) and persist.
pub fn set_default_operation(config: &mut ConfigStore, pattern: &str) -> Result<()> {
    config.set_default_pattern(pattern)?;
    config.save()?;
    Ok(())
}

pub fn show_default_operation(config: &ConfigStore) -> String {
    format!("Default: {}", config.default_pattern().unwrap_or("(unset)"))
}

/// Save a named preset and persist.
pub fn add_preset_operation(config: &mut ConfigStore, name: &str, pattern: &str) -> Result<()> {
    config.add_preset(name, pattern)?;
    config.save()?;
    Ok(())
}

/// Delete presets by name; `default` clears the default pattern. Unknown
/// names are returned rather than aborting, so the rest still get deleted.
pub fn delete_presets_operation(config: &mut ConfigStore, names: &[String]) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for name in names {
        match config.remove_preset(name) {
            Ok(()) => {},
            Err(Error::PresetNotFound(name)) => missing.push(name),
            Err(e) => return Err(e.into()),
        }
    }
    config.save()?;
    Ok(missing)
}

/// Render the default pattern and the saved presets as a table, default
/// first, presets in insertion order.
pub fn list_presets_operation(config: &ConfigStore) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Pattern"]);
    if let Some(default) = config.default_pattern() {
        table.add_row(vec!["default", default]);
    }
    for (name, pattern) in config.presets() {
        table.add_row(vec![name, pattern]);
    }
    table.to_string()
}
