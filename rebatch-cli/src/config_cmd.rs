use anyhow::{bail, Result};
use rebatch_core::{
    add_preset_operation, delete_presets_operation, list_presets_operation, set_default_operation,
    show_default_operation, ConfigStore,
};

pub fn handle_config(
    default: Option<Option<String>>,
    add: Option<Vec<String>>,
    delete: Option<Vec<String>>,
    list: bool,
    config: &mut ConfigStore,
) -> Result<()> {
    if let Some(value) = default {
        match value {
            Some(pattern) => set_default_operation(config, &pattern)?,
            None => println!("{}", show_default_operation(config)),
        }
    } else if let Some(pair) = add {
        // clap guarantees exactly two values
        add_preset_operation(config, &pair[0], &pair[1])?;
    } else if let Some(names) = delete {
        for name in delete_presets_operation(config, &names)? {
            eprintln!("'{name}' is not in the presets.");
        }
    } else if list {
        println!("{}", list_presets_operation(config));
    } else {
        bail!("nothing to do: pass --default, --add, --delete or --list");
    }

    Ok(())
}
