use std::collections::BTreeSet;
use std::fs;

use rebatch_core::{
    rename_operation, undo_operation, ConfigStore, Error, FilterOptions, RecordingObserver,
    RegexSource,
};
use tempfile::TempDir;

fn listing(dir: &std::path::Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn digit_stripper() -> RegexSource {
    RegexSource {
        pattern: Some(r"\d+".to_string()),
        preset: None,
    }
}

#[test]
fn undo_restores_the_original_listing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    for file in ["a1.txt", "b2.txt", "c3.txt"] {
        fs::write(target.join(file), file).unwrap();
    }
    let before = listing(&target);

    let mut config = ConfigStore::load(temp.path().join("config.json")).unwrap();
    let mut observer = RecordingObserver::new();

    rename_operation(
        &target,
        "",
        &digit_stripper(),
        &FilterOptions::default(),
        &mut config,
        &mut observer,
    )
    .unwrap();
    assert_eq!(
        listing(&target),
        ["a.txt", "b.txt", "c.txt"]
            .into_iter()
            .map(String::from)
            .collect()
    );

    undo_operation(&target, &mut config, &mut observer).unwrap();
    assert_eq!(listing(&target), before);

    // Contents moved with the names both ways.
    assert_eq!(fs::read_to_string(target.join("a1.txt")).unwrap(), "a1.txt");
}

#[test]
fn undo_survives_a_config_reload() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("song01.mp3"), "").unwrap();
    let config_path = temp.path().join("config.json");

    {
        let mut config = ConfigStore::load(&config_path).unwrap();
        let mut observer = RecordingObserver::new();
        rename_operation(
            &target,
            "",
            &digit_stripper(),
            &FilterOptions::default(),
            &mut config,
            &mut observer,
        )
        .unwrap();
    }
    assert!(target.join("song.mp3").exists());

    // A fresh process picks the history up from disk.
    let mut config = ConfigStore::load(&config_path).unwrap();
    let mut observer = RecordingObserver::new();
    undo_operation(&target, &mut config, &mut observer).unwrap();
    assert!(target.join("song01.mp3").exists());
}

#[test]
fn undo_is_itself_undoable() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("take7.txt"), "").unwrap();

    let mut config = ConfigStore::load(temp.path().join("config.json")).unwrap();
    let mut observer = RecordingObserver::new();

    rename_operation(
        &target,
        "",
        &digit_stripper(),
        &FilterOptions::default(),
        &mut config,
        &mut observer,
    )
    .unwrap();
    assert!(target.join("take.txt").exists());

    undo_operation(&target, &mut config, &mut observer).unwrap();
    assert!(target.join("take7.txt").exists());

    // The undo recorded its own batch, so undoing again redoes the rename.
    undo_operation(&target, &mut config, &mut observer).unwrap();
    assert!(target.join("take.txt").exists());
}

#[test]
fn undo_without_history_is_a_typed_error() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();

    let mut config = ConfigStore::load(temp.path().join("config.json")).unwrap();
    let mut observer = RecordingObserver::new();

    let err = undo_operation(&target, &mut config, &mut observer).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::NoHistory(_))
    ));
}

#[test]
fn a_new_batch_replaces_the_directory_history() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("one1.txt"), "").unwrap();

    let mut config = ConfigStore::load(temp.path().join("config.json")).unwrap();
    let mut observer = RecordingObserver::new();

    rename_operation(
        &target,
        "",
        &digit_stripper(),
        &FilterOptions::default(),
        &mut config,
        &mut observer,
    )
    .unwrap();

    // Second batch: rename `one.txt` -> `won.txt`.
    let swap = RegexSource {
        pattern: Some("^one".to_string()),
        preset: None,
    };
    rename_operation(
        &target,
        "won",
        &swap,
        &FilterOptions::default(),
        &mut config,
        &mut observer,
    )
    .unwrap();
    assert!(target.join("won.txt").exists());

    // Undo reverts only the latest batch.
    undo_operation(&target, &mut config, &mut observer).unwrap();
    assert!(target.join("one.txt").exists());
    assert!(!target.join("one1.txt").exists());
}
