use std::fs;
use std::path::Path;

use crabsave_core::library::{ACTIVE_DIR, SAVE_FILE, SaveLibrary, read_description};
use tempfile::TempDir;

/// A Saved directory as the game lays it out: the active `SaveGames`
/// slot, engine-owned directories, and any number of parked slots.
fn saved_dir_fixture(parked: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for engine_dir in ["Config", "Logs", "New Save Template"] {
        fs::create_dir(dir.path().join(engine_dir)).unwrap();
    }
    make_slot(dir.path(), ACTIVE_DIR);
    for name in parked {
        make_slot(dir.path(), name);
    }
    dir
}

fn make_slot(saved: &Path, dir_name: &str) {
    let slot = saved.join(dir_name);
    fs::create_dir(&slot).unwrap();
    fs::write(slot.join(SAVE_FILE), b"save data").unwrap();
}

fn open(dir: &TempDir) -> SaveLibrary {
    let library = SaveLibrary::open(dir.path()).expect("Saved dir should open");
    library.ensure_descriptions().expect("descriptions");
    library
}

#[test]
fn open_fails_for_missing_directory() {
    assert!(SaveLibrary::open("/does/not/exist").is_err());
}

#[test]
fn descriptions_are_bootstrapped() {
    let dir = saved_dir_fixture(&["Alpha"]);
    open(&dir);

    assert_eq!(
        read_description(&dir.path().join(ACTIVE_DIR)).unwrap(),
        Some("Initial Save".to_string())
    );
    assert_eq!(
        read_description(&dir.path().join("Alpha")).unwrap(),
        Some("Alpha".to_string())
    );
}

#[test]
fn list_puts_active_slot_first_and_skips_engine_dirs() {
    let dir = saved_dir_fixture(&["Zeta", "Alpha"]);
    let library = open(&dir);

    let slots = library.list_slots().unwrap();
    let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Initial Save", "Alpha", "Zeta"]);
    assert!(slots[0].is_active);
    assert!(!slots[1].is_active);
}

#[test]
fn create_slot_makes_empty_save_file() {
    let dir = saved_dir_fixture(&[]);
    let library = open(&dir);

    let slot = library.create_slot("Fresh").unwrap();
    assert_eq!(slot.name, "Fresh");
    assert!(!slot.is_active);

    let save = library.save_file_path(&slot.dir_name);
    assert_eq!(fs::metadata(&save).unwrap().len(), 0);
    assert_eq!(
        read_description(&dir.path().join("Fresh")).unwrap(),
        Some("Fresh".to_string())
    );
}

#[test]
fn name_validation_rejects_blank_invalid_and_duplicate() {
    let dir = saved_dir_fixture(&["Alpha"]);
    let library = open(&dir);

    assert!(library.validate_new_name("").is_err());
    assert!(library.validate_new_name("   ").is_err());
    assert!(library.validate_new_name("bad:name").is_err());
    assert!(library.validate_new_name("bad/name").is_err());
    assert!(library.validate_new_name("Alpha").is_err());
    // Collides with the active slot's description, not a directory.
    assert!(library.validate_new_name("Initial Save").is_err());
    assert!(library.validate_new_name("Beta").is_ok());
}

#[test]
fn copy_slot_duplicates_save_data() {
    let dir = saved_dir_fixture(&["Alpha"]);
    let library = open(&dir);

    let slot = library.copy_slot("Alpha", "Backup").unwrap();
    assert_eq!(slot.name, "Backup");
    assert_eq!(
        fs::read(library.save_file_path("Backup")).unwrap(),
        b"save data"
    );
    // The source keeps its own description.
    assert_eq!(
        read_description(&dir.path().join("Alpha")).unwrap(),
        Some("Alpha".to_string())
    );
}

#[test]
fn copy_of_active_slot_is_allowed() {
    let dir = saved_dir_fixture(&[]);
    let library = open(&dir);

    let slot = library.copy_slot("Initial Save", "Backup").unwrap();
    assert!(!slot.is_active);
    assert!(library.save_file_path("Backup").exists());
}

#[test]
fn delete_removes_parked_slot_only() {
    let dir = saved_dir_fixture(&["Alpha"]);
    let library = open(&dir);

    library.delete_slot("Alpha").unwrap();
    assert!(!dir.path().join("Alpha").exists());

    let err = library.delete_slot("Initial Save").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(dir.path().join(ACTIVE_DIR).exists());
}

#[test]
fn delete_unknown_slot_fails() {
    let dir = saved_dir_fixture(&[]);
    let library = open(&dir);
    let err = library.delete_slot("Nope").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn activate_swaps_slot_into_save_games() {
    let dir = saved_dir_fixture(&["Alpha"]);
    let library = open(&dir);
    fs::write(dir.path().join("Alpha").join(SAVE_FILE), b"alpha bytes").unwrap();

    let slot = library.activate_slot("Alpha").unwrap();
    assert!(slot.is_active);
    assert_eq!(slot.dir_name, ACTIVE_DIR);

    // The old active slot is parked under its description name.
    assert!(dir.path().join("Initial Save").exists());
    assert!(!dir.path().join("Alpha").exists());
    assert_eq!(
        fs::read(library.save_file_path(ACTIVE_DIR)).unwrap(),
        b"alpha bytes"
    );

    let slots = library.list_slots().unwrap();
    let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Initial Save"]);
}

#[test]
fn activating_the_active_slot_is_a_no_op() {
    let dir = saved_dir_fixture(&["Alpha"]);
    let library = open(&dir);

    let slot = library.activate_slot("Initial Save").unwrap();
    assert!(slot.is_active);
    assert!(dir.path().join(ACTIVE_DIR).exists());
    assert!(dir.path().join("Alpha").exists());
}
