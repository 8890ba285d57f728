//! Save-slot management for the game's `Saved` directory.
//!
//! The game always loads from `Saved/SaveGames/`; every other slot is a
//! parked directory that can be swapped into place. Each slot carries its
//! display name in a sidecar description file so renaming a slot never
//! touches the save data itself.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directories the game engine owns inside `Saved`; never listed as slots.
const RESERVED_DIRS: [&str; 3] = ["Config", "Logs", "New Save Template"];
/// Directory the game actually loads its save from.
pub const ACTIVE_DIR: &str = "SaveGames";
/// Save file inside every slot directory.
pub const SAVE_FILE: &str = "SaveSlot.sav";
const DESC_FILE: &str = ".description.txt";
/// Characters Windows forbids in directory names.
pub const INVALID_NAME_CHARS: &str = "<>:\"/\\|?*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    /// Display name from the description file, falling back to the
    /// directory name.
    pub name: String,
    /// Directory under `Saved` holding this slot.
    pub dir_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct SaveLibrary {
    saved_dir: PathBuf,
}

impl SaveLibrary {
    pub fn open<P: Into<PathBuf>>(saved_dir: P) -> io::Result<Self> {
        let saved_dir = saved_dir.into();
        if !saved_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Saved directory not found: {}", saved_dir.display()),
            ));
        }
        Ok(Self { saved_dir })
    }

    pub fn saved_dir(&self) -> &Path {
        &self.saved_dir
    }

    pub fn save_file_path(&self, dir_name: &str) -> PathBuf {
        self.saved_dir.join(dir_name).join(SAVE_FILE)
    }

    /// Give every slot a description: the active slot becomes
    /// "Initial Save" on first sight, parked slots default to their
    /// directory name.
    pub fn ensure_descriptions(&self) -> io::Result<()> {
        for dir_name in self.slot_dir_names()? {
            let dir = self.saved_dir.join(&dir_name);
            if read_description(&dir)?.is_none() {
                let default = if dir_name == ACTIVE_DIR {
                    "Initial Save"
                } else {
                    dir_name.as_str()
                };
                write_description(&dir, default)?;
            }
        }
        Ok(())
    }

    /// Slots in display order: the active slot first, then parked slots
    /// by name.
    pub fn list_slots(&self) -> io::Result<Vec<SaveSlot>> {
        let mut slots = Vec::new();
        for dir_name in self.slot_dir_names()? {
            let dir = self.saved_dir.join(&dir_name);
            let is_active = dir_name == ACTIVE_DIR;
            let name = read_description(&dir)?.unwrap_or_else(|| dir_name.clone());
            slots.push(SaveSlot {
                name,
                dir_name,
                is_active,
            });
        }
        slots.sort_by(|a, b| {
            b.is_active
                .cmp(&a.is_active)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(slots)
    }

    /// Look a slot up by display name or directory name.
    pub fn find_slot(&self, name: &str) -> io::Result<Option<SaveSlot>> {
        Ok(self
            .list_slots()?
            .into_iter()
            .find(|slot| slot.name == name || slot.dir_name == name))
    }

    /// Check a proposed slot name: non-blank, no reserved characters, no
    /// collision with an existing directory or the active slot's
    /// description.
    pub fn validate_new_name(&self, name: &str) -> io::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "save name cannot be blank",
            ));
        }
        if name.chars().any(|ch| INVALID_NAME_CHARS.contains(ch)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("save name contains invalid characters ({INVALID_NAME_CHARS})"),
            ));
        }
        let taken = self.saved_dir.join(name).exists()
            || read_description(&self.saved_dir.join(ACTIVE_DIR))?.as_deref() == Some(name);
        if taken {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("a save named '{name}' already exists"),
            ));
        }
        Ok(())
    }

    /// New parked slot holding an empty save file.
    pub fn create_slot(&self, name: &str) -> io::Result<SaveSlot> {
        self.validate_new_name(name)?;
        let name = name.trim();
        let dir = self.saved_dir.join(name);
        fs::create_dir(&dir)?;
        fs::File::create(dir.join(SAVE_FILE))?;
        write_description(&dir, name)?;
        Ok(SaveSlot {
            name: name.to_string(),
            dir_name: name.to_string(),
            is_active: false,
        })
    }

    /// Copy an existing slot (active or parked) into a new parked slot.
    pub fn copy_slot(&self, source: &str, name: &str) -> io::Result<SaveSlot> {
        self.validate_new_name(name)?;
        let source_slot = self.find_slot(source)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("save '{source}' not found"))
        })?;
        let name = name.trim();
        let dest = self.saved_dir.join(name);
        copy_dir_recursive(&self.saved_dir.join(&source_slot.dir_name), &dest)?;
        write_description(&dest, name)?;
        Ok(SaveSlot {
            name: name.to_string(),
            dir_name: name.to_string(),
            is_active: false,
        })
    }

    /// Remove a parked slot. The active slot is the one the game loads;
    /// deleting it is refused.
    pub fn delete_slot(&self, name: &str) -> io::Result<()> {
        let slot = self.find_slot(name)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("save '{name}' not found"))
        })?;
        if slot.is_active {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot delete the last used save",
            ));
        }
        fs::remove_dir_all(self.saved_dir.join(&slot.dir_name))
    }

    /// Make `name` the slot the game loads: park the current active slot
    /// under its description name, then move the chosen slot into place.
    pub fn activate_slot(&self, name: &str) -> io::Result<SaveSlot> {
        let slot = self.find_slot(name)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("save '{name}' not found"))
        })?;
        if slot.is_active {
            return Ok(slot);
        }

        let active_dir = self.saved_dir.join(ACTIVE_DIR);
        if active_dir.exists() {
            let parked_name =
                read_description(&active_dir)?.unwrap_or_else(|| "Initial Save".to_string());
            fs::rename(&active_dir, self.saved_dir.join(&parked_name))?;
        }
        fs::rename(self.saved_dir.join(&slot.dir_name), &active_dir)?;

        Ok(SaveSlot {
            name: slot.name,
            dir_name: ACTIVE_DIR.to_string(),
            is_active: true,
        })
    }

    fn slot_dir_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.saved_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if RESERVED_DIRS.contains(&name.as_str()) {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

/// Display name stored beside a slot's save data; `None` when the sidecar
/// is missing or blank.
pub fn read_description(slot_dir: &Path) -> io::Result<Option<String>> {
    let path = slot_dir.join(DESC_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

pub fn write_description(slot_dir: &Path, name: &str) -> io::Result<()> {
    fs::write(slot_dir.join(DESC_FILE), name)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
