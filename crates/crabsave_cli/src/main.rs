use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::time::SystemTime;

use clap::{Parser, Subcommand};
use crabsave_core::core_api::{Engine, SaveStatus};
use crabsave_core::library::SaveLibrary;
use crabsave_render::{
    render_info_text, render_json_report, render_slot_list_json, render_slot_list_text,
    render_status_text,
};

const STEAM_LAUNCH_URI: &str = "steam://rungameid/774801";

#[derive(Debug, Parser)]
#[command(name = "crabsave", version, about = "Crab Champions save manager")]
struct Cli {
    /// Saved directory; defaults to %LOCALAPPDATA%\CrabChampions\Saved
    #[arg(long, global = true, value_name = "DIR")]
    saved_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show unlock and challenge statistics for a save
    Info {
        /// Path to a SaveSlot.sav file
        #[arg(value_name = "SAVE.sav", conflicts_with = "slot")]
        path: Option<PathBuf>,
        /// Inspect a named slot from the Saved directory instead
        #[arg(long, value_name = "NAME")]
        slot: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List save slots, last used first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a new save slot
    Create {
        name: String,
        /// Copy an existing slot instead of starting empty
        #[arg(long, value_name = "SLOT")]
        from: Option<String>,
    },
    /// Delete a parked save slot
    Delete { name: String },
    /// Make a slot the last used save and launch the game
    Play {
        name: String,
        /// Swap the slot in without starting Steam
        #[arg(long)]
        no_launch: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Info { path, slot, json } => match (path, slot) {
            (Some(path), _) => info_path(&path, json),
            (None, Some(slot)) => info_slot(&open_library(cli.saved_dir)?, &slot, json),
            (None, None) => Err("pass a save file path or --slot <NAME>".to_string()),
        },
        Command::List { json } => list(&open_library(cli.saved_dir)?, json),
        Command::Create { name, from } => create(&open_library(cli.saved_dir)?, &name, from),
        Command::Delete { name } => delete(&open_library(cli.saved_dir)?, &name),
        Command::Play { name, no_launch } => {
            play(&open_library(cli.saved_dir)?, &name, no_launch)
        }
    }
}

fn info_path(path: &Path, json: bool) -> Result<(), String> {
    let status = Engine::new().inspect_path(path);
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(format_timestamp);
    print_report(&path.display().to_string(), modified.as_deref(), &status, json)
}

fn info_slot(library: &SaveLibrary, slot: &str, json: bool) -> Result<(), String> {
    let report = Engine::new()
        .inspect_slot(library, slot)
        .map_err(|e| e.message)?;
    let modified = report.modified.map(format_timestamp);
    print_report(&report.slot.name, modified.as_deref(), &report.status, json)
}

fn print_report(
    name: &str,
    modified: Option<&str>,
    status: &SaveStatus,
    json: bool,
) -> Result<(), String> {
    if json {
        println!("{}", render_json_report(name, modified, status));
        return match status {
            SaveStatus::Unavailable | SaveStatus::Unrecognized => {
                Err(format!("could not read save '{name}'"))
            }
            _ => Ok(()),
        };
    }

    match status {
        SaveStatus::Ready(snapshot) => {
            print!("{}", render_info_text(name, modified, snapshot));
            Ok(())
        }
        SaveStatus::Empty => {
            if let Some(text) = render_status_text(status) {
                println!("{text}");
            }
            Ok(())
        }
        SaveStatus::Unavailable | SaveStatus::Unrecognized => {
            Err(format!("could not read save '{name}'"))
        }
    }
}

fn list(library: &SaveLibrary, json: bool) -> Result<(), String> {
    let slots = library.list_slots().map_err(|e| e.to_string())?;
    if json {
        println!("{}", render_slot_list_json(&slots));
    } else {
        print!("{}", render_slot_list_text(&slots));
    }
    Ok(())
}

fn create(library: &SaveLibrary, name: &str, from: Option<String>) -> Result<(), String> {
    let slot = match from {
        Some(source) => library.copy_slot(&source, name),
        None => library.create_slot(name),
    }
    .map_err(|e| e.to_string())?;
    println!("Created save '{}'", slot.name);
    Ok(())
}

fn delete(library: &SaveLibrary, name: &str) -> Result<(), String> {
    library.delete_slot(name).map_err(|e| e.to_string())?;
    println!("Deleted save '{name}'");
    Ok(())
}

fn play(library: &SaveLibrary, name: &str, no_launch: bool) -> Result<(), String> {
    let slot = library.activate_slot(name).map_err(|e| e.to_string())?;
    println!("'{}' is now the last used save", slot.name);
    if !no_launch {
        launch_game().map_err(|e| format!("failed to launch the game: {e}"))?;
    }
    Ok(())
}

fn open_library(saved_dir: Option<PathBuf>) -> Result<SaveLibrary, String> {
    let dir = match saved_dir {
        Some(dir) => dir,
        None => default_saved_dir()
            .ok_or("no --saved-dir given and LOCALAPPDATA is not set".to_string())?,
    };
    let library = SaveLibrary::open(dir).map_err(|e| e.to_string())?;
    library.ensure_descriptions().map_err(|e| e.to_string())?;
    Ok(library)
}

fn default_saved_dir() -> Option<PathBuf> {
    std::env::var_os("LOCALAPPDATA")
        .map(|base| PathBuf::from(base).join("CrabChampions").join("Saved"))
}

fn format_timestamp(time: SystemTime) -> String {
    let local: chrono::DateTime<chrono::Local> = time.into();
    local.format("%A, %B %d, %Y  %H:%M").to_string()
}

#[cfg(windows)]
fn launch_game() -> io::Result<()> {
    process::Command::new("cmd")
        .args(["/C", "start", "", STEAM_LAUNCH_URI])
        .spawn()
        .map(|_| ())
}

#[cfg(not(windows))]
fn launch_game() -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("launching {STEAM_LAUNCH_URI} is only supported on Windows"),
    ))
}
