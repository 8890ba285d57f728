use std::fmt::Write as _;

use crabsave_core::core_api::{SaveStatus, Snapshot};
use crabsave_core::library::SaveSlot;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Label the active slot carries in listings.
pub const ACTIVE_SLOT_LABEL: &str = "[Last Used Save]";

/// Info-panel text for a readable save: name, last-updated timestamp,
/// challenge progress, then one line per unlock category.
pub fn render_info_text(save_name: &str, modified: Option<&str>, snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Save name: {save_name}");
    out.push('\n');
    if let Some(modified) = modified {
        let _ = writeln!(out, "Last Updated:\n{modified}");
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Challenges: {} / {}",
        snapshot.challenges.completed, snapshot.challenges.total
    );
    for entry in &snapshot.unlocks {
        let _ = writeln!(
            out,
            "{}: {} / {}",
            category_label(&entry.category),
            entry.count,
            entry.total
        );
    }
    out
}

/// Message for the non-`Ready` states; `None` for `Ready` (use
/// `render_info_text`).
pub fn render_status_text(status: &SaveStatus) -> Option<&'static str> {
    match status {
        SaveStatus::Unavailable | SaveStatus::Unrecognized => {
            Some("Error: Could not read save file")
        }
        SaveStatus::Empty => Some("New Save File\n\nNo info to show"),
        SaveStatus::Ready(_) => None,
    }
}

/// JSON report with canonical top-level key order: status, name,
/// modified, challenges, unlocks. Only `Ready` carries the data keys.
pub fn render_json_report(
    save_name: &str,
    modified: Option<&str>,
    status: &SaveStatus,
) -> JsonValue {
    let mut root = JsonMap::new();
    root.insert(
        "status".to_string(),
        JsonValue::String(status_keyword(status).to_string()),
    );

    if let SaveStatus::Ready(snapshot) = status {
        root.insert(
            "name".to_string(),
            JsonValue::String(save_name.to_string()),
        );
        root.insert(
            "modified".to_string(),
            match modified {
                Some(text) => JsonValue::String(text.to_string()),
                None => JsonValue::Null,
            },
        );

        let mut challenges = JsonMap::new();
        challenges.insert(
            "completed".to_string(),
            JsonValue::from(snapshot.challenges.completed),
        );
        challenges.insert(
            "total".to_string(),
            JsonValue::from(snapshot.challenges.total),
        );
        root.insert("challenges".to_string(), JsonValue::Object(challenges));

        let unlocks = snapshot
            .unlocks
            .iter()
            .map(|entry| {
                let mut unlock = JsonMap::new();
                unlock.insert(
                    "category".to_string(),
                    JsonValue::String(entry.category.clone()),
                );
                unlock.insert("count".to_string(), JsonValue::from(entry.count));
                unlock.insert("total".to_string(), JsonValue::from(entry.total));
                JsonValue::Object(unlock)
            })
            .collect();
        root.insert("unlocks".to_string(), JsonValue::Array(unlocks));
    }

    JsonValue::Object(root)
}

/// One line per slot, active first.
pub fn render_slot_list_text(slots: &[SaveSlot]) -> String {
    let mut out = String::new();
    for slot in slots {
        if slot.is_active {
            let _ = writeln!(out, "{ACTIVE_SLOT_LABEL}: {}", slot.name);
        } else {
            let _ = writeln!(out, "{}", slot.name);
        }
    }
    out
}

pub fn render_slot_list_json(slots: &[SaveSlot]) -> JsonValue {
    let entries = slots
        .iter()
        .map(|slot| {
            let mut entry = JsonMap::new();
            entry.insert("name".to_string(), JsonValue::String(slot.name.clone()));
            entry.insert(
                "active".to_string(),
                JsonValue::Bool(slot.is_active),
            );
            JsonValue::Object(entry)
        })
        .collect();
    JsonValue::Array(entries)
}

fn status_keyword(status: &SaveStatus) -> &'static str {
    match status {
        SaveStatus::Unavailable => "unavailable",
        SaveStatus::Empty => "empty",
        SaveStatus::Unrecognized => "unrecognized",
        SaveStatus::Ready(_) => "ready",
    }
}

/// "UnlockedMeleeWeapons" renders as "Unlocked melee weapons".
fn category_label(category: &str) -> String {
    let mut label = String::with_capacity(category.len() + 4);
    for (i, ch) in category.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch.to_ascii_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}
