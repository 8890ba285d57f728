use crabsave_core::core_api::{
    ChallengeProgress, SaveStatus, Snapshot, TOTAL_CHALLENGES, UNLOCK_TOTALS, UnlockEntry,
};
use crabsave_core::library::SaveSlot;
use crabsave_core::offsets::unlock_table;
use crabsave_render::{
    ACTIVE_SLOT_LABEL, render_info_text, render_json_report, render_slot_list_json,
    render_slot_list_text, render_status_text,
};
use serde_json::Value;

fn snapshot() -> Snapshot {
    let unlocks = unlock_table()
        .iter()
        .zip(UNLOCK_TOTALS)
        .enumerate()
        .map(|(i, (desc, total))| UnlockEntry {
            category: desc.name.to_string(),
            count: i as i32,
            total,
        })
        .collect();
    Snapshot {
        unlocks,
        challenges: ChallengeProgress {
            completed: 42,
            total: TOTAL_CHALLENGES,
        },
    }
}

#[test]
fn info_text_matches_panel_layout() {
    let text = render_info_text("Initial Save", Some("Friday, March 14, 2025  18:30"), &snapshot());

    assert!(text.starts_with("Save name: Initial Save\n"));
    assert!(text.contains("Last Updated:\nFriday, March 14, 2025  18:30\n"));
    assert!(text.contains("Challenges: 42 / 110\n"));
    assert!(text.contains("Unlocked weapons: 0 / 20\n"));
    assert!(text.contains("Unlocked melee weapons: 2 / 5\n"));
    assert!(text.contains("Unlocked ability mods: 4 / 43\n"));
    assert!(text.contains("Unlocked relics: 7 / 53\n"));
}

#[test]
fn info_text_without_timestamp_omits_last_updated() {
    let text = render_info_text("slot.sav", None, &snapshot());
    assert!(!text.contains("Last Updated:"));
}

#[test]
fn status_text_covers_non_ready_states() {
    assert_eq!(
        render_status_text(&SaveStatus::Unavailable),
        Some("Error: Could not read save file")
    );
    assert_eq!(
        render_status_text(&SaveStatus::Unrecognized),
        Some("Error: Could not read save file")
    );
    assert_eq!(
        render_status_text(&SaveStatus::Empty),
        Some("New Save File\n\nNo info to show")
    );
    assert_eq!(render_status_text(&SaveStatus::Ready(snapshot())), None);
}

#[test]
fn json_report_uses_canonical_key_order() {
    let value = render_json_report("Initial Save", Some("today"), &SaveStatus::Ready(snapshot()));
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["status", "name", "modified", "challenges", "unlocks"]);

    assert_eq!(value["status"], "ready");
    assert_eq!(value["challenges"]["completed"], 42);
    assert_eq!(value["unlocks"][2]["category"], "UnlockedMeleeWeapons");
    assert_eq!(value["unlocks"][2]["count"], 2);
    assert_eq!(value["unlocks"][2]["total"], 5);
}

#[test]
fn json_report_for_non_ready_states_is_status_only() {
    for (status, keyword) in [
        (SaveStatus::Unavailable, "unavailable"),
        (SaveStatus::Empty, "empty"),
        (SaveStatus::Unrecognized, "unrecognized"),
    ] {
        let value = render_json_report("x", None, &status);
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value["status"], Value::from(keyword));
    }
}

#[test]
fn slot_list_marks_the_active_slot() {
    let slots = vec![
        SaveSlot {
            name: "Initial Save".to_string(),
            dir_name: "SaveGames".to_string(),
            is_active: true,
        },
        SaveSlot {
            name: "Alpha".to_string(),
            dir_name: "Alpha".to_string(),
            is_active: false,
        },
    ];

    let text = render_slot_list_text(&slots);
    assert_eq!(text, format!("{ACTIVE_SLOT_LABEL}: Initial Save\nAlpha\n"));

    let json = render_slot_list_json(&slots);
    assert_eq!(json[0]["name"], "Initial Save");
    assert_eq!(json[0]["active"], true);
    assert_eq!(json[1]["name"], "Alpha");
    assert_eq!(json[1]["active"], false);
}
