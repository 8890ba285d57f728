use serde::{Deserialize, Serialize};

/// Known catalogue sizes for the current game build, in unlock-table
/// order: weapons, abilities, melee weapons, weapon mods, ability mods,
/// melee mods, perks, relics.
pub const UNLOCK_TOTALS: [i32; 8] = [20, 7, 5, 90, 43, 12, 107, 53];

pub const TOTAL_CHALLENGES: u32 = 110;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnlockEntry {
    pub category: String,
    pub count: i32,
    pub total: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChallengeProgress {
    pub completed: u32,
    pub total: u32,
}

/// Everything the scanner can tell about one readable, non-empty save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub unlocks: Vec<UnlockEntry>,
    pub challenges: ChallengeProgress,
}

/// Outcome of inspecting a save file. The three non-`Ready` states are
/// deliberately distinct: a missing file, a freshly created empty slot,
/// and a file whose layout the offset table does not match are different
/// situations for a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveStatus {
    Unavailable,
    Empty,
    Unrecognized,
    Ready(Snapshot),
}
