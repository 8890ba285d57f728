//! The unlock offset table: versioned configuration describing where each
//! unlock count lives relative to its property-name marker.

/// Where to find one serialized unlock count.
///
/// `relative_offset` is the empirically measured byte distance from the
/// start of the name marker to the little-endian `i32` count field. The
/// offsets legitimately differ per property because each property's
/// type-tag/header encoding differs in length; none of that header is
/// parsed, only probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub marker: &'static [u8],
    pub relative_offset: usize,
    pub window: usize,
}

/// Search window after each unlock marker. Every `relative_offset + 4`
/// must fit inside it.
pub const UNLOCK_FIELD_WINDOW: usize = 80;

/// Unlock table for the current save-format revision. A future format
/// change means a new table here, not new scan logic.
pub const UNLOCK_TABLE_V1: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "UnlockedWeapons",
        marker: b"UnlockedWeapons",
        relative_offset: 62,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedAbilities",
        marker: b"UnlockedAbilities",
        relative_offset: 64,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedMeleeWeapons",
        marker: b"UnlockedMeleeWeapons",
        relative_offset: 67,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedWeaponMods",
        marker: b"UnlockedWeaponMods",
        relative_offset: 65,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedAbilityMods",
        marker: b"UnlockedAbilityMods",
        relative_offset: 66,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedMeleeMods",
        marker: b"UnlockedMeleeMods",
        relative_offset: 64,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedPerks",
        marker: b"UnlockedPerks",
        relative_offset: 60,
        window: UNLOCK_FIELD_WINDOW,
    },
    FieldDescriptor {
        name: "UnlockedRelics",
        marker: b"UnlockedRelics",
        relative_offset: 61,
        window: UNLOCK_FIELD_WINDOW,
    },
];

/// Table for the save-format revision the game currently ships.
pub fn unlock_table() -> &'static [FieldDescriptor] {
    UNLOCK_TABLE_V1
}
