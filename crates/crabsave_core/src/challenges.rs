//! Challenge completion bitscan: a two-level bounded scan that counts
//! completed challenges without parsing the surrounding property headers.

use crate::scan::{find_marker, find_marker_within, window_at};

const SECTION_MARKER: &[u8] = b"Challenges";
const SECTION_WINDOW: usize = 100_000;
const ENTRY_MARKER: &[u8] = b"bChallengeCompleted";
const TYPE_MARKER: &[u8] = b"BoolProperty";
/// How far past an entry marker the nested type tag may start.
const TYPE_LOOKAHEAD: usize = 160;
/// Slice inspected right after the type tag; the boolean value sits at a
/// fixed position inside it.
const VALUE_TAIL: usize = 32;
const VALUE_BYTE_INDEX: usize = 9;

/// Count completed challenges in one save buffer. Never fails: a buffer
/// with no `Challenges` section yields 0, which is the legitimate "no
/// challenges yet" state rather than an error.
///
/// Within the bounded section window, every `bChallengeCompleted` entry is
/// classified by locating its nearby `BoolProperty` tag and reading a
/// single byte at a fixed tail position. The tail-byte probe deliberately
/// skips the record's length prefix: the lookahead already anchors each
/// entry independently, so variable-length leading metadata cannot shift
/// the value byte.
pub fn count_completed_challenges(buf: &[u8]) -> u32 {
    let Some(section) = find_marker(buf, SECTION_MARKER) else {
        return 0;
    };
    let block = window_at(buf, section, SECTION_WINDOW);

    let mut total = 0u32;
    let mut cursor = 0usize;
    while let Some(found) = find_marker(&block[cursor..], ENTRY_MARKER) {
        let entry = cursor + found;
        if entry_is_completed(block, entry) {
            total += 1;
        }
        cursor = entry + ENTRY_MARKER.len();
    }
    total
}

/// An entry with no type tag within the lookahead contributes nothing,
/// neither true nor false; its encoding could not be located.
fn entry_is_completed(block: &[u8], entry: usize) -> bool {
    let Some(tag) = find_marker_within(block, TYPE_MARKER, entry, TYPE_LOOKAHEAD) else {
        return false;
    };
    let tail = window_at(block, tag + TYPE_MARKER.len(), VALUE_TAIL);
    tail.len() > VALUE_BYTE_INDEX && tail[VALUE_BYTE_INDEX] == 1
}
