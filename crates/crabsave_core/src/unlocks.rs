//! Fixed-offset extraction of unlock counts from property blocks.

use std::error::Error;
use std::fmt;

use crate::offsets::FieldDescriptor;
use crate::scan::{find_marker, window_at};

const I32_WIDTH: usize = 4;

/// Why a field (and therefore the whole aggregate read) failed. Both
/// variants mean the file does not match the assumed layout; callers
/// treat them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The name marker was not found anywhere in the buffer.
    Absent { field: &'static str },
    /// Marker found, but the count field falls outside the clipped window.
    Truncated { field: &'static str },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absent { field } => write!(f, "marker for {field} not found"),
            Self::Truncated { field } => {
                write!(f, "window after {field} marker too short for count field")
            }
        }
    }
}

impl Error for ExtractError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockCount {
    pub category: &'static str,
    pub count: i32,
}

/// Read one count: anchor on the field's marker, then read a little-endian
/// `i32` at the field's relative offset, never past
/// `min(marker + window, buffer end)`.
pub fn extract_field(buf: &[u8], desc: &FieldDescriptor) -> Result<i32, ExtractError> {
    let idx = find_marker(buf, desc.marker).ok_or(ExtractError::Absent { field: desc.name })?;
    let block = window_at(buf, idx, desc.window);

    let end = desc.relative_offset + I32_WIDTH;
    if end > block.len() {
        return Err(ExtractError::Truncated { field: desc.name });
    }

    let mut raw = [0u8; I32_WIDTH];
    raw.copy_from_slice(&block[desc.relative_offset..end]);
    Ok(i32::from_le_bytes(raw))
}

/// Run every descriptor in table order. All-or-nothing: the eight counts
/// are fragments of one serialized object, so a single missing or
/// truncated field means the layout has drifted and no neighboring value
/// can be trusted either. Partial mappings are never returned.
pub fn extract_unlock_counts(
    buf: &[u8],
    table: &[FieldDescriptor],
) -> Result<Vec<UnlockCount>, ExtractError> {
    let mut counts = Vec::with_capacity(table.len());
    for desc in table {
        counts.push(UnlockCount {
            category: desc.name,
            count: extract_field(buf, desc)?,
        });
    }
    Ok(counts)
}
