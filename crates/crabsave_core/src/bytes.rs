use std::fs;
use std::path::Path;

/// Outcome of loading a save file into memory.
///
/// `Unavailable` covers every I/O failure: missing file, permission denied,
/// path is a directory. `Empty` is a distinct, legitimate state: the file
/// exists but holds zero bytes, which is what a freshly created save slot
/// looks like before the game first writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveBytes {
    Unavailable,
    Empty,
    Data(Vec<u8>),
}

impl SaveBytes {
    pub fn as_slice(&self) -> Option<&[u8]> {
        match self {
            Self::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Read a save file's full contents. I/O faults never escape the parsing
/// layer; they collapse into `SaveBytes::Unavailable`.
pub fn load_bytes<P: AsRef<Path>>(path: P) -> SaveBytes {
    match fs::read(path) {
        Ok(bytes) if bytes.is_empty() => SaveBytes::Empty,
        Ok(bytes) => SaveBytes::Data(bytes),
        Err(_) => SaveBytes::Unavailable,
    }
}
