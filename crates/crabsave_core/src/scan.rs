//! Plain forward substring search over byte buffers, with window bounds
//! that are always clipped to the end of the buffer. Truncated or
//! malformed input degrades to "not found", never to an out-of-bounds
//! read.

/// Byte offset of the first occurrence of `marker` in `haystack`.
pub fn find_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() || haystack.len() < marker.len() {
        return None;
    }
    haystack.windows(marker.len()).position(|w| w == marker)
}

/// First occurrence of `marker` that lies entirely within the window of
/// `window` bytes starting at `start`. The returned offset is absolute
/// within `buf`.
pub fn find_marker_within(
    buf: &[u8],
    marker: &[u8],
    start: usize,
    window: usize,
) -> Option<usize> {
    find_marker(window_at(buf, start, window), marker).map(|pos| start + pos)
}

/// The slice `[start, start + window)` clipped to the buffer; empty when
/// `start` is past the end.
pub fn window_at(buf: &[u8], start: usize, window: usize) -> &[u8] {
    if start >= buf.len() {
        return &[];
    }
    let end = start.saturating_add(window).min(buf.len());
    &buf[start..end]
}
