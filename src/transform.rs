//! In-place transformations: reversal and whitespace trimming.

use crate::ascii::is_space;
use crate::buffer::OwnedBuffer;

/// Reverse the buffer in place by swapping bytes about the midpoint.
pub fn reverse(buf: &mut [u8]) {
    buf.reverse();
}

/// Remove leading and trailing whitespace in place.
///
/// The retained span is shifted to offset 0 and the buffer truncated; the
/// logical length shrinks but capacity is untouched. Both scans are bounded
/// by the buffer length, so an all-whitespace buffer trims to empty without
/// reading past the end.
pub fn trim_whitespace(buf: &mut OwnedBuffer) {
    let bytes = buf.as_slice();
    let len = bytes.len();

    let mut start = 0;
    while start < len && is_space(bytes[start]) {
        start += 1;
    }

    let mut end = len;
    while end > start && is_space(bytes[end - 1]) {
        end -= 1;
    }

    buf.retain_span(start, end);
}
