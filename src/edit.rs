//! Allocating string editors: concat, substring, replace, split, join.
//!
//! Every operation here computes its exact output size first and allocates
//! once; nothing grows a buffer mid-copy. Inputs are borrowed and never
//! modified.

use crate::buffer::OwnedBuffer;
use crate::error::{StrError, StrResult};
use crate::search;

/// Concatenate `a` and `b` into a new owned buffer.
///
/// The result has length `a.len() + b.len()`; no separator is inserted.
pub fn concat(a: &[u8], b: &[u8]) -> StrResult<OwnedBuffer> {
    let mut out = OwnedBuffer::with_exact_capacity(a.len() + b.len())?;
    out.push_bytes(a);
    out.push_bytes(b);
    Ok(out)
}

/// Copy exactly `len` bytes of `s` starting at `start` into a new buffer.
///
/// Out-of-range arguments fail with [`StrError::OutOfBounds`]; there is no
/// silent clamping and no out-of-bounds read.
pub fn substring(s: &[u8], start: usize, len: usize) -> StrResult<OwnedBuffer> {
    let end = start.checked_add(len).ok_or(StrError::OutOfBounds {
        start,
        len,
        buf_len: s.len(),
    })?;
    if end > s.len() {
        return Err(StrError::OutOfBounds {
            start,
            len,
            buf_len: s.len(),
        });
    }
    OwnedBuffer::try_from_slice(&s[start..end])
}

/// Replace every non-overlapping occurrence of `target` in `s` with
/// `replacement`.
///
/// Scans left to right; once a match is consumed the scan resumes after it,
/// never rescanning into just-spliced replacement text. Two passes: count
/// occurrences, allocate the exact output once, then splice. Zero
/// occurrences returns a copy of `s`, as does an empty `target` (the
/// original scan cannot advance past an empty pattern).
pub fn replace(s: &[u8], target: &[u8], replacement: &[u8]) -> StrResult<OwnedBuffer> {
    if target.is_empty() {
        return OwnedBuffer::try_from_slice(s);
    }

    let n = search::count(s, target);
    if n == 0 {
        return OwnedBuffer::try_from_slice(s);
    }

    // Exact output size: removed target bytes cannot exceed s.len().
    let out_len = s.len() - n * target.len() + n * replacement.len();
    let mut out = OwnedBuffer::with_exact_capacity(out_len)?;

    let mut from = 0;
    while let Some(at) = search::find(&s[from..], target) {
        out.push_bytes(&s[from..from + at]);
        out.push_bytes(replacement);
        from += at + target.len();
    }
    out.push_bytes(&s[from..]);

    debug_assert_eq!(out.len(), out_len);
    Ok(out)
}

/// Split `s` on non-overlapping occurrences of `delim`.
///
/// Adjacent delimiters produce empty segments; a leading or trailing
/// delimiter produces a leading or trailing empty segment. An empty `delim`
/// yields a single copy of `s`.
pub fn split(s: &[u8], delim: &[u8]) -> StrResult<Vec<OwnedBuffer>> {
    if delim.is_empty() {
        return Ok(vec![OwnedBuffer::try_from_slice(s)?]);
    }

    let mut parts = Vec::new();
    let mut from = 0;
    while let Some(at) = search::find(&s[from..], delim) {
        parts.push(OwnedBuffer::try_from_slice(&s[from..from + at])?);
        from += at + delim.len();
    }
    parts.push(OwnedBuffer::try_from_slice(&s[from..])?);
    Ok(parts)
}

/// Join `parts` with `sep` between consecutive parts.
///
/// Sized exactly before the single allocation, like `replace`.
pub fn join<T: AsRef<[u8]>>(parts: &[T], sep: &[u8]) -> StrResult<OwnedBuffer> {
    let content: usize = parts.iter().map(|p| p.as_ref().len()).sum();
    let seps = sep.len() * parts.len().saturating_sub(1);
    let mut out = OwnedBuffer::with_exact_capacity(content + seps)?;

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_bytes(sep);
        }
        out.push_bytes(part.as_ref());
    }
    Ok(out)
}
