//! strkit - Byte-String Toolkit
//!
//! A small library of string-manipulation primitives over byte buffers:
//! concatenation, substring extraction, substring replacement, case
//! conversion, case-insensitive comparison, forward/backward search,
//! numeric-string conversions, in-place reversal, whitespace trimming, and
//! printf-style formatted construction.
//!
//! # Features
//!
//! - **Byte model**: strings are byte sequences with explicit lengths (no
//!   null terminators, no Unicode awareness, ASCII-only case mapping)
//! - **Explicit ownership**: allocating operations return an [`OwnedBuffer`]
//!   the caller exclusively owns; in-place operations mutate an exclusively
//!   borrowed buffer and return nothing
//! - **Exact-size allocation**: `replace`, `join`, `format`, and the
//!   number printers measure first, then allocate once; output buffers are
//!   never grown during the copy phase
//! - **Checked failure**: allocator refusal and out-of-range arguments
//!   surface as [`StrError`] values, never aborts or out-of-bounds access
//! - **Permissive parsing**: `parse_int`/`parse_float`/`parse_hex` are
//!   best-effort C-style parses that return `0`/`0.0` on malformed input
//!
//! # Example
//!
//! ```rust
//! use strkit::{concat, find, format, trim_whitespace, FormatArg, OwnedBuffer};
//!
//! let greeting = concat(b"hello ", b"world").unwrap();
//! assert_eq!(find(greeting.as_slice(), b"world"), Some(6));
//!
//! let mut padded = OwnedBuffer::from_str("   hi  ");
//! trim_whitespace(&mut padded);
//! assert_eq!(padded.as_slice(), b"hi");
//!
//! let line = format(b"%d-%s", &[FormatArg::Int(5), FormatArg::Str(b"x")]).unwrap();
//! assert_eq!(line.as_slice(), b"5-x");
//! ```
//!
//! # Ownership Model
//!
//! Borrowed inputs are `&[u8]` and are never retained beyond the call.
//! Returned buffers are independent allocations; no state is shared between
//! calls. Reclamation is `Drop`: there is no release primitive and
//! double-release is unrepresentable. Concurrent calls on different buffers
//! are inherently safe; `&mut` exclusivity rules out concurrent mutation of
//! the same buffer.

#![warn(clippy::all)]

pub mod ascii;
pub mod buffer;
pub mod case;
pub mod convert;
pub mod edit;
pub mod error;
pub mod format;
pub mod search;
pub mod transform;

// Re-export the toolkit surface
pub use buffer::OwnedBuffer;
pub use case::{compare_ignore_case, to_lower, to_upper};
pub use convert::{float_string, hex_string, int_string, parse_float, parse_hex, parse_int};
pub use edit::{concat, join, replace, split, substring};
pub use error::{StrError, StrResult};
pub use format::{format, FormatArg};
pub use search::{
    count, count_char, ends_with, find, find_char, rfind, rfind_char, starts_with,
};
pub use transform::{reverse, trim_whitespace};
