//! Error types for toolkit operations.

use thiserror::Error;

/// Error type for fallible toolkit operations.
///
/// Everything else in the crate is total: failed searches return `None`,
/// malformed numeric input parses to `0`/`0.0`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrError {
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("range out of bounds: start {start} + len {len} > buffer length {buf_len}")]
    OutOfBounds {
        start: usize,
        len: usize,
        buf_len: usize,
    },

    #[error("format string ends inside a conversion specifier")]
    UnterminatedSpecifier,

    #[error("unknown conversion specifier '%{0}'")]
    UnknownSpecifier(char),

    #[error("conversion '%{spec}' cannot render argument {index}")]
    MismatchedArgument { spec: char, index: usize },

    #[error("format string needs argument {index} but only {provided} were supplied")]
    MissingArgument { index: usize, provided: usize },
}

/// Result type for toolkit operations.
pub type StrResult<T> = Result<T, StrError>;
