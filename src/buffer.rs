//! Owned text buffer type.
//!
//! Every allocating operation in the crate returns an [`OwnedBuffer`]: a
//! contiguous byte sequence with explicit length, exclusively owned by the
//! caller. Reclamation is `Drop`; there is no separate release primitive and
//! double-release is unrepresentable.

use crate::error::{StrError, StrResult};

/// Memory-safe buffer that owns its data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnedBuffer {
    data: Vec<u8>,
}

impl OwnedBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Allocate a zero-filled buffer of `size` bytes.
    ///
    /// Allocator refusal surfaces as [`StrError::AllocationFailed`] rather
    /// than an abort.
    pub fn allocate(size: usize) -> StrResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| StrError::AllocationFailed { bytes: size })?;
        data.resize(size, 0);
        Ok(Self { data })
    }

    /// Allocate an empty buffer with capacity for exactly `size` bytes.
    ///
    /// Writes up to `size` bytes are guaranteed not to reallocate. This is
    /// the single allocation behind the measure-then-write operations.
    pub fn with_exact_capacity(size: usize) -> StrResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| StrError::AllocationFailed { bytes: size })?;
        Ok(Self { data })
    }

    /// Copy a slice into a freshly allocated buffer.
    pub fn try_from_slice(bytes: &[u8]) -> StrResult<Self> {
        let mut buf = Self::with_exact_capacity(bytes.len())?;
        buf.data.extend_from_slice(bytes);
        Ok(buf)
    }

    /// Create a buffer from a Vec without copying.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a buffer from a string slice (copies data).
    pub fn from_str(s: &str) -> Self {
        Self {
            data: s.as_bytes().to_vec(),
        }
    }

    /// Get the length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Get the buffer as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the underlying Vec.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Try to view the buffer as a UTF-8 string slice.
    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.data)
    }

    /// Append bytes. The caller is responsible for having reserved capacity
    /// when the no-reallocation guarantee matters.
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Shift the retained span `[start, end)` to offset 0 and truncate.
    /// Capacity is unchanged.
    pub(crate) fn retain_span(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.data.len());
        self.data.copy_within(start..end, 0);
        self.data.truncate(end - start);
    }
}

impl AsRef<[u8]> for OwnedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for OwnedBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}
