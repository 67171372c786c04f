//! Failure values returned by the containers.
//!
//! Each failure kind is its own concrete type so call sites acknowledge
//! exactly what went wrong: an end operation on an empty container is not
//! the same mistake as an index outside its documented bound, and the two
//! are never collapsed into one opaque error. Every value is `Copy` and
//! carries enough context to format a useful message.

use core::fmt;

/// Error returned by end accessors and removers on an empty container.
///
/// Callers can avoid it entirely by checking `is_empty()` first; the
/// container itself has no recovery to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl std::error::Error for Empty {}

/// The bound an index was checked against.
///
/// Positional access is valid for `0..len`; insertion additionally permits
/// `len` itself (appending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBound {
    /// Access bound: `0..len`.
    Access,
    /// Insertion bound: `0..=len`.
    Insert,
}

/// Error returned by indexed operations when the index violates its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// The container length at the time of the call.
    pub len: usize,
    /// Which bound was violated.
    pub bound: IndexBound,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            IndexBound::Access => write!(
                f,
                "index {} out of range for length {} (valid: 0..{})",
                self.index, self.len, self.len
            ),
            IndexBound::Insert => write!(
                f,
                "insertion index {} out of range for length {} (valid: 0..={})",
                self.index, self.len, self.len
            ),
        }
    }
}

impl std::error::Error for IndexOutOfRange {}
