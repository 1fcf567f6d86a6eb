//! Error types for list and cursor operations.
//!
//! Every failure is detected before any mutation, so an error always leaves
//! the list exactly as it was.

use core::fmt;

/// Position outside the valid range for the attempted operation.
///
/// Carries the rejected position and the list length at the time of the
/// call. Note that the valid range depends on the operation: insertion
/// accepts `pos == len`, element access does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The rejected position.
    pub pos: usize,
    /// List length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} out of bounds for list of length {}",
            self.pos, self.len
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Cursor advance requested with no elements remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor is exhausted, no elements remain")
    }
}

impl std::error::Error for Exhausted {}

/// Cursor removal requested with no element pending.
///
/// Returned when removing through a cursor that has not yielded anything
/// yet, or whose last yielded element was already removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoCurrent;

impl fmt::Display for NoCurrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element read since construction or the last removal")
    }
}

impl std::error::Error for NoCurrent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = OutOfBounds { pos: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "position 7 out of bounds for list of length 3"
        );
    }
}
