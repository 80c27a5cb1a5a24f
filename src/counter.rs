//! Pure build-number arithmetic, independent of any storage.

use crate::error::{Result, StampError};

/// Value a counter store holds before the first stamped build.
pub const UNINITIALIZED: i64 = -1;

/// Compute the build number for this run from the last persisted one.
///
/// An absent store counts as [`UNINITIALIZED`], so the first build is 0.
pub fn next_build(previous: Option<i64>) -> Result<i64> {
    let previous = previous.unwrap_or(UNINITIALIZED);
    previous
        .checked_add(1)
        .ok_or(StampError::Overflow(previous))
}

/// Whether `value` may appear in a counter store.
pub fn is_valid_stored(value: i64) -> bool {
    value >= UNINITIALIZED
}
