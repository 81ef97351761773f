//! Compile-time tuning constants.

/// Default slot count for the const-generic containers. One slot is always
/// left empty, so the default usable capacity is 31.
pub const DEFAULT_CAPACITY_SLOTS: usize = 32;
