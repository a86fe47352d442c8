//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a snowflake-shaped id that will not collide with other factory ids.
///
/// # Returns
/// - `u64` - Unique id in the Discord snowflake range
pub fn next_snowflake() -> u64 {
    100_000_000_000_000_000 + next_id()
}
