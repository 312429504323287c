//! Tracing/logging setup shared by the binary and the test harnesses.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls are no-ops, which lets
/// integration tests call it per test without coordination.
pub fn init() {
    tracing::init();
}
