//! Clock port so capture timestamps can be pinned in tests.

pub trait ClockPort: Send + Sync {
    /// Current time as unix epoch milliseconds.
    fn now_ms(&self) -> i64;
}
