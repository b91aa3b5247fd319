use std::time::Duration;

/// The simulated-backend delay strategy.
///
/// Store operations await one round trip before touching state, standing in
/// for a future network call. Injecting the strategy lets tests substitute
/// a zero-delay implementation and assert deterministic ordering.
pub trait Latency: Send + Sync {
    /// Returns the duration of one simulated round trip.
    fn round_trip(&self) -> Duration;
}

/// A fixed simulated round-trip delay.
pub struct FixedLatency(pub Duration);

impl FixedLatency {
    /// Creates a fixed delay from a millisecond count.
    pub fn from_millis(millis: u64) -> Self {
        FixedLatency(Duration::from_millis(millis))
    }
}

impl Latency for FixedLatency {
    fn round_trip(&self) -> Duration {
        self.0
    }
}

/// A zero-delay strategy for tests.
pub struct NoLatency;

impl Latency for NoLatency {
    fn round_trip(&self) -> Duration {
        Duration::ZERO
    }
}
