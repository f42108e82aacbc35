//! The loading gate: a single fixed-length pause before the first render.
//!
//! It models fetch latency for the interactive session. It has no failure
//! path and cannot be cancelled; once it resolves, loading stays `Ready`.

use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 600;

/// Message shown while the gate is pending.
pub const LOADING_MESSAGE: &str = "Loading DLC...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
}

#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
    delay: Duration,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Blocks for the configured delay and resolves to `Ready`.
    pub fn wait(self) -> LoadState {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        LoadState::Ready
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_delay_resolves_immediately() {
        assert_eq!(LoadingGate::from_millis(0).wait(), LoadState::Ready);
    }

    #[test]
    fn waits_at_least_the_delay() {
        let gate = LoadingGate::from_millis(20);
        let started = Instant::now();
        assert_eq!(gate.wait(), LoadState::Ready);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn default_delay() {
        assert_eq!(
            LoadingGate::default().delay(),
            Duration::from_millis(DEFAULT_DELAY_MS)
        );
    }
}
