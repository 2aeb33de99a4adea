//! Stats counter animation ("50+ projects", ...).

use std::time::Duration;

use folio_core::{CounterConfig, Step, Ticker};

/// Counts up from zero to a target in a fixed number of equal steps.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    step_delay: Duration,
}

impl CounterAnimation {
    pub fn new(target: u64, config: &CounterConfig) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(config.steps.max(1)),
            current: 0.0,
            step_delay: config.step_delay(),
        }
    }

    /// Parse the element's `data-target` attribute.
    pub fn from_attribute(value: &str, config: &CounterConfig) -> Option<Self> {
        value.trim().parse().ok().map(|target| Self::new(target, config))
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

impl Ticker for CounterAnimation {
    type Frame = u64;

    /// The first increment shows one step after the counter starts, so
    /// the target is reached at the full duration.
    fn initial_delay(&self) -> Duration {
        self.step_delay
    }

    fn tick(&mut self) -> Step<u64> {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            Step::last(self.target)
        } else {
            Step::after(self.current.floor() as u64, self.step_delay)
        }
    }
}
