//! Timer-driven animation steps.
//!
//! Animations are plain state machines. Each call to [`Ticker::tick`]
//! advances the machine once and says how long to wait before the next
//! call. The runtime owns the timer; the machine never sleeps.

use std::time::Duration;

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<F> {
    /// What to display after this tick.
    pub frame: F,
    /// Delay before the next tick, or `None` if the animation is finished.
    pub next: Option<Duration>,
}

impl<F> Step<F> {
    pub fn after(frame: F, delay: Duration) -> Self {
        Self {
            frame,
            next: Some(delay),
        }
    }

    pub fn last(frame: F) -> Self {
        Self { frame, next: None }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// A state machine advanced by a timer.
pub trait Ticker: Send + 'static {
    type Frame: Clone + Send + Sync + 'static;

    /// Wait before the first tick. Interval-style animations first fire
    /// one period after they start.
    fn initial_delay(&self) -> Duration {
        Duration::ZERO
    }

    /// Advance one step.
    fn tick(&mut self) -> Step<Self::Frame>;
}
