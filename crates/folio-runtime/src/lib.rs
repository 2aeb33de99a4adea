//! Timer-driven animation runtime.
//!
//! Each animation runs as its own tokio task: tick, publish the frame,
//! sleep for the delay the tick asked for, repeat. There is no blocking
//! and no shared lock; frames are broadcast through a `tokio::sync::watch`
//! channel so any number of observers can follow the latest frame.
//!
//! Must be called from within a tokio runtime.

use folio_core::{RuntimeError, Ticker};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Callback invoked with every frame, on the animation task.
type FrameFn<F> = Box<dyn FnMut(&F) + Send>;

/// Builder for a running animation.
pub struct Animation<T: Ticker> {
    name: String,
    ticker: T,
    on_frame: Option<FrameFn<T::Frame>>,
}

impl<T: Ticker> Animation<T> {
    /// Create a new animation around a ticker.
    pub fn new(name: impl Into<String>, ticker: T) -> Self {
        Self {
            name: name.into(),
            ticker,
            on_frame: None,
        }
    }

    /// Run a callback with every frame (e.g. to write text into the host).
    pub fn on_frame(mut self, f: impl FnMut(&T::Frame) + Send + 'static) -> Self {
        self.on_frame = Some(Box::new(f));
        self
    }

    /// Spawn the animation task. The first tick runs after the ticker's
    /// initial delay, immediately by default.
    pub fn spawn(self) -> AnimationHandle<T::Frame> {
        let Animation {
            name,
            mut ticker,
            mut on_frame,
        } = self;
        let (tx, rx) = watch::channel(None);
        let task_name = name.clone();

        let task = tokio::spawn(async move {
            tracing::debug!("Animation '{}' started", task_name);
            let mut ticks: u64 = 0;

            let initial = ticker.initial_delay();
            if !initial.is_zero() {
                tokio::time::sleep(initial).await;
            }

            loop {
                let step = ticker.tick();
                ticks += 1;

                if let Some(f) = on_frame.as_mut() {
                    f(&step.frame);
                }
                tx.send_replace(Some(step.frame));

                match step.next {
                    Some(delay) => tokio::time::sleep(delay).await,
                    None => break,
                }
            }

            tracing::debug!("Animation '{}' finished after {} ticks", task_name, ticks);
        });

        AnimationHandle { name, rx, task }
    }
}

/// Handle to a running animation.
///
/// Dropping the handle stops the animation.
pub struct AnimationHandle<F> {
    name: String,
    rx: watch::Receiver<Option<F>>,
    task: JoinHandle<()>,
}

impl<F: Clone> AnimationHandle<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribe to frames. Clone the receiver for each subscriber.
    pub fn subscribe(&self) -> watch::Receiver<Option<F>> {
        self.rx.clone()
    }

    /// The most recently published frame, if any tick has run.
    pub fn latest(&self) -> Option<F> {
        self.rx.borrow().clone()
    }

    /// Wait for the next frame not yet seen through this handle.
    ///
    /// Frames published faster than they are awaited are coalesced; only
    /// the latest is returned.
    pub async fn next_frame(&mut self) -> Result<F, RuntimeError> {
        self.rx
            .changed()
            .await
            .map_err(|_| RuntimeError::Closed(self.name.clone()))?;
        self.rx
            .borrow_and_update()
            .clone()
            .ok_or_else(|| RuntimeError::Closed(self.name.clone()))
    }

    /// Whether the animation task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the animation. Subscribers keep the last frame.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            tracing::debug!("Stopping animation '{}'", self.name);
        }
        self.task.abort();
    }
}

impl<F> Drop for AnimationHandle<F> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
