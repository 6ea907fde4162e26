//! Cosmetic progress ticker
//!
//! The bar on the landing page never finishes: every tick moves it one percent
//! forward and a full bar starts over from empty.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);
pub const PROGRESS_MAX: u8 = 100;

/// Value shown after one more tick; wraps instead of clamping
pub fn next_progress(current: u8) -> u8 {
    if current >= PROGRESS_MAX {
        0
    } else {
        current + 1
    }
}

/// Background timer advancing the progress value
pub struct ProgressTicker {
    period: Duration,
    progress: watch::Receiver<u8>,
    stopped: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Start ticking; the first tick lands one period from now
    ///
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn start(period: Duration) -> Self {
        let (sender, progress) = watch::channel(0u8);
        let stopped = Arc::new(AtomicBool::new(false));
        let task_stopped = Arc::clone(&stopped);

        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                sender.send_if_modified(|value| {
                    if task_stopped.load(Ordering::SeqCst) {
                        return false;
                    }
                    *value = next_progress(*value);
                    true
                });
            }
        });

        tracing::debug!("Progress ticker started ({:?} period)", period);
        Self {
            period,
            progress,
            stopped,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Current progress percentage
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer; returns false if it was already stopped
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        self.stopped.store(true, Ordering::SeqCst);
        handle.abort();
        // Waits out a tick that is publishing on another worker right now.
        drop(self.progress.borrow());
        tracing::debug!("Progress ticker stopped at {}%", self.progress());
        true
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
