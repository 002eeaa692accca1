//! Cancellable periodic task
//!
//! The task lives as long as its [`ScopedInterval`] handle: dropping the
//! handle aborts it.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Periodic task owned by this handle
pub struct ScopedInterval {
    name: String,
    handle: Option<JoinHandle<()>>,
}

impl ScopedInterval {
    /// Run `task` every `period`, first run immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut>(name: &str, period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task_name = name.to_string();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!("Scheduled task '{}' tick", task_name);
                task().await;
            }
        });

        info!("Scheduled task '{}' started (every {:?})", name, period);

        Self {
            name: name.to_string(),
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop the task
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Scheduled task '{}' cancelled", self.name);
        }
    }

    /// Check if the task is still scheduled
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.cancel();
    }
}
