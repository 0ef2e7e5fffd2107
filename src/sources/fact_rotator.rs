//! Fact rotation timer.
//!
//! A fire-and-forget tokio task that emits a random fact immediately and
//! then one per interval tick. Only one rotation is ever active: starting
//! a new one aborts the previous task first, so restarts are idempotent.

use crate::events::AppEvent;
use crossbeam::channel::Sender;
use emc2_core::facts;
use log::debug;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Cancellable, restartable fact rotation timer
pub struct FactRotator {
    runtime: Handle,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl FactRotator {
    pub fn new(runtime: Handle, interval: Duration) -> Self {
        Self {
            runtime,
            interval,
            task: None,
        }
    }

    /// (Re)start rotation, cancelling any rotation already running.
    ///
    /// The first fact is emitted right away; subsequent facts follow at
    /// the configured interval. The task exits on its own once the
    /// receiving side of `events` is gone.
    pub fn start(&mut self, events: Sender<AppEvent>) {
        self.stop();

        let interval = self.interval;
        debug!("starting fact rotation every {interval:?}");
        let task = self.runtime.spawn(async move {
            // The first tick of a tokio interval completes immediately
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if events.send(AppEvent::Fact(facts::random_fact())).is_err() {
                    break;
                }
            }
        });
        self.task = Some(task);
    }

    /// Cancel the running rotation. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("fact rotation cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for FactRotator {
    fn drop(&mut self) {
        self.stop();
    }
}
