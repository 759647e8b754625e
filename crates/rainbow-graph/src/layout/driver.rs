use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::simulator::{ForceLayoutSimulator, LayoutSnapshot};
use crate::error::GraphError;

/// Shortest period the loop ticks at; shorter requests are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Runs a simulator on a fixed interval until stopped.
pub struct LayoutDriver;

impl LayoutDriver {
    /// Spawn the tick loop on the current tokio runtime.
    ///
    /// The simulator moves into the task, which is its only writer. Readers
    /// see a fresh snapshot after every tick through the returned handle.
    /// An `interval` below [`MIN_INTERVAL`] (including zero) is raised to it.
    pub fn spawn(simulator: ForceLayoutSimulator, interval: Duration) -> LayoutHandle {
        let interval = interval.max(MIN_INTERVAL);
        let (snapshot_tx, snapshot_rx) = watch::channel(simulator.snapshot());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(tick_loop(simulator, interval, snapshot_tx, shutdown_rx));
        debug!(interval_ms = interval.as_millis() as u64, "Layout driver started");

        LayoutHandle {
            task: Some(task),
            shutdown: Some(shutdown_tx),
            snapshots: snapshot_rx,
        }
    }
}

/// Owns a running layout loop. Dropping the handle cancels the loop.
pub struct LayoutHandle {
    task: Option<JoinHandle<ForceLayoutSimulator>>,
    shutdown: Option<oneshot::Sender<()>>,
    snapshots: watch::Receiver<LayoutSnapshot>,
}

impl LayoutHandle {
    pub fn subscribe(&self) -> watch::Receiver<LayoutSnapshot> {
        self.snapshots.clone()
    }

    pub fn latest(&self) -> LayoutSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking and take the simulator back in its current state.
    pub async fn stop(mut self) -> Result<ForceLayoutSimulator, GraphError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let task = self
            .task
            .take()
            .ok_or_else(|| GraphError::Driver("layout task already taken".into()))?;
        let simulator = task.await?;
        debug!(ticks = simulator.tick_count(), "Layout driver stopped");
        Ok(simulator)
    }
}

impl Drop for LayoutHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Layout handle dropped, tick loop aborted");
        }
    }
}

async fn tick_loop(
    mut simulator: ForceLayoutSimulator,
    interval: Duration,
    snapshots: watch::Sender<LayoutSnapshot>,
    mut shutdown: oneshot::Receiver<()>,
) -> ForceLayoutSimulator {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately; start one full interval in.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                simulator.tick();
                // No receivers left is fine; the handle may only want the result.
                let _ = snapshots.send(simulator.snapshot());
            }
        }
    }
    simulator
}
