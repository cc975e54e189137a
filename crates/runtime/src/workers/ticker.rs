//! Auto-tick worker.
//!
//! Advances one session on a fixed period so zombies keep moving while
//! players are idle. The worker stops on its own once the session reaches a
//! terminal status or disappears, and can be stopped early via [`AutoTicker::stop`].

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::service::SessionService;

/// Why the ticker loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerExit {
    /// The session reached `won` or `lost`.
    Finished,
    /// The session was removed or a tick failed.
    SessionGone,
    /// [`AutoTicker::stop`] was called.
    Stopped,
}

/// Handle to a running auto-tick task.
pub struct AutoTicker {
    session_id: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<TickerExit>,
}

impl AutoTicker {
    /// Spawns the worker on the current tokio runtime.
    pub fn spawn(
        service: Arc<SessionService>,
        session_id: impl Into<String>,
        period: Duration,
    ) -> Self {
        let session_id = session_id.into();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run(service, session_id.clone(), period, shutdown_rx));

        Self {
            session_id,
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signals the worker to stop and waits for it.
    pub async fn stop(mut self) -> Result<TickerExit> {
        if let Some(shutdown) = self.shutdown.take() {
            // The worker may already have exited on its own.
            let _ = shutdown.send(());
        }
        self.handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Waits for the worker to exit on its own.
    pub async fn join(self) -> Result<TickerExit> {
        self.handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

async fn run(
    service: Arc<SessionService>,
    session_id: String,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> TickerExit {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    info!(session_id = %session_id, period_ms = period.as_millis() as u64, "auto-ticker started");

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                debug!(session_id = %session_id, "auto-ticker stopped");
                return TickerExit::Stopped;
            }
            _ = interval.tick() => {
                match service.tick(&session_id).await {
                    Ok(state) if state.status.is_terminal() => {
                        info!(
                            session_id = %session_id,
                            status = %state.status,
                            tick = state.tick,
                            "auto-ticker finished"
                        );
                        return TickerExit::Finished;
                    }
                    Ok(_) => {}
                    Err(RuntimeError::SessionNotFound(_)) => {
                        debug!(session_id = %session_id, "session gone, auto-ticker exiting");
                        return TickerExit::SessionGone;
                    }
                    Err(error) => {
                        warn!(
                            session_id = %session_id,
                            code = error.code(),
                            "auto-tick failed: {error}"
                        );
                        return TickerExit::SessionGone;
                    }
                }
            }
        }
    }
}
