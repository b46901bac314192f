//! Owned periodic driver for a live match.
//!
//! [`MatchTicker`] moves a [`LiveMatch`] onto a worker thread that calls
//! `advance` once per interval and publishes each tick on a channel. The
//! handle owns the worker: dropping it (or calling [`MatchTicker::stop`])
//! signals the thread and joins it, so a match never has two tickers.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::ball::BallGenerator;
use super::commentary::CommentaryEvent;
use super::live_match::{LiveMatch, StepResult};
use super::match_state::MatchState;
use crate::error::Result;

/// One tick as seen by the receiving side.
#[derive(Debug, Clone)]
pub struct TickUpdate {
    pub step: StepResult,
    pub state: MatchState,
    /// Event emitted on this tick; `None` for ticks after the match ended.
    pub event: Option<CommentaryEvent>,
}

pub struct MatchTicker<G: BallGenerator + Send + 'static> {
    stop_tx: Sender<()>,
    updates: Receiver<TickUpdate>,
    worker: Option<JoinHandle<LiveMatch<G>>>,
}

impl<G: BallGenerator + Send + 'static> MatchTicker<G> {
    /// Start ticking `live` every `interval`. The worker exits on its own
    /// once the match is complete.
    pub fn spawn(mut live: LiveMatch<G>, interval: Duration) -> Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (update_tx, updates) = mpsc::channel();

        let worker = thread::Builder::new().name("match-ticker".to_string()).spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                let step = live.advance();
                let finished = matches!(step, StepResult::FullTime(_) | StepResult::Finished);
                let event = match step {
                    StepResult::Finished => None,
                    _ => live.last_event().cloned(),
                };
                let update = TickUpdate { step, state: live.snapshot(), event };
                if update_tx.send(update).is_err() || finished {
                    break;
                }
            }
            tracing::debug!(complete = live.is_complete(), "match ticker stopped");
            live
        })?;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "match ticker started");
        Ok(Self { stop_tx, updates, worker: Some(worker) })
    }

    /// Block until the next tick; `None` once the worker has exited and all
    /// updates were drained.
    pub fn recv(&self) -> Option<TickUpdate> {
        self.updates.recv().ok()
    }

    /// Next tick if one is already waiting.
    pub fn try_recv(&self) -> Option<TickUpdate> {
        match self.updates.try_recv() {
            Ok(update) => Some(update),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stop ticking and hand the match back.
    ///
    /// Returns `None` only if the worker panicked.
    pub fn stop(mut self) -> Option<LiveMatch<G>> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<LiveMatch<G>> {
        let worker = self.worker.take()?;
        // The worker may already have exited; a closed channel is fine.
        let _ = self.stop_tx.send(());
        match worker.join() {
            Ok(live) => Some(live),
            Err(_) => {
                tracing::warn!("match ticker worker panicked");
                None
            }
        }
    }
}

impl<G: BallGenerator + Send + 'static> Drop for MatchTicker<G> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
