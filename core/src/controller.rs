//! Fetch-state controller.
//!
//! # Design
//! The controller owns the only `FetchState` and publishes it through a
//! `tokio::sync::watch` channel: presenters either poll `state()` or hold a
//! receiver from `subscribe()` and await changes.
//!
//! Every fetch attempt gets a sequence number when issued. Issuing a new
//! attempt aborts the in-flight task, and a finished attempt publishes only
//! if its number is still the latest. Both checks and the publish happen
//! under one lock, so a superseded attempt can never overwrite newer state
//! even if it completed before the abort landed.
//!
//! Dropping the controller marks it disposed under the same lock and aborts
//! the in-flight task. Nothing is published after that.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::api::RecordSource;
use crate::error::ApiError;
use crate::types::Dinosaur;

/// UI-facing status of the most recent fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    /// Records in server order.
    Success(Vec<Dinosaur>),
    /// The attempt failed. Presenters may ignore the payload and render every
    /// error the same way.
    Error(ApiError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn records(&self) -> Option<&[Dinosaur]> {
        match self {
            FetchState::Success(records) => Some(records),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchState::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Attempts {
    latest: u64,
    in_flight: Option<AbortHandle>,
    disposed: bool,
}

struct Shared<S> {
    source: S,
    state: watch::Sender<FetchState>,
    attempts: Mutex<Attempts>,
}

impl<S> Shared<S> {
    fn lock_attempts(&self) -> MutexGuard<'_, Attempts> {
        self.attempts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, attempt: u64, outcome: Result<Vec<Dinosaur>, ApiError>) {
        let mut attempts = self.lock_attempts();
        if attempts.disposed {
            debug!(attempt, "controller disposed, dropping fetch result");
            return;
        }
        if attempts.latest != attempt {
            debug!(attempt, latest = attempts.latest, "discarding superseded fetch result");
            return;
        }
        attempts.in_flight = None;

        let next = match outcome {
            Ok(records) => {
                info!(attempt, count = records.len(), "dinosaurs loaded");
                FetchState::Success(records)
            }
            Err(error) => {
                warn!(attempt, %error, "fetching dinosaurs failed");
                FetchState::Error(error)
            }
        };
        self.state.send_replace(next);
    }
}

/// Drives fetch attempts against a `RecordSource` on a tokio runtime.
pub struct FetchController<S: RecordSource> {
    shared: Arc<Shared<S>>,
    runtime: Handle,
}

impl<S: RecordSource> FetchController<S> {
    /// Create the controller in `Loading` and issue the first attempt.
    ///
    /// Attempts are spawned on `runtime`; the caller does not need to be
    /// inside it.
    pub fn new(source: S, runtime: Handle) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        let controller = Self {
            shared: Arc::new(Shared {
                source,
                state,
                attempts: Mutex::new(Attempts::default()),
            }),
            runtime,
        };
        controller.start();
        controller
    }

    /// Publish `Loading` and spawn a new attempt, superseding any attempt
    /// still in flight. Never blocks on I/O.
    pub fn start(&self) {
        let mut attempts = self.shared.lock_attempts();
        attempts.latest += 1;
        let attempt = attempts.latest;
        if let Some(previous) = attempts.in_flight.take() {
            debug!(attempt = attempt - 1, "aborting superseded fetch");
            previous.abort();
        }
        self.shared.state.send_replace(FetchState::Loading);
        debug!(attempt, "fetch attempt issued");

        let shared = Arc::clone(&self.shared);
        let task = self.runtime.spawn(async move {
            let outcome = shared.source.fetch_records().await;
            shared.apply(attempt, outcome);
        });
        attempts.in_flight = Some(task.abort_handle());
    }

    /// Same as `start`. Valid from any state; there is no attempt limit and
    /// no backoff.
    pub fn retry(&self) {
        self.start();
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.shared.state.borrow().clone()
    }

    /// Receiver that observes every published state, starting from the
    /// current one. Drop any `borrow()` guard before calling back into the
    /// controller.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.shared.state.subscribe()
    }

    /// Sequence number of the latest issued attempt (1 after construction).
    pub fn attempt(&self) -> u64 {
        self.shared.lock_attempts().latest
    }

    /// Latest attempt number and current state, read together so the pair
    /// is never torn by a concurrent `retry`.
    pub fn snapshot(&self) -> (u64, FetchState) {
        let attempts = self.shared.lock_attempts();
        let state = self.shared.state.borrow().clone();
        (attempts.latest, state)
    }
}

impl<S: RecordSource> Drop for FetchController<S> {
    fn drop(&mut self) {
        let mut attempts = self.shared.lock_attempts();
        attempts.disposed = true;
        if let Some(task) = attempts.in_flight.take() {
            task.abort();
        }
    }
}
