//! Single-slot run queue: one run at a time, at most one queued follow-up

use super::{JobError, WatchTrigger};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use tracing::{debug, error};

type Job = dyn Fn(&WatchTrigger) -> Result<(), JobError> + Send + Sync;

#[derive(Debug, Default)]
struct QueueState {
    running: bool,
    queued: bool,
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A run was started
    Started,
    /// A run was in progress; a follow-up is now pending
    Queued,
}

/// Serializes runs of a job
///
/// Triggering while a run is in progress only marks a follow-up as pending, so
/// any number of triggers during one run produce exactly one more run. Errors
/// and panics inside the job are logged and never leave the queue stuck.
pub struct RunQueue {
    job: Box<Job>,
    state: Mutex<QueueState>,
    idle: Condvar,
}

impl RunQueue {
    pub fn new<F>(job: F) -> Arc<Self>
    where
        F: Fn(&WatchTrigger) -> Result<(), JobError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            job: Box::new(job),
            state: Mutex::new(QueueState::default()),
            idle: Condvar::new(),
        })
    }

    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark the queue running, or record a follow-up if it already is
    fn claim(&self) -> bool {
        let mut state = self.state();
        if state.running {
            state.queued = true;
            false
        } else {
            state.running = true;
            true
        }
    }

    fn release(&self) {
        let mut state = self.state();
        state.running = false;
        state.queued = false;
        self.idle.notify_all();
    }

    /// Start a run on a worker thread, or queue a follow-up
    pub fn trigger(self: &Arc<Self>, trigger: WatchTrigger) -> TriggerOutcome {
        if !self.claim() {
            debug!(%trigger, "run in progress, queued follow-up");
            return TriggerOutcome::Queued;
        }

        let queue = Arc::clone(self);
        let spawned = thread::Builder::new()
            .name("watch-run".to_string())
            .spawn(move || queue.drain(trigger));
        if let Err(err) = spawned {
            error!("Failed to spawn run thread: {}", err);
            self.release();
        }
        TriggerOutcome::Started
    }

    /// Run on the calling thread, including any follow-up queued meanwhile
    pub fn run_blocking(&self, trigger: WatchTrigger) -> TriggerOutcome {
        if !self.claim() {
            return TriggerOutcome::Queued;
        }
        self.drain(trigger);
        TriggerOutcome::Started
    }

    fn drain(&self, mut trigger: WatchTrigger) {
        loop {
            self.run_once(&trigger);

            let mut state = self.state();
            if state.queued {
                state.queued = false;
                trigger = WatchTrigger::Queued;
                continue;
            }
            state.running = false;
            self.idle.notify_all();
            return;
        }
    }

    fn run_once(&self, trigger: &WatchTrigger) {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.job)(trigger))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => error!("Run failed ({}): {}", trigger, err),
            Err(_) => error!("Run panicked ({})", trigger),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state().running
    }

    /// Block until no run is in progress or pending
    pub fn wait_idle(&self) {
        let mut state = self.state();
        while state.running {
            state = self
                .idle
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}
