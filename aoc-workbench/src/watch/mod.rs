//! Watch mode: re-run a job when watched files change
//!
//! Raw filesystem events are debounced, then handed to a [`RunQueue`] which
//! guarantees that at most one run is active and that changes arriving during
//! a run collapse into a single follow-up run.

mod debounce;
mod queue;

pub use debounce::{DEFAULT_DEBOUNCE, debounce};
pub use queue::{RunQueue, TriggerOutcome};

use crate::error::WatchError;
use chrono::{DateTime, Local};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{info, warn};

/// Error returned by a watched job
pub type JobError = Box<dyn std::error::Error + Send + Sync>;

/// What caused a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchTrigger {
    /// Startup run, before watching begins
    Initial,
    /// A debounced file change
    Change { label: String, at: DateTime<Local> },
    /// Follow-up for changes seen while a run was in progress
    Queued,
}

impl WatchTrigger {
    pub fn change(label: impl Into<String>) -> Self {
        WatchTrigger::Change {
            label: label.into(),
            at: Local::now(),
        }
    }

    /// Label shown in the re-run announcement; `None` for the initial run
    pub fn label(&self) -> Option<&str> {
        match self {
            WatchTrigger::Initial => None,
            WatchTrigger::Change { label, .. } => Some(label),
            WatchTrigger::Queued => Some("queued change"),
        }
    }
}

impl fmt::Display for WatchTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("initial run"))
    }
}

/// A relevant filesystem change, described for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub label: String,
    pub paths: Vec<PathBuf>,
}

impl ChangeEvent {
    /// Describe a raw event; access events are not changes
    fn from_event(event: Event, root: &Path) -> Option<Self> {
        let kind = match event.kind {
            EventKind::Access(_) => return None,
            EventKind::Create(_) => "create",
            EventKind::Remove(_) => "remove",
            EventKind::Modify(_) | EventKind::Any | EventKind::Other => "change",
        };
        let label = event
            .paths
            .first()
            .map(|path| path.strip_prefix(root).unwrap_or(path).display().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| kind.to_string());
        Some(Self {
            label,
            paths: event.paths,
        })
    }
}

type EventFilter = dyn Fn(&ChangeEvent) -> bool + Send + Sync;

/// Observes paths and drives a [`RunQueue`]
pub struct WatchController {
    queue: Arc<RunQueue>,
    root: PathBuf,
    debounce: Duration,
    filter: Option<Arc<EventFilter>>,
}

impl WatchController {
    pub fn new(queue: Arc<RunQueue>, root: impl Into<PathBuf>) -> Self {
        Self {
            queue,
            root: root.into(),
            debounce: DEFAULT_DEBOUNCE,
            filter: None,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Drop events for which `filter` returns false, before debouncing
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&ChangeEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Watch `targets` and re-run on change; blocks for as long as the watcher lives
    ///
    /// Directories are watched recursively, files on their own. A target that
    /// cannot be observed is logged and skipped.
    pub fn watch(self, targets: &[PathBuf]) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel::<ChangeEvent>();
        let root = self.root.clone();
        let filter = self.filter.clone();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    let Some(change) = ChangeEvent::from_event(event, &root) else {
                        return;
                    };
                    if filter.as_ref().is_some_and(|keep| !keep(&change)) {
                        return;
                    }
                    // Receiver gone means the controller is shutting down
                    let _ = tx.send(change);
                }
                Err(err) => warn!("File watcher error: {}", err),
            }
        })?;

        let mut observed = 0;
        for target in targets {
            let mode = if target.is_dir() {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            match watcher.watch(target, mode) {
                Ok(()) => observed += 1,
                Err(err) => warn!("Unable to watch {}: {}", target.display(), err),
            }
        }
        if observed == 0 {
            return Err(WatchError::NoTargets);
        }

        info!(targets = observed, "watching for changes");
        let queue = &self.queue;
        debounce(&rx, self.debounce, |change| {
            queue.trigger(WatchTrigger::change(change.label));
        });

        drop(watcher);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::sync::Mutex;
    use std::thread;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_change_event_labels() {
        let root = Path::new("/puzzles");

        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/puzzles/days/day01.rhai"));
        let change = ChangeEvent::from_event(event, root).unwrap();
        assert_eq!(change.label, "days/day01.rhai");

        let event = Event::new(EventKind::Create(CreateKind::File));
        assert_eq!(ChangeEvent::from_event(event, root).unwrap().label, "create");

        let event = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/puzzles/days/day01.rhai"));
        assert!(ChangeEvent::from_event(event, root).is_none());
    }

    #[test]
    fn test_trigger_labels() {
        assert_eq!(WatchTrigger::Initial.label(), None);
        assert_eq!(WatchTrigger::Initial.to_string(), "initial run");
        assert_eq!(WatchTrigger::Queued.label(), Some("queued change"));
        assert_eq!(WatchTrigger::change("tests/a.test.rhai").to_string(), "tests/a.test.rhai");
    }

    #[test]
    fn test_no_observable_targets() {
        let queue = RunQueue::new(|_| Ok(()));
        let controller = WatchController::new(queue, "/");
        let result = controller.watch(&[PathBuf::from("/definitely/not/here/at/all")]);
        assert!(matches!(result, Err(WatchError::NoTargets)));
    }

    #[test]
    fn test_burst_of_writes_runs_once() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        let runs = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&runs);
        let queue = RunQueue::new(move |trigger: &WatchTrigger| {
            seen.lock().unwrap().push(trigger.clone());
            Ok(())
        });
        let controller =
            WatchController::new(queue, &root).with_debounce(Duration::from_millis(150));

        // The watch loop lives as long as the process; only its runs are observed
        let target = root.clone();
        thread::spawn(move || controller.watch(&[target]));
        thread::sleep(Duration::from_millis(300));

        let file = root.join("a.txt");
        for n in 0..5 {
            std::fs::write(&file, n.to_string()).unwrap();
            thread::sleep(Duration::from_millis(10));
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while runs.lock().unwrap().is_empty() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        thread::sleep(Duration::from_millis(500));

        let runs = runs.lock().unwrap();
        assert_eq!(runs.len(), 1, "{:?}", *runs);
        match &runs[0] {
            WatchTrigger::Change { label, .. } => assert!(label.ends_with("a.txt"), "{}", label),
            other => panic!("unexpected trigger: {:?}", other),
        }
    }
}
