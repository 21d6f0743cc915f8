//! Trailing-edge debounce over a channel of events

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Default quiet period before a burst of changes triggers a run
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(75);

/// Collapse bursts of events into one call per quiet period
///
/// Every event restarts the window; `on_settled` receives the last event of a
/// burst once `window` passes without a new one. Returns when the sender side
/// disconnects, flushing a pending event first.
pub fn debounce<T>(events: &Receiver<T>, window: Duration, mut on_settled: impl FnMut(T)) {
    while let Ok(first) = events.recv() {
        let mut pending = first;
        loop {
            match events.recv_timeout(window) {
                Ok(next) => pending = next,
                Err(RecvTimeoutError::Timeout) => {
                    on_settled(pending);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    on_settled(pending);
                    return;
                }
            }
        }
    }
}
