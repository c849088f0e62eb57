//! Coalescing of rapid triggers into one deferred action.
//!
//! Embedders use this to throttle `check` while the user is typing: each
//! edit triggers the debouncer with the latest text, and the action runs
//! once after a quiet period with only the newest value. Clearing the
//! editor cancels the pending run.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};

enum Command<T> {
    Trigger(T),
    Cancel,
    Shutdown,
}

/// Runs an action once per burst of triggers, after a quiet period.
///
/// A new trigger during the quiet period replaces the pending value and
/// restarts the wait; `cancel` drops the pending value entirely. The
/// action runs on a dedicated worker thread, so it must be `Send`.
/// Dropping the debouncer discards any pending trigger and joins the
/// worker.
pub struct Debouncer<T> {
    tx: Sender<Command<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(quiet_period: Duration, mut action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = unbounded();

        let worker = thread::spawn(move || {
            'idle: loop {
                // Block until a burst starts.
                let mut pending = match rx.recv() {
                    Ok(Command::Trigger(value)) => value,
                    Ok(Command::Cancel) => continue,
                    Ok(Command::Shutdown) | Err(_) => return,
                };

                // Coalesce further triggers until the channel stays quiet.
                loop {
                    match rx.recv_timeout(quiet_period) {
                        Ok(Command::Trigger(value)) => pending = value,
                        Ok(Command::Cancel) => continue 'idle,
                        Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => return,
                        Err(RecvTimeoutError::Timeout) => break,
                    }
                }

                action(pending);
            }
        });

        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Schedule the action, replacing any pending trigger.
    pub fn trigger(&self, value: T) {
        let _ = self.tx.send(Command::Trigger(value));
    }

    /// Drop the pending trigger, if any. The next `trigger` starts a
    /// fresh quiet period.
    pub fn cancel(&self) {
        let _ = self.tx.send(Command::Cancel);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
