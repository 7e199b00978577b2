//! Ordered log of visited route paths for the running session.
//!
//! The log lives only in memory: it is created empty with the owning
//! [`App`](crate::ui::app::App) and dropped with it.

use tokio::sync::watch;

/// A single visited path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
}

/// Single source of truth for the navigation log.
///
/// Entries are only ever appended. An append that repeats the last entry is
/// a no-op, so no two consecutive entries are equal. Observers obtained via
/// [`subscribe`](Self::subscribe) are notified after every effective append.
pub struct HistoryStore {
    log: watch::Sender<Vec<HistoryEntry>>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        let (log, _) = watch::channel(Vec::new());
        Self { log }
    }

    /// Snapshot of the visited paths in insertion order.
    ///
    /// The returned vector is owned by the caller; mutating it does not touch
    /// the store, and later appends do not show up in it.
    pub fn get_history(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .map(|entry| entry.path.clone())
            .collect()
    }

    /// Run `read` against the live entries without copying them.
    ///
    /// Holds the log's read lock for the duration of `read`; do not append
    /// from inside it.
    pub fn with_entries<R>(&self, read: impl FnOnce(&[HistoryEntry]) -> R) -> R {
        read(&self.log.borrow())
    }

    /// Append `path` unless it equals the last entry.
    ///
    /// Returns `true` when the log grew.
    pub fn append(&self, path: &str) -> bool {
        let appended = self.log.send_if_modified(|log| {
            if log.last().is_some_and(|last| last.path == path) {
                return false;
            }
            log.push(HistoryEntry {
                path: path.to_string(),
            });
            true
        });

        if appended {
            tracing::debug!(path, len = self.len(), "history entry appended");
        } else {
            tracing::trace!(path, "history append skipped (repeat of last entry)");
        }
        appended
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Register an observer of the log.
    ///
    /// The watcher starts out having seen the current log.
    pub fn subscribe(&self) -> HistoryWatcher {
        HistoryWatcher {
            rx: self.log.subscribe(),
        }
    }
}

/// Observer handle for a [`HistoryStore`].
pub struct HistoryWatcher {
    rx: watch::Receiver<Vec<HistoryEntry>>,
}

impl HistoryWatcher {
    /// True when the log changed since the last [`mark_seen`](Self::mark_seen).
    ///
    /// Returns `false` once the store has been dropped.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Mark the current log as seen and return its length.
    pub fn mark_seen(&mut self) -> usize {
        self.rx.borrow_and_update().len()
    }
}
