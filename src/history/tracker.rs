use crate::history::HistoryStore;

/// Route-change observer that feeds the [`HistoryStore`].
///
/// Exactly one tracker is alive per navigation tree: it is owned by the
/// tracking layout (see [`LayoutKind::Tracking`](crate::router::LayoutKind)),
/// and the route table refuses to nest one tracking layout inside another.
#[derive(Debug, Default)]
pub struct Tracker {
    last_seen: Option<String>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the resolved path.
    ///
    /// Calls [`HistoryStore::append`] on the first observation and whenever
    /// the path differs from the previous one. Returns whether append was
    /// invoked.
    pub fn observe(&mut self, pathname: &str, store: &HistoryStore) -> bool {
        if self.last_seen.as_deref() == Some(pathname) {
            return false;
        }
        self.last_seen = Some(pathname.to_string());
        store.append(pathname);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_appends() {
        let store = HistoryStore::new();
        let mut tracker = Tracker::new();
        assert!(tracker.observe("/", &store));
        assert_eq!(store.get_history(), vec!["/"]);
        assert!(!tracker.observe("/", &store));
    }

    #[test]
    fn unchanged_path_does_not_call_append() {
        let store = HistoryStore::new();
        let mut tracker = Tracker::new();
        tracker.observe("/home", &store);
        assert!(!tracker.observe("/home", &store));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn navigation_sequence_is_logged_in_order() {
        let store = HistoryStore::new();
        let mut tracker = Tracker::new();
        for path in ["/", "/home", "/about"] {
            tracker.observe(path, &store);
        }
        assert_eq!(store.get_history(), vec!["/", "/home", "/about"]);
    }

    #[test]
    fn fresh_tracker_on_same_path_leaves_log_deduplicated() {
        let store = HistoryStore::new();
        let mut first = Tracker::new();
        first.observe("/news", &store);

        let mut remounted = Tracker::new();
        assert!(remounted.observe("/news", &store));
        assert_eq!(store.get_history(), vec!["/news"]);
    }
}
