//! Session navigation history.
//!
//! - `store.rs` - the ordered log of visited paths and its observers
//! - `tracker.rs` - route-change observer feeding the store

mod store;
mod tracker;

pub use store::{HistoryEntry, HistoryStore, HistoryWatcher};
pub use tracker::Tracker;
