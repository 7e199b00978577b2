//! Scroll state of the visited-paths list.
//!
//! The list follows the newest entry until the user scrolls away from it,
//! and resumes following once scrolled back to the end.

mod intent;
mod reducer;
mod state;

pub use intent::HistoryPanelIntent;
pub use reducer::HistoryPanelReducer;
pub use state::HistoryPanelState;
