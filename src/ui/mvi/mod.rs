//! Model-View-Intent (MVI) primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Features built on it: `navigation` (current location and back stack),
//! `history_panel` (scrolling the visited-paths list) and `address` (the
//! go-to-path bar).

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
