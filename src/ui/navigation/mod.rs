//! Navigation state machine.
//!
//! - `state.rs` - current location plus the back stack
//! - `intent.rs` - Push (link, address bar, auto-navigation) and Back
//! - `reducer.rs` - transitions (pure; the caller resolves and remounts)

mod intent;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::NavigationState;
