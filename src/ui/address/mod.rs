//! Go-to-path bar: type any path (known or not) and press Enter.

mod intent;
mod reducer;
mod state;

pub use intent::AddressIntent;
pub use reducer::AddressReducer;
pub use state::AddressBarState;
