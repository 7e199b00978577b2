//! Route resolution.
//!
//! - `location.rs` - normalized pathnames parsed from user input
//! - `table.rs` - the static route table: layouts, pages and the fallback

mod location;
mod table;

pub use location::Location;
pub use table::{
    app_routes, LayoutKind, MatchedLayout, NodeId, Page, RouteDef, RouteError, RouteMatch,
    RouteTable, FALLBACK_PATTERN,
};
