//! routetrail: terminal demo of page routing with a session navigation history.
//!
//! The library crate exposes every module for the binary and the integration tests.

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod router;
pub mod shutdown;
pub mod ui;
