use crate::router::Location;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavigationIntent {
    /// Go to a location, remembering the current one for Back.
    Push(Location),
    /// Return to the previous location. No-op at the start of the session.
    Back,
}

impl Intent for NavigationIntent {}
