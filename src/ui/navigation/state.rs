use crate::router::Location;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub current: Location,
    pub back_stack: Vec<Location>,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn starting_at(location: Location) -> Self {
        Self {
            current: location,
            back_stack: Vec::new(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }
}
