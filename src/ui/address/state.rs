use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddressBarState {
    #[default]
    Hidden,
    Editing {
        buffer: String,
    },
}

impl UiState for AddressBarState {}

impl AddressBarState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            Self::Hidden => None,
        }
    }
}
