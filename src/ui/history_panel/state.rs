use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPanelState {
    pub len: usize,
    /// Highlighted row; `None` while the log is empty.
    pub selected: Option<usize>,
    pub follow_tail: bool,
}

impl Default for HistoryPanelState {
    fn default() -> Self {
        Self {
            len: 0,
            selected: None,
            follow_tail: true,
        }
    }
}

impl UiState for HistoryPanelState {}
