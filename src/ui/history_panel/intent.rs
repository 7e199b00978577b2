use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPanelIntent {
    /// The history log now holds `len` entries.
    Sync { len: usize },
    ScrollUp(usize),
    ScrollDown(usize),
    Top,
    Bottom,
}

impl Intent for HistoryPanelIntent {}
