use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressIntent {
    Open,
    Input(char),
    Backspace,
    Cancel,
    /// Close the bar. The caller reads the buffer before dispatching.
    Submit,
}

impl Intent for AddressIntent {}
