use crate::ui::mvi::Reducer;

use super::intent::AddressIntent;
use super::state::AddressBarState;

/// Longest path the bar accepts.
const MAX_INPUT_CHARS: usize = 256;

pub struct AddressReducer;

impl Reducer for AddressReducer {
    type State = AddressBarState;
    type Intent = AddressIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddressIntent::Open => match state {
                AddressBarState::Hidden => AddressBarState::Editing {
                    buffer: "/".to_string(),
                },
                editing => editing,
            },
            AddressIntent::Input(ch) => match state {
                AddressBarState::Editing { mut buffer }
                    if !ch.is_control() && buffer.chars().count() < MAX_INPUT_CHARS =>
                {
                    buffer.push(ch);
                    AddressBarState::Editing { buffer }
                }
                other => other,
            },
            AddressIntent::Backspace => match state {
                AddressBarState::Editing { mut buffer } => {
                    buffer.pop();
                    AddressBarState::Editing { buffer }
                }
                other => other,
            },
            AddressIntent::Cancel | AddressIntent::Submit => AddressBarState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(mut state: AddressBarState, text: &str) -> AddressBarState {
        for ch in text.chars() {
            state = AddressReducer::reduce(state, AddressIntent::Input(ch));
        }
        state
    }

    #[test]
    fn open_starts_with_root_slash() {
        let state = AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open);
        assert_eq!(state.buffer(), Some("/"));
    }

    #[test]
    fn open_while_editing_keeps_buffer() {
        let state = type_text(
            AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open),
            "news",
        );
        let state = AddressReducer::reduce(state, AddressIntent::Open);
        assert_eq!(state.buffer(), Some("/news"));
    }

    #[test]
    fn typing_and_backspace_edit_buffer() {
        let state = AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open);
        let state = type_text(state, "abx");
        let state = AddressReducer::reduce(state, AddressIntent::Backspace);
        assert_eq!(state.buffer(), Some("/ab"));
    }

    #[test]
    fn control_characters_are_ignored() {
        let state = AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open);
        let state = AddressReducer::reduce(state, AddressIntent::Input('\u{7}'));
        assert_eq!(state.buffer(), Some("/"));
    }

    #[test]
    fn input_while_hidden_is_ignored() {
        let state = type_text(AddressBarState::Hidden, "home");
        assert!(!state.is_editing());
    }

    #[test]
    fn cancel_and_submit_hide_the_bar() {
        for intent in [AddressIntent::Cancel, AddressIntent::Submit] {
            let state = AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open);
            assert!(!AddressReducer::reduce(state, intent).is_editing());
        }
    }

    #[test]
    fn input_is_capped() {
        let state = AddressReducer::reduce(AddressBarState::Hidden, AddressIntent::Open);
        let state = type_text(state, &"a".repeat(MAX_INPUT_CHARS + 10));
        assert_eq!(state.buffer().map(|b| b.chars().count()), Some(MAX_INPUT_CHARS));
    }
}
