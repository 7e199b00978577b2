use crate::ui::mvi::Reducer;

use super::intent::HistoryPanelIntent;
use super::state::HistoryPanelState;

pub struct HistoryPanelReducer;

impl Reducer for HistoryPanelReducer {
    type State = HistoryPanelState;
    type Intent = HistoryPanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if let HistoryPanelIntent::Sync { len } = intent {
            let selected = match (len, state.selected) {
                (0, _) => None,
                (_, _) if state.follow_tail => Some(len - 1),
                (_, Some(row)) => Some(row.min(len - 1)),
                (_, None) => Some(len - 1),
            };
            return HistoryPanelState {
                len,
                selected,
                follow_tail: state.follow_tail,
            };
        }

        if state.len == 0 {
            return state;
        }

        let last = state.len - 1;
        let current = state.selected.unwrap_or(last);
        let row = match intent {
            HistoryPanelIntent::ScrollUp(rows) => current.saturating_sub(rows),
            HistoryPanelIntent::ScrollDown(rows) => current.saturating_add(rows).min(last),
            HistoryPanelIntent::Top => 0,
            HistoryPanelIntent::Bottom => last,
            HistoryPanelIntent::Sync { .. } => current,
        };

        HistoryPanelState {
            len: state.len,
            selected: Some(row),
            follow_tail: row == last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synced(len: usize) -> HistoryPanelState {
        HistoryPanelReducer::reduce(
            HistoryPanelState::default(),
            HistoryPanelIntent::Sync { len },
        )
    }

    #[test]
    fn sync_follows_tail_by_default() {
        let state = synced(4);
        assert_eq!(state.selected, Some(3));
        assert!(state.follow_tail);
    }

    #[test]
    fn sync_empty_clears_selection() {
        assert_eq!(synced(0).selected, None);
    }

    #[test]
    fn scroll_up_stops_following() {
        let state = HistoryPanelReducer::reduce(synced(5), HistoryPanelIntent::ScrollUp(2));
        assert_eq!(state.selected, Some(2));
        assert!(!state.follow_tail);

        let state = HistoryPanelReducer::reduce(state, HistoryPanelIntent::Sync { len: 6 });
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn scrolling_back_to_end_resumes_following() {
        let state = HistoryPanelReducer::reduce(synced(5), HistoryPanelIntent::Top);
        assert_eq!(state.selected, Some(0));
        let state = HistoryPanelReducer::reduce(state, HistoryPanelIntent::ScrollDown(10));
        assert_eq!(state.selected, Some(4));
        assert!(state.follow_tail);

        let state = HistoryPanelReducer::reduce(state, HistoryPanelIntent::Sync { len: 7 });
        assert_eq!(state.selected, Some(6));
    }

    #[test]
    fn scroll_up_saturates_at_first_row() {
        let state = HistoryPanelReducer::reduce(synced(3), HistoryPanelIntent::ScrollUp(10));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn scrolling_empty_list_is_noop() {
        let state = HistoryPanelReducer::reduce(
            HistoryPanelState::default(),
            HistoryPanelIntent::ScrollDown(1),
        );
        assert_eq!(state, HistoryPanelState::default());
    }

    #[test]
    fn bottom_jumps_to_last_row() {
        let state = HistoryPanelReducer::reduce(synced(3), HistoryPanelIntent::Top);
        let state = HistoryPanelReducer::reduce(state, HistoryPanelIntent::Bottom);
        assert_eq!(state.selected, Some(2));
        assert!(state.follow_tail);
    }
}
