use crate::ui::mvi::Reducer;

use super::intent::NavigationIntent;
use super::state::NavigationState;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Push(location) => {
                if location == state.current {
                    // Linking to the current page neither remounts nor stacks
                    return state;
                }
                let NavigationState {
                    current,
                    mut back_stack,
                } = state;
                back_stack.push(current);
                NavigationState {
                    current: location,
                    back_stack,
                }
            }
            NavigationIntent::Back => {
                let NavigationState {
                    current,
                    mut back_stack,
                } = state;
                match back_stack.pop() {
                    Some(previous) => NavigationState {
                        current: previous,
                        back_stack,
                    },
                    None => NavigationState {
                        current,
                        back_stack,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Location;

    fn push(state: NavigationState, path: &str) -> NavigationState {
        NavigationReducer::reduce(state, NavigationIntent::Push(Location::parse(path)))
    }

    #[test]
    fn push_moves_current_and_stacks_previous() {
        let state = push(NavigationState::default(), "/home");
        assert_eq!(state.current.pathname(), "/home");
        assert_eq!(state.back_stack, vec![Location::root()]);
    }

    #[test]
    fn push_same_location_is_noop() {
        let state = push(NavigationState::default(), "/home");
        let again = push(state.clone(), "/home/");
        assert_eq!(again, state);
    }

    #[test]
    fn back_pops_previous_location() {
        let state = push(push(NavigationState::default(), "/home"), "/about");
        let state = NavigationReducer::reduce(state, NavigationIntent::Back);
        assert_eq!(state.current.pathname(), "/home");
        assert_eq!(state.back_stack.len(), 1);
    }

    #[test]
    fn back_at_start_is_noop() {
        let start = NavigationState::starting_at(Location::parse("/news"));
        let state = NavigationReducer::reduce(start.clone(), NavigationIntent::Back);
        assert_eq!(state, start);
    }
}
