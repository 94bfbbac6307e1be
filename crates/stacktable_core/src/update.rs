use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Ready => vec![issue_fetch(&mut state)],
        Msg::RestorePreferences {
            sort_field,
            sort_direction,
        } => {
            state.restore_sort(sort_field, sort_direction);
            Vec::new()
        }
        Msg::SortFieldChanged(field) => {
            if state.set_sort_field(field) {
                vec![issue_fetch(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::SortDirectionChanged(direction) => {
            if state.set_sort_direction(direction) {
                vec![issue_fetch(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::PageChanged(page_index) => {
            if state.set_page_index(page_index) {
                vec![issue_fetch(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::RefreshRequested => vec![issue_fetch(&mut state)],
        Msg::FilterChanged(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::FetchCompleted { request_id, page } => {
            // Latest wins: a completion for a superseded request changes nothing.
            if state.is_current(request_id) {
                match page {
                    Some(page) => state.apply_page(page),
                    None => state.apply_failure(),
                }
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn issue_fetch(state: &mut AppState) -> Effect {
    let (request_id, query) = state.begin_fetch();
    Effect::FetchPage { request_id, query }
}
