use crate::{AppState, Effect, LoadStatus, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// This is the only place selection state changes; the caller re-renders
/// whenever `AppState::consume_dirty` reports a change.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if *state.load_status() == LoadStatus::Idle {
                state.begin_load();
                vec![Effect::LoadDigest]
            } else {
                Vec::new()
            }
        }
        Msg::DigestLoaded(document) => {
            // The document is set once per session.
            if state.data().is_none() {
                state.store_document(*document);
            }
            Vec::new()
        }
        Msg::DigestLoadFailed { message } => {
            if state.data().is_some() {
                return (state, Vec::new());
            }
            state.fail_load(message.clone());
            vec![Effect::ReportLoadFailure { message }]
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::DateSelected(raw) => {
            state.select_date(&raw);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
