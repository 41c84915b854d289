mod reply_handling;
mod session_lifecycle;

use crate::types::{DiagnoseRequest, Question, Session};
use crate::{reduce, Action, AppState, Effect};

/// State with a live session, as after a successful start.
pub(crate) fn state_with_session() -> AppState {
    let mut state = AppState::default();
    state.session = Some(Session {
        user_id: "user-1".to_string(),
        session_id: "session-1".to_string(),
    });
    state
}

pub(crate) fn question(text: &str, options: &[&str]) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        question_type: Some("choice".to_string()),
        progress: None,
    }
}

/// Applies a sequence of actions, collecting every effect.
pub(crate) fn apply_actions(initial: &AppState, actions: Vec<Action>) -> (AppState, Vec<Effect>) {
    let mut state = initial.clone();
    let mut all_effects = Vec::new();

    for action in actions {
        let (new_state, effects) = reduce(&state, &action);
        state = new_state;
        all_effects.extend(effects);
    }

    (state, all_effects)
}

pub(crate) fn diagnose_requests(effects: &[Effect]) -> Vec<&DiagnoseRequest> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Diagnose { request, .. } => Some(request),
            _ => None,
        })
        .collect()
}
