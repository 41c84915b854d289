use pretty_assertions::assert_eq;

use super::{apply_actions, question, state_with_session};
use crate::error::{ChatError, Notice};
use crate::messages::MessageId;
use crate::types::*;
use crate::{reduce, Action, AppState, Effect, SessionStartFailure};

fn greeting() -> SessionGreeting {
    SessionGreeting {
        session: Session {
            user_id: "u-42".to_string(),
            session_id: "s-42".to_string(),
        },
        message: "مرحبًا! كيف يمكنني مساعدتك؟".to_string(),
    }
}

#[test]
fn test_start_session_sets_loading_indicator() {
    let state = AppState::default();

    let (new_state, effects) = reduce(&state, &Action::StartSession);

    assert!(new_state.starting);
    assert_eq!(effects, vec![Effect::StartSession]);
}

#[test]
fn test_session_started_stores_ids_and_greets() {
    let mut state = AppState::default();
    state.starting = true;

    let (new_state, effects) = reduce(&state, &Action::SessionStarted(Ok(greeting())));

    assert!(!new_state.starting);
    assert_eq!(new_state.session, Some(greeting().session));
    assert_eq!(new_state.transcript.len(), 1);
    // Greeting is not spoken before the user interacted
    assert_eq!(effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_greeting_spoken_after_interaction() {
    let mut state = AppState::default();
    state.user_interacted = true;

    let (_, effects) = reduce(&state, &Action::SessionStarted(Ok(greeting())));

    assert_eq!(
        effects[0],
        Effect::Synthesize(SpeechRequest::new(greeting().message, Language::Ar))
    );
}

#[test]
fn test_session_start_failures() {
    let mut state = AppState::default();
    state.starting = true;

    let (new_state, effects) = reduce(
        &state,
        &Action::SessionStarted(Err(SessionStartFailure::Network(
            "connection refused".to_string(),
        ))),
    );
    assert!(!new_state.starting);
    assert!(effects.is_empty());
    assert_eq!(
        new_state.notice.as_ref().map(|n| n.render(Language::Ar)),
        Some("خطأ في الاتصال بالخادم، يرجى المحاولة لاحقًا".to_string())
    );

    let (new_state, _) = reduce(
        &state,
        &Action::SessionStarted(Err(SessionStartFailure::Server(None))),
    );
    assert_eq!(
        new_state.notice,
        Some(Notice::Error(ChatError::ServerReported(None)))
    );
    assert_eq!(
        new_state.notice.map(|n| n.render(Language::En)),
        Some("An error occurred while starting the chat".to_string())
    );
}

#[test]
fn test_start_then_submit_sends_exactly_one_request_with_issued_ids() {
    let (state, effects) = apply_actions(
        &AppState::default(),
        vec![
            Action::StartSession,
            Action::SessionStarted(Ok(greeting())),
            Action::UpdateDraft {
                content: "hello".to_string(),
            },
            Action::SubmitDraft,
        ],
    );

    let requests: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Diagnose { request, .. } => Some(request),
            _ => None,
        })
        .collect();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "hello");
    assert_eq!(requests[0].user_id, "u-42");
    assert_eq!(requests[0].session_id, "s-42");
    assert!(state.turn_in_flight);
}

#[test]
fn test_restart_cleans_up_then_starts_fresh() {
    let mut state = state_with_session();
    state.pending.arm(vec!["Yes".to_string(), "No".to_string()]);
    state.push_entry(ChatEntry::new(EntryKind::Question(question("Fever?", &["Yes", "No"]))));

    let (state, effects) = reduce(&state, &Action::Restart);
    assert!(state.starting);
    assert_eq!(effects, vec![Effect::Cleanup]);
    // Nothing is cleared until cleanup went through
    assert!(state.has_session());

    let (state, effects) = reduce(&state, &Action::CleanupFinished(Ok(())));
    assert!(!state.has_session());
    assert!(!state.pending.is_armed());
    assert!(state.transcript.is_empty());
    assert!(state.starting);
    assert_eq!(effects, vec![Effect::StartSession]);
}

#[test]
fn test_reply_from_before_restart_is_dropped() {
    let stale_question = DiagnoseReply::AwaitingResponse(question("Fever?", &["Yes", "No"]));
    let mut state = state_with_session();
    state.draft = "fever".to_string();

    let (state, effects) = apply_actions(
        &state,
        vec![
            Action::SubmitDraft,
            Action::Restart,
            Action::CleanupFinished(Ok(())),
            Action::SessionStarted(Ok(greeting())),
            Action::UpdateDraft {
                content: "cough".to_string(),
            },
            Action::SubmitDraft,
        ],
    );
    let turns: Vec<u64> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Diagnose { turn, .. } => Some(*turn),
            _ => None,
        })
        .collect();
    assert_eq!(turns.len(), 2);
    assert!(turns[0] < turns[1]);

    // The reply to "fever" lands after the new turn was issued
    let (state, effects) = reduce(
        &state,
        &Action::DiagnoseFinished {
            turn: turns[0],
            result: Ok(stale_question.clone()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.turn_in_flight);
    assert!(state.typing);
    assert!(!state.pending.is_armed());
    assert_eq!(state.transcript.len(), 2);

    // The current turn's reply is still handled
    let (state, _) = reduce(
        &state,
        &Action::DiagnoseFinished {
            turn: turns[1],
            result: Ok(stale_question),
        },
    );
    assert!(!state.turn_in_flight);
    assert!(state.pending.is_armed());
}

#[test]
fn test_restart_failure_reports() {
    let state = state_with_session();

    let (state, effects) = apply_actions(
        &state,
        vec![
            Action::Restart,
            Action::CleanupFinished(Err("connection reset".to_string())),
        ],
    );

    assert_eq!(effects, vec![Effect::Cleanup]);
    assert!(!state.starting);
    assert!(state.has_session());
    assert_eq!(
        state.notice.map(|n| n.render(Language::En)),
        Some("Error restarting chat".to_string())
    );
}

#[test]
fn test_language_toggle_round_trips() {
    let state = AppState::default();

    let (state, _) = reduce(&state, &Action::ToggleLanguage);
    assert_eq!(state.language, Language::En);

    let (state, _) = reduce(&state, &Action::ToggleLanguage);
    assert_eq!(state.language, Language::Ar);
}

#[test]
fn test_attach_and_dismiss_notice() {
    let state = AppState::default();

    let (state, effects) = reduce(&state, &Action::AttachFile);
    assert!(effects.is_empty());
    assert_eq!(state.notice, Some(Notice::Info(MessageId::AttachmentComingSoon)));

    let (state, _) = reduce(&state, &Action::DismissNotice);
    assert_eq!(state.notice, None);
}

#[test]
fn test_start_chat_body_interpretation() {
    let ok: StartChatResponse = serde_json::from_value(serde_json::json!({
        "status": 200,
        "user_id": "u",
        "session_id": "s",
        "message": "hi"
    }))
    .unwrap();
    assert_eq!(
        ok.into_greeting(),
        Ok(SessionGreeting {
            session: Session {
                user_id: "u".to_string(),
                session_id: "s".to_string()
            },
            message: "hi".to_string(),
        })
    );

    let failed: StartChatResponse = serde_json::from_value(serde_json::json!({
        "status": 500,
        "error": "model not loaded"
    }))
    .unwrap();
    assert_eq!(failed.into_greeting(), Err(Some("model not loaded".to_string())));

    let bare = StartChatResponse {
        status: Some(500),
        ..Default::default()
    };
    assert_eq!(bare.into_greeting(), Err(None));
}
