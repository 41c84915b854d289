use pretty_assertions::assert_eq;

use super::{question, state_with_session};
use crate::effects::FOLLOW_UP_DELAY;
use crate::error::{ChatError, Notice};
use crate::messages::MessageId;
use crate::types::*;
use crate::{reduce, Action, AppState, Effect};

/// State right after a submission, waiting for the reply.
fn awaiting_reply() -> AppState {
    let mut state = state_with_session();
    state.typing = true;
    state.turn_in_flight = true;
    state
}

/// Completion of the turn issued from [`awaiting_reply`].
fn finished(result: Result<DiagnoseReply, String>) -> Action {
    Action::DiagnoseFinished { turn: 0, result }
}

fn bot_texts(state: &AppState) -> Vec<String> {
    state
        .transcript
        .iter()
        .filter_map(|entry| match &entry.kind {
            EntryKind::Text {
                author: Author::Bot,
                text,
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_awaiting_response_arms_gate_and_renders_question() {
    let state = awaiting_reply();
    let reply = DiagnoseReply::AwaitingResponse(question("Do you have fever?", &["Yes", "No"]));

    let (new_state, effects) = reduce(&state, &finished(Ok(reply)));

    assert!(!new_state.typing);
    assert!(!new_state.turn_in_flight);
    assert_eq!(
        new_state.pending.options().to_vec(),
        vec!["Yes".to_string(), "No".to_string()]
    );
    assert_eq!(new_state.last_question_type, Some("choice".to_string()));
    match &new_state.transcript[0].kind {
        EntryKind::Question(q) => assert_eq!(q.text, "Do you have fever?"),
        other => panic!("Expected question entry, got {other:?}"),
    }
    assert_eq!(new_state.open_question().map(|q| q.text.as_str()), Some("Do you have fever?"));
    assert_eq!(effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_transport_failure_hides_typing_and_reports() {
    let state = awaiting_reply();

    let (new_state, effects) = reduce(
        &state,
        &finished(Err("إجابة غير صالحة".to_string())),
    );

    assert!(!new_state.typing);
    assert!(!new_state.turn_in_flight);
    assert_eq!(
        new_state.notice,
        Some(Notice::Error(ChatError::Transport("إجابة غير صالحة".to_string())))
    );
    assert!(new_state.transcript.is_empty());
    assert_eq!(effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_server_error_with_question_renders_both() {
    let mut state = awaiting_reply();
    state.language = Language::En;
    let reply = DiagnoseReply::Error {
        message: "Invalid answer".to_string(),
        action: None,
        question: Some(question("How old are you?", &["<18", "18-60", ">60"])),
    };

    let (new_state, _) = reduce(&state, &finished(Ok(reply)));

    assert_eq!(bot_texts(&new_state), vec!["Invalid answer".to_string()]);
    assert_eq!(new_state.transcript.len(), 2);
    assert!(matches!(new_state.transcript[1].kind, EntryKind::Question(_)));
    assert!(new_state.pending.validate("18-60"));
    assert!(!new_state.pending.validate("twenty"));
    assert!(new_state.has_session());
}

#[test]
fn test_session_expiry_restarts_and_ignores_question() {
    let mut state = awaiting_reply();
    state.pending.arm(vec!["Yes".to_string()]);
    let reply = DiagnoseReply::Error {
        message: "انتهت الجلسة".to_string(),
        action: Some(ServerAction::StartNewChat),
        question: Some(question("ignored", &["A", "B"])),
    };

    let (new_state, effects) = reduce(&state, &finished(Ok(reply)));

    assert_eq!(new_state.transcript.len(), 1);
    assert_eq!(bot_texts(&new_state), vec!["انتهت الجلسة".to_string()]);
    assert!(!new_state.has_session());
    assert!(!new_state.pending.is_armed());
    assert!(new_state.starting);
    assert_eq!(new_state.notice, Some(Notice::Info(MessageId::SessionExpired)));
    assert_eq!(effects, vec![Effect::StartSession, Effect::ScrollToBottom]);
}

#[test]
fn test_complete_with_diagnosis_renders_card_and_speaks() {
    let mut state = awaiting_reply();
    state.language = Language::En;
    let result = DiagnosisResult {
        diagnosis: "Heart disease".to_string(),
        confidence: 0.6,
        response: "See a cardiologist.".to_string(),
    };
    let reply = DiagnoseReply::Complete(Completion::Diagnosis(result));

    let (new_state, effects) = reduce(&state, &finished(Ok(reply)));

    match &new_state.transcript[0].kind {
        EntryKind::Diagnosis(card) => {
            assert_eq!(card.severity, Severity::High);
            assert!(card.emergency);
            assert_eq!(card.explanation.as_deref(), Some("See a cardiologist."));
            assert!(card.offer_explain);
        }
        other => panic!("Expected diagnosis entry, got {other:?}"),
    }

    assert_eq!(
        effects,
        vec![
            Effect::Synthesize(SpeechRequest::new("See a cardiologist.", Language::En)),
            Effect::Schedule {
                delay: FOLLOW_UP_DELAY,
                action: Action::FollowUpPrompt,
            },
            Effect::ScrollToBottom,
        ]
    );
}

#[test]
fn test_follow_up_prompt_uses_active_language() {
    let mut state = state_with_session();
    state.language = Language::En;

    let (new_state, _) = reduce(&state, &Action::FollowUpPrompt);

    assert_eq!(
        bot_texts(&new_state),
        vec!["Do you have other symptoms or questions?".to_string()]
    );
    assert!(new_state.last_message_at.is_some());
}

#[test]
fn test_complete_without_diagnosis_prefers_message() {
    let raw = RawDiagnoseResponse {
        state: Some("complete".to_string()),
        message: Some("Stay hydrated".to_string()),
        response: Some("ignored".to_string()),
        ..Default::default()
    };
    let (new_state, effects) = reduce(
        &awaiting_reply(),
        &finished(Ok(DiagnoseReply::from(raw))),
    );
    assert_eq!(bot_texts(&new_state), vec!["Stay hydrated".to_string()]);
    assert!(effects.contains(&Effect::Synthesize(SpeechRequest::new(
        "Stay hydrated",
        Language::Ar
    ))));

    let raw = RawDiagnoseResponse {
        state: Some("complete".to_string()),
        response: Some("Rest well".to_string()),
        ..Default::default()
    };
    let (new_state, _) = reduce(
        &awaiting_reply(),
        &finished(Ok(DiagnoseReply::from(raw))),
    );
    assert_eq!(bot_texts(&new_state), vec!["Rest well".to_string()]);
}

#[test]
fn test_speech_disabled_suppresses_synthesis() {
    let mut state = awaiting_reply();
    state.speech_enabled = false;
    let reply = DiagnoseReply::Complete(Completion::Message("Rest well".to_string()));

    let (_, effects) = reduce(&state, &finished(Ok(reply)));

    assert_eq!(effects, vec![Effect::ScrollToBottom]);
}

#[test]
fn test_unrecognized_reply_only_clears_indicators() {
    let state = awaiting_reply();

    let (new_state, effects) = reduce(
        &state,
        &finished(Ok(DiagnoseReply::Unrecognized)),
    );

    assert!(!new_state.typing);
    assert!(new_state.transcript.is_empty());
    assert_eq!(effects, vec![Effect::ScrollToBottom]);
}

mod decoding {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(json: serde_json::Value) -> DiagnoseReply {
        let raw: RawDiagnoseResponse = serde_json::from_value(json).unwrap();
        DiagnoseReply::from(raw)
    }

    #[test]
    fn test_error_takes_precedence_over_state() {
        let reply = decode(serde_json::json!({
            "error": "إجابة غير صالحة",
            "question": "ما عمرك؟",
            "options": ["أقل من 18", "18-60"],
            "question_type": "choice",
            "state": "awaiting_response",
            "status": 400
        }));

        match reply {
            DiagnoseReply::Error {
                message,
                action,
                question,
            } => {
                assert_eq!(message, "إجابة غير صالحة");
                assert_eq!(action, None);
                assert_eq!(question.unwrap().options.len(), 2);
            }
            other => panic!("Expected error reply, got {other:?}"),
        }
    }

    #[test]
    fn test_start_new_chat_action() {
        let reply = decode(serde_json::json!({
            "error": "expired",
            "action": "start_new_chat"
        }));

        assert_eq!(
            reply,
            DiagnoseReply::Error {
                message: "expired".to_string(),
                action: Some(ServerAction::StartNewChat),
                question: None,
            }
        );
    }

    #[test]
    fn test_awaiting_response_defaults_options() {
        let reply = decode(serde_json::json!({
            "state": "awaiting_response",
            "question": "Describe the pain",
            "question_type": "text",
            "progress": "3/10",
            "session_id": "s"
        }));

        assert_eq!(
            reply,
            DiagnoseReply::AwaitingResponse(Question {
                text: "Describe the pain".to_string(),
                options: vec![],
                question_type: Some("text".to_string()),
                progress: Some("3/10".to_string()),
            })
        );
    }

    #[test]
    fn test_awaiting_response_without_question_keeps_options() {
        let reply = decode(serde_json::json!({
            "state": "awaiting_response",
            "options": ["Yes", "No"]
        }));

        assert_eq!(
            reply,
            DiagnoseReply::AwaitingResponse(Question {
                text: String::new(),
                options: vec!["Yes".to_string(), "No".to_string()],
                question_type: None,
                progress: None,
            })
        );

        let (state, _) = reduce(&awaiting_reply(), &finished(Ok(reply)));
        assert!(state.pending.is_armed());
        assert!(!state.pending.validate("Maybe"));
        assert!(state.pending.validate("Yes"));
    }

    #[test]
    fn test_complete_with_diagnosis_ignores_extra_fields() {
        let reply = decode(serde_json::json!({
            "state": "complete",
            "diagnosis": "Migraine",
            "confidence": 0.85,
            "response": "Information about the disease: ...",
            "probabilities": {"Migraine": 0.85},
            "detailed_results": [],
            "timestamp": "2024-01-01T00:00:00",
            "status": 200
        }));

        assert_eq!(
            reply,
            DiagnoseReply::Complete(Completion::Diagnosis(DiagnosisResult {
                diagnosis: "Migraine".to_string(),
                confidence: 0.85,
                response: "Information about the disease: ...".to_string(),
            }))
        );
    }

    #[test]
    fn test_empty_diagnosis_falls_back_to_message() {
        let reply = decode(serde_json::json!({
            "state": "complete",
            "diagnosis": "",
            "response": "No confirmed condition"
        }));

        assert_eq!(
            reply,
            DiagnoseReply::Complete(Completion::Message("No confirmed condition".to_string()))
        );
    }

    #[test]
    fn test_unknown_state_is_unrecognized() {
        assert_eq!(
            decode(serde_json::json!({ "state": "error" })),
            DiagnoseReply::Unrecognized
        );
        assert_eq!(decode(serde_json::json!({})), DiagnoseReply::Unrecognized);
    }
}

#[test]
fn test_entries_carry_clock_time() {
    let entry = ChatEntry::bot("مرحبًا");

    assert_eq!(entry.time_label(), entry.timestamp.format("%H:%M").to_string());
    assert_eq!(entry.time_label().len(), 5);
}
