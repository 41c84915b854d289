use tracing::{debug, info, warn};

use crate::actions::{Action, SessionStartFailure};
use crate::effects::{Effect, FOLLOW_UP_DELAY, RECORDING_WATCHDOG, TRANSCRIPT_SUBMIT_DELAY};
use crate::error::{ChatError, Notice, RecognitionError};
use crate::messages::{is_explain_request, text, MessageId};
use crate::render::DiagnosisCard;
use crate::state::AppState;
use crate::types::*;

/// Where the text of a turn comes from.
enum Source<'a> {
    /// The input field
    Draft,
    /// A clicked option
    Option(&'a str),
    /// Explicit text: quick suggestions, the explain action
    Text(&'a str),
    /// A recognized voice transcript
    Transcript(&'a str),
}

impl Source<'_> {
    /// Whether the text is echoed into the transcript as a user message.
    fn echoes(&self) -> bool {
        matches!(self, Source::Draft | Source::Transcript(_))
    }
}

/// Pure state transition function
/// Returns new state and any effects that need to be performed
pub fn reduce(state: &AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut new_state = state.clone();
    let mut effects = Vec::new();

    match action {
        // Input
        Action::UpdateDraft { content } => {
            new_state.draft = content.clone();
        }

        Action::SubmitDraft => {
            submit(&mut new_state, &mut effects, Source::Draft);
        }

        Action::SelectOption { option } => {
            submit(&mut new_state, &mut effects, Source::Option(option));
        }

        Action::SubmitText { text } => {
            submit(&mut new_state, &mut effects, Source::Text(text));
        }

        Action::RequestExplanation => {
            let phrase = text(MessageId::ExplainCondition, new_state.language);
            submit(&mut new_state, &mut effects, Source::Text(phrase));
        }

        Action::UserInteracted => {
            new_state.user_interacted = true;
        }

        // Session lifecycle
        Action::StartSession => {
            begin_session(&mut new_state, &mut effects);
        }

        Action::SessionStarted(Ok(greeting)) => {
            info!(session_id = %greeting.session.session_id, "chat session started");
            new_state.starting = false;
            new_state.session = Some(greeting.session.clone());
            if !greeting.message.is_empty() {
                new_state.push_entry(ChatEntry::bot(greeting.message.clone()));
                if new_state.user_interacted {
                    speak(&new_state, &mut effects, &greeting.message);
                }
            }
            effects.push(Effect::ScrollToBottom);
        }

        Action::SessionStarted(Err(failure)) => {
            warn!(?failure, "failed to start chat session");
            new_state.starting = false;
            let err = match failure {
                SessionStartFailure::Network(detail) => ChatError::ServerUnreachable(detail.clone()),
                SessionStartFailure::Server(detail) => ChatError::ServerReported(detail.clone()),
            };
            new_state.notice = Some(err.into());
        }

        Action::Restart => {
            new_state.starting = true;
            effects.push(Effect::Cleanup);
        }

        Action::CleanupFinished(Ok(())) => {
            new_state.clear_session();
            new_state.pending.disarm();
            new_state.last_question_type = None;
            new_state.transcript.clear();
            new_state.typing = false;
            new_state.turn_in_flight = false;
            new_state.turn_epoch += 1;
            new_state.starting = true;
            effects.push(Effect::StartSession);
        }

        Action::CleanupFinished(Err(detail)) => {
            warn!(%detail, "cleanup before restart failed");
            new_state.starting = false;
            new_state.notice = Some(ChatError::RestartFailed(detail.clone()).into());
        }

        // Turn completion
        Action::DiagnoseFinished { turn, .. } if *turn != new_state.turn_epoch => {
            debug!(
                turn,
                current = new_state.turn_epoch,
                "dropping reply to a superseded turn"
            );
        }

        Action::DiagnoseFinished { result, .. } => {
            new_state.typing = false;
            new_state.turn_in_flight = false;
            match result {
                Ok(reply) => handle_reply(&mut new_state, &mut effects, reply),
                Err(detail) => {
                    warn!(%detail, "diagnose request failed");
                    new_state.notice = Some(ChatError::Transport(detail.clone()).into());
                }
            }
            effects.push(Effect::ScrollToBottom);
        }

        Action::FollowUpPrompt => {
            let prompt = text(MessageId::FollowUpPrompt, new_state.language);
            new_state.push_entry(ChatEntry::bot(prompt));
            effects.push(Effect::ScrollToBottom);
        }

        // Speech output
        Action::SpeechSynthesized(Ok(clip)) => {
            if new_state.user_interacted {
                effects.push(Effect::PlayAudio(clip.clone()));
            } else {
                debug!("audio playback skipped: no user interaction yet");
            }
        }

        Action::SpeechSynthesized(Err(err)) => {
            warn!(%err, "text-to-speech failed");
            new_state.notice = Some(ChatError::AudioResponse(err.clone()).into());
        }

        Action::ToggleSpeech => {
            new_state.speech_enabled = !new_state.speech_enabled;
        }

        // Speech capture
        Action::ToggleRecording => {
            if new_state.voice_supported {
                toggle_recording(&mut new_state, &mut effects);
            } else {
                debug!("speech recognition unavailable, ignoring record toggle");
            }
        }

        Action::TranscriptRecognized { transcript } => {
            new_state.voice_transcript = transcript.clone();
            if new_state.recording {
                toggle_recording(&mut new_state, &mut effects);
            }
            effects.push(Effect::Schedule {
                delay: TRANSCRIPT_SUBMIT_DELAY,
                action: Action::SubmitTranscript {
                    transcript: transcript.clone(),
                },
            });
        }

        Action::SubmitTranscript { transcript } => {
            submit(&mut new_state, &mut effects, Source::Transcript(transcript));
        }

        Action::RecognitionFailed(err) => {
            new_state.notice = Some(ChatError::SpeechRecognition(err.clone()).into());
            if new_state.recording {
                toggle_recording(&mut new_state, &mut effects);
            }
        }

        Action::RecognitionEnded => {
            if new_state.recording {
                toggle_recording(&mut new_state, &mut effects);
            }
        }

        Action::RecordingWatchdog { epoch } => {
            if new_state.recording && *epoch == new_state.recording_epoch {
                toggle_recording(&mut new_state, &mut effects);
                new_state.notice =
                    Some(ChatError::SpeechRecognition(RecognitionError::TimedOut).into());
            }
        }

        // Chrome
        Action::ToggleLanguage => {
            new_state.language = new_state.language.toggled();
        }

        Action::AttachFile => {
            new_state.notice = Some(Notice::Info(MessageId::AttachmentComingSoon));
        }

        Action::DismissNotice => {
            new_state.notice = None;
        }
    }

    (new_state, effects)
}

/// One turn: validate, then issue the diagnose request.
fn submit(state: &mut AppState, effects: &mut Vec<Effect>, source: Source<'_>) {
    let message = match &source {
        Source::Draft => state.draft.trim().to_string(),
        Source::Option(text) | Source::Text(text) | Source::Transcript(text) => {
            text.trim().to_string()
        }
    };

    if message.is_empty() {
        reject(state, ChatError::EmptyInput);
        return;
    }

    if state.turn_in_flight {
        reject(state, ChatError::TurnInProgress);
        return;
    }

    if !state.pending.validate(&message) {
        let options = state.pending.options().to_vec();
        reject(state, ChatError::InvalidOption { options });
        state.draft.clear();
        return;
    }

    let Some(session) = state.session.clone() else {
        reject(state, ChatError::SessionMissing);
        begin_session(state, effects);
        return;
    };

    if source.echoes() {
        state.push_entry(ChatEntry::user(message.clone()));
    }
    if matches!(source, Source::Draft) {
        state.draft.clear();
    }
    state.pending.disarm();

    state.typing = true;
    state.turn_in_flight = true;
    state.turn_epoch += 1;

    effects.push(Effect::Diagnose {
        turn: state.turn_epoch,
        request: DiagnoseRequest {
            explain_disease: is_explain_request(&message),
            message,
            user_id: session.user_id,
            session_id: session.session_id,
            language: state.language,
        },
    });
    effects.push(Effect::ScrollToBottom);
}

fn reject(state: &mut AppState, err: ChatError) {
    debug!(%err, "submission rejected");
    state.notice = Some(err.into());
}

fn begin_session(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.starting {
        return;
    }
    state.starting = true;
    effects.push(Effect::StartSession);
}

fn handle_reply(state: &mut AppState, effects: &mut Vec<Effect>, reply: &DiagnoseReply) {
    match reply {
        DiagnoseReply::Error {
            message,
            action,
            question,
        } => {
            state.push_entry(ChatEntry::bot(message.clone()));
            if action == &Some(ServerAction::StartNewChat) {
                info!("server reported session expiry, starting a new chat");
                state.notice = Some(Notice::Info(MessageId::SessionExpired));
                state.clear_session();
                state.pending.disarm();
                begin_session(state, effects);
            } else if let Some(question) = question {
                present_question(state, question);
            }
        }

        DiagnoseReply::AwaitingResponse(question) => {
            present_question(state, question);
        }

        DiagnoseReply::Complete(Completion::Diagnosis(result)) => {
            let card = DiagnosisCard::render(result.clone(), state.language);
            state.push_entry(ChatEntry::new(EntryKind::Diagnosis(card)));
            speak(state, effects, &result.response);
            effects.push(Effect::Schedule {
                delay: FOLLOW_UP_DELAY,
                action: Action::FollowUpPrompt,
            });
        }

        DiagnoseReply::Complete(Completion::Message(message)) => {
            if message.is_empty() {
                warn!("complete reply carried neither message nor response");
            } else {
                state.push_entry(ChatEntry::bot(message.clone()));
                speak(state, effects, message);
            }
        }

        DiagnoseReply::Unrecognized => {
            warn!("unrecognized diagnose reply");
        }
    }
}

fn present_question(state: &mut AppState, question: &Question) {
    state.pending.arm(question.options.clone());
    state.last_question_type = question.question_type.clone();
    state.push_entry(ChatEntry::new(EntryKind::Question(question.clone())));
}

fn speak(state: &AppState, effects: &mut Vec<Effect>, text: &str) {
    if state.speech_enabled && !text.trim().is_empty() {
        effects.push(Effect::Synthesize(SpeechRequest::new(text, state.language)));
    }
}

fn toggle_recording(state: &mut AppState, effects: &mut Vec<Effect>) {
    if state.recording {
        state.recording = false;
        effects.push(Effect::StopRecognition);
    } else {
        state.recording = true;
        state.recording_epoch += 1;
        state.voice_transcript.clear();
        effects.push(Effect::StartRecognition {
            locale: state.language.locale(),
        });
        effects.push(Effect::Schedule {
            delay: RECORDING_WATCHDOG,
            action: Action::RecordingWatchdog {
                epoch: state.recording_epoch,
            },
        });
    }
}
