use iced::widget::scrollable::{self, RelativeOffset};
use iced::Task as Command;
use tracing::{debug, warn};
use triage_chat_core::{Action, Effect, RecognitionError, SessionStartFailure};

use crate::api::ApiClient;
use crate::app::Message;
use crate::audio::AudioOutput;

/// Handles shared by every effect.
#[derive(Debug, Clone)]
pub struct Services {
    pub api: ApiClient,
    pub audio: AudioOutput,
}

pub fn messages_scroll_id() -> scrollable::Id {
    scrollable::Id::new("transcript")
}

pub fn handle_effects(services: &Services, effects: Vec<Effect>) -> Command<Message> {
    Command::batch(
        effects
            .into_iter()
            .map(|effect| handle_effect(services, effect)),
    )
}

fn handle_effect(services: &Services, effect: Effect) -> Command<Message> {
    debug!(?effect, "running effect");

    match effect {
        Effect::StartSession => {
            let api = services.api.clone();
            Command::perform(async move { api.start_chat().await }, |result| {
                let outcome = match result {
                    Ok(body) => body.into_greeting().map_err(SessionStartFailure::Server),
                    Err(e) => Err(SessionStartFailure::Network(e.to_string())),
                };
                Message::CoreAction(Action::SessionStarted(outcome))
            })
        }

        Effect::Cleanup => {
            let api = services.api.clone();
            Command::perform(async move { api.cleanup().await }, |result| {
                Message::CoreAction(Action::CleanupFinished(result.map_err(|e| e.to_string())))
            })
        }

        Effect::Diagnose { turn, request } => {
            let api = services.api.clone();
            Command::perform(async move { api.diagnose(&request).await }, move |result| {
                Message::CoreAction(Action::DiagnoseFinished {
                    turn,
                    result: result.map_err(|e| e.to_string()),
                })
            })
        }

        Effect::Synthesize(request) => {
            let api = services.api.clone();
            Command::perform(async move { api.text_to_voice(&request).await }, |result| {
                Message::CoreAction(Action::SpeechSynthesized(result))
            })
        }

        Effect::PlayAudio(clip) => {
            let audio = services.audio.clone();
            Command::perform(async move { audio.play(clip).await }, |result| {
                if let Err(e) = result {
                    warn!(error = %e, "audio playback failed");
                }
                Message::Noop
            })
        }

        // The desktop build ships no recognizer; the voice control stays
        // hidden, so these only fire if a caller forces them.
        Effect::StartRecognition { locale } => {
            warn!(locale, "no speech recognizer available");
            Command::done(Message::CoreAction(Action::RecognitionFailed(
                RecognitionError::from_code("not-supported"),
            )))
        }
        Effect::StopRecognition => Command::none(),

        Effect::Schedule { delay, action } => {
            Command::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                Message::CoreAction(action.clone())
            })
        }

        Effect::ScrollToBottom => scrollable::snap_to(messages_scroll_id(), RelativeOffset::END),
    }
}
