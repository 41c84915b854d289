mod update;

use std::time::Duration;

use iced::{event, keyboard, mouse, touch, window, Element, Event, Subscription, Task, Theme};
use triage_chat_core::messages::{text, MessageId};
use triage_chat_core::{Action, AppState};

use crate::api::ApiClient;
use crate::audio::AudioOutput;
use crate::components::spinner::Spinner;
use crate::config::Config;
use crate::effects::Services;
use crate::{theme, views};

pub struct TriageApp {
    pub core_state: AppState,
    pub services: Services,
    pub typing_spinner: Spinner,
    pub starting_spinner: Spinner,
}

#[derive(Debug, Clone)]
pub enum Message {
    CoreAction(Action),
    InputChanged(String),
    SendMessage,
    Tick,
    Noop,
}

impl TriageApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let core_state = AppState {
            speech_enabled: config.speech_enabled,
            emergency_number: config.emergency_number,
            // No speech recognizer ships with the desktop build
            voice_supported: false,
            ..AppState::default().with_language(config.language)
        };

        let app = Self {
            core_state,
            services: Services {
                api: ApiClient::new(config.server_url),
                audio: AudioOutput::new(config.audio_player),
            },
            typing_spinner: Spinner::dots(),
            starting_spinner: Spinner::wheel(),
        };

        (app, Task::done(Message::CoreAction(Action::StartSession)))
    }

    pub fn title(&self) -> String {
        text(MessageId::AppTitle, self.core_state.language).to_string()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.core_state.typing || self.core_state.starting {
            subscriptions.push(iced::time::every(Duration::from_millis(80)).map(|_| Message::Tick));
        }
        if !self.core_state.user_interacted {
            subscriptions.push(event::listen_with(first_interaction));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::view_main_content(self)
    }
}

/// Speech playback stays locked until the user clicked, touched or typed.
fn first_interaction(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Touch(touch::Event::FingerPressed { .. })
        | Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
            Some(Message::CoreAction(Action::UserInteracted))
        }
        _ => None,
    }
}
