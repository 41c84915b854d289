use iced::Task as Command;
use tracing::{debug, info};
use triage_chat_core::{reduce, Action};

use super::{Message, TriageApp};

impl TriageApp {
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CoreAction(action) => self.dispatch(action),

            Message::InputChanged(value) => self.dispatch(Action::UpdateDraft { content: value }),

            Message::SendMessage => self.dispatch(Action::SubmitDraft),

            // Redraw only; spinner frames are derived from elapsed time
            Message::Tick | Message::Noop => Command::none(),
        }
    }

    fn dispatch(&mut self, action: Action) -> Command<Message> {
        match &action {
            Action::UpdateDraft { .. } => {}
            other => info!(action = ?other, "processing core action"),
        }

        let (new_state, effects) = reduce(&self.core_state, &action);
        self.core_state = new_state;

        debug!(count = effects.len(), "core action produced effects");
        crate::effects::handle_effects(&self.services, effects)
    }
}
