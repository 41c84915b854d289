use iced::widget::{container, text_input};
use iced::{Element, Length};
use triage_chat_core::messages::{text, MessageId};
use triage_chat_core::types::Language;

use crate::theme;

/// Single-line composer; Enter submits.
pub fn message_input_view<'a, Message>(
    language: Language,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let input_widget = text_input(text(MessageId::InputPlaceholder, language), value)
        .on_input(on_change)
        .on_submit(on_submit)
        .size(15)
        .padding(12)
        .style(theme::input_style);

    container(input_widget).width(Length::Fill).into()
}
