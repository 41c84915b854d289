use iced::widget::{
    button, center, column, container, opaque, row, scrollable, stack, text, Button, Column, Row,
    Space,
};
use iced::{Alignment, Background, Element, Length, Theme};
use triage_chat_core::messages::{self, MessageId};
use triage_chat_core::types::{Author, ChatEntry, EntryKind, Language, Question};
use triage_chat_core::{Action, AppState};

use super::{diagnosis, localized, timestamp};
use crate::app::{Message, TriageApp};
use crate::effects::messages_scroll_id;
use crate::theme::{self, Colors};
use crate::widgets::message_input::message_input_view;

pub fn view_main_content(app: &TriageApp) -> Element<'_, Message> {
    let state = &app.core_state;

    let content = column![
        view_header(state),
        view_transcript(app),
        view_quick_suggestions(state.language),
        view_input_bar(state),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Colors::BACKGROUND)),
            ..Default::default()
        });

    match &state.notice {
        Some(notice) => stack![base, view_notice(notice.render(state.language), state.language)].into(),
        None => base.into(),
    }
}

fn control_button<'a>(label: &'a str, on_press: Option<Message>) -> Button<'a, Message> {
    button(text(label).size(13).shaping(text::Shaping::Advanced))
        .padding([6, 12])
        .on_press_maybe(on_press)
        .style(theme::secondary_button)
}

fn core(action: Action) -> Message {
    Message::CoreAction(action)
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let language = state.language;
    let speech_label = if state.speech_enabled {
        MessageId::SpeechOnButton
    } else {
        MessageId::SpeechOffButton
    };

    let mut controls: Vec<Element<'_, Message>> = vec![
        control_button(
            messages::text(MessageId::LanguageButton, language),
            Some(core(Action::ToggleLanguage)),
        )
        .into(),
        control_button(
            messages::text(speech_label, language),
            Some(core(Action::ToggleSpeech)),
        )
        .into(),
        control_button(
            messages::text(MessageId::RestartButton, language),
            (!state.starting).then(|| core(Action::Restart)),
        )
        .into(),
    ];
    if language.is_rtl() {
        controls.reverse();
    }

    let titles = column![
        localized(messages::text(MessageId::AppTitle, language), language)
            .size(20)
            .width(Length::Fill)
            .color(Colors::TEXT),
        localized(messages::text(MessageId::AppSubtitle, language), language)
            .size(13)
            .width(Length::Fill)
            .color(Colors::TEXT_DIM),
    ]
    .spacing(4);

    container(
        column![titles, Row::with_children(controls).spacing(8)]
            .spacing(12)
            .align_x(if language.is_rtl() {
                Alignment::End
            } else {
                Alignment::Start
            }),
    )
    .padding([16, 24])
    .width(Length::Fill)
    .style(theme::header_container)
    .into()
}

fn view_transcript(app: &TriageApp) -> Element<'_, Message> {
    let state = &app.core_state;
    let language = state.language;

    let mut entries = Column::new().spacing(12).padding([20, 24]);
    for entry in &state.transcript {
        entries = entries.push(view_entry(entry, state));
    }

    if state.starting {
        entries = entries.push(
            app.starting_spinner
                .view(Some(messages::text(MessageId::StartingChat, language))),
        );
    }
    if state.typing {
        entries = entries.push(message_bubble(
            app.typing_spinner.view(None),
            Author::Bot,
            language,
        ));
    }
    if state.recording {
        entries = entries.push(
            localized(messages::text(MessageId::SpeakNow, language), language)
                .size(13)
                .width(Length::Fill)
                .color(Colors::ERROR),
        );
    }

    scrollable(entries)
        .id(messages_scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_entry<'a>(entry: &'a ChatEntry, state: &'a AppState) -> Element<'a, Message> {
    let language = state.language;

    match &entry.kind {
        EntryKind::Text { author, text: body } => message_bubble(
            column![
                localized(body.as_str(), language).size(15),
                timestamp(entry, language),
            ]
            .spacing(4),
            *author,
            language,
        ),
        EntryKind::Question(question) => view_question(entry, question, state),
        EntryKind::Diagnosis(card) => diagnosis::view_diagnosis_card(card, entry, state),
    }
}

fn view_question<'a>(
    entry: &'a ChatEntry,
    question: &'a Question,
    state: &'a AppState,
) -> Element<'a, Message> {
    let language = state.language;
    // Only the question that armed the gate takes clicks
    let is_open = state
        .open_question()
        .is_some_and(|open| std::ptr::eq(open, question));

    let mut body = Column::new().spacing(8);
    if let Some(progress) = &question.progress {
        body = body.push(
            localized(
                format!(
                    "{}: {}",
                    messages::text(MessageId::QuestionProgress, language),
                    progress
                ),
                language,
            )
            .size(12)
            .color(Colors::TEXT_DIM),
        );
    }
    if !question.text.is_empty() {
        body = body.push(localized(question.text.as_str(), language).size(15));
    }

    if !question.options.is_empty() {
        let options = question.options.iter().map(|option| {
            Element::from(
                button(text(option.as_str()).size(14).shaping(text::Shaping::Advanced))
                    .padding([6, 14])
                    .style(theme::option_button)
                    .on_press_maybe(is_open.then(|| {
                        core(Action::SelectOption {
                            option: option.clone(),
                        })
                    })),
            )
        });
        body = body.push(Row::with_children(options).spacing(8).wrap());
    }
    body = body.push(timestamp(entry, language));

    message_bubble(body, Author::Bot, language)
}

/// Wraps `content` in a bubble pushed to the author's side. Sides mirror in
/// right-to-left layouts.
fn message_bubble<'a>(
    content: impl Into<Element<'a, Message>>,
    author: Author,
    language: Language,
) -> Element<'a, Message> {
    let style: fn(&Theme) -> container::Style = match author {
        Author::User => theme::user_message_container,
        Author::Bot => theme::bot_message_container,
    };
    let bubble = container(content).padding([10, 14]).max_width(440.0).style(style);

    let user_side_is_end = !language.is_rtl();
    let at_end = matches!(author, Author::User) == user_side_is_end;
    let line = if at_end {
        row![Space::with_width(Length::Fill), bubble]
    } else {
        row![bubble, Space::with_width(Length::Fill)]
    };
    line.width(Length::Fill).into()
}

fn view_quick_suggestions<'a>(language: Language) -> Element<'a, Message> {
    let chips = messages::quick_suggestions(language).map(|suggestion| {
        Element::from(
            button(text(suggestion).size(13).shaping(text::Shaping::Advanced))
                .padding([4, 10])
                .style(theme::option_button)
                .on_press(core(Action::SubmitText {
                    text: suggestion.to_string(),
                })),
        )
    });

    container(Row::with_children(chips).spacing(8).wrap())
        .padding([8, 24])
        .width(Length::Fill)
        .into()
}

fn view_input_bar(state: &AppState) -> Element<'_, Message> {
    let language = state.language;

    let mut children: Vec<Element<'_, Message>> = vec![control_button(
        messages::text(MessageId::AttachButton, language),
        Some(core(Action::AttachFile)),
    )
    .into()];

    if state.voice_supported {
        let style: fn(&Theme, button::Status) -> button::Style = if state.recording {
            theme::recording_button
        } else {
            theme::secondary_button
        };
        children.push(
            button(
                text(messages::text(MessageId::VoiceButton, language))
                    .size(13)
                    .shaping(text::Shaping::Advanced),
            )
            .padding([6, 12])
            .style(style)
            .on_press(core(Action::ToggleRecording))
            .into(),
        );
    }

    children.push(message_input_view(
        language,
        &state.draft,
        Message::InputChanged,
        Message::SendMessage,
    ));
    children.push(
        button(
            text(messages::text(MessageId::SendButton, language))
                .size(14)
                .shaping(text::Shaping::Advanced),
        )
        .padding([10, 18])
        .style(theme::primary_button)
        .on_press(Message::SendMessage)
        .into(),
    );

    if language.is_rtl() {
        children.reverse();
    }

    container(
        Row::with_children(children)
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(theme::header_container)
    .into()
}

fn view_notice<'a>(message: String, language: Language) -> Element<'a, Message> {
    let dialog = container(
        column![
            localized(message, language).size(15),
            button(
                text(messages::text(MessageId::CloseButton, language))
                    .shaping(text::Shaping::Advanced),
            )
            .padding([8, 18])
            .style(theme::primary_button)
            .on_press(core(Action::DismissNotice)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .max_width(380.0)
    .style(theme::notice_dialog);

    opaque(center(dialog).style(theme::notice_backdrop))
}
