use iced::widget::{button, column, container, progress_bar, row, text, Column, Space};
use iced::{Alignment, Element, Length};
use triage_chat_core::messages::{self, MessageId};
use triage_chat_core::render::{severity_label, DiagnosisCard};
use triage_chat_core::types::ChatEntry;
use triage_chat_core::{Action, AppState};

use super::{localized, timestamp};
use crate::app::Message;
use crate::theme::{self, Colors};

/// Diagnosis card: condition, confidence bar, severity badge, and the
/// emergency callout when the result calls for it.
pub fn view_diagnosis_card<'a>(
    card: &'a DiagnosisCard,
    entry: &'a ChatEntry,
    state: &'a AppState,
) -> Element<'a, Message> {
    let language = state.language;

    let badge = container(
        text(severity_label(card.severity, language))
            .size(12)
            .shaping(text::Shaping::Advanced),
    )
    .padding([2, 10])
    .style(theme::severity_badge(card.severity));

    let caption = localized(messages::text(MessageId::PossibleCondition, language), language)
        .size(12)
        .color(Colors::TEXT_DIM);
    let heading = if language.is_rtl() {
        row![badge, Space::with_width(Length::Fill), caption]
    } else {
        row![caption, Space::with_width(Length::Fill), badge]
    };

    let mut body = Column::new()
        .spacing(10)
        .push(heading.align_y(Alignment::Center))
        .push(
            localized(card.result.diagnosis.as_str(), language)
                .size(20)
                .width(Length::Fill),
        )
        .push(
            progress_bar(0.0..=100.0, card.result.confidence_percent() as f32)
                .height(8)
                .style(theme::confidence_bar(card.severity)),
        )
        .push(
            localized(card.confidence_label(language), language)
                .size(13)
                .width(Length::Fill)
                .color(Colors::TEXT_DIM),
        );

    if card.emergency {
        body = body.push(
            container(
                column![
                    localized(messages::text(MessageId::EmergencyWarning, language), language)
                        .size(14)
                        .width(Length::Fill),
                    localized(
                        format!(
                            "{} {}",
                            messages::text(MessageId::EmergencyCallToAction, language),
                            state.emergency_number
                        ),
                        language,
                    )
                    .size(16)
                    .width(Length::Fill),
                ]
                .spacing(6),
            )
            .padding(12)
            .width(Length::Fill)
            .style(theme::emergency_container),
        );
    }

    if let Some(explanation) = &card.explanation {
        body = body.push(
            column![
                localized(messages::text(MessageId::ExplanationTitle, language), language)
                    .size(14)
                    .width(Length::Fill)
                    .color(Colors::PRIMARY),
                localized(explanation.as_str(), language)
                    .size(14)
                    .width(Length::Fill),
            ]
            .spacing(4),
        );
    }

    if card.offer_explain {
        body = body.push(
            button(
                text(messages::text(MessageId::ExplainCondition, language))
                    .size(13)
                    .shaping(text::Shaping::Advanced),
            )
            .padding([6, 14])
            .style(theme::option_button)
            .on_press(Message::CoreAction(Action::RequestExplanation)),
        );
    }

    body = body.push(timestamp(entry, language).width(Length::Fill));

    container(body)
        .padding(16)
        .width(Length::Fill)
        .style(theme::diagnosis_container(card.emergency))
        .into()
}
