pub mod diagnosis;
pub mod main_content;

pub use main_content::view_main_content;

use iced::alignment::Horizontal;
use iced::widget::{text, Text};
use triage_chat_core::types::{ChatEntry, Language};

use crate::theme::Colors;

/// Text shaped for Arabic script and aligned to the reading direction.
pub(crate) fn localized<'a>(content: impl text::IntoFragment<'a>, language: Language) -> Text<'a> {
    let align = if language.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    };
    text(content)
        .shaping(text::Shaping::Advanced)
        .align_x(align)
}

pub(crate) fn timestamp<'a>(entry: &ChatEntry, language: Language) -> Text<'a> {
    localized(entry.time_label(), language)
        .size(11)
        .color(Colors::TEXT_DIM)
}
