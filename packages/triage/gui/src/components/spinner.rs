use iced::widget::{row, text, Space};
use iced::{Alignment, Element};
use std::time::{Duration, Instant};

use crate::theme;

/// Frame-based activity indicator, redrawn by the app's tick subscription.
#[derive(Debug, Clone)]
pub struct Spinner {
    start_time: Instant,
    frames: &'static [&'static str],
    frame_duration: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}

impl Spinner {
    /// Three bouncing dots, shown while the assistant is typing.
    pub fn dots() -> Self {
        Self {
            start_time: Instant::now(),
            frames: &["●  ", " ● ", "  ●", " ● "],
            frame_duration: Duration::from_millis(200),
        }
    }

    /// Braille wheel, shown while a session is being opened.
    pub fn wheel() -> Self {
        Self {
            start_time: Instant::now(),
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            frame_duration: Duration::from_millis(80),
        }
    }

    pub fn current_frame(&self) -> &'static str {
        let elapsed = self.start_time.elapsed().as_millis();
        let index = (elapsed / self.frame_duration.as_millis()) as usize % self.frames.len();
        self.frames[index]
    }

    pub fn view<'a, Message: 'a>(&self, label: Option<&'a str>) -> Element<'a, Message> {
        let frame = text(self.current_frame())
            .size(16)
            .color(theme::Colors::SPINNER);

        match label {
            Some(label) => row![
                frame,
                Space::with_width(8),
                text(label)
                    .size(13)
                    .color(theme::Colors::TEXT_DIM)
                    .shaping(text::Shaping::Advanced),
            ]
            .align_y(Alignment::Center)
            .into(),
            None => frame.into(),
        }
    }
}
