use iced::theme::Palette;
use iced::widget::{button, container, progress_bar, text_input};
use iced::{Background, Border, Color, Theme};
use triage_chat_core::types::Severity;

// Color palette
pub struct Colors;

impl Colors {
    pub const BACKGROUND: Color = Color::from_rgb(0.11, 0.11, 0.13); // #1c1c21
    pub const SURFACE: Color = Color::from_rgb(0.13, 0.13, 0.16); // #212127
    pub const SURFACE_LIGHT: Color = Color::from_rgb(0.16, 0.16, 0.20); // #292933
    pub const PRIMARY: Color = Color::from_rgb(0.38, 0.65, 1.0); // #61a6ff
    pub const TEXT: Color = Color::from_rgb(0.88, 0.88, 0.90); // #e0e0e6
    pub const TEXT_DIM: Color = Color::from_rgb(0.50, 0.50, 0.58); // #80809e
    pub const BORDER: Color = Color::from_rgb(0.20, 0.20, 0.24); // #33333d
    pub const SUCCESS: Color = Color::from_rgb(0.40, 0.80, 0.40); // #66cc66
    pub const WARNING: Color = Color::from_rgb(0.95, 0.75, 0.30); // #f2bf4d
    pub const ERROR: Color = Color::from_rgb(0.90, 0.40, 0.40); // #e66666
    pub const SPINNER: Color = Color::from_rgb(1.0, 0.68, 0.38); // #FFAD61
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "Triage".to_string(),
        Palette {
            background: Colors::BACKGROUND,
            text: Colors::TEXT,
            primary: Colors::PRIMARY,
            success: Colors::SUCCESS,
            danger: Colors::ERROR,
        },
    )
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Colors::SUCCESS,
        Severity::Medium => Colors::WARNING,
        Severity::High => Colors::ERROR,
    }
}

fn border(width: f32, radius: f32, color: Color) -> Border {
    Border {
        width,
        radius: radius.into(),
        color,
    }
}

pub fn header_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        border: border(0.0, 0.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

// Message styles
pub fn user_message_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::PRIMARY)),
        text_color: Some(Color::WHITE),
        border: border(0.0, 12.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

pub fn bot_message_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        border: border(1.0, 12.0, Colors::BORDER),
        ..Default::default()
    }
}

pub fn diagnosis_container(emergency: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        border: border(
            if emergency { 2.0 } else { 1.0 },
            12.0,
            if emergency { Colors::ERROR } else { Colors::BORDER },
        ),
        ..Default::default()
    }
}

pub fn emergency_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..Colors::ERROR
        })),
        text_color: Some(Colors::ERROR),
        border: border(1.0, 8.0, Colors::ERROR),
        ..Default::default()
    }
}

pub fn severity_badge(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let color = severity_color(severity);
        container::Style {
            background: Some(Background::Color(Color { a: 0.2, ..color })),
            text_color: Some(color),
            border: border(1.0, 10.0, color),
            ..Default::default()
        }
    }
}

pub fn confidence_bar(severity: Severity) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: Background::Color(Colors::BORDER),
        bar: Background::Color(severity_color(severity)),
        border: border(0.0, 4.0, Color::TRANSPARENT),
    }
}

pub fn notice_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

pub fn notice_dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        border: border(1.0, 12.0, Colors::BORDER),
        ..Default::default()
    }
}

// Input style
pub fn input_style(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Colors::SURFACE),
        border: border(1.0, 8.0, Colors::BORDER),
        icon: Color::TRANSPARENT,
        placeholder: Color {
            a: 0.7,
            ..Colors::TEXT_DIM
        },
        value: Colors::TEXT,
        selection: Color {
            a: 0.3,
            ..Colors::PRIMARY
        },
    }
}

// Button styles
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => Colors::BORDER,
        button::Status::Hovered => Color {
            a: 0.85,
            ..Colors::PRIMARY
        },
        _ => Colors::PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: border(0.0, 6.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Disabled => Colors::TEXT_DIM,
        _ => Colors::TEXT,
    };
    button::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        text_color,
        border: border(1.0, 6.0, Colors::BORDER),
        ..Default::default()
    }
}

pub fn option_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Colors::PRIMARY, Color::WHITE),
        button::Status::Disabled => (Colors::SURFACE, Colors::TEXT_DIM),
        button::Status::Active => (Colors::SURFACE, Colors::PRIMARY),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: border(1.0, 16.0, Colors::PRIMARY),
        ..Default::default()
    }
}

pub fn recording_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Colors::ERROR)),
        text_color: Color::WHITE,
        border: border(0.0, 6.0, Color::TRANSPARENT),
        ..Default::default()
    }
}
