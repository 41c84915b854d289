use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LanguageParseError;
use crate::render::DiagnosisCard;

/// Confidence below this is classified as high severity.
pub const HIGH_SEVERITY_BELOW: f64 = 0.65;
/// Confidence at or above this is classified as low severity.
pub const LOW_SEVERITY_FROM: f64 = 0.8;
/// Confidence below this, combined with a heart keyword, raises the emergency callout.
pub const EMERGENCY_BELOW: f64 = 0.7;

/// Speaking rate sent to the text-to-voice endpoint.
pub const SPEECH_RATE: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Locale handed to the speech recognizer.
    pub fn locale(self) -> &'static str {
        match self {
            Language::Ar => "ar-SA",
            Language::En => "en-US",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    /// Separator used when listing choices inline.
    pub fn list_separator(self) -> &'static str {
        match self {
            Language::Ar => "، ",
            Language::En => ", ",
        }
    }

    /// Keyword that marks a heart-related diagnosis in this language.
    pub fn heart_keyword(self) -> &'static str {
        match self {
            Language::Ar => "قلب",
            Language::En => "heart",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

/// Identifiers issued by the remote service for the active conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub session_id: String,
}

/// A multiple-choice (or open) question asked by the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub question_type: Option<String>,
    pub progress: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisResult {
    pub diagnosis: String,
    pub confidence: f64,
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl DiagnosisResult {
    /// Coarse bucket derived from confidence. The boundaries intentionally
    /// differ from the emergency threshold.
    pub fn severity(&self) -> Severity {
        if self.confidence < HIGH_SEVERITY_BELOW {
            Severity::High
        } else if self.confidence >= LOW_SEVERITY_FROM {
            Severity::Low
        } else {
            Severity::Medium
        }
    }

    pub fn is_emergency(&self, language: Language) -> bool {
        self.confidence < EMERGENCY_BELOW
            && self
                .diagnosis
                .to_lowercase()
                .contains(language.heart_keyword())
    }

    /// Width of the confidence bar, in percent.
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// One rendered item of the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub timestamp: DateTime<Local>,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Text { author: Author, text: String },
    Question(Question),
    Diagnosis(DiagnosisCard),
}

impl ChatEntry {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Local::now(),
            kind,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Text {
            author: Author::User,
            text: text.into(),
        })
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Text {
            author: Author::Bot,
            text: text.into(),
        })
    }

    /// Local wall-clock time shown under the message.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /api/start_chat`. The `status` field is carried in the body,
/// not only in the HTTP status line.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StartChatResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A started session together with the greeting to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGreeting {
    pub session: Session,
    pub message: String,
}

impl StartChatResponse {
    /// Interprets the body. `Err` carries the server's error text, if any.
    pub fn into_greeting(self) -> Result<SessionGreeting, Option<String>> {
        match (self.status, self.user_id, self.session_id) {
            (Some(200), Some(user_id), Some(session_id)) => Ok(SessionGreeting {
                session: Session { user_id, session_id },
                message: self.message.unwrap_or_default(),
            }),
            _ => Err(self.error.filter(|e| !e.is_empty())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnoseRequest {
    pub message: String,
    pub user_id: String,
    pub session_id: String,
    pub language: Language,
    pub explain_disease: bool,
}

/// Loosely-typed body of `POST /api/diagnose`, as sent by the server.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawDiagnoseResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub progress: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerAction {
    StartNewChat,
    Other(String),
}

impl From<String> for ServerAction {
    fn from(action: String) -> Self {
        if action == "start_new_chat" {
            ServerAction::StartNewChat
        } else {
            ServerAction::Other(action)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Diagnosis(DiagnosisResult),
    Message(String),
}

/// Typed reply of the diagnose endpoint. `error` takes precedence over
/// `state`.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnoseReply {
    Error {
        message: String,
        action: Option<ServerAction>,
        question: Option<Question>,
    },
    AwaitingResponse(Question),
    Complete(Completion),
    Unrecognized,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<RawDiagnoseResponse> for DiagnoseReply {
    fn from(raw: RawDiagnoseResponse) -> Self {
        let question = |raw: &RawDiagnoseResponse| {
            non_empty(raw.question.clone()).map(|text| Question {
                text,
                options: raw.options.clone().unwrap_or_default(),
                question_type: raw.question_type.clone(),
                progress: raw.progress.clone(),
            })
        };

        if let Some(message) = non_empty(raw.error.clone()) {
            return DiagnoseReply::Error {
                message,
                action: raw.action.clone().map(ServerAction::from),
                question: question(&raw),
            };
        }

        match raw.state.as_deref() {
            // Options still arm the gate when the question text is missing
            Some("awaiting_response") => DiagnoseReply::AwaitingResponse(Question {
                text: raw.question.clone().unwrap_or_default(),
                options: raw.options.clone().unwrap_or_default(),
                question_type: raw.question_type.clone(),
                progress: raw.progress.clone(),
            }),
            Some("complete") => {
                let completion = match non_empty(raw.diagnosis) {
                    Some(diagnosis) => Completion::Diagnosis(DiagnosisResult {
                        diagnosis,
                        confidence: raw.confidence.unwrap_or(0.0).clamp(0.0, 1.0),
                        response: raw.response.unwrap_or_default(),
                    }),
                    None => Completion::Message(
                        non_empty(raw.message)
                            .or_else(|| non_empty(raw.response))
                            .unwrap_or_default(),
                    ),
                };
                DiagnoseReply::Complete(completion)
            }
            _ => DiagnoseReply::Unrecognized,
        }
    }
}

/// Body of `POST /api/text-to-voice`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub language: Language,
    pub speed: u32,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            speed: SPEECH_RATE,
        }
    }
}

/// Synthesized speech returned by the text-to-voice endpoint.
#[derive(Clone, PartialEq)]
pub struct AudioClip {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl AudioClip {
    /// File extension matching the clip's content type.
    pub fn extension(&self) -> &'static str {
        let ct = self.content_type.to_ascii_lowercase();
        if ct.contains("mpeg") || ct.contains("mp3") {
            "mp3"
        } else if ct.contains("wav") {
            "wav"
        } else if ct.contains("ogg") {
            "ogg"
        } else if ct.contains("webm") {
            "webm"
        } else {
            "audio"
        }
    }
}
