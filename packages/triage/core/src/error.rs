use thiserror::Error;

use crate::messages::{text, MessageId};
use crate::types::Language;

/// Failures surfaced to the user as a modal notice. None of them propagate
/// beyond the UI layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,

    #[error("input is not one of the pending options: {options:?}")]
    InvalidOption { options: Vec<String> },

    #[error("no active session")]
    SessionMissing,

    #[error("a turn is already in progress")]
    TurnInProgress,

    #[error("transport failure: {0}")]
    Transport(String),

    /// Start endpoint answered without a session. `None` when the body had no
    /// error text.
    #[error("server reported an error: {0:?}")]
    ServerReported(Option<String>),

    #[error("server unreachable: {0}")]
    ServerUnreachable(String),

    #[error("restart failed: {0}")]
    RestartFailed(String),

    #[error(transparent)]
    SpeechRecognition(#[from] RecognitionError),

    #[error(transparent)]
    AudioResponse(#[from] AudioError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("recording stopped by watchdog")]
    TimedOut,
    #[error("speech recognition error: {0}")]
    Other(String),
}

impl RecognitionError {
    /// Maps a recognizer error code (`no-speech`, `network`, ...) onto a reason.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => RecognitionError::NoSpeech,
            other => RecognitionError::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The endpoint answered with a non-audio content type.
    #[error("invalid audio response from server (content type {0:?})")]
    InvalidContentType(String),
    /// The endpoint refused to synthesize.
    #[error("speech synthesis failed: {0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language {0:?}, expected \"ar\" or \"en\"")]
pub struct LanguageParseError(pub String);

impl ChatError {
    /// Bilingual user-facing text of the error.
    pub fn user_message(&self, language: Language) -> String {
        match self {
            ChatError::EmptyInput => text(MessageId::EmptyInput, language).to_string(),
            ChatError::InvalidOption { options } => format!(
                "{}{}",
                text(MessageId::InvalidOptionPrefix, language),
                options.join(language.list_separator())
            ),
            ChatError::SessionMissing => text(MessageId::StartingNewSession, language).to_string(),
            ChatError::TurnInProgress => text(MessageId::TurnInProgress, language).to_string(),
            ChatError::Transport(detail) => format!(
                "{}{}{}",
                text(MessageId::TransportErrorPrefix, language),
                detail,
                text(MessageId::TryAgainSuffix, language)
            ),
            ChatError::ServerReported(Some(detail)) => detail.clone(),
            ChatError::ServerReported(None) => {
                text(MessageId::StartChatFailed, language).to_string()
            }
            ChatError::ServerUnreachable(_) => {
                text(MessageId::ServerUnreachable, language).to_string()
            }
            ChatError::RestartFailed(_) => text(MessageId::RestartFailed, language).to_string(),
            ChatError::SpeechRecognition(RecognitionError::NoSpeech) => {
                text(MessageId::NoSpeechDetected, language).to_string()
            }
            ChatError::SpeechRecognition(RecognitionError::TimedOut) => {
                text(MessageId::RecordingTimedOut, language).to_string()
            }
            ChatError::SpeechRecognition(RecognitionError::Other(code)) => format!(
                "{}{}",
                text(MessageId::RecognitionErrorPrefix, language),
                code
            ),
            ChatError::AudioResponse(AudioError::Rejected(_)) => {
                text(MessageId::AudioGenerationFailed, language).to_string()
            }
            ChatError::AudioResponse(err) => format!(
                "{}{}",
                text(MessageId::TextToSpeechErrorPrefix, language),
                err
            ),
        }
    }
}

/// What the modal dialog currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(ChatError),
    Info(MessageId),
}

impl Notice {
    pub fn render(&self, language: Language) -> String {
        match self {
            Notice::Error(err) => err.user_message(language),
            Notice::Info(id) => text(*id, language).to_string(),
        }
    }
}

impl From<ChatError> for Notice {
    fn from(err: ChatError) -> Self {
        Notice::Error(err)
    }
}
