use chrono::{DateTime, Local};

use crate::error::Notice;
use crate::gate::PendingOptions;
use crate::types::*;

pub const DEFAULT_EMERGENCY_NUMBER: &str = "911";

/// Complete client state. Owned by the front end and only changed through
/// [`crate::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Identifiers of the active conversation, once the server issued them
    pub session: Option<Session>,

    pub language: Language,

    /// Choices the next reply must match
    pub pending: PendingOptions,

    /// `question_type` of the last question asked
    pub last_question_type: Option<String>,

    /// Rendered conversation, oldest first
    pub transcript: Vec<ChatEntry>,

    /// Current contents of the input field
    pub draft: String,

    /// Typing indicator shown while a diagnose request is pending
    pub typing: bool,

    /// Loading indicator shown while a session is being started
    pub starting: bool,

    /// Set from the moment a diagnose request is issued until its reply lands
    pub turn_in_flight: bool,

    /// Bumped on every issued turn and on restart; replies carrying an older
    /// value are dropped
    pub turn_epoch: u64,

    /// Modal notice, if any
    pub notice: Option<Notice>,

    pub last_message_at: Option<DateTime<Local>>,

    /// Speak replies through the text-to-voice endpoint
    pub speech_enabled: bool,

    /// Playback is held back until the user has clicked or typed
    pub user_interacted: bool,

    /// A speech recognizer is available on this host
    pub voice_supported: bool,

    pub recording: bool,

    /// Bumped on every recording start; tags the watchdog timer
    pub recording_epoch: u64,

    /// Last transcript produced by the recognizer
    pub voice_transcript: String,

    pub emergency_number: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            language: Language::Ar,
            pending: PendingOptions::default(),
            last_question_type: None,
            transcript: Vec::new(),
            draft: String::new(),
            typing: false,
            starting: false,
            turn_in_flight: false,
            turn_epoch: 0,
            notice: None,
            last_message_at: None,
            speech_enabled: true,
            user_interacted: false,
            voice_supported: false,
            recording: false,
            recording_epoch: 0,
            voice_transcript: String::new(),
            emergency_number: DEFAULT_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl AppState {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }

    pub fn push_entry(&mut self, entry: ChatEntry) {
        self.last_message_at = Some(entry.timestamp);
        self.transcript.push(entry);
    }

    /// The question currently gating input, if its options are still pending.
    pub fn open_question(&self) -> Option<&Question> {
        if !self.pending.is_armed() {
            return None;
        }
        self.transcript.iter().rev().find_map(|entry| match &entry.kind {
            EntryKind::Question(q) if q.options == self.pending.options() => Some(q),
            _ => None,
        })
    }
}
