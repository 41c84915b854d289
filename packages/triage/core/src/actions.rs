use crate::error::{AudioError, RecognitionError};
use crate::types::*;

/// Everything that can change the client state: user input, and completions
/// of effects performed by the front end.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input
    UpdateDraft { content: String },
    /// Send the input field's contents as a free-text message
    SubmitDraft,
    /// Click on one of the options of a pending question
    SelectOption { option: String },
    /// Explicit text such as a quick suggestion
    SubmitText { text: String },
    /// "Explain this condition" on a diagnosis card
    RequestExplanation,
    UserInteracted,

    // Session lifecycle
    StartSession,
    SessionStarted(Result<SessionGreeting, SessionStartFailure>),
    Restart,
    CleanupFinished(Result<(), String>),

    // Turn completion
    /// Reply to the turn tagged `turn`
    DiagnoseFinished {
        turn: u64,
        result: Result<DiagnoseReply, String>,
    },
    /// Prompt scheduled after a diagnosis card
    FollowUpPrompt,

    // Speech output
    SpeechSynthesized(Result<AudioClip, AudioError>),
    ToggleSpeech,

    // Speech capture
    ToggleRecording,
    TranscriptRecognized { transcript: String },
    /// Delayed hand-off of a recognized transcript into a turn
    SubmitTranscript { transcript: String },
    RecognitionFailed(RecognitionError),
    RecognitionEnded,
    RecordingWatchdog { epoch: u64 },

    // Chrome
    ToggleLanguage,
    AttachFile,
    DismissNotice,
}

/// Why `POST /api/start_chat` produced no session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStartFailure {
    /// The request never completed
    Network(String),
    /// The server answered without a session, optionally explaining why
    Server(Option<String>),
}
