use std::time::Duration;

use crate::actions::Action;
use crate::types::*;

/// Delay before the follow-up prompt that trails a diagnosis card.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_secs(1);
/// Delay before a recognized transcript is submitted.
pub const TRANSCRIPT_SUBMIT_DELAY: Duration = Duration::from_millis(500);
/// A recording still running after this long is stopped.
pub const RECORDING_WATCHDOG: Duration = Duration::from_secs(10);

/// Side effects that need to be performed (API calls, timers, etc)
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `POST /api/start_chat`
    StartSession,

    /// `POST /api/cleanup`, followed by a new session
    Cleanup,

    /// `POST /api/diagnose`; the reply is reported with the same `turn`
    Diagnose { turn: u64, request: DiagnoseRequest },

    /// `POST /api/text-to-voice`
    Synthesize(SpeechRequest),

    /// Hand a synthesized clip to the audio output
    PlayAudio(AudioClip),

    StartRecognition { locale: &'static str },

    StopRecognition,

    /// Dispatch `action` after `delay`
    Schedule { delay: Duration, action: Action },

    ScrollToBottom,
}
