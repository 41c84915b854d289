use clap::Parser;
use thiserror::Error;
use triage_chat_core::error::LanguageParseError;
use triage_chat_core::state::DEFAULT_EMERGENCY_NUMBER;
use triage_chat_core::types::Language;

#[derive(Debug, Parser)]
#[command(name = "triage-chat", version, about = "Bilingual symptom-triage chat client")]
pub struct Args {
    /// Base URL of the triage assistant
    #[arg(long, env = "TRIAGE_SERVER_URL", default_value = "http://localhost:5000")]
    pub server_url: String,

    /// Interface language (ar or en)
    #[arg(long, env = "TRIAGE_LANGUAGE", default_value = "ar")]
    pub language: String,

    /// Start with spoken replies turned off
    #[arg(long, env = "TRIAGE_MUTE")]
    pub mute: bool,

    /// Number shown on emergency warnings
    #[arg(long, env = "TRIAGE_EMERGENCY_NUMBER", default_value = DEFAULT_EMERGENCY_NUMBER)]
    pub emergency_number: String,

    /// Command used to play synthesized speech, e.g. "mpv --really-quiet"
    #[arg(long, env = "TRIAGE_AUDIO_PLAYER")]
    pub audio_player: Option<String>,

    /// Log filter directives
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub language: Language,
    pub speech_enabled: bool,
    pub emergency_number: String,
    pub audio_player: Option<String>,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Language(#[from] LanguageParseError),
    #[error("server URL must start with http:// or https://, got {0:?}")]
    InvalidServerUrl(String),
    #[error("emergency number must not be empty")]
    EmptyEmergencyNumber,
}

impl Config {
    /// Reads `.env` if present, then the command line and environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let server_url = args.server_url.trim().to_string();
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(server_url));
        }

        let emergency_number = args.emergency_number.trim().to_string();
        if emergency_number.is_empty() {
            return Err(ConfigError::EmptyEmergencyNumber);
        }

        Ok(Self {
            server_url,
            language: args.language.parse()?,
            speech_enabled: !args.mute,
            emergency_number,
            audio_player: args.audio_player.filter(|player| !player.trim().is_empty()),
            log_filter: args.log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("triage-chat").chain(argv.iter().copied()))
            .expect("arguments parse");
        Config::from_args(args)
    }

    #[test]
    fn explicit_flags_are_applied() {
        let config = parse(&[
            "--server-url",
            "https://triage.example.org/",
            "--language",
            "en",
            "--emergency-number",
            "997",
            "--audio-player",
            "mpv --really-quiet",
        ])
        .unwrap();
        assert_eq!(config.server_url, "https://triage.example.org/");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.emergency_number, "997");
        assert_eq!(config.audio_player.as_deref(), Some("mpv --really-quiet"));
    }

    #[test]
    fn arabic_is_accepted() {
        let config = parse(&["--language", "ar"]).unwrap();
        assert_eq!(config.language, Language::Ar);
    }

    #[test]
    fn mute_disables_speech() {
        let config = parse(&["--mute"]).unwrap();
        assert!(!config.speech_enabled);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = parse(&["--language", "fr"]).unwrap_err();
        assert!(matches!(err, ConfigError::Language(_)));
    }

    #[test]
    fn rejects_bad_server_url() {
        let err = parse(&["--server-url", "localhost:5000"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidServerUrl(url) if url == "localhost:5000"));
    }

    #[test]
    fn blank_player_is_ignored() {
        let config = parse(&["--audio-player", "  "]).unwrap();
        assert_eq!(config.audio_player, None);
    }
}
