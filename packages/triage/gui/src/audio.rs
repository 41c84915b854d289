use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};
use triage_chat_core::types::AudioClip;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("could not stage audio clip: {0}")]
    Io(#[from] std::io::Error),
    #[error("audio player {player:?} exited with {status}")]
    PlayerFailed { player: String, status: ExitStatus },
}

/// Hands synthesized speech to an external player. Clips are staged in a
/// temporary directory and removed once played.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    player: Option<String>,
    dir: PathBuf,
}

impl AudioOutput {
    pub fn new(player: Option<String>) -> Self {
        Self {
            player,
            dir: std::env::temp_dir().join("triage-chat"),
        }
    }

    #[cfg(test)]
    fn with_dir(player: Option<String>, dir: PathBuf) -> Self {
        Self { player, dir }
    }

    /// Stages `clip` and plays it. Without a configured player the staged
    /// file is kept and its path returned.
    pub async fn play(&self, clip: AudioClip) -> Result<Option<PathBuf>, PlaybackError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self
            .dir
            .join(format!("{}.{}", Uuid::new_v4(), clip.extension()));
        tokio::fs::write(&path, &clip.bytes).await?;

        let Some(player) = &self.player else {
            info!(path = %path.display(), "no audio player configured, clip kept");
            return Ok(Some(path));
        };

        let mut parts = player.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(Some(path));
        };
        debug!(program, path = %path.display(), "playing clip");
        let status = Command::new(program).args(parts).arg(&path).status().await?;

        if let Err(err) = tokio::fs::remove_file(&path).await {
            debug!(%err, "could not remove played clip");
        }
        if !status.success() {
            return Err(PlaybackError::PlayerFailed {
                player: player.clone(),
                status,
            });
        }
        Ok(None)
    }
}
