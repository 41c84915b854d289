use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use triage_chat_core::types::{
    AudioClip, DiagnoseReply, DiagnoseRequest, RawDiagnoseResponse, SpeechRequest,
    StartChatResponse,
};
use triage_chat_core::AudioError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx reply, carrying the server's `error` text when it sent one.
    #[error("{0}")]
    Rejected(String),
}

/// Failure body the assistant attaches to non-2xx replies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Opens a session. The body carries its own `status`, so the HTTP code
    /// is not consulted here.
    pub async fn start_chat(&self) -> Result<StartChatResponse, ApiError> {
        let resp = self
            .client
            .post(self.url("/api/start_chat"))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        debug!(status = %resp.status(), "start_chat answered");
        Ok(resp.json::<StartChatResponse>().await?)
    }

    pub async fn diagnose(&self, request: &DiagnoseRequest) -> Result<DiagnoseReply, ApiError> {
        let resp = self
            .client
            .post(self.url("/api/diagnose"))
            .json(request)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let raw = resp.json::<RawDiagnoseResponse>().await?;
        Ok(raw.into())
    }

    pub async fn text_to_voice(&self, request: &SpeechRequest) -> Result<AudioClip, AudioError> {
        let resp = self
            .client
            .post(self.url("/api/text-to-voice"))
            .json(request)
            .send()
            .await
            .map_err(|e| AudioError::Transport(e.to_string()))?;

        let resp = ensure_success(resp).await.map_err(|e| match e {
            ApiError::Rejected(message) => AudioError::Rejected(message),
            ApiError::Request(e) => AudioError::Transport(e.to_string()),
        })?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !is_audio(&content_type) {
            return Err(AudioError::InvalidContentType(content_type));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AudioError::Transport(e.to_string()))?;
        Ok(AudioClip {
            content_type,
            bytes: bytes.to_vec(),
        })
    }

    /// Releases server-side resources. Only transport failures count; the
    /// reply itself is ignored.
    pub async fn cleanup(&self) -> Result<(), ApiError> {
        let resp = self.client.post(self.url("/api/cleanup")).send().await?;
        debug!(status = %resp.status(), "cleanup answered");
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| format!("Network response was not ok ({status})"));
    warn!(%status, %message, "request rejected");
    Err(ApiError::Rejected(message))
}

pub fn is_audio(content_type: &str) -> bool {
    content_type.contains("audio")
}
