//! OpenAI speech synthesis (`whisper-*` voices).
//!
//! Calls `POST /audio/speech` with the `tts-1` model and drains the whole
//! response into memory before returning.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, error};

use super::base::{AudioPayload, SpeechSynthesizer, TTSError, TTSResult, provider_request_error};

pub const OPENAI_TTS_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_TTS_MODEL: &str = "tts-1";

/// Connection settings for the OpenAI speech API
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: OPENAI_TTS_URL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

/// OpenAI TTS provider implementation
pub struct OpenAITTS {
    client: reqwest::Client,
    config: OpenAIConfig,
}

impl OpenAITTS {
    pub fn new(config: OpenAIConfig) -> TTSResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAITTS {
    fn name(&self) -> &'static str {
        "whisper"
    }

    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Option<AudioPayload>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                TTSError::ProviderError(
                    "The OPENAI_API_KEY environment variable is missing or empty".to_string(),
                )
            })?;

        let body = SpeechRequest {
            model: OPENAI_TTS_MODEL,
            voice,
            input: text,
        };

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| provider_request_error("OpenAI", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("OpenAI TTS API error ({}): {}", status, error_body);
            return Err(TTSError::ProviderError(format!(
                "API error ({status}): {error_body}"
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TTSError::NetworkError(format!("Failed to read OpenAI audio: {e}")))?;

        debug!("OpenAI returned {} bytes of audio", audio.len());

        if audio.is_empty() {
            return Ok(None);
        }

        Ok(Some(AudioPayload::Buffer(audio)))
    }
}
