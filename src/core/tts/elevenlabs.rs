//! # ElevenLabs TTS Implementation
//!
//! Synthesis through the `/v1/text-to-speech/{voice_id}/stream` endpoint.
//! Voices may be given by display name, which is resolved against
//! `/v1/voices` first. Streamed chunks are collected into a single buffer.

use async_trait::async_trait;
use bytes::BytesMut;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::base::{AudioPayload, SpeechSynthesizer, TTSError, TTSResult, provider_request_error};

pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io";
pub const ELEVENLABS_MODEL_ID: &str = "eleven_multilingual_v2";

/// Connection settings for ElevenLabs
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            base_url: ELEVENLABS_TTS_URL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct StreamRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceEntry>,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    voice_id: String,
    name: String,
}

/// ElevenLabs voice ids are 20 ASCII alphanumeric characters
fn is_voice_id(voice: &str) -> bool {
    voice.len() == 20 && voice.chars().all(|c| c.is_ascii_alphanumeric())
}

/// ElevenLabs TTS provider implementation using the ElevenLabs HTTP REST API
pub struct ElevenLabsTTS {
    client: reqwest::Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsTTS {
    pub fn new(config: ElevenLabsConfig) -> TTSResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn api_key(&self) -> TTSResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                TTSError::ProviderError(
                    "The ELEVENLABS_API_KEY environment variable is missing or empty".to_string(),
                )
            })
    }

    /// Turn a voice name such as `Rachel` into its voice id.
    ///
    /// Values that already look like a voice id are returned unchanged.
    async fn resolve_voice_id(&self, voice: &str, api_key: &str) -> TTSResult<String> {
        if is_voice_id(voice) {
            return Ok(voice.to_string());
        }

        let response = self
            .client
            .get(self.api_url("voices"))
            .header("xi-api-key", api_key)
            .send()
            .await
            .map_err(|e| provider_request_error("ElevenLabs", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(TTSError::ProviderError(format!(
                "Failed to list voices ({status}): {error_body}"
            )));
        }

        let listing: VoicesResponse = response
            .json()
            .await
            .map_err(|e| TTSError::ProviderError(format!("Malformed voices response: {e}")))?;

        listing
            .voices
            .into_iter()
            .find(|entry| entry.name == voice)
            .map(|entry| entry.voice_id)
            .ok_or_else(|| TTSError::ProviderError(format!("{voice} is not a valid voice name")))
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsTTS {
    fn name(&self) -> &'static str {
        "elevenLabs"
    }

    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Option<AudioPayload>> {
        let api_key = self.api_key()?;
        let voice_id = self.resolve_voice_id(voice, api_key).await?;
        debug!("ElevenLabs voice {} resolved to {}", voice, voice_id);

        let response = self
            .client
            .post(self.api_url(&format!("text-to-speech/{voice_id}/stream")))
            .header("xi-api-key", api_key)
            .header("Accept", "audio/mpeg")
            .json(&StreamRequest {
                text,
                model_id: ELEVENLABS_MODEL_ID,
            })
            .send()
            .await
            .map_err(|e| provider_request_error("ElevenLabs", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("ElevenLabs TTS API error ({}): {}", status, error_body);
            return Err(TTSError::ProviderError(format!(
                "API error ({status}): {error_body}"
            )));
        }

        let mut audio = BytesMut::new();
        let mut chunks = 0usize;
        let mut stream = response.bytes_stream();
        while let Some(item) = stream.next().await {
            let bytes = item.map_err(|e| {
                TTSError::NetworkError(format!("Failed to read ElevenLabs audio: {e}"))
            })?;
            chunks += 1;
            audio.extend_from_slice(&bytes);
        }

        debug!(
            "ElevenLabs streamed {} chunks, {} bytes total",
            chunks,
            audio.len()
        );

        if chunks == 0 {
            return Ok(None);
        }

        Ok(Some(AudioPayload::Buffer(audio.freeze())))
    }
}
