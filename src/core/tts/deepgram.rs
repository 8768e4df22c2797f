//! # Deepgram TTS Implementation
//!
//! Deepgram Aura synthesis over the HTTP `/v1/speak` endpoint. The response
//! body is handed back as a stream so audio reaches the caller as soon as
//! Deepgram produces it.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use aura_speak::core::tts::{DeepgramConfig, DeepgramTTS, SpeechSynthesizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tts = DeepgramTTS::new(DeepgramConfig {
//!         domain: "https://api.deepgram.com".to_string(),
//!         api_key: "your-api-key".to_string(),
//!     })?;
//!     let audio = tts.synthesize("Hello from Deepgram!", "aura-asteria-en").await?;
//!     assert!(audio.is_some());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use tracing::debug;
use url::Url;

use super::base::{
    AudioPayload, SpeechSynthesizer, TTSError, TTSResult, provider_request_error,
};
use super::registry::DEFAULT_VOICE;

pub const DEEPGRAM_TTS_URL: &str = "https://api.deepgram.com";

/// Connection settings for Deepgram
#[derive(Debug, Clone)]
pub struct DeepgramConfig {
    /// Base domain, e.g. `https://api.deepgram.com`
    pub domain: String,
    /// API key; sent as-is even when empty
    pub api_key: String,
}

impl Default for DeepgramConfig {
    fn default() -> Self {
        Self {
            domain: DEEPGRAM_TTS_URL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Deepgram TTS provider implementation
pub struct DeepgramTTS {
    client: reqwest::Client,
    config: DeepgramConfig,
}

impl DeepgramTTS {
    /// Create a new Deepgram TTS instance
    pub fn new(config: DeepgramConfig) -> TTSResult<Self> {
        // Bad domains fail at startup
        Self::build_speak_url(&config.domain, DEFAULT_VOICE)?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Build the speak URL with the model query parameter
    fn build_speak_url(domain: &str, model: &str) -> TTSResult<Url> {
        let mut url = Url::parse(&format!("{}/v1/speak", domain.trim_end_matches('/')))
            .map_err(|e| TTSError::InvalidConfiguration(format!("Invalid Deepgram domain: {e}")))?;

        url.query_pairs_mut().append_pair("model", model);

        Ok(url)
    }

    /// Get authorization header value
    fn get_auth_header(&self) -> String {
        format!("token {}", self.config.api_key)
    }
}

#[async_trait]
impl SpeechSynthesizer for DeepgramTTS {
    fn name(&self) -> &'static str {
        "deepgram"
    }

    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Option<AudioPayload>> {
        let url = Self::build_speak_url(&self.config.domain, voice)?;
        debug!("Deepgram speak request: {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.get_auth_header())
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| provider_request_error("Deepgram", e))?;

        // Status is not checked here, any body is forwarded as audio
        debug!("Deepgram responded with status {}", response.status());

        let stream = response.bytes_stream().map(|chunk| {
            chunk.map_err(|e| TTSError::NetworkError(format!("Failed to read Deepgram audio: {e}")))
        });

        Ok(Some(AudioPayload::Stream(Box::pin(stream))))
    }
}
