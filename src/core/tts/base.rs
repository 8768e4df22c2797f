//! # TTS Base Trait Implementation
//!
//! This module provides the base trait abstraction for Text-to-Speech (TTS) providers.
//! Every backend (Deepgram, OpenAI, ElevenLabs) implements [`SpeechSynthesizer`] and
//! returns its audio as an [`AudioPayload`], which is either a finite buffer or an
//! incrementally delivered byte stream.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use aura_speak::core::tts::{AudioPayload, SpeechSynthesizer, TTSResult};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! struct Silence;
//!
//! #[async_trait]
//! impl SpeechSynthesizer for Silence {
//!     fn name(&self) -> &'static str {
//!         "silence"
//!     }
//!
//!     async fn synthesize(&self, _text: &str, _voice: &str) -> TTSResult<Option<AudioPayload>> {
//!         Ok(Some(AudioPayload::Buffer(Bytes::new())))
//!     }
//! }
//! ```

use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

/// TTS-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum TTSError {
    /// The voice identifier did not resolve to any known provider prefix
    #[error("Invalid voice: {0}")]
    InvalidVoice(String),

    /// The provider rejected the request or returned an unusable response
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Incremental audio byte stream produced by streaming providers
pub type AudioStream = Pin<Box<dyn Stream<Item = TTSResult<Bytes>> + Send>>;

/// Synthesized speech returned by a provider.
///
/// Callers must handle both shapes: some providers hand back a complete
/// buffer, others pass the upstream body through as it arrives.
pub enum AudioPayload {
    /// Fully drained audio
    Buffer(Bytes),
    /// Audio delivered chunk by chunk
    Stream(AudioStream),
}

impl AudioPayload {
    /// Returns true when the payload is delivered incrementally
    pub fn is_stream(&self) -> bool {
        matches!(self, AudioPayload::Stream(_))
    }
}

impl fmt::Debug for AudioPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioPayload::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            AudioPayload::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Base trait for Text-to-Speech providers
///
/// Implementations are constructed once with their own configuration and
/// shared across requests, so they must not hold per-request state.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &'static str;

    /// Synthesize `text` with the provider-specific `voice`.
    ///
    /// # Returns
    /// * `Ok(Some(payload))` - audio produced
    /// * `Ok(None)` - the provider produced no audio and reported no error
    /// * `Err(TTSError)` - transport or provider failure
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<Option<AudioPayload>>;
}

/// Maps a reqwest transport error into a provider error
pub(crate) fn provider_request_error(provider: &str, err: reqwest::Error) -> TTSError {
    TTSError::ProviderError(format!("{provider} request failed: {err}"))
}
