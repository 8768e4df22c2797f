//! Voice identifier resolution.
//!
//! A voice identifier is either one of the logical aliases (`deepgram`,
//! `whisper`, `elevenLabs`) or a compound `<prefix>-<voice>` string. The
//! prefix selects the provider.

use std::fmt;

use super::base::{TTSError, TTSResult};

pub const DEEPGRAM_PREFIX: &str = "aura-";
pub const WHISPER_PREFIX: &str = "whisper-";
pub const ELEVENLABS_PREFIX: &str = "elevenLabs-";

/// Voice used when the request carries no `model` parameter
pub const DEFAULT_VOICE: &str = "aura-asteria-en";

/// Closed set of supported synthesis backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TTSProviderKind {
    /// Deepgram Aura, streamed over HTTP
    Deepgram,
    /// OpenAI speech API
    Whisper,
    /// ElevenLabs
    ElevenLabs,
}

impl TTSProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TTSProviderKind::Deepgram => "deepgram",
            TTSProviderKind::Whisper => "whisper",
            TTSProviderKind::ElevenLabs => "elevenLabs",
        }
    }
}

impl fmt::Display for TTSProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default compound identifiers substituted for the logical aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultVoices {
    pub deepgram: String,
    pub whisper: String,
    pub eleven_labs: String,
}

impl Default for DefaultVoices {
    fn default() -> Self {
        Self {
            deepgram: DEFAULT_VOICE.to_string(),
            whisper: "whisper-alloy".to_string(),
            eleven_labs: "elevenLabs-Rachel".to_string(),
        }
    }
}

impl DefaultVoices {
    /// Look up the compound identifier for an alias, if `identifier` is one
    fn for_alias(&self, identifier: &str) -> Option<&str> {
        match identifier {
            "deepgram" => Some(&self.deepgram),
            "whisper" => Some(&self.whisper),
            "elevenLabs" => Some(&self.eleven_labs),
            _ => None,
        }
    }
}

/// The routing decision for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderBinding {
    pub provider: TTSProviderKind,
    /// Voice name in the provider's own vocabulary
    pub voice: String,
}

/// Resolve a caller-supplied voice identifier into a provider binding.
///
/// Deepgram keeps the full identifier as its model name; the other providers
/// receive only the part after their prefix.
pub fn resolve_voice(identifier: &str, defaults: &DefaultVoices) -> TTSResult<ProviderBinding> {
    let voice = defaults.for_alias(identifier).unwrap_or(identifier);

    if voice.starts_with(DEEPGRAM_PREFIX) {
        Ok(ProviderBinding {
            provider: TTSProviderKind::Deepgram,
            voice: voice.to_string(),
        })
    } else if let Some(name) = voice.strip_prefix(WHISPER_PREFIX) {
        Ok(ProviderBinding {
            provider: TTSProviderKind::Whisper,
            voice: name.to_string(),
        })
    } else if let Some(name) = voice.strip_prefix(ELEVENLABS_PREFIX) {
        Ok(ProviderBinding {
            provider: TTSProviderKind::ElevenLabs,
            voice: name.to_string(),
        })
    } else {
        Err(TTSError::InvalidVoice(voice.to_string()))
    }
}
