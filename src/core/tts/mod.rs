mod base;
pub mod deepgram;
pub mod elevenlabs;
pub mod openai;
pub mod registry;

pub use base::{AudioPayload, AudioStream, SpeechSynthesizer, TTSError, TTSResult};
pub use deepgram::{DEEPGRAM_TTS_URL, DeepgramConfig, DeepgramTTS};
pub use elevenlabs::{ELEVENLABS_TTS_URL, ElevenLabsConfig, ElevenLabsTTS};
pub use openai::{OPENAI_TTS_URL, OpenAITTS, OpenAIConfig};
pub use registry::{
    DEFAULT_VOICE, DefaultVoices, ProviderBinding, TTSProviderKind, resolve_voice,
};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ServerConfig;

/// One synthesizer per supported provider.
///
/// Built once at startup and shared read-only by every request. Tests build
/// it with [`SpeechProviders::new`] to swap in fakes.
#[derive(Clone)]
pub struct SpeechProviders {
    deepgram: Arc<dyn SpeechSynthesizer>,
    whisper: Arc<dyn SpeechSynthesizer>,
    eleven_labs: Arc<dyn SpeechSynthesizer>,
    defaults: DefaultVoices,
}

impl SpeechProviders {
    pub fn new(
        deepgram: Arc<dyn SpeechSynthesizer>,
        whisper: Arc<dyn SpeechSynthesizer>,
        eleven_labs: Arc<dyn SpeechSynthesizer>,
        defaults: DefaultVoices,
    ) -> Self {
        Self {
            deepgram,
            whisper,
            eleven_labs,
            defaults,
        }
    }

    /// Create the real provider clients from server configuration
    pub fn from_config(config: &ServerConfig) -> TTSResult<Self> {
        let deepgram = DeepgramTTS::new(DeepgramConfig {
            domain: config.deepgram_domain.clone(),
            api_key: config.deepgram_api_key.clone().unwrap_or_default(),
        })?;
        let whisper = OpenAITTS::new(OpenAIConfig {
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
        })?;
        let eleven_labs = ElevenLabsTTS::new(ElevenLabsConfig {
            base_url: config.elevenlabs_base_url.clone(),
            api_key: config.elevenlabs_api_key.clone(),
        })?;

        Ok(Self::new(
            Arc::new(deepgram),
            Arc::new(whisper),
            Arc::new(eleven_labs),
            config.default_voices.clone(),
        ))
    }

    /// Get the synthesizer bound to a provider
    pub fn get(&self, provider: TTSProviderKind) -> &Arc<dyn SpeechSynthesizer> {
        match provider {
            TTSProviderKind::Deepgram => &self.deepgram,
            TTSProviderKind::Whisper => &self.whisper,
            TTSProviderKind::ElevenLabs => &self.eleven_labs,
        }
    }

    pub fn defaults(&self) -> &DefaultVoices {
        &self.defaults
    }

    /// Resolve `voice_id` and run synthesis on the matching provider
    pub async fn synthesize(&self, text: &str, voice_id: &str) -> TTSResult<Option<AudioPayload>> {
        let binding = resolve_voice(voice_id, &self.defaults)?;
        let provider = self.get(binding.provider);

        info!(
            "Dispatching speech to {} with voice {}",
            provider.name(),
            binding.voice
        );

        let audio = provider.synthesize(text, &binding.voice).await?;
        if let Some(payload) = &audio {
            debug!(
                "{} returned {} audio",
                provider.name(),
                if payload.is_stream() { "streamed" } else { "buffered" }
            );
        }

        Ok(audio)
    }
}
