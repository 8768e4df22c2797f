pub mod text;
pub mod tts;

// Re-export commonly used types for convenience
pub use text::normalize_text;
pub use tts::{
    AudioPayload, DefaultVoices, ProviderBinding, SpeechProviders, SpeechSynthesizer, TTSError,
    TTSProviderKind, TTSResult, resolve_voice,
};
