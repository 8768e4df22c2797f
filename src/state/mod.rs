use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::tts::{SpeechProviders, TTSResult};

/// Application state that can be shared across handlers
///
/// Read-only after startup: requests never write to it, so no locking is
/// needed.
#[derive(Clone)]
pub struct AppState {
    /// Provider clients and alias defaults
    pub providers: SpeechProviders,
}

impl AppState {
    /// Build state with real provider clients
    pub fn new(config: &ServerConfig) -> TTSResult<Arc<Self>> {
        let providers = SpeechProviders::from_config(config)?;
        Ok(Self::with_providers(providers))
    }

    /// Build state around an existing provider set
    pub fn with_providers(providers: SpeechProviders) -> Arc<Self> {
        Arc::new(Self { providers })
    }
}
