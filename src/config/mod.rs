//! Configuration module for the speech server
//!
//! Configuration comes from environment variables (with `.env` support) and,
//! optionally, a YAML file. When both are present the YAML value wins.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use aura_speak::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//!
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::core::tts::{
    DEEPGRAM_TTS_URL, DefaultVoices, ELEVENLABS_TTS_URL, OPENAI_TTS_URL,
};

mod env;
mod merge;
mod validation;
mod yaml;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
///
/// Holds the listen address, the provider endpoints and credentials, and the
/// compound voice identifiers that the `deepgram`, `whisper` and `elevenLabs`
/// aliases stand for.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Deepgram
    pub deepgram_domain: String,
    pub deepgram_api_key: Option<String>,

    // OpenAI
    pub openai_base_url: String,
    pub openai_api_key: Option<String>,

    // ElevenLabs
    pub elevenlabs_base_url: String,
    pub elevenlabs_api_key: Option<String>,

    /// Targets of the logical voice aliases
    pub default_voices: DefaultVoices,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            deepgram_domain: DEEPGRAM_TTS_URL.to_string(),
            deepgram_api_key: None,
            openai_base_url: OPENAI_TTS_URL.to_string(),
            openai_api_key: None,
            elevenlabs_base_url: ELEVENLABS_TTS_URL.to_string(),
            elevenlabs_api_key: None,
            default_voices: DefaultVoices::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable fallbacks
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables
    /// 3. Default values
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, a numeric value
    /// is malformed, or a provider URL is invalid.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate_provider_urls(&config)?;

        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
