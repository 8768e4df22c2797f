use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Anything left out
/// falls back to the environment and then to built-in defaults.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3000
///
/// providers:
///   deepgram:
///     domain: "https://api.deepgram.com"
///     api_key: "your-deepgram-key"
///   openai:
///     base_url: "https://api.openai.com/v1"
///     api_key: "your-openai-key"
///   elevenlabs:
///     base_url: "https://api.elevenlabs.io"
///     api_key: "your-elevenlabs-key"
///
/// voices:
///   deepgram: "aura-asteria-en"
///   whisper: "whisper-alloy"
///   eleven_labs: "elevenLabs-Rachel"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub providers: Option<ProvidersYaml>,
    pub voices: Option<VoicesYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Provider endpoints and keys from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersYaml {
    pub deepgram: Option<DeepgramYaml>,
    pub openai: Option<ProviderEndpointYaml>,
    pub elevenlabs: Option<ProviderEndpointYaml>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeepgramYaml {
    pub domain: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProviderEndpointYaml {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Alias targets from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VoicesYaml {
    pub deepgram: Option<String>,
    pub whisper: Option<String>,
    pub eleven_labs: Option<String>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}
