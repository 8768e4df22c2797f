use std::env;

use super::yaml::YamlConfig;
use super::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use crate::core::tts::{DEEPGRAM_TTS_URL, DefaultVoices, ELEVENLABS_TTS_URL, OPENAI_TTS_URL};

/// Merge YAML configuration with environment variables
///
/// Priority order (highest to lowest):
/// 1. YAML configuration values
/// 2. Environment variables
/// 3. Default values
///
/// # Arguments
/// * `yaml_config` - Optional YAML configuration to use as overrides
pub fn merge_config(
    yaml_config: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let yaml = yaml_config.unwrap_or_default();

    // Helper macro to get value with priority: YAML > ENV > Default
    macro_rules! get_value {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            $yaml_value
                .or_else(|| env::var($env_var).ok())
                .unwrap_or_else(|| $default.to_string())
        };
    }

    // Helper macro for optional values: YAML > ENV
    macro_rules! get_optional {
        ($env_var:expr, $yaml_value:expr) => {
            $yaml_value.or_else(|| env::var($env_var).ok())
        };
    }

    let host = get_value!(
        "HOST",
        yaml.server.as_ref().and_then(|s| s.host.clone()),
        DEFAULT_HOST
    );

    let port = if let Some(yaml_port) = yaml.server.as_ref().and_then(|s| s.port) {
        yaml_port
    } else if let Ok(port_str) = env::var("PORT") {
        port_str
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT environment variable: {e}"))?
    } else {
        DEFAULT_PORT
    };

    let providers = yaml.providers.unwrap_or_default();
    let deepgram = providers.deepgram.unwrap_or_default();
    let openai = providers.openai.unwrap_or_default();
    let elevenlabs = providers.elevenlabs.unwrap_or_default();

    let deepgram_domain = get_value!("DEEPGRAM_STT_DOMAIN", deepgram.domain, DEEPGRAM_TTS_URL);
    let deepgram_api_key = get_optional!("DEEPGRAM_API_KEY", deepgram.api_key);

    let openai_base_url = get_value!("OPENAI_BASE_URL", openai.base_url, OPENAI_TTS_URL);
    let openai_api_key = get_optional!("OPENAI_API_KEY", openai.api_key);

    let elevenlabs_base_url = get_value!(
        "ELEVENLABS_BASE_URL",
        elevenlabs.base_url,
        ELEVENLABS_TTS_URL
    );
    let elevenlabs_api_key = get_optional!("ELEVENLABS_API_KEY", elevenlabs.api_key);

    let voices = yaml.voices.unwrap_or_default();
    let builtin = DefaultVoices::default();
    let default_voices = DefaultVoices {
        deepgram: get_value!("DEEPGRAM_DEFAULT_VOICE", voices.deepgram, builtin.deepgram),
        whisper: get_value!("WHISPER_DEFAULT_VOICE", voices.whisper, builtin.whisper),
        eleven_labs: get_value!(
            "ELEVENLABS_DEFAULT_VOICE",
            voices.eleven_labs,
            builtin.eleven_labs
        ),
    };

    Ok(ServerConfig {
        host,
        port,
        deepgram_domain,
        deepgram_api_key,
        openai_base_url,
        openai_api_key,
        elevenlabs_base_url,
        elevenlabs_api_key,
        default_voices,
    })
}
