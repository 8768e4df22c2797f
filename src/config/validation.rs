use url::Url;

use super::ServerConfig;

/// Validate that a provider base URL is an absolute http(s) URL
pub fn validate_base_url(name: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = Url::parse(value).map_err(|e| format!("Invalid {name} URL '{value}': {e}"))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("Invalid {name} URL '{value}': unsupported scheme '{other}'").into()),
    }
}

/// Validate every provider endpoint in the configuration
pub fn validate_provider_urls(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_base_url("deepgram", &config.deepgram_domain)?;
    validate_base_url("openai", &config.openai_base_url)?;
    validate_base_url("elevenlabs", &config.elevenlabs_base_url)?;
    Ok(())
}
