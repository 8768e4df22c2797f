use super::ServerConfig;
use super::merge::merge_config;
use super::validation::validate_provider_urls;

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number or a provider
    /// URL is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = merge_config(None)?;
        validate_provider_urls(&config)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn cleanup_env_vars() {
        unsafe {
            env::remove_var("PORT");
            env::remove_var("DEEPGRAM_STT_DOMAIN");
            env::remove_var("ELEVENLABS_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_provider_settings() {
        cleanup_env_vars();
        unsafe {
            env::set_var("DEEPGRAM_STT_DOMAIN", "https://dg.internal");
            env::set_var("ELEVENLABS_API_KEY", "el-key");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.deepgram_domain, "https://dg.internal");
        assert_eq!(config.elevenlabs_api_key, Some("el-key".to_string()));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_domain() {
        cleanup_env_vars();
        unsafe {
            env::set_var("DEEPGRAM_STT_DOMAIN", "deepgram without scheme");
        }

        let result = ServerConfig::from_env();
        assert!(result.is_err());

        cleanup_env_vars();
    }
}
