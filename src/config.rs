//! Startup configuration.

use std::env;

use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable holding the OpenWeatherMap credential.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Read-only settings resolved once before the terminal is taken over.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Error)]
#[error("no API key found: set OPENWEATHER_API_KEY or pass --api-key")]
pub struct MissingApiKey;

impl Config {
    /// Resolve the credential: the flag wins, the environment backs it
    /// up, blank values count as absent.
    pub fn resolve(api_key_flag: Option<String>) -> Result<Self, MissingApiKey> {
        Self::resolve_from(api_key_flag, env::var(API_KEY_VAR).ok())
    }

    fn resolve_from(
        flag: Option<String>,
        env_value: Option<String>,
    ) -> Result<Self, MissingApiKey> {
        let api_key = flag
            .or(env_value)
            .filter(|key| !key.trim().is_empty())
            .ok_or(MissingApiKey)?;
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }
}
