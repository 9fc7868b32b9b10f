use std::env;
use thiserror::Error;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "OPENAI_MODEL";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAIConfig {
    /// Reads the key, model and base url from the environment.
    ///
    /// `model` wins over `OPENAI_MODEL`, which wins over `default_model`.
    /// An empty `OPENAI_API_KEY` counts as missing.
    pub fn from_env(model: Option<String>, default_model: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), model, default_model)
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        model: Option<String>,
        default_model: &str,
    ) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let model = model
            .or_else(|| lookup(MODEL_ENV))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_model.to_string());
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(OpenAIConfig {
            api_key,
            model,
            base_url,
        })
    }
}
