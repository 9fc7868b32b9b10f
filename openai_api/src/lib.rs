//! A library for interacting with OpenAI's chat completion API.
//!
//! `OpenAIHandler` implements `text_completion::CompletionHandler`: one prompt
//! in, the first choice's text out. Build it once per process with
//! `OpenAIConfig::from_env` and share it behind an `Arc`.

mod config;
pub use config::{ConfigError, OpenAIConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, MODEL_ENV};
mod models;
pub use models::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, OpenAIMessage};
mod run_completion;
pub use run_completion::run_completion;

use async_trait::async_trait;
use text_completion::{CompletionError, CompletionHandler};

pub struct OpenAIHandler {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    client: reqwest::Client,
}

impl OpenAIHandler {
    pub fn new(config: OpenAIConfig) -> Self {
        OpenAIHandler {
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            //Generally, we don't want to make a new Client for every request!
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionHandler for OpenAIHandler {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        run_completion(self, prompt).await
    }
}
