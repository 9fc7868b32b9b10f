//! Process setup shared by the `grade-explainer` service and the
//! `grade-compare` console.

use openai_api::{ConfigError, OpenAIConfig, OpenAIHandler};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Model used by the HTTP service unless `--model` or `OPENAI_MODEL` says otherwise.
pub const SERVICE_DEFAULT_MODEL: &str = "gpt-4o";
/// Model used by the console unless `--model` or `OPENAI_MODEL` says otherwise.
pub const CONSOLE_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const CONSOLE_MISSING_KEY: &str = "Please set OPENAI_API_KEY in your .env file";

/// Builds the console's handler, or the message to exit with when no key is set.
pub fn console_handler(
    lookup: impl Fn(&str) -> Option<String>,
    model: Option<String>,
) -> Result<OpenAIHandler, &'static str> {
    let config = OpenAIConfig::from_lookup(lookup, model, CONSOLE_DEFAULT_MODEL).map_err(
        |e| match e {
            ConfigError::MissingApiKey => CONSOLE_MISSING_KEY,
        },
    )?;
    debug!("Using model={}", config.model);
    Ok(OpenAIHandler::new(config))
}

/// Logs to stderr, filtered by `RUST_LOG` or `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn log_start(bin: &str) {
    info!(
        "Starting {}... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        bin,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );
}

/// Loads `.env` from the working directory or its parents, if there is one.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded {}", path.display()),
        Err(e) if e.not_found() => trace!("No .env file"),
        Err(e) => warn!("Could not load .env: {}", e),
    }
}
