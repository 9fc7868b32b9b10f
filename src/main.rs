use std::sync::Arc;

use clap::Parser;
use grade_explainer::{init_tracing, load_dotenv, log_start, SERVICE_DEFAULT_MODEL};
use openai_api::{OpenAIConfig, OpenAIHandler};
use text_completion::CompletionHandler;
use tracing::*;

/// Grade-Specific GPT Responses API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
    /// Chat model, overrides OPENAI_MODEL.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("grade_explainer=info,web=info,openai_api=info,text_completion=info,tower_http=info");
    load_dotenv();
    log_start("grade-explainer");

    let args = Args::parse();

    //a missing key is reported on each /explain/ call, not at startup
    let handler: Option<Arc<dyn CompletionHandler>> =
        match OpenAIConfig::from_env(args.model, SERVICE_DEFAULT_MODEL) {
            Ok(config) => {
                info!("Using model={} base_url={}", config.model, config.base_url);
                let handler: Arc<dyn CompletionHandler> = Arc::new(OpenAIHandler::new(config));
                Some(handler)
            }
            Err(e) => {
                warn!("{}, /explain/ will answer 500 until it is configured", e);
                None
            }
        };

    let addr = format!("{}:{}", args.host, args.port);
    web::init(&addr, handler).await?;

    Ok(())
}
