use clap::Parser;
use grade_explainer::{console_handler, init_tracing, load_dotenv, log_start};
use tokio::io::BufReader;

/// Explains anything twice: for Grade 2 and for Grade 5.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Chat model, overrides OPENAI_MODEL.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    //stdout belongs to the conversation
    init_tracing("warn");
    load_dotenv();
    log_start("grade-compare");

    let args = Args::parse();
    //no key: exit before any model call
    let handler = match console_handler(|name| std::env::var(name).ok(), args.model) {
        Ok(handler) => handler,
        Err(msg) => {
            println!("{}", msg);
            std::process::exit(1);
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    repl::run(&handler, input, &mut out).await?;

    Ok(())
}
