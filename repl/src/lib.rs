//! Interactive console for the grade explainer.
//!
//! Reads one question per line and prints a Grade 2 section then a Grade 5
//! section. Errors from the completion backend are printed in place of the
//! explanation and the loop goes on.

use std::io::{self, Write};
use text_completion::{explain_tier_or_sentinel, AudienceTier, CompletionHandler};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::*;

const WELCOME: &str = "
    🎓 Welcome to the Smart Learning Helper! 🎓
    This tool will help explain things in two different ways:
    1. For Grade 2 students (age 7-8)
    2. For Grade 5 students (age 10-11)
    ";
const PROMPT: &str = "\nWhat would you like to learn about? (or type 'quit' to exit): ";
const GOODBYE: &str = "\nThank you for learning with us! Goodbye! 👋";
const QUIT: &str = "quit";

fn stars() -> String {
    format!("\n{}\n", "*".repeat(50))
}

fn print_header<W: Write>(out: &mut W, tier: AudienceTier) -> io::Result<()> {
    match tier {
        AudienceTier::Lower => {
            writeln!(out, "{}", stars())?;
            writeln!(out, "🌟 Hello Grade 2 Friend! 🌟")?;
            writeln!(out, "{}", stars())
        }
        AudienceTier::Upper => writeln!(out, "\n=== Grade 5 Learning Zone ===\n"),
    }
}

/// Prints both sections for one question, asking for each tier just before
/// its section.
pub async fn explain_question<W: Write>(
    handler: &dyn CompletionHandler,
    question: &str,
    out: &mut W,
) -> io::Result<()> {
    for tier in AudienceTier::ALL {
        writeln!(out, "\n--- {} Explanation ---", tier)?;
        let explanation = explain_tier_or_sentinel(handler, question, tier).await;
        print_header(out, tier)?;
        writeln!(out, "{}", explanation)?;
        out.flush()?;
    }
    Ok(())
}

/// Runs the read loop until `quit` (any case) or end of input.
pub async fn run<R, W>(handler: &dyn CompletionHandler, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let question = match lines.next_line().await? {
            Some(line) => line,
            None => {
                debug!("console input closed");
                break;
            }
        };
        if question.eq_ignore_ascii_case(QUIT) {
            break;
        }

        trace!("console question={}", question);
        explain_question(handler, &question, out).await?;
    }
    writeln!(out, "{}", GOODBYE)?;
    out.flush()
}
