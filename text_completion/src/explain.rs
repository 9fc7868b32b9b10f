use tracing::*;

use crate::{build_prompt, AudienceTier, CompletionError, CompletionHandler};

const SENTINEL_PREFIX: &str = "Oops! Something went wrong:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierResponse {
    pub tier: AudienceTier,
    pub explanation: String,
}

/// Both explanations for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedResult {
    pub question: String,
    pub lower: TierResponse,
    pub upper: TierResponse,
}

/// Asks the handler for one tier's explanation.
pub async fn explain_tier(
    handler: &dyn CompletionHandler,
    question: &str,
    tier: AudienceTier,
) -> Result<TierResponse, CompletionError> {
    trace!("explain_tier tier={} question={}", tier, question);
    let prompt = build_prompt(question, tier);
    let explanation = handler.complete(&prompt).await?;
    Ok(TierResponse { tier, explanation })
}

/// Explains `question` for the lower tier, then the upper tier.
///
/// The two calls are sequential. The first error is returned as is and any
/// explanation already received is dropped.
pub async fn explain_both(
    handler: &dyn CompletionHandler,
    question: &str,
) -> Result<CombinedResult, CompletionError> {
    let lower = explain_tier(handler, question, AudienceTier::Lower).await?;
    let upper = explain_tier(handler, question, AudienceTier::Upper).await?;
    debug!("explain_both done question={}", question);
    Ok(CombinedResult {
        question: question.to_string(),
        lower,
        upper,
    })
}

/// Like `explain_tier`, but an error becomes the explanation text.
pub async fn explain_tier_or_sentinel(
    handler: &dyn CompletionHandler,
    question: &str,
    tier: AudienceTier,
) -> String {
    match explain_tier(handler, question, tier).await {
        Ok(response) => response.explanation,
        Err(e) => {
            warn!("explain_tier_or_sentinel tier={} error={}", tier, e);
            format!("{} {}", SENTINEL_PREFIX, e)
        }
    }
}
