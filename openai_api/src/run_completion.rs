use text_completion::CompletionError;
use tracing::*;

use crate::models::ApiErrorBody;
use crate::{ChatCompletionRequest, ChatCompletionResponse, OpenAIHandler, OpenAIMessage};

pub async fn run_completion(handler: &OpenAIHandler, prompt: &str) -> Result<String, CompletionError> {
    trace!("run_completion model={} prompt={}", handler.model, prompt);

    let url = handler.completions_url();
    let resp = handler
        .client
        .post(&url)
        .bearer_auth(&handler.api_key)
        .json(&ChatCompletionRequest {
            model: handler.model.clone(),
            messages: vec![OpenAIMessage::user(prompt)],
        })
        .send()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;
    trace!("POST {} status={} body={}", url, status, body);

    if !status.is_success() {
        return Err(CompletionError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        });
    }

    let answer = parse_answer(&body)?;
    debug!("run_completion prompt={} result={}", prompt, answer);
    Ok(answer)
}

/// The `error.message` of an OpenAI error body, or the raw body otherwise.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

fn parse_answer(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;
    parsed
        .first_content()
        .map(String::from)
        .ok_or_else(|| CompletionError::MalformedResponse("No message content found".to_string()))
}
