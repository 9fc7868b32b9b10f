use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

impl OpenAIMessage {
    pub fn user(content: &str) -> Self {
        OpenAIMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChoiceMessage {
    //null when the model refuses or only calls tools
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// `{"error": {"message": "..."}}`
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}
