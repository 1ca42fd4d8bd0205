use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

impl ChatCompletionResponse {
    #[must_use]
    pub fn single(content: String) -> Self {
        Self {
            choices: vec![ChatChoice {
                message: ChatMessage { content },
            }],
        }
    }
}
