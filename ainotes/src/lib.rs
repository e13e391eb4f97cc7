use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Assistant,
    User,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Body of an OpenAI-compatible `/chat/completions` request.
#[derive(Builder, Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct GenerationRequest {
    #[builder(into)]
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerationChoice {
    pub message: Message,
}

/// Body of an OpenAI-compatible `/chat/completions` response. Only the
/// fields this project reads are modeled.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerationResponse {
    pub choices: Vec<GenerationChoice>,
}

impl GenerationResponse {
    /// Content of the first choice, if the backend returned any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_skips_missing_temperature() {
        let request = GenerationRequest::builder()
            .model("llama3-70b-8192")
            .messages(vec![Message::user("hi")])
            .build();
        let value = serde_json::to_value(&request).expect("request should serialize");
        assert!(value.get("temperature").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn generation_response_takes_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let response: GenerationResponse =
            serde_json::from_str(body).expect("response should deserialize");
        assert_eq!(response.into_content().as_deref(), Some("first"));
    }
}
