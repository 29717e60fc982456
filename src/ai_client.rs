use crate::config::Config;
use crate::errors::AppError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

/// Temperature used when the caller does not specify one.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Client for the language-model completion provider.
///
/// Speaks the OpenAI-compatible chat-completions wire format; base URL,
/// model and key are injected from `Config` so tests can point it at a mock.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.ai_base_url.clone(),
            api_key: config.ai_api_key.clone(),
            model: config.ai_model.clone(),
        }
    }

    /// Sends a system instruction and user prompt to the model and returns
    /// the raw text of the first choice.
    ///
    /// Fails with `AppError::Provider` on network errors, non-success
    /// statuses, or an empty completion body. Never retried here; the route
    /// handler surfaces the failure to the client.
    pub async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, AppError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_instruction},
                {"role": "user", "content": user_prompt},
            ],
            "temperature": temperature.unwrap_or(DEFAULT_TEMPERATURE),
        });

        tracing::info!(
            "Calling AI model {} (prompt: {} chars)",
            self.model,
            user_prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("AI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("AI provider returned error {}: {}", status, error_text);
            return Err(AppError::Provider(format!(
                "AI provider returned status {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Provider(format!("Failed to parse AI provider response: {}", e))
        })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Provider("AI provider returned an empty body".to_string()))?;

        tracing::info!("AI responded with {} chars", text.len());
        Ok(text)
    }
}

/// Extracts a JSON object from raw model output.
///
/// Models often wrap the JSON body in prose or code fences, so the slice
/// runs from the first `{` to the last `}`. Multiple top-level fragments or
/// unbalanced braces inside string values can mis-slice; that edge is
/// accepted and covered by tests rather than guarded against.
pub fn parse_json_response<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let start = raw.find('{');
    let end = raw.rfind('}');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(AppError::Parse(
                "AI did not return valid JSON".to_string(),
            ))
        }
    };

    serde_json::from_str(&raw[start..=end])
        .map_err(|_| AppError::Parse("AI did not return valid JSON".to_string()))
}
