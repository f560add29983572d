use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SummarizerConfig;

use super::SummaryPayload;

const SYSTEM_PROMPT: &str = "You summarize webpage changes for monitoring alerts. \
Respond with a single JSON object and nothing else.";

static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid json extraction regex"));

/// Client for the external summarization backend (OpenAI-compatible chat
/// completions endpoint).
#[derive(Clone)]
pub struct SummaryClient {
    http: Client,
    config: SummarizerConfig,
}

impl SummaryClient {
    pub fn new(http: Client, config: SummarizerConfig) -> Self {
        Self { http, config }
    }

    /// Attempts to obtain a summary from the backend. Makes at most
    /// `1 + max_retries` calls, each under the configured timeout, and
    /// returns `None` on any failure. Never propagates an error.
    pub async fn attempt(&self, prompt: &str) -> Option<SummaryPayload> {
        let api_key = self.config.api_key.as_deref()?;
        let attempts = self.config.max_retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.request_once(api_key, prompt).await {
                Ok(Some(payload)) => {
                    debug!(target: "summary", attempt, "external summary accepted");
                    return Some(payload);
                }
                Ok(None) => {
                    warn!(target: "summary", attempt, "summary response had no usable JSON payload");
                }
                Err(err) => {
                    warn!(target: "summary", attempt, error = %err, "summary request failed");
                }
            }
        }
        None
    }

    async fn request_once(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> anyhow::Result<Option<SummaryPayload>> {
        let request = build_request(self.config.model.clone(), prompt);
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        Ok(content.as_deref().and_then(parse_payload))
    }
}

fn build_request(model: String, prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: SYSTEM_PROMPT.into(),
            },
            ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            },
        ],
        temperature: 0.2,
        top_p: 1.0,
        max_tokens: 400,
        response_format: ResponseFormat {
            r#type: "json_object".into(),
        },
    }
}

/// Pulls the JSON object out of fenced or chatty responses before parsing.
/// Payloads without a usable `summary_change` are rejected.
fn parse_payload(content: &str) -> Option<SummaryPayload> {
    let raw = JSON_OBJECT.find(content)?.as_str();
    match serde_json::from_str::<SummaryPayload>(raw) {
        Ok(payload) if !payload.summary_change.trim().is_empty() => Some(payload),
        Ok(_) => None,
        Err(err) => {
            warn!(target: "summary", error = %err, "summary JSON failed to parse");
            None
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: i32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    r#type: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json_payload() {
        let payload = parse_payload(r#"{"summary_change": "Price went up.", "salient_points": ["$15 -> $19"]}"#)
            .expect("payload");
        assert_eq!(payload.summary_change, "Price went up.");
        assert_eq!(payload.salient_points, vec!["$15 -> $19".to_string()]);
    }

    #[test]
    fn recovers_json_from_fenced_response() {
        let content = "Here is the result:\n```json\n{\"summary_change\": \"Status flipped to approved.\"}\n```\nDone.";
        let payload = parse_payload(content).expect("payload");
        assert_eq!(payload.summary_change, "Status flipped to approved.");
    }

    #[test]
    fn rejects_non_json_and_empty_summaries() {
        assert!(parse_payload("no structure here").is_none());
        assert!(parse_payload(r#"{"summary_change": "   "}"#).is_none());
        assert!(parse_payload(r#"{"salient_points": []}"#).is_none());
    }

    #[test]
    fn disabled_key_short_circuits_attempt() {
        let client = SummaryClient::new(Client::new(), SummarizerConfig::default());
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.attempt("prompt"));
        assert!(result.is_none());
    }
}
