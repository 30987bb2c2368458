//! OpenAI chat-completions adapter.

use async_trait::async_trait;
use serde_json::{Value, json};

use entregabot_core::Generator;
use entregabot_core::config::ProvidersConfig;
use entregabot_core::error::{EntregaError, Result};

use crate::{MAX_OUTPUT_TOKENS, SYSTEM_INSTRUCTION};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Chat-completions backend. Present only when `OPENAI_API_KEY` is set.
pub struct OpenAiGenerator {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    /// Resolve from the environment. Missing credential or a client that
    /// fails to build yields `None`, never an error.
    pub fn from_env(config: &ProvidersConfig) -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())?;
        let model = std::env::var("OPENAI_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| config.openai_model.clone());
        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            api_key,
            base_url,
            model,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, question: &str, evidence: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "temperature": 0,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                {
                    "role": "user",
                    "content": format!("Pergunta: {question}\nEvidência: {evidence}\nResposta:")
                }
            ],
        });

        let url = format!("{}/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| EntregaError::Http(format!("openai connection failed ({url}): {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(EntregaError::Provider(format!(
                "openai API error {status}: {text}"
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| EntregaError::Http(e.to_string()))?;
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| EntregaError::Provider("openai response had no content".into()))?;
        Ok(content.trim().to_string())
    }
}
