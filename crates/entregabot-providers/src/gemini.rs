//! Gemini generateContent adapter.
//!
//! Single-turn API: instruction, question, and evidence are concatenated
//! into one prompt string.

use async_trait::async_trait;
use serde_json::{Value, json};

use entregabot_core::Generator;
use entregabot_core::config::ProvidersConfig;
use entregabot_core::error::{EntregaError, Result};

use crate::{MAX_OUTPUT_TOKENS, SYSTEM_INSTRUCTION};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Gemini backend. Present only when `GEMINI_API_KEY` (or `GOOGLE_API_KEY`)
/// is set.
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Resolve from the environment; absent when no key is configured.
    pub fn from_env(config: &ProvidersConfig) -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()))?;
        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| config.gemini_model.clone());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            api_key,
            model,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, question: &str, evidence: &str) -> Result<String> {
        let prompt = format!(
            "{SYSTEM_INSTRUCTION}\n\nPergunta: {question}\nEvidência: {evidence}\nResposta:"
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
        });

        let url = format!(
            "{BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EntregaError::Http(format!("gemini connection failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(EntregaError::Provider(format!(
                "gemini API error {status}: {text}"
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| EntregaError::Http(e.to_string()))?;
        let content = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| EntregaError::Provider("gemini response had no text".into()))?;
        Ok(content.trim().to_string())
    }
}
