//! Local text-generation runtime adapter (Ollama-style API).
//!
//! Last resort in the chain: no credential, but it needs a heavyweight
//! runtime running next to the service, and not every deployment installs
//! one. Availability is resolved by probing the runtime once at startup;
//! an unreachable runtime is an expected operational condition, logged as
//! a warning and reported as absent.

use async_trait::async_trait;
use serde_json::{Value, json};

use entregabot_core::Generator;
use entregabot_core::config::ProvidersConfig;
use entregabot_core::error::{EntregaError, Result};

use crate::{LOCAL_MAX_OUTPUT_TOKENS, SYSTEM_INSTRUCTION};

const PROBE_TIMEOUT_SECS: u64 = 2;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Local single-pass generation over an Ollama-compatible `/api/generate`.
pub struct LocalGenerator {
    host: String,
    model: String,
    client: reqwest::Client,
}

impl LocalGenerator {
    /// Whether a local model was configured (env `OLLAMA_MODEL` or the
    /// `providers.local_model` config field).
    pub fn is_configured(config: &ProvidersConfig) -> bool {
        std::env::var("OLLAMA_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .is_some()
            || !config.local_model.is_empty()
    }

    /// Resolve the adapter by probing the runtime. `None` when the model
    /// is unconfigured or the runtime does not answer.
    pub async fn connect(config: &ProvidersConfig) -> Option<Self> {
        let model = std::env::var("OLLAMA_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| config.local_model.clone());
        if model.is_empty() {
            return None;
        }
        let host = std::env::var("OLLAMA_HOST")
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| config.local_host.clone());
        let host = host.trim_end_matches('/').to_string();

        let probe = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .ok()?;
        probe
            .get(format!("{host}/api/tags"))
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            host,
            model,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for LocalGenerator {
    fn name(&self) -> &str {
        "local"
    }

    async fn generate(&self, question: &str, evidence: &str) -> Result<String> {
        let prompt = format!(
            "{SYSTEM_INSTRUCTION}\n\nEvidência: {evidence}\nPergunta: {question}\nResposta:"
        );
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": 0,
                "num_predict": LOCAL_MAX_OUTPUT_TOKENS,
            },
        });

        let url = format!("{}/api/generate", self.host);
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EntregaError::Http(format!("local runtime connection failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(EntregaError::Provider(format!(
                "local runtime error {status}: {text}"
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| EntregaError::Http(e.to_string()))?;
        let content = json["response"]
            .as_str()
            .ok_or_else(|| EntregaError::Provider("local runtime response had no text".into()))?;
        Ok(content.trim().to_string())
    }
}
