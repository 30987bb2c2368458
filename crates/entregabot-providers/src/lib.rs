//! # EntregaBot Providers
//!
//! Generation-backend adapters and their startup resolution. Three
//! interchangeable backends implement the `Generator` trait:
//!
//! - OpenAI chat completions (`openai`)
//! - Gemini generateContent (`gemini`)
//! - A local Ollama-style runtime (`local`)
//!
//! Availability is resolved once per process: a backend with no credential
//! (or an unreachable local runtime) is simply absent from the chain, never
//! an error. The orchestrator walks the chain in priority order; adding a
//! backend means appending an adapter here, not touching orchestration.

pub mod gemini;
pub mod local;
pub mod openai;

use entregabot_core::Generator;
use entregabot_core::config::ProvidersConfig;

pub use gemini::GeminiGenerator;
pub use local::LocalGenerator;
pub use openai::OpenAiGenerator;

/// Shared instruction for every backend: Portuguese, at most two short
/// sentences, grounded only in the supplied evidence.
pub(crate) const SYSTEM_INSTRUCTION: &str = "Você é um atendente de suporte de entregas. \
    Responda em português, em até 2 frases curtas, usando apenas a evidência fornecida. \
    Se faltar informação, peça dados adicionais.";

/// Remote providers cap output around 180 tokens; the local runtime is
/// cheaper to cut shorter.
pub(crate) const MAX_OUTPUT_TOKENS: u32 = 180;
pub(crate) const LOCAL_MAX_OUTPUT_TOKENS: u32 = 130;

/// The resolved generation chain, in fallback priority order, plus the
/// facts the orchestrator needs for its degraded-mode advisories.
pub struct ResolvedGenerators {
    /// Available backends, tried first to last.
    pub chain: Vec<Box<dyn Generator>>,
    /// Whether a local model was configured at all.
    pub local_configured: bool,
    /// Whether the configured local runtime actually answered the probe.
    pub local_loaded: bool,
}

impl ResolvedGenerators {
    /// An empty chain (no backend configured).
    pub fn none() -> Self {
        Self {
            chain: Vec::new(),
            local_configured: false,
            local_loaded: false,
        }
    }
}

/// Resolve all backends once at startup, in priority order:
/// OpenAI → Gemini → local runtime.
pub async fn resolve(config: &ProvidersConfig) -> ResolvedGenerators {
    let mut chain: Vec<Box<dyn Generator>> = Vec::new();

    match OpenAiGenerator::from_env(config) {
        Some(g) => {
            tracing::info!("OpenAI enabled model={}", g.model());
            chain.push(Box::new(g));
        }
        None => tracing::info!("OpenAI disabled (no OPENAI_API_KEY)"),
    }

    match GeminiGenerator::from_env(config) {
        Some(g) => {
            tracing::info!("Gemini enabled model={}", g.model());
            chain.push(Box::new(g));
        }
        None => tracing::info!("Gemini disabled (no GEMINI_API_KEY/GOOGLE_API_KEY)"),
    }

    let local_configured = LocalGenerator::is_configured(config);
    let mut local_loaded = false;
    if local_configured {
        match LocalGenerator::connect(config).await {
            Some(g) => {
                tracing::info!("Local runtime enabled model={}", g.model());
                local_loaded = true;
                chain.push(Box::new(g));
            }
            None => {
                tracing::warn!(
                    "Local model configured but the runtime at {} did not respond; \
                     continuing without it",
                    config.local_host
                );
            }
        }
    }

    if chain.is_empty() {
        tracing::info!("No generation provider available; KB answers will be returned verbatim");
    }

    ResolvedGenerators {
        chain,
        local_configured,
        local_loaded,
    }
}
