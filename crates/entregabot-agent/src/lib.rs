//! # EntregaBot Agent
//!
//! The chat orchestrator: routes a message to an intent, answers order /
//! policy / user intents from templates and static tables, and answers
//! informational intents by retrieval plus a provider fallback chain.
//!
//! Everything the engine holds is resolved once at startup and read-only
//! afterwards, so concurrent requests share it behind an `Arc` with no
//! locking.

pub mod intent;

use entregabot_core::config::EntregaConfig;
use entregabot_core::types::ChatResponse;
use entregabot_kb::PolicyTable;
use entregabot_providers::ResolvedGenerators;
use entregabot_retrieval::KnowledgeIndex;

pub use intent::{Intent, detect_intent};

const ORDER_PROMPT: &str = "Para consultar ou agir em um pedido, compartilhe o código (PED-123).";
const ORDER_ADVISORY: &str = "Intent pedido detectada; aguardando ID.";
const USER_PROMPT: &str = "Para consultar um usuário, informe o código (ex.: USR-001).";
const USER_ADVISORY: &str = "Intent usuario detectada; aguardando ID.";
const POLICY_ADVISORY: &str = "Intent política detectada; usando política estática.";
const POLICY_FALLBACK: &str =
    "Consigo ajudar com políticas de reembolso, atraso, cancelamento e alergia.";
const POLICY_SOURCE: &str = "policies.json";
const NOT_FOUND: &str = "Não encontrei nada no KB. Pode reformular ou dar mais detalhes?";
const NO_MODEL_ADVISORY: &str = "Nenhum modelo configurado; usando resposta direta do KB.";
const LOCAL_FAILED_ADVISORY: &str = "Modelo local configurado, mas o runtime não carregou.";

/// The chat-handling engine.
pub struct ChatEngine {
    /// Prebuilt snapshot index; preferred when present.
    snapshot_index: Option<KnowledgeIndex>,
    /// Index fitted from kb.json at startup.
    live_index: Option<KnowledgeIndex>,
    policies: PolicyTable,
    generators: ResolvedGenerators,
    top_k: usize,
}

impl ChatEngine {
    /// Build the engine from configuration: load static data, fit or load
    /// the retrieval indexes, and resolve the provider chain.
    ///
    /// Every failure here degrades instead of aborting: a corrupt
    /// snapshot falls back to the live index and a missing corpus leaves
    /// retrieval empty, so the service always starts and `/chat` always
    /// answers.
    pub async fn new(config: &EntregaConfig) -> Self {
        let live_index = match entregabot_kb::load_corpus(&config.data.kb_path()) {
            Ok(docs) => {
                tracing::info!("Corpus loaded: {} entries", docs.len());
                Some(KnowledgeIndex::fit(docs))
            }
            Err(e) => {
                tracing::error!("Failed to load corpus: {e}");
                None
            }
        };

        let snapshot_path = config.data.index_path();
        let snapshot_index = if snapshot_path.exists() {
            match KnowledgeIndex::load_snapshot(&snapshot_path) {
                Ok(index) => {
                    tracing::info!(
                        "Index snapshot loaded from {} ({} docs)",
                        snapshot_path.display(),
                        index.docs().len()
                    );
                    Some(index)
                }
                Err(e) => {
                    tracing::error!("Index snapshot rejected, falling back to live index: {e}");
                    None
                }
            }
        } else {
            None
        };

        if snapshot_index.is_none() && live_index.is_none() {
            tracing::error!("No retrieval index available; running degraded");
        }

        let policies = match PolicyTable::load(&config.data.policies_path()) {
            Ok(table) => {
                tracing::info!("Policy table loaded: {} topics", table.len());
                table
            }
            Err(e) => {
                tracing::warn!("Failed to load policy table: {e}");
                PolicyTable::default()
            }
        };

        let generators = entregabot_providers::resolve(&config.providers).await;

        Self {
            snapshot_index,
            live_index,
            policies,
            generators,
            top_k: config.data.top_k,
        }
    }

    /// Assemble an engine from already-built parts. This is the seam the
    /// tests use to inject small corpora and mock generators.
    pub fn from_parts(
        live_index: Option<KnowledgeIndex>,
        snapshot_index: Option<KnowledgeIndex>,
        policies: PolicyTable,
        generators: ResolvedGenerators,
        top_k: usize,
    ) -> Self {
        Self {
            snapshot_index,
            live_index,
            policies,
            generators,
            top_k,
        }
    }

    /// The active retrieval index: snapshot when present, else live.
    fn index(&self) -> Option<&KnowledgeIndex> {
        self.snapshot_index.as_ref().or(self.live_index.as_ref())
    }

    /// Handle one chat message. Never fails: every recoverable problem is
    /// absorbed into the response's advisory field.
    pub async fn handle_chat(&self, message: &str) -> ChatResponse {
        match detect_intent(message) {
            Intent::Order => ChatResponse::direct(
                ORDER_PROMPT,
                None,
                Some(ORDER_ADVISORY.to_string()),
            ),
            Intent::User => ChatResponse::direct(
                USER_PROMPT,
                None,
                Some(USER_ADVISORY.to_string()),
            ),
            Intent::Policy => self.answer_policy(),
            Intent::Informational => self.answer_informational(message).await,
        }
    }

    fn answer_policy(&self) -> ChatResponse {
        let steps = self
            .policies
            .get("reembolso")
            .and_then(|p| p.steps.clone())
            .unwrap_or_else(|| POLICY_FALLBACK.to_string());
        ChatResponse::direct(
            format!("Política exemplo (reembolso): {steps}"),
            Some(POLICY_SOURCE.to_string()),
            Some(POLICY_ADVISORY.to_string()),
        )
    }

    async fn answer_informational(&self, message: &str) -> ChatResponse {
        let results = match self.index() {
            Some(index) => index.retrieve(message, self.top_k),
            None => Vec::new(),
        };
        let Some(top) = results.first() else {
            return ChatResponse::direct(NOT_FOUND, None, None);
        };

        // Walk the provider chain in priority order; any failure advances
        // to the next backend, never to the caller.
        for generator in &self.generators.chain {
            match generator.generate(message, &top.answer).await {
                Ok(answer) => {
                    tracing::debug!("Answer generated by {}", generator.name());
                    return ChatResponse::generated(answer, top.question.clone());
                }
                Err(e) => {
                    tracing::warn!("Provider {} failed, trying next: {e}", generator.name());
                }
            }
        }

        // No provider available (or all failed): the raw KB answer is the
        // guaranteed fallback. The advisory distinguishes "nothing was
        // ever configured" from "the local runtime never loaded".
        let advisory = if self.generators.chain.is_empty() {
            if self.generators.local_configured && !self.generators.local_loaded {
                Some(LOCAL_FAILED_ADVISORY.to_string())
            } else {
                Some(NO_MODEL_ADVISORY.to_string())
            }
        } else {
            None
        };
        ChatResponse::direct(top.answer.clone(), Some(top.question.clone()), advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use entregabot_core::error::EntregaError;
    use entregabot_core::types::KbEntry;
    use entregabot_core::{Generator, Result};

    /// A generator that always succeeds with a fixed answer.
    struct FixedGenerator(&'static str);

    #[async_trait]
    impl Generator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }
        async fn generate(&self, _question: &str, _evidence: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// A generator that always fails at call time.
    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }
        async fn generate(&self, _question: &str, _evidence: &str) -> Result<String> {
            Err(EntregaError::Provider("boom".into()))
        }
    }

    fn sample_index() -> KnowledgeIndex {
        KnowledgeIndex::fit(vec![
            KbEntry {
                question: "Quais formas de pagamento são aceitas?".into(),
                answer: "Aceitamos cartão de crédito, débito, Pix e vale-refeição.".into(),
            },
            KbEntry {
                question: "Posso agendar uma entrega?".into(),
                answer: "Sim, é possível agendar entregas com antecedência.".into(),
            },
        ])
    }

    fn engine_with(generators: ResolvedGenerators) -> ChatEngine {
        ChatEngine::from_parts(
            Some(sample_index()),
            None,
            PolicyTable::default(),
            generators,
            3,
        )
    }

    #[tokio::test]
    async fn test_order_intent_returns_template() {
        let engine = engine_with(ResolvedGenerators::none());
        let resp = engine.handle_chat("Meu pedido atrasou").await;
        assert!(!resp.generated_by_model);
        assert!(resp.source.is_none());
        assert!(resp.answer.contains("PED-123"));
        assert!(resp.advisory.as_deref().unwrap().contains("pedido"));
    }

    #[tokio::test]
    async fn test_user_intent_returns_template() {
        let engine = engine_with(ResolvedGenerators::none());
        let resp = engine.handle_chat("dados do cliente, por favor").await;
        assert!(!resp.generated_by_model);
        assert!(resp.answer.contains("USR-001"));
    }

    #[tokio::test]
    async fn test_policy_intent_uses_policy_table() {
        let engine = engine_with(ResolvedGenerators::none());
        let resp = engine.handle_chat("como funciona o reembolso?").await;
        assert!(!resp.generated_by_model);
        assert_eq!(resp.source.as_deref(), Some("policies.json"));
        // empty table → generic fallback sentence
        assert!(resp.answer.contains("políticas"));
    }

    #[tokio::test]
    async fn test_faq_without_providers_returns_verbatim_answer() {
        let engine = engine_with(ResolvedGenerators::none());
        let resp = engine
            .handle_chat("Quais formas de pagamento são aceitas?")
            .await;
        assert!(!resp.generated_by_model);
        assert_eq!(
            resp.answer,
            "Aceitamos cartão de crédito, débito, Pix e vale-refeição."
        );
        assert_eq!(
            resp.source.as_deref(),
            Some("Quais formas de pagamento são aceitas?")
        );
        assert_eq!(
            resp.advisory.as_deref(),
            Some("Nenhum modelo configurado; usando resposta direta do KB.")
        );
    }

    #[tokio::test]
    async fn test_local_configured_but_not_loaded_advisory() {
        let generators = ResolvedGenerators {
            chain: Vec::new(),
            local_configured: true,
            local_loaded: false,
        };
        let engine = engine_with(generators);
        let resp = engine.handle_chat("formas de pagamento").await;
        assert_eq!(
            resp.advisory.as_deref(),
            Some("Modelo local configurado, mas o runtime não carregou.")
        );
    }

    #[tokio::test]
    async fn test_successful_provider_generates_answer() {
        let generators = ResolvedGenerators {
            chain: vec![Box::new(FixedGenerator("Aceitamos Pix e cartão."))],
            local_configured: false,
            local_loaded: false,
        };
        let engine = engine_with(generators);
        let resp = engine.handle_chat("formas de pagamento").await;
        assert!(resp.generated_by_model);
        assert_eq!(resp.answer, "Aceitamos Pix e cartão.");
        assert_eq!(
            resp.source.as_deref(),
            Some("Quais formas de pagamento são aceitas?")
        );
        assert!(resp.advisory.is_none());
    }

    #[tokio::test]
    async fn test_failing_provider_falls_through_to_next() {
        let generators = ResolvedGenerators {
            chain: vec![
                Box::new(FailingGenerator),
                Box::new(FixedGenerator("resposta do segundo")),
            ],
            local_configured: false,
            local_loaded: false,
        };
        let engine = engine_with(generators);
        let resp = engine.handle_chat("formas de pagamento").await;
        assert!(resp.generated_by_model);
        assert_eq!(resp.answer, "resposta do segundo");
    }

    #[tokio::test]
    async fn test_all_providers_failing_falls_back_to_kb_without_advisory() {
        let generators = ResolvedGenerators {
            chain: vec![Box::new(FailingGenerator)],
            local_configured: false,
            local_loaded: false,
        };
        let engine = engine_with(generators);
        let resp = engine.handle_chat("formas de pagamento").await;
        assert!(!resp.generated_by_model);
        assert_eq!(
            resp.answer,
            "Aceitamos cartão de crédito, débito, Pix e vale-refeição."
        );
        // providers existed, they just failed: no advisory
        assert!(resp.advisory.is_none());
    }

    #[tokio::test]
    async fn test_no_index_degrades_to_not_found() {
        let engine = ChatEngine::from_parts(
            None,
            None,
            PolicyTable::default(),
            ResolvedGenerators::none(),
            3,
        );
        let resp = engine.handle_chat("qualquer coisa").await;
        assert!(!resp.generated_by_model);
        assert!(resp.source.is_none());
        assert!(resp.answer.contains("reformular"));
    }

    #[tokio::test]
    async fn test_snapshot_index_preferred_over_live() {
        let snapshot_only = KnowledgeIndex::fit(vec![KbEntry {
            question: "Existe retirada no balcão?".into(),
            answer: "Sim, selecione Retirada ao fechar a compra.".into(),
        }]);
        let engine = ChatEngine::from_parts(
            Some(sample_index()),
            Some(snapshot_only),
            PolicyTable::default(),
            ResolvedGenerators::none(),
            3,
        );
        let resp = engine.handle_chat("retirada no balcão").await;
        assert_eq!(resp.source.as_deref(), Some("Existe retirada no balcão?"));
    }
}
