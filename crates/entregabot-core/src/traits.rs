//! Capability traits.

use async_trait::async_trait;

use crate::error::Result;

/// A text-generation backend.
///
/// Takes the user's question plus the retrieved evidence and returns a
/// short Portuguese answer grounded only in that evidence. Implementations
/// are resolved once at startup; a backend that is not configured simply
/// never enters the chain. A `generate` error means "this provider failed
/// for this request"; the caller advances to the next fallback.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Stable provider name for logging.
    fn name(&self) -> &str;

    /// Produce an answer to `question` grounded in `evidence`.
    async fn generate(&self, question: &str, evidence: &str) -> Result<String>;
}
