//! # EntregaBot Retrieval
//!
//! Lexical retrieval over the FAQ corpus: a TF-IDF vector space fitted
//! once over `question + answer` per document, queried by cosine
//! similarity. Fully deterministic: the same query against the same index
//! always produces the same ranking.
//!
//! Two lifecycles share the same `retrieve` contract:
//! - [`KnowledgeIndex::fit`] builds the space in-process at startup;
//! - [`KnowledgeIndex::load_snapshot`] deserializes a bundle produced by
//!   the `entregabot-ingest` binary, validating its dimensions fail-fast.

pub mod index;
pub mod snapshot;
pub mod tfidf;

pub use index::KnowledgeIndex;
pub use snapshot::IndexSnapshot;
pub use tfidf::TfidfVectorizer;
