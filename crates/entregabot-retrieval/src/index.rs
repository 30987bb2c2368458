//! Knowledge index: fitted vector space + scored top-k retrieval.

use entregabot_core::types::{KbEntry, ScoredEntry};

use crate::snapshot::IndexSnapshot;
use crate::tfidf::{TfidfVectorizer, cosine};

/// A queryable index over the FAQ corpus.
///
/// Document `i` of the matrix always corresponds to corpus entry `i`;
/// construction enforces this, whether fitted live or loaded from a
/// snapshot.
#[derive(Debug, Clone)]
pub struct KnowledgeIndex {
    docs: Vec<KbEntry>,
    vectorizer: TfidfVectorizer,
    matrix: Vec<Vec<f32>>,
}

impl KnowledgeIndex {
    /// Build the index from an in-memory corpus. Each document is the
    /// concatenation of its question and answer fields.
    pub fn fit(docs: Vec<KbEntry>) -> Self {
        let texts: Vec<String> = docs
            .iter()
            .map(|d| format!("{} {}", d.question, d.answer))
            .collect();
        let (vectorizer, matrix) = TfidfVectorizer::fit(&texts);
        Self {
            docs,
            vectorizer,
            matrix,
        }
    }

    /// Load a prebuilt index from a snapshot file, validating dimensions.
    pub fn load_snapshot(path: &std::path::Path) -> entregabot_core::Result<Self> {
        let snapshot = IndexSnapshot::load(path)?;
        snapshot.into_index()
    }

    pub(crate) fn from_parts(
        docs: Vec<KbEntry>,
        vectorizer: TfidfVectorizer,
        matrix: Vec<Vec<f32>>,
    ) -> Self {
        Self {
            docs,
            vectorizer,
            matrix,
        }
    }

    pub fn docs(&self) -> &[KbEntry] {
        &self.docs
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn matrix(&self) -> &[Vec<f32>] {
        &self.matrix
    }

    /// Top-k entries ranked by cosine similarity to `query`, descending.
    ///
    /// Ties break by original corpus order (stable sort). An empty or
    /// whitespace-only query yields an empty result.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<ScoredEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let query_vec = self.vectorizer.transform(query);
        let mut scored: Vec<(usize, f32)> = self
            .matrix
            .iter()
            .enumerate()
            .map(|(i, row)| (i, cosine(&query_vec, row)))
            .collect();
        // sort_by is stable: equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(i, score)| ScoredEntry {
                question: self.docs[i].question.clone(),
                answer: self.docs[i].answer.clone(),
                score,
            })
            .collect()
    }
}
