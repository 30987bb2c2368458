//! TF-IDF vector space.
//!
//! Term frequency scaled by smoothed inverse document frequency, with
//! L2-normalized document vectors so cosine similarity reduces to a dot
//! product. No stop-word removal: the corpus is Portuguese and the usual
//! stop-word lists do more harm than good here.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A fitted TF-IDF vectorizer: vocabulary plus per-term idf weights.
///
/// Fit once over the whole corpus, then transform any number of queries
/// into the same space. Serializable so a prebuilt index snapshot can
/// carry its exact vectorizer state; mixing a vectorizer with a matrix
/// from a different corpus snapshot silently corrupts result mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term → column index. BTreeMap keeps serialization deterministic.
    vocabulary: BTreeMap<String, usize>,
    /// Per-column smoothed idf: ln((1 + n_docs) / (1 + df)) + 1.
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit the vectorizer over `documents` and return it together with the
    /// L2-normalized document-vector matrix (one row per document, in
    /// input order).
    pub fn fit(documents: &[String]) -> (Self, Vec<Vec<f32>>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Vocabulary in sorted term order for a stable column layout.
        let mut terms: Vec<&String> = tokenized.iter().flatten().collect();
        terms.sort();
        terms.dedup();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        // Document frequency per term.
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen: Vec<&usize> = tokens.iter().filter_map(|t| vocabulary.get(t)).collect();
            seen.sort();
            seen.dedup();
            for &col in seen {
                df[col] += 1;
            }
        }

        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let vectorizer = Self { vocabulary, idf };
        let matrix = tokenized
            .iter()
            .map(|tokens| vectorizer.weigh(tokens))
            .collect();
        (vectorizer, matrix)
    }

    /// Transform a query into the fitted space. Terms outside the
    /// vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        self.weigh(&tokenize(text))
    }

    /// Number of terms in the vocabulary (vector dimensionality).
    pub fn dims(&self) -> usize {
        self.vocabulary.len()
    }

    /// Consistency check used when loading snapshots.
    pub fn is_consistent(&self) -> bool {
        self.idf.len() == self.vocabulary.len()
            && self.vocabulary.values().all(|&col| col < self.idf.len())
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f32> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokens {
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_default() += 1.0;
            }
        }

        let mut vec = vec![0.0f32; self.idf.len()];
        for (col, count) in counts {
            vec[col] = count * self.idf[col];
        }

        // L2 normalize; zero vectors stay zero.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

/// Dot product of two L2-normalized vectors, i.e. their cosine similarity.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Lowercase tokens of at least two word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}
