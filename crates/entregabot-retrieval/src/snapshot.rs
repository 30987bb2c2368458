//! Serialized index snapshot.
//!
//! The `entregabot-ingest` binary fits the vector space offline and writes
//! a single JSON bundle; the server prefers this bundle over the live
//! index when it is present and valid. Validation is fail-fast: a bundle
//! whose matrix disagrees with its corpus or vocabulary dimensions must
//! not serve, because document `i` of the matrix has to be corpus entry
//! `i` for scores to map back to the right answers.

use serde::{Deserialize, Serialize};
use std::path::Path;

use entregabot_core::error::{EntregaError, Result};
use entregabot_core::types::KbEntry;

use crate::index::KnowledgeIndex;
use crate::tfidf::TfidfVectorizer;

/// The on-disk bundle: corpus, vectorizer state, and document matrix from
/// one fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub docs: Vec<KbEntry>,
    pub vectorizer: TfidfVectorizer,
    pub matrix: Vec<Vec<f32>>,
}

impl IndexSnapshot {
    /// Capture a fitted index as a snapshot.
    pub fn from_index(index: &KnowledgeIndex) -> Self {
        Self {
            docs: index.docs().to_vec(),
            vectorizer: index.vectorizer().clone(),
            matrix: index.matrix().to_vec(),
        }
    }

    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EntregaError::Index(format!("Failed to read snapshot {}: {e}", path.display()))
        })?;
        let snapshot: Self = serde_json::from_str(&content).map_err(|e| {
            EntregaError::Index(format!("Failed to parse snapshot {}: {e}", path.display()))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Write the snapshot to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(self)
            .map_err(|e| EntregaError::Index(format!("Failed to serialize snapshot: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that corpus, vectorizer, and matrix come from the same fit.
    pub fn validate(&self) -> Result<()> {
        if self.matrix.len() != self.docs.len() {
            return Err(EntregaError::Index(format!(
                "matrix has {} rows but corpus has {} docs",
                self.matrix.len(),
                self.docs.len()
            )));
        }
        if !self.vectorizer.is_consistent() {
            return Err(EntregaError::Index(
                "vectorizer vocabulary and idf dimensions disagree".into(),
            ));
        }
        let dims = self.vectorizer.dims();
        if let Some(row) = self.matrix.iter().find(|r| r.len() != dims) {
            return Err(EntregaError::Index(format!(
                "matrix row has {} dims but vocabulary has {}",
                row.len(),
                dims
            )));
        }
        Ok(())
    }

    /// Convert into a queryable index (re-validates).
    pub fn into_index(self) -> Result<KnowledgeIndex> {
        self.validate()?;
        Ok(KnowledgeIndex::from_parts(
            self.docs,
            self.vectorizer,
            self.matrix,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_index() -> KnowledgeIndex {
        KnowledgeIndex::fit(vec![
            KbEntry {
                question: "A entrega tem taxa adicional?".into(),
                answer: "A taxa varia conforme a distância.".into(),
            },
            KbEntry {
                question: "Como aplicar um cupom de desconto?".into(),
                answer: "Insira o código no campo Cupom antes de concluir.".into(),
            },
        ])
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("entregabot-snap-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_ranking() {
        let index = fitted_index();
        let path = temp_path("roundtrip.json");
        IndexSnapshot::from_index(&index).save(&path).unwrap();

        let loaded = KnowledgeIndex::load_snapshot(&path).unwrap();
        let before = index.retrieve("cupom de desconto", 2);
        let after = loaded.retrieve("cupom de desconto", 2);
        assert_eq!(before[0].question, after[0].question);
        assert!((before[0].score - after[0].score).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mismatched_doc_count_is_rejected() {
        let index = fitted_index();
        let mut snapshot = IndexSnapshot::from_index(&index);
        snapshot.docs.pop();
        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, EntregaError::Index(_)));
    }

    #[test]
    fn test_mismatched_row_dims_are_rejected() {
        let index = fitted_index();
        let mut snapshot = IndexSnapshot::from_index(&index);
        snapshot.matrix[0].push(0.5);
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_missing_snapshot_fails_construction() {
        let err = KnowledgeIndex::load_snapshot(Path::new("/nonexistent/kb_index.json"))
            .unwrap_err();
        assert!(matches!(err, EntregaError::Index(_)));
    }

    #[test]
    fn test_corrupt_snapshot_fails_construction() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(KnowledgeIndex::load_snapshot(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
