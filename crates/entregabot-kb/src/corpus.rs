//! FAQ corpus loader.

use std::path::Path;

use entregabot_core::error::{EntregaError, Result};
use entregabot_core::types::KbEntry;

/// Load the ordered FAQ corpus from `kb.json`.
///
/// Order matters downstream: the retrieval index identifies documents by
/// position, and ranking ties break by original corpus order.
pub fn load_corpus(path: &Path) -> Result<Vec<KbEntry>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| EntregaError::Data(format!("Failed to read {}: {e}", path.display())))?;
    let docs: Vec<KbEntry> = serde_json::from_str(&content)
        .map_err(|e| EntregaError::Data(format!("Failed to parse {}: {e}", path.display())))?;
    if docs.is_empty() {
        tracing::warn!("Corpus at {} is empty", path.display());
    }
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_corpus_missing_file() {
        let err = load_corpus(Path::new("/nonexistent/kb.json")).unwrap_err();
        assert!(matches!(err, EntregaError::Data(_)));
    }

    #[test]
    fn test_corpus_preserves_order() {
        let dir = std::env::temp_dir().join(format!("entregabot-kb-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("kb.json");
        std::fs::write(
            &path,
            r#"[
                {"question": "q1", "answer": "a1"},
                {"question": "q2", "answer": "a2"}
            ]"#,
        )
        .unwrap();

        let docs = load_corpus(&path).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].question, "q1");
        assert_eq!(docs[1].question, "q2");

        std::fs::remove_dir_all(&dir).ok();
    }
}
