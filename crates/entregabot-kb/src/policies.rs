//! Static policy table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use entregabot_core::error::{EntregaError, Result};

/// One support policy. `steps` is the actionable text surfaced to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
}

/// Topic → policy mapping, case-insensitive on lookup.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    policies: HashMap<String, Policy>,
}

impl PolicyTable {
    /// Load the table from `policies.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EntregaError::Data(format!("Failed to read {}: {e}", path.display())))?;
        let raw: HashMap<String, Policy> = serde_json::from_str(&content)
            .map_err(|e| EntregaError::Data(format!("Failed to parse {}: {e}", path.display())))?;
        // Normalize keys once so lookups are a plain map hit.
        let policies = raw
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Ok(Self { policies })
    }

    pub fn get(&self, topic: &str) -> Option<&Policy> {
        self.policies.get(&topic.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PolicyTable {
        let mut policies = HashMap::new();
        policies.insert(
            "reembolso".to_string(),
            Policy {
                descricao: Some("Política de reembolso".into()),
                steps: Some("Solicite na aba Ajuda em até 7 dias.".into()),
            },
        );
        PolicyTable { policies }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = sample();
        assert!(table.get("Reembolso").is_some());
        assert!(table.get("REEMBOLSO").is_some());
        assert!(table.get("cancelamento").is_none());
    }

    #[test]
    fn test_steps_accessible() {
        let table = sample();
        let pol = table.get("reembolso").unwrap();
        assert!(pol.steps.as_deref().unwrap().contains("7 dias"));
    }
}
