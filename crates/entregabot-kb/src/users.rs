//! Mock user book.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use entregabot_core::error::{EntregaError, Result};

/// One registered user. IDs follow the `USR-<digits>` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub nome: String,
    pub email: String,
}

/// User lookup table keyed by lowercased user id.
#[derive(Debug, Clone, Default)]
pub struct UserBook {
    users: HashMap<String, User>,
}

impl UserBook {
    /// Load users from `users.json` (a JSON array).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EntregaError::Data(format!("Failed to read {}: {e}", path.display())))?;
        let list: Vec<User> = serde_json::from_str(&content)
            .map_err(|e| EntregaError::Data(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(Self::from_users(list))
    }

    /// Build a book from an in-memory list.
    pub fn from_users(list: Vec<User>) -> Self {
        let users = list
            .into_iter()
            .map(|u| (u.user_id.to_lowercase(), u))
            .collect();
        Self { users }
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.users.get(&user_id.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_lookup_case_insensitive() {
        let user = User {
            user_id: "USR-001".into(),
            nome: "Ana".into(),
            email: "ana@example.com".into(),
        };
        let mut users = HashMap::new();
        users.insert(user.user_id.to_lowercase(), user);
        let book = UserBook { users };

        assert_eq!(book.get("usr-001").unwrap().nome, "Ana");
        assert_eq!(book.get("USR-001").unwrap().nome, "Ana");
        assert!(book.get("USR-999").is_none());
    }
}
