//! EntregaBot configuration system.
//!
//! A TOML file with serde-defaulted sections; every field has a working
//! default so an empty file (or no file at all) yields a runnable config.
//! Provider credentials are NOT stored here; they are resolved from the
//! process environment at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EntregaError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntregaConfig {
    /// API key required in the `X-API-Key` header. Empty = auth disabled.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Default for EntregaConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            gateway: GatewayConfig::default(),
            data: DataConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl EntregaConfig {
    /// Load config from the default path (~/.entregabot/config.toml),
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EntregaError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| EntregaError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".entregabot")
            .join("config.toml")
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Static data locations and retrieval tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding kb.json, policies.json, orders.json, users.json.
    #[serde(default = "default_data_dir")]
    pub dir: String,
    /// Serialized index snapshot file name inside `dir`. When present and
    /// valid it is preferred over the index built from kb.json at startup.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_data_dir() -> String {
    "data".into()
}
fn default_index_file() -> String {
    "kb_index.json".into()
}
fn default_top_k() -> usize {
    3
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            index_file: default_index_file(),
            top_k: default_top_k(),
        }
    }
}

impl DataConfig {
    pub fn kb_path(&self) -> PathBuf {
        Path::new(&self.dir).join("kb.json")
    }

    pub fn policies_path(&self) -> PathBuf {
        Path::new(&self.dir).join("policies.json")
    }

    pub fn orders_path(&self) -> PathBuf {
        Path::new(&self.dir).join("orders.json")
    }

    pub fn users_path(&self) -> PathBuf {
        Path::new(&self.dir).join("users.json")
    }

    pub fn index_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.index_file)
    }
}

/// Generation-provider defaults. Model names are overridable per provider
/// via environment (OPENAI_MODEL, GEMINI_MODEL, OLLAMA_MODEL); credentials
/// come from the environment only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Local runtime model. Empty = local generation disabled unless
    /// OLLAMA_MODEL is set in the environment.
    #[serde(default)]
    pub local_model: String,
    #[serde(default = "default_local_host")]
    pub local_host: String,
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}
fn default_gemini_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_local_host() -> String {
    "http://127.0.0.1:11434".into()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai_model: default_openai_model(),
            gemini_model: default_gemini_model(),
            local_model: String::new(),
            local_host: default_local_host(),
        }
    }
}
