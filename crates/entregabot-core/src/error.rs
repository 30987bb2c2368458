//! EntregaBot error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntregaError>;

#[derive(Debug, Error)]
pub enum EntregaError {
    /// Configuration file problems (unreadable, unparseable).
    #[error("Config error: {0}")]
    Config(String),

    /// Static data files (kb.json, policies.json, ...) failed to load.
    #[error("Data error: {0}")]
    Data(String),

    /// Index snapshot is missing, corrupt, or dimensionally inconsistent.
    #[error("Index error: {0}")]
    Index(String),

    /// A generation provider returned an error for one request.
    #[error("Provider error: {0}")]
    Provider(String),

    /// HTTP transport failure talking to a remote provider.
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = EntregaError::Index("matrix has 3 rows but corpus has 4 docs".into());
        assert!(e.to_string().contains("Index error"));
        assert!(e.to_string().contains("3 rows"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: EntregaError = io.into();
        assert!(matches!(e, EntregaError::Io(_)));
    }
}
