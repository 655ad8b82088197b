use thiserror::Error;

/// Errors raised while loading knowledge tables from disk.
///
/// The advisor itself never errors; only table loading can fail.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid knowledge TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
