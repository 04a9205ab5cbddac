use thiserror::Error;

/// Errors raised when the sidebar hands the editor an invalid setting.
///
/// The rejected value is never applied; the previous setting stays active.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("brush size must be positive, got {0}")]
    InvalidBrushSize(i64),

    #[error("unknown tool: {0:?}")]
    UnknownTool(String),
}

/// Result type for configuration setters
pub type ConfigResult<T> = Result<T, ConfigError>;
