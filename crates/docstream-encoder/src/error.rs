//! Error types for docstream-encoder

use docstream_tree::ConvertError;
use docstream_yaml::EmitError;

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding.
///
/// Each variant is transparent: callers see the original failure's message
/// and can match on its source type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Marshal(#[from] EmitError),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}
