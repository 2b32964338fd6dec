//! Error types for pdfium-wasm-lib

use thiserror::Error;

/// Errors that can occur while deriving a build configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  /// The variant string is not one of the supported identifiers.
  #[error("Unknown variant: {0}")]
  InvalidVariant(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
