//! Error types for the Extractor

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// The analyzer failed for this call
    #[error("Analyzer failure: {0}")]
    Analysis(String),

    /// Invalid configuration or options, detected before analysis
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis did not finish within the configured limit
    #[error("Analysis timeout after {0:?}")]
    Timeout(Duration),
}
