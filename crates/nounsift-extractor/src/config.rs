//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of keywords returned when no count is given
pub const DEFAULT_KEYWORD_COUNT: usize = 3;

/// Options for a single keyword extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
    /// Maximum number of keywords to return (must be positive)
    pub n: usize,
}

impl KeywordOptions {
    /// Options returning at most `n` keywords
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Reject a zero count
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.n == 0 {
            return Err(ExtractorError::Config(
                "keyword count n must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_KEYWORD_COUNT,
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Keyword count used when the caller does not pass options
    #[serde(default = "default_keyword_count")]
    pub keyword_count: usize,

    /// Upper bound for one async analysis call (milliseconds); none by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_timeout_ms: Option<u64>,

    /// Route every analyzer call through a single lock
    #[serde(default)]
    pub serialize_analyzer_calls: bool,
}

fn default_keyword_count() -> usize {
    DEFAULT_KEYWORD_COUNT
}

impl ExtractorConfig {
    /// Get the analysis timeout as a Duration, if one is set
    pub fn analysis_timeout(&self) -> Option<Duration> {
        self.analysis_timeout_ms.map(Duration::from_millis)
    }

    /// Keyword options derived from this configuration
    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions::new(self.keyword_count)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.keyword_count == 0 {
            return Err("keyword_count must be greater than 0".to_string());
        }
        if self.analysis_timeout_ms == Some(0) {
            return Err("analysis_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Strict preset: serialized analyzer calls with a 5 second limit
    pub fn strict() -> Self {
        Self {
            keyword_count: DEFAULT_KEYWORD_COUNT,
            analysis_timeout_ms: Some(5_000),
            serialize_analyzer_calls: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            keyword_count: DEFAULT_KEYWORD_COUNT,
            analysis_timeout_ms: None,
            serialize_analyzer_calls: false,
        }
    }
}
