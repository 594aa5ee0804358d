//! nounsift Analyzer Layer
//!
//! Pluggable morphological analyzer backends.
//!
//! # Architecture
//!
//! This crate provides implementations of the `Analyzer` trait from `nounsift-domain`.
//! Every backend returns the analyzer's raw tabular output; turning it into
//! morphemes is the job of `MorphemeSequence::from_raw_output`.
//!
//! # Backends
//!
//! - `MockAnalyzer`: Deterministic mock for testing
//! - `MecabAnalyzer`: Drives an installed `mecab` executable
//!
//! # Examples
//!
//! ```
//! use nounsift_analyzer::MockAnalyzer;
//! use nounsift_domain::traits::Analyzer;
//!
//! let analyzer = MockAnalyzer::new("사과\tNN,*,*,*,*\nEOS\n");
//! let raw = analyzer.analyze("사과").unwrap();
//! assert!(raw.starts_with("사과\tNN"));
//! ```

#![warn(missing_docs)]

pub mod mecab;

use nounsift_domain::traits::Analyzer as AnalyzerTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;
use thiserror::Error;

pub use mecab::{MecabAnalyzer, MecabConfig};

/// Errors that can occur during analysis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The analyzer could not be constructed; the handle is unusable
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// A single analysis call failed; other calls are unaffected
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Render `(surface, features)` rows the way an analyzer prints them
///
/// Appends the end-of-sentence marker. Handy for feeding `MockAnalyzer`.
///
/// ```
/// let raw = nounsift_analyzer::raw_output(&[("사과", "NN,*,*,*,*")]);
/// assert_eq!(raw, "사과\tNN,*,*,*,*\nEOS\n");
/// ```
pub fn raw_output(rows: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (surface, features) in rows {
        out.push_str(surface);
        out.push('\t');
        out.push_str(features);
        out.push('\n');
    }
    out.push_str("EOS\n");
    out
}

#[derive(Debug, Default)]
struct CallStats {
    calls: usize,
    in_flight: usize,
    max_in_flight: usize,
}

/// Mock analyzer for deterministic testing
///
/// Returns pre-configured raw output without touching any external process.
///
/// # Examples
///
/// ```
/// use nounsift_analyzer::MockAnalyzer;
/// use nounsift_domain::traits::Analyzer;
///
/// let mut analyzer = MockAnalyzer::default();
/// analyzer.add_output("사과", "사과\tNN,*,*,*,*\nEOS\n");
/// analyzer.add_error("broken");
///
/// assert!(analyzer.analyze("사과").is_ok());
/// assert!(analyzer.analyze("broken").is_err());
/// assert_eq!(analyzer.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    default_output: String,
    outputs: Arc<Mutex<HashMap<String, Option<String>>>>,
    stats: Arc<Mutex<CallStats>>,
    delay: Option<Duration>,
    reentrant: bool,
}

impl MockAnalyzer {
    /// Create a MockAnalyzer returning the same output for every input
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            default_output: output.into(),
            outputs: Arc::new(Mutex::new(HashMap::new())),
            stats: Arc::new(Mutex::new(CallStats::default())),
            delay: None,
            reentrant: true,
        }
    }

    /// Return specific output for a given input text
    pub fn add_output(&mut self, text: impl Into<String>, output: impl Into<String>) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(text.into(), Some(output.into()));
    }

    /// Fail analysis of a specific input text
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(text.into(), None);
    }

    /// Block every call for the given duration before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Report the mock as unsafe for concurrent use
    pub fn non_reentrant(mut self) -> Self {
        self.reentrant = false;
        self
    }

    /// Get the number of times analyze was called
    pub fn call_count(&self) -> usize {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner).calls
    }

    /// Highest number of calls observed running at the same time
    pub fn max_in_flight(&self) -> usize {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .max_in_flight
    }

    /// Reset the call statistics
    pub fn reset_call_count(&self) {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner) = CallStats::default();
    }

    fn enter(&self) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats.calls += 1;
        stats.in_flight += 1;
        stats.max_in_flight = stats.max_in_flight.max(stats.in_flight);
    }

    fn leave(&self) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats.in_flight = stats.in_flight.saturating_sub(1);
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new("EOS\n")
    }
}

impl AnalyzerTrait for MockAnalyzer {
    type Error = AnalyzerError;

    fn analyze(&self, text: &str) -> Result<String, Self::Error> {
        self.enter();
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }

        let configured = self
            .outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text)
            .cloned();
        self.leave();

        match configured {
            Some(Some(output)) => Ok(output),
            Some(None) => Err(AnalyzerError::Analysis(format!(
                "mock failure for input '{}'",
                text
            ))),
            None => Ok(self.default_output.clone()),
        }
    }

    fn is_reentrant(&self) -> bool {
        self.reentrant
    }
}
