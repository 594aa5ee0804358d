//! Trait definitions for external interactions
//!
//! The morphological analyzer is a black box. Implementations live in
//! `nounsift-analyzer`.

/// Trait for morphological analyzer backends
///
/// Implemented by the infrastructure layer (nounsift-analyzer)
pub trait Analyzer {
    /// Error type for analysis operations
    type Error;

    /// Analyze one input and return the raw tabular output
    ///
    /// The output holds one morpheme per line (`surface\tTAG,feature,...`)
    /// and ends with an end-of-sentence marker line and a blank line.
    fn analyze(&self, text: &str) -> Result<String, Self::Error>;

    /// Whether one shared handle may serve concurrent calls
    ///
    /// Callers serialize calls to analyzers that return `false`.
    fn is_reentrant(&self) -> bool {
        true
    }
}
