//! nounsift Domain Layer
//!
//! This crate contains the core data model shared by every other nounsift crate.
//! It has ZERO external dependencies and defines the morpheme representation,
//! the frequency map, and the trait boundary towards morphological analyzers.
//!
//! ## Key Concepts
//!
//! - **Morpheme**: The smallest tagged unit produced by an analyzer (surface + POS tag + features)
//! - **MorphemeSequence**: The ordered morphemes of one analyzed input
//! - **NounFrequencyMap**: Occurrence counts of noun phrases in one text
//! - **Analyzer**: The external collaborator that turns text into tabular analyzer output
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data transforms only
//! - Analyzer backends live in `nounsift-analyzer`
//! - Extraction algorithms live in `nounsift-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frequency;
pub mod morpheme;
pub mod tag;
pub mod traits;

// Re-exports for convenience
pub use frequency::{NounCount, NounFrequencyMap};
pub use morpheme::{Morpheme, MorphemeSequence};
pub use traits::Analyzer;
