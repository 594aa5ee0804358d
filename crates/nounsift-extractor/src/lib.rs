//! nounsift Extractor
//!
//! Derives noun phrases, keywords, noun frequency maps and similarity scores
//! from the output of a morphological analyzer.
//!
//! # Overview
//!
//! The analyzer is a black box reached through the `Analyzer` trait of
//! `nounsift-domain`. Everything in this crate works on the morpheme stream it
//! returns:
//!
//! - **Noun phrases**: adjacent-tag patterns around every `NN` morpheme
//! - **Keywords**: runs of two or more qualifying nouns, deduplicated and ranked by length
//! - **Frequency maps**: noun phrase occurrence counts
//! - **Similarity**: weighted overlap of two frequency maps
//!
//! # Architecture
//!
//! ```text
//! Text → Analyzer → MorphemeSequence → Noun phrases → {Keywords, Frequency map} → Similarity
//! ```
//!
//! # Similarity scores
//!
//! [`similarity_score`] is an unnormalized weighted overlap. It is kept for
//! compatibility with existing consumers and is NOT a Dice coefficient: its
//! magnitude depends on text length. Use [`normalized_dice`] for a bounded
//! score.
//!
//! # Example Usage
//!
//! ```
//! use nounsift_analyzer::{raw_output, MockAnalyzer};
//! use nounsift_extractor::{Extractor, ExtractorConfig, KeywordOptions};
//!
//! # fn main() -> Result<(), nounsift_extractor::ExtractorError> {
//! let analyzer = MockAnalyzer::new(raw_output(&[
//!     ("사과", "NN,*,*,*,*"),
//!     ("오렌지", "NN,*,*,*,*"),
//! ]));
//! let extractor = Extractor::new(analyzer, ExtractorConfig::default())?;
//!
//! let nouns = extractor.extract_noun_phrases("사과 오렌지")?;
//! assert_eq!(nouns, vec!["사과", "사과 오렌지", "오렌지"]);
//!
//! let keywords = extractor.extract_keywords("사과 오렌지", KeywordOptions::default())?;
//! assert!(keywords.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod keywords;
mod nouns;
mod similarity;


pub use config::{ExtractorConfig, KeywordOptions, DEFAULT_KEYWORD_COUNT};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use keywords::extract_keywords;
pub use nouns::extract_noun_phrases;
pub use similarity::{normalized_dice, similarity_score};
