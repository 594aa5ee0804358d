//! Keywords command implementation.

use super::input_text;
use crate::cli::KeywordsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nounsift_domain::Analyzer;
use nounsift_extractor::{Extractor, KeywordOptions};
use std::fmt::Display;

/// Execute the keywords command.
pub async fn execute_keywords<A>(
    args: KeywordsArgs,
    extractor: &Extractor<A>,
    formatter: &Formatter,
) -> Result<String>
where
    A: Analyzer + Send + Sync + 'static,
    A::Error: Display,
{
    // Validate count
    let options = match args.n {
        Some(0) => {
            return Err(CliError::InvalidInput(
                "Keyword count must be at least 1".to_string(),
            ))
        }
        Some(n) => KeywordOptions::new(n),
        None => extractor.config().keyword_options(),
    };

    let text = input_text(args.text)?;
    let keywords = extractor.extract_keywords_async(&text, options).await?;
    formatter.format_phrases("Keyword", &keywords)
}
