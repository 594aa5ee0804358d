//! Counts command implementation.

use super::input_text;
use crate::cli::TextArgs;
use crate::error::Result;
use crate::output::Formatter;
use nounsift_domain::Analyzer;
use nounsift_extractor::Extractor;
use std::fmt::Display;

/// Execute the counts command.
pub async fn execute_counts<A>(
    args: TextArgs,
    extractor: &Extractor<A>,
    formatter: &Formatter,
) -> Result<String>
where
    A: Analyzer + Send + Sync + 'static,
    A::Error: Display,
{
    let text = input_text(args.text)?;
    let counts = extractor.extract_sorted_noun_counts_async(&text).await?;
    formatter.format_counts(&counts)
}
