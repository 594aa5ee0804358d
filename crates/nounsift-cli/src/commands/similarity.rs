//! Similarity command implementation.

use crate::cli::SimilarityArgs;
use crate::error::Result;
use crate::output::Formatter;
use nounsift_domain::Analyzer;
use nounsift_extractor::Extractor;
use std::fmt::Display;

/// Execute the similarity command.
pub async fn execute_similarity<A>(
    args: SimilarityArgs,
    extractor: &Extractor<A>,
    formatter: &Formatter,
) -> Result<String>
where
    A: Analyzer + Send + Sync + 'static,
    A::Error: Display,
{
    if args.normalized {
        let score = extractor
            .normalized_dice_of_texts(&args.text_a, &args.text_b)
            .await?;
        formatter.format_score("dice", score)
    } else {
        let score = extractor
            .similarity_score_of_texts(&args.text_a, &args.text_b)
            .await?;
        formatter.format_score("overlap", score)
    }
}
