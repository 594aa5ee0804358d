//! Parse command implementation.

use super::input_text;
use crate::cli::TextArgs;
use crate::error::Result;
use crate::output::Formatter;
use nounsift_domain::Analyzer;
use nounsift_extractor::Extractor;
use std::fmt::Display;

/// Execute the parse command.
pub async fn execute_parse<A>(
    args: TextArgs,
    extractor: &Extractor<A>,
    formatter: &Formatter,
) -> Result<String>
where
    A: Analyzer + Send + Sync + 'static,
    A::Error: Display,
{
    let text = input_text(args.text)?;
    let morphemes = extractor.parse_async(&text).await?;
    formatter.format_morphemes(&morphemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{extractor, FRUIT};
    use crate::config::OutputFormat;

    #[tokio::test]
    async fn test_parse_lists_every_morpheme() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let args = TextArgs {
            text: Some(FRUIT.to_string()),
        };

        let output = execute_parse(args, &extractor(), &formatter).await.unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.starts_with("사과\tNN"));
    }
}
