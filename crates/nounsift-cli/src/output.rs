//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use nounsift_domain::{MorphemeSequence, NounCount};
use std::fmt::Display;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a morpheme listing.
    pub fn format_morphemes(&self, morphemes: &MorphemeSequence) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = morphemes
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "surface": m.surface(),
                            "tag": m.tag(),
                            "features": m.features(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if morphemes.is_empty() {
                    return Ok(self.colorize("No morphemes.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Surface", "Tag", "Features"]);
                for (i, m) in morphemes.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        m.surface().to_string(),
                        m.tag().to_string(),
                        m.features().join(","),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Plain => Ok(morphemes
                .iter()
                .map(|m| format!("{}\t{}", m.surface(), m.features().join(",")))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a list of phrases under a column heading.
    pub fn format_phrases(&self, heading: &str, phrases: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(phrases)?),
            OutputFormat::Table => {
                if phrases.is_empty() {
                    return Ok(self.colorize(&format!("No {} found.", heading.to_lowercase()), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", heading]);
                for (i, phrase) in phrases.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), phrase.clone()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Plain => Ok(phrases.join("\n")),
        }
    }

    /// Format noun counts, most frequent first.
    pub fn format_counts(&self, counts: &[NounCount]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = counts
                    .iter()
                    .map(|c| serde_json::json!({ "noun": c.noun, "count": c.count }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if counts.is_empty() {
                    return Ok(self.colorize("No nouns found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Noun", "Count"]);
                for c in counts {
                    builder.push_record([c.noun.clone(), c.count.to_string()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Plain => Ok(counts
                .iter()
                .map(|c| format!("{}\t{}", c.noun, c.count))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a similarity result.
    ///
    /// Integer scores stay integers in JSON.
    pub fn format_score<S>(&self, metric: &str, score: S) -> Result<String>
    where
        S: Into<serde_json::Value> + Display,
    {
        match self.format {
            OutputFormat::Table => Ok(format!(
                "{}: {}",
                self.colorize(metric, "cyan"),
                score
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "metric": metric,
                "score": score.into(),
            }))?),
            OutputFormat::Plain => Ok(score.to_string()),
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
