//! Core Extractor implementation

use crate::config::{ExtractorConfig, KeywordOptions};
use crate::error::ExtractorError;
use crate::keywords::extract_keywords;
use crate::nouns::extract_noun_phrases;
use crate::similarity::{normalized_dice, similarity_score};
use nounsift_domain::traits::Analyzer;
use nounsift_domain::{MorphemeSequence, NounCount, NounFrequencyMap};
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::time::timeout;
use tracing::{debug, warn};

/// The Extractor runs text through an analyzer and derives nouns,
/// keywords, frequency maps and similarity scores from the result
///
/// The analyzer handle is shared by all calls. Analysis results are never
/// shared: each call gets its own [`MorphemeSequence`].
pub struct Extractor<A>
where
    A: Analyzer,
{
    analyzer: Arc<A>,
    gate: Option<Arc<Mutex<()>>>,
    config: ExtractorConfig,
}

impl<A> Extractor<A>
where
    A: Analyzer,
    A::Error: Display,
{
    /// Create a new Extractor
    ///
    /// Calls are serialized when the configuration asks for it or the analyzer
    /// reports that it is not reentrant.
    ///
    /// # Errors
    ///
    /// [`ExtractorError::Config`] if the configuration is invalid.
    pub fn new(analyzer: A, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::assemble(analyzer, config))
    }

    /// Create an Extractor with the default configuration
    pub fn default_config(analyzer: A) -> Self {
        Self::assemble(analyzer, ExtractorConfig::default())
    }

    fn assemble(analyzer: A, config: ExtractorConfig) -> Self {
        let serialize = config.serialize_analyzer_calls || !analyzer.is_reentrant();
        if serialize {
            debug!("Analyzer calls will be serialized");
        }

        Self {
            analyzer: Arc::new(analyzer),
            gate: serialize.then(|| Arc::new(Mutex::new(()))),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The shared analyzer handle
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Analyze text, blocking the current thread
    pub fn parse(&self, text: &str) -> Result<MorphemeSequence, ExtractorError> {
        let raw = analyze_raw(self.analyzer.as_ref(), self.gate.as_deref(), text)?;
        let morphemes = MorphemeSequence::from_raw_output(&raw);
        debug!("Parsed {} morphemes", morphemes.len());
        Ok(morphemes)
    }

    /// Noun phrases of a text, in order of their triggering noun
    pub fn extract_noun_phrases(&self, text: &str) -> Result<Vec<String>, ExtractorError> {
        Ok(extract_noun_phrases(&self.parse(text)?))
    }

    /// Keywords of a text
    ///
    /// Options are validated before the analyzer is called.
    pub fn extract_keywords(
        &self,
        text: &str,
        options: KeywordOptions,
    ) -> Result<Vec<String>, ExtractorError> {
        options.validate()?;
        extract_keywords(&self.parse(text)?, &options)
    }

    /// Keywords of a text using the configured count
    pub fn extract_default_keywords(&self, text: &str) -> Result<Vec<String>, ExtractorError> {
        self.extract_keywords(text, self.config.keyword_options())
    }

    /// Occurrence counts of the noun phrases of a text
    pub fn build_noun_frequency_map(&self, text: &str) -> Result<NounFrequencyMap, ExtractorError> {
        Ok(NounFrequencyMap::from_nouns(self.extract_noun_phrases(text)?))
    }

    /// Noun counts of a text, most frequent first
    pub fn extract_sorted_noun_counts(&self, text: &str) -> Result<Vec<NounCount>, ExtractorError> {
        Ok(self.build_noun_frequency_map(text)?.sorted_counts())
    }
}

impl<A> Extractor<A>
where
    A: Analyzer + Send + Sync,
    A::Error: Display,
{
    /// Weighted-overlap score of two texts, analyzing both in parallel threads
    ///
    /// See [`similarity_score`] for what the number means.
    pub fn similarity_score_of_texts_blocking(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<u64, ExtractorError> {
        let (map_a, map_b) = thread::scope(|scope| {
            let branch_b = scope.spawn(|| self.build_noun_frequency_map(text_b));
            let map_a = self.build_noun_frequency_map(text_a);
            let map_b = branch_b
                .join()
                .map_err(|_| ExtractorError::Analysis("analysis thread panicked".to_string()));
            (map_a, map_b)
        });

        let map_a = map_a?;
        let map_b = map_b??;
        Ok(similarity_score(&map_a, &map_b))
    }
}

impl<A> Extractor<A>
where
    A: Analyzer + Send + Sync + 'static,
    A::Error: Display,
{
    /// Analyze text without blocking the async runtime
    ///
    /// The analyzer runs on the blocking pool. With a configured timeout the
    /// call fails with [`ExtractorError::Timeout`] once the limit passes; the
    /// abandoned analysis still finishes and releases its state in the
    /// background.
    pub async fn parse_async(&self, text: &str) -> Result<MorphemeSequence, ExtractorError> {
        let analyzer = Arc::clone(&self.analyzer);
        let gate = self.gate.clone();
        let text = text.to_string();

        let task = tokio::task::spawn_blocking(move || {
            analyze_raw(analyzer.as_ref(), gate.as_deref(), &text)
        });

        let joined = match self.config.analysis_timeout() {
            Some(limit) => timeout(limit, task).await.map_err(|_| {
                warn!("Analysis exceeded {:?}", limit);
                ExtractorError::Timeout(limit)
            })?,
            None => task.await,
        };

        let raw = joined
            .map_err(|e| ExtractorError::Analysis(format!("Task join error: {}", e)))??;
        let morphemes = MorphemeSequence::from_raw_output(&raw);
        debug!("Parsed {} morphemes", morphemes.len());
        Ok(morphemes)
    }

    /// Async variant of [`Extractor::extract_noun_phrases`]
    pub async fn extract_noun_phrases_async(
        &self,
        text: &str,
    ) -> Result<Vec<String>, ExtractorError> {
        Ok(extract_noun_phrases(&self.parse_async(text).await?))
    }

    /// Async variant of [`Extractor::extract_keywords`]
    pub async fn extract_keywords_async(
        &self,
        text: &str,
        options: KeywordOptions,
    ) -> Result<Vec<String>, ExtractorError> {
        options.validate()?;
        extract_keywords(&self.parse_async(text).await?, &options)
    }

    /// Async variant of [`Extractor::build_noun_frequency_map`]
    pub async fn build_noun_frequency_map_async(
        &self,
        text: &str,
    ) -> Result<NounFrequencyMap, ExtractorError> {
        Ok(NounFrequencyMap::from_nouns(
            self.extract_noun_phrases_async(text).await?,
        ))
    }

    /// Async variant of [`Extractor::extract_sorted_noun_counts`]
    pub async fn extract_sorted_noun_counts_async(
        &self,
        text: &str,
    ) -> Result<Vec<NounCount>, ExtractorError> {
        Ok(self.build_noun_frequency_map_async(text).await?.sorted_counts())
    }

    /// Weighted-overlap score of two texts
    ///
    /// Both frequency maps are computed concurrently. The first failure is
    /// returned and no score is computed.
    pub async fn similarity_score_of_texts(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<u64, ExtractorError> {
        let (map_a, map_b) = self.frequency_maps(text_a, text_b).await?;
        let score = similarity_score(&map_a, &map_b);
        debug!("Similarity score {} ({} / {} nouns)", score, map_a.len(), map_b.len());
        Ok(score)
    }

    /// Normalized Dice coefficient of two texts, computed like
    /// [`Extractor::similarity_score_of_texts`]
    pub async fn normalized_dice_of_texts(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<f64, ExtractorError> {
        let (map_a, map_b) = self.frequency_maps(text_a, text_b).await?;
        Ok(normalized_dice(&map_a, &map_b))
    }

    async fn frequency_maps(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<(NounFrequencyMap, NounFrequencyMap), ExtractorError> {
        tokio::try_join!(
            self.build_noun_frequency_map_async(text_a),
            self.build_noun_frequency_map_async(text_b),
        )
    }
}

/// One analyzer call, holding the gate for its duration when present
fn analyze_raw<A>(analyzer: &A, gate: Option<&Mutex<()>>, text: &str) -> Result<String, ExtractorError>
where
    A: Analyzer,
    A::Error: Display,
{
    let _guard = match gate {
        Some(gate) => Some(
            gate.lock()
                .map_err(|_| ExtractorError::Analysis("analyzer lock poisoned".to_string()))?,
        ),
        None => None,
    };

    analyzer.analyze(text).map_err(|e| {
        warn!("Analysis failed: {}", e);
        ExtractorError::Analysis(e.to_string())
    })
}
