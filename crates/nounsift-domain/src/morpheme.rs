//! Morpheme module - tagged units and the analyzer output adapter

use crate::tag;

/// A single tagged unit of morphological analysis
///
/// A morpheme carries its surface form, its primary part-of-speech tag and the
/// feature columns emitted by the analyzer. When produced by
/// [`MorphemeSequence::from_raw_output`] the first feature column is the tag
/// itself, so positions match the analyzer's comma-delimited feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    surface: String,
    tag: String,
    features: Vec<String>,
}

impl Morpheme {
    /// Create a morpheme from its parts
    pub fn new(
        surface: impl Into<String>,
        tag: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
            features,
        }
    }

    /// Parse one line of analyzer output
    ///
    /// The line is split positionally: the first tab becomes a separator like
    /// the commas after it. A line without a tag yields an empty tag; a line
    /// with fewer feature columns simply has fewer features.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let normalized = line.replacen('\t', ",", 1);
        let mut columns = normalized.split(',');

        let surface = columns.next().unwrap_or_default().to_string();
        let features: Vec<String> = columns.map(str::to_string).collect();
        let tag = features.first().cloned().unwrap_or_default();

        Self {
            surface,
            tag,
            features,
        }
    }

    /// The text span as analyzed
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Primary part-of-speech tag (empty if the analyzer emitted none)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All feature columns, in analyzer order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Feature at a zero-based position, `None` if the slot is missing
    pub fn feature(&self, index: usize) -> Option<&str> {
        self.features.get(index).map(String::as_str)
    }

    /// Check the tag against an exact literal
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// True when the compound flag slot is present and holds `*`
    ///
    /// A missing slot is not the same as `*`.
    pub fn is_simple(&self) -> bool {
        self.feature(tag::COMPOUND_FEATURE_INDEX) == Some(tag::UNSET_FEATURE)
    }

    /// Surface length in characters
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

/// The ordered morphemes of one analyzed input
///
/// Produced fresh for every analysis call and never shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphemeSequence {
    morphemes: Vec<Morpheme>,
}

impl MorphemeSequence {
    /// Create a sequence from already-built morphemes
    pub fn new(morphemes: Vec<Morpheme>) -> Self {
        Self { morphemes }
    }

    /// Convert raw analyzer output into a sequence
    ///
    /// Output ends with an end-of-sentence marker line followed by a blank
    /// line. Trailing blank lines and the marker line are dropped; every line
    /// before them becomes one morpheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use nounsift_domain::MorphemeSequence;
    ///
    /// let seq = MorphemeSequence::from_raw_output("사과\tNN,*,*,*,*\nEOS\n");
    /// assert_eq!(seq.len(), 1);
    /// assert_eq!(seq.get(0).unwrap().tag(), "NN");
    /// ```
    pub fn from_raw_output(raw: &str) -> Self {
        let mut lines: Vec<&str> = raw.split('\n').collect();

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        // End-of-sentence marker
        lines.pop();

        Self {
            morphemes: lines.into_iter().map(Morpheme::from_line).collect(),
        }
    }

    /// Number of morphemes
    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// True if no morphemes were produced
    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Morpheme at a position
    pub fn get(&self, index: usize) -> Option<&Morpheme> {
        self.morphemes.get(index)
    }

    /// Iterate over morphemes in order
    pub fn iter(&self) -> std::slice::Iter<'_, Morpheme> {
        self.morphemes.iter()
    }

    /// Borrow the morphemes as a slice
    pub fn as_slice(&self) -> &[Morpheme] {
        &self.morphemes
    }
}

impl FromIterator<Morpheme> for MorphemeSequence {
    fn from_iter<I: IntoIterator<Item = Morpheme>>(iter: I) -> Self {
        Self {
            morphemes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MorphemeSequence {
    type Item = Morpheme;
    type IntoIter = std::vec::IntoIter<Morpheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.morphemes.into_iter()
    }
}

impl<'a> IntoIterator for &'a MorphemeSequence {
    type Item = &'a Morpheme;
    type IntoIter = std::slice::Iter<'a, Morpheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.morphemes.iter()
    }
}
