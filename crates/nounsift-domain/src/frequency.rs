//! Noun frequency module - counted multisets of noun phrases

use std::collections::BTreeMap;

/// Occurrence counts of noun phrases in one text
///
/// Keys are unique noun strings. Iteration is in key order, so every
/// derived listing is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounFrequencyMap {
    counts: BTreeMap<String, u64>,
}

/// A noun and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounCount {
    /// The noun phrase
    pub noun: String,
    /// Number of occurrences
    pub count: u64,
}

impl NounFrequencyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every noun in the input, keeping no other filter
    pub fn from_nouns<I, S>(nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for noun in nouns {
            map.add(noun);
        }
        map
    }

    /// Record one occurrence
    pub fn add(&mut self, noun: impl Into<String>) {
        *self.counts.entry(noun.into()).or_insert(0) += 1;
    }

    /// Set the count for a noun directly
    pub fn insert(&mut self, noun: impl Into<String>, count: u64) {
        self.counts.insert(noun.into(), count);
    }

    /// Count for a noun, if present
    pub fn get(&self, noun: &str) -> Option<u64> {
        self.counts.get(noun).copied()
    }

    /// Count for a noun, zero if absent
    pub fn count(&self, noun: &str) -> u64 {
        self.get(noun).unwrap_or(0)
    }

    /// Number of distinct nouns
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no noun was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |sum, count| sum.saturating_add(*count))
    }

    /// Iterate `(noun, count)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(noun, count)| (noun.as_str(), *count))
    }

    /// Counts sorted by descending count
    ///
    /// Equal counts keep key order.
    pub fn sorted_counts(&self) -> Vec<NounCount> {
        let mut counts: Vec<NounCount> = self
            .iter()
            .map(|(noun, count)| NounCount {
                noun: noun.to_string(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

impl<S: Into<String>> FromIterator<S> for NounFrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_nouns(iter)
    }
}

impl<S: Into<String>> Extend<S> for NounFrequencyMap {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for noun in iter {
            self.add(noun);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_duplicates() {
        let map = NounFrequencyMap::from_nouns(["사과", "오렌지", "사과"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.count("사과"), 2);
        assert_eq!(map.count("오렌지"), 1);
        assert_eq!(map.count("포도"), 0);
        assert_eq!(map.get("포도"), None);
    }

    #[test]
    fn test_sorted_counts_descending() {
        let map: NounFrequencyMap = ["b", "a", "c", "c", "a", "c"].into_iter().collect();
        let sorted = map.sorted_counts();
        assert_eq!(sorted[0], NounCount { noun: "c".to_string(), count: 3 });
        assert_eq!(sorted[1], NounCount { noun: "a".to_string(), count: 2 });
        assert_eq!(sorted[2], NounCount { noun: "b".to_string(), count: 1 });
    }

    #[test]
    fn test_sorted_counts_ties_in_key_order() {
        let map = NounFrequencyMap::from_nouns(["z", "y", "x"]);
        let nouns: Vec<String> = map.sorted_counts().into_iter().map(|c| c.noun).collect();
        assert_eq!(nouns, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_extend_and_total() {
        let mut map = NounFrequencyMap::new();
        assert!(map.is_empty());
        map.extend(["a", "b"]);
        map.extend(vec!["a".to_string()]);
        assert_eq!(map.total(), 3);
        map.insert("b", 5);
        assert_eq!(map.count("b"), 5);

        map.insert("c", u64::MAX);
        assert_eq!(map.total(), u64::MAX);
    }
}
