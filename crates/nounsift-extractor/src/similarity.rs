//! Similarity scores over noun frequency maps
//!
//! [`similarity_score`] is a weighted overlap, `Σ countA[k] * countB[k]`. It
//! is not normalized and is not comparable to a textbook Dice coefficient;
//! its magnitude grows with text length. [`normalized_dice`] is the bounded
//! multiset Dice coefficient, offered separately.

use nounsift_domain::NounFrequencyMap;

/// Weighted overlap of two frequency maps
///
/// Symmetric in value. Saturates at `u64::MAX` instead of overflowing.
///
/// ```
/// use nounsift_domain::NounFrequencyMap;
/// use nounsift_extractor::similarity_score;
///
/// let a = NounFrequencyMap::from_nouns(["사과", "사과", "배"]);
/// let b = NounFrequencyMap::from_nouns(["사과", "포도"]);
/// assert_eq!(similarity_score(&a, &b), 2);
/// ```
pub fn similarity_score(a: &NounFrequencyMap, b: &NounFrequencyMap) -> u64 {
    a.iter()
        .map(|(noun, count)| count.saturating_mul(b.count(noun)))
        .fold(0, u64::saturating_add)
}

/// Multiset Dice coefficient in `[0.0, 1.0]`
///
/// `2 * Σ min(countA[k], countB[k]) / (Σ countA + Σ countB)`; two empty maps
/// score `0.0`.
pub fn normalized_dice(a: &NounFrequencyMap, b: &NounFrequencyMap) -> f64 {
    // Summed in u128 so counts near u64::MAX cannot overflow or skew the ratio
    let total: u128 = a
        .iter()
        .chain(b.iter())
        .map(|(_, count)| u128::from(count))
        .sum();
    if total == 0 {
        return 0.0;
    }

    let shared: u128 = a
        .iter()
        .map(|(noun, count)| u128::from(count.min(b.count(noun))))
        .sum();

    2.0 * shared as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_overlap() {
        let a = NounFrequencyMap::from_nouns(["a", "a", "b", "c"]);
        let b = NounFrequencyMap::from_nouns(["a", "b", "b", "b", "d"]);
        // 2*1 + 1*3
        assert_eq!(similarity_score(&a, &b), 5);
    }

    #[test]
    fn test_empty_maps() {
        let empty = NounFrequencyMap::new();
        let a = NounFrequencyMap::from_nouns(["a"]);
        assert_eq!(similarity_score(&empty, &a), 0);
        assert_eq!(similarity_score(&empty, &empty), 0);
        assert_eq!(normalized_dice(&empty, &empty), 0.0);
    }

    #[test]
    fn test_saturates() {
        let mut a = NounFrequencyMap::new();
        a.insert("a", u64::MAX);
        a.insert("b", 2);
        assert_eq!(similarity_score(&a, &a), u64::MAX);
    }

    #[test]
    fn test_normalized_dice_huge_counts() {
        let mut a = NounFrequencyMap::new();
        a.insert("a", u64::MAX);
        a.insert("b", u64::MAX);
        let mut b = NounFrequencyMap::new();
        b.insert("a", u64::MAX);

        assert!((normalized_dice(&a, &a) - 1.0).abs() < 1e-12);
        assert!((normalized_dice(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_dice_values() {
        let a = NounFrequencyMap::from_nouns(["a", "a", "b"]);
        let b = NounFrequencyMap::from_nouns(["a", "c"]);
        // 2 * min(2,1) / (3 + 2)
        assert!((normalized_dice(&a, &b) - 0.4).abs() < 1e-12);
        assert!((normalized_dice(&a, &a) - 1.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn map_strategy() -> impl Strategy<Value = NounFrequencyMap> {
        prop::collection::btree_map("[a-f]{1,2}", 1u64..50, 0..12)
            .prop_map(|counts| {
                let mut map = NounFrequencyMap::new();
                for (noun, count) in counts {
                    map.insert(noun, count);
                }
                map
            })
    }

    proptest! {
        /// Property: swapping the maps does not change the score
        #[test]
        fn test_score_symmetric(a in map_strategy(), b in map_strategy()) {
            prop_assert_eq!(similarity_score(&a, &b), similarity_score(&b, &a));
        }

        /// Property: self score is the sum of squared counts
        #[test]
        fn test_self_score_is_sum_of_squares(a in map_strategy()) {
            let expected: u64 = a.iter().map(|(_, count)| count * count).sum();
            prop_assert_eq!(similarity_score(&a, &a), expected);
        }

        /// Property: disjoint key sets score zero
        #[test]
        fn test_disjoint_maps_score_zero(a in map_strategy(), b in map_strategy()) {
            let mut shifted = NounFrequencyMap::new();
            for (noun, count) in b.iter() {
                shifted.insert(format!("{}_b", noun), count);
            }
            prop_assert_eq!(similarity_score(&a, &shifted), 0);
            prop_assert_eq!(normalized_dice(&a, &shifted), 0.0);
        }

        /// Property: the normalized variant stays within bounds and is symmetric
        #[test]
        fn test_normalized_dice_bounded(a in map_strategy(), b in map_strategy()) {
            let score = normalized_dice(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
            prop_assert!((score - normalized_dice(&b, &a)).abs() < 1e-12);
        }
    }
}
