//! Keyword extraction from runs of contiguous nouns

use crate::config::KeywordOptions;
use crate::error::ExtractorError;
use nounsift_domain::tag;
use nounsift_domain::{Morpheme, MorphemeSequence};
use std::collections::HashSet;

/// Extract up to `options.n` distinct keywords
///
/// Runs of two or more qualifying nouns become candidates. Candidates are
/// deduplicated in first-seen order, cut to the first `n`, then ordered by
/// descending length (stable for equal lengths).
///
/// A run still open when the sequence ends is not recorded.
///
/// # Errors
///
/// [`ExtractorError::Config`] if `options.n` is zero.
pub fn extract_keywords(
    morphemes: &MorphemeSequence,
    options: &KeywordOptions,
) -> Result<Vec<String>, ExtractorError> {
    options.validate()?;
    Ok(rank_keywords(keyword_candidates(morphemes), options.n))
}

/// A noun that can extend a run: `NN`, longer than one character, not a compound
fn is_run_noun(morpheme: &Morpheme) -> bool {
    morpheme.has_tag(tag::NOUN) && morpheme.char_len() > 1 && morpheme.is_simple()
}

fn keyword_candidates(morphemes: &MorphemeSequence) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut run: Vec<String> = Vec::new();
    let mut pending_number = String::new();

    for morpheme in morphemes {
        if morpheme.has_tag(tag::NUMBER) {
            pending_number = morpheme.surface().to_string();
        } else if is_run_noun(morpheme) {
            let mut token = std::mem::take(&mut pending_number);
            token.push_str(morpheme.surface());
            run.push(token);
        } else {
            if run.len() > 1 {
                candidates.push(run.join(" "));
            }
            run.clear();
            pending_number.clear();
        }
    }

    candidates
}

fn rank_keywords(candidates: Vec<String>, n: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.clone()))
        .take(n)
        .collect();

    keywords.sort_by_key(|keyword| std::cmp::Reverse(keyword.chars().count()));
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(surface: &str, tag: &str) -> Morpheme {
        Morpheme::new(surface, tag, vec![tag.to_string(), "*".into(), "*".into(), "*".into(), "*".into()])
    }

    fn brk() -> Morpheme {
        Morpheme::new(".", "SF", vec!["SF".to_string()])
    }

    fn keywords(morphemes: Vec<Morpheme>, n: usize) -> Vec<String> {
        extract_keywords(&MorphemeSequence::new(morphemes), &KeywordOptions::new(n)).unwrap()
    }

    #[test]
    fn test_number_prefix_joins_following_noun() {
        let result = keywords(
            vec![
                Morpheme::new("3", "SN", vec![]),
                Morpheme::new("개월", "NN", vec!["-".into(), "-".into(), "-".into(), "-".into(), "*".into()]),
                simple("계획", "NN"),
                brk(),
            ],
            3,
        );
        assert_eq!(result, vec!["3개월 계획"]);
    }

    #[test]
    fn test_single_noun_run_is_not_a_keyword() {
        let result = keywords(vec![simple("사과", "NN"), brk(), simple("바나나", "NN"), brk()], 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_trailing_run_is_not_flushed() {
        let result = keywords(vec![simple("서울", "NN"), simple("시청", "NN")], 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_short_and_compound_nouns_break_runs() {
        let compound = Morpheme::new(
            "가격표",
            "NN",
            vec!["NN".into(), "*".into(), "*".into(), "*".into(), "Compound".into()],
        );
        let result = keywords(
            vec![
                simple("서울", "NN"),
                simple("역", "NN"),
                simple("광장", "NN"),
                simple("분수", "NN"),
                compound,
                brk(),
            ],
            3,
        );
        assert_eq!(result, vec!["광장 분수"]);
    }

    #[test]
    fn test_missing_compound_slot_does_not_qualify() {
        let short = Morpheme::new("도서관", "NN", vec!["NN".into()]);
        let result = keywords(vec![simple("국립", "NN"), short, simple("건물", "NN"), brk()], 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_number_reset_by_break() {
        let result = keywords(
            vec![
                Morpheme::new("2", "SN", vec![]),
                brk(),
                simple("국제", "NN"),
                simple("공항", "NN"),
                brk(),
            ],
            3,
        );
        assert_eq!(result, vec!["국제 공항"]);
    }

    #[test]
    fn test_dedup_truncate_then_sort() {
        let result = keywords(
            vec![
                simple("한국", "NN"),
                simple("경제", "NN"),
                brk(),
                simple("한국", "NN"),
                simple("경제", "NN"),
                brk(),
                simple("세계", "NN"),
                simple("금융", "NN"),
                simple("시장", "NN"),
                brk(),
                simple("인공", "NN"),
                simple("지능", "NN"),
                simple("연구", "NN"),
                simple("센터", "NN"),
                brk(),
            ],
            2,
        );
        // Truncation happens before sorting, so the longest candidate is dropped.
        assert_eq!(result, vec!["세계 금융 시장", "한국 경제"]);
    }

    #[test]
    fn test_equal_lengths_keep_insertion_order() {
        let result = keywords(
            vec![
                simple("가나", "NN"),
                simple("다라", "NN"),
                brk(),
                simple("마바", "NN"),
                simple("사아", "NN"),
                brk(),
            ],
            3,
        );
        assert_eq!(result, vec!["가나 다라", "마바 사아"]);
    }

    #[test]
    fn test_zero_count_is_config_error() {
        let err = extract_keywords(&MorphemeSequence::default(), &KeywordOptions::new(0)).unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
    }
}
