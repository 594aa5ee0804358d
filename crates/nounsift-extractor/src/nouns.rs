//! Noun phrase extraction over a morpheme sequence

use nounsift_domain::tag;
use nounsift_domain::MorphemeSequence;

/// Tags that pair with a following noun
const PAIRING_TAGS: [&str; 3] = [tag::NUMBER, tag::NOUN, tag::ADJECTIVE_ADNOMINAL];

/// Extract noun phrases in order of their triggering noun
///
/// For every `NN` morpheme, in this order:
/// 1. `prev cur` when the previous tag is `SN`, `NN` or `VA+ETM`
/// 2. `twoBackprev cur` when the two previous tags are `VA`, `ETM`
/// 3. `cur` alone
///
/// Duplicates are kept; counting is left to the frequency map.
pub fn extract_noun_phrases(morphemes: &MorphemeSequence) -> Vec<String> {
    let seq = morphemes.as_slice();
    let mut phrases = Vec::new();

    for (index, current) in seq.iter().enumerate() {
        if !current.has_tag(tag::NOUN) {
            continue;
        }

        if let Some(prev) = index.checked_sub(1).map(|i| &seq[i]) {
            if PAIRING_TAGS.contains(&prev.tag()) {
                phrases.push(format!("{} {}", prev.surface(), current.surface()));
            }

            if let Some(two_back) = index.checked_sub(2).map(|i| &seq[i]) {
                if two_back.has_tag(tag::ADJECTIVE) && prev.has_tag(tag::ADNOMINAL_ENDING) {
                    phrases.push(format!(
                        "{}{} {}",
                        two_back.surface(),
                        prev.surface(),
                        current.surface()
                    ));
                }
            }
        }

        phrases.push(current.surface().to_string());
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use nounsift_domain::Morpheme;

    fn seq(rows: &[(&str, &str)]) -> MorphemeSequence {
        rows.iter()
            .map(|(surface, tag)| Morpheme::new(*surface, *tag, vec![tag.to_string()]))
            .collect()
    }

    #[test]
    fn test_bare_nouns_and_pairing() {
        let phrases = extract_noun_phrases(&seq(&[("사과", "NN"), ("오렌지", "NN")]));
        assert_eq!(phrases, vec!["사과", "사과 오렌지", "오렌지"]);
    }

    #[test]
    fn test_adjective_ending_compound() {
        let phrases = extract_noun_phrases(&seq(&[("맛", "VA"), ("있", "ETM"), ("음식", "NN")]));
        assert_eq!(phrases, vec!["맛있 음식", "음식"]);
    }

    #[test]
    fn test_fused_adjective_pairs_with_space() {
        let phrases = extract_noun_phrases(&seq(&[("예쁜", "VA+ETM"), ("꽃", "NN")]));
        assert_eq!(phrases, vec!["예쁜 꽃", "꽃"]);
    }

    #[test]
    fn test_number_pairs_with_noun() {
        let phrases = extract_noun_phrases(&seq(&[("3", "SN"), ("개월", "NN")]));
        assert_eq!(phrases, vec!["3 개월", "개월"]);
    }

    #[test]
    fn test_non_noun_positions_emit_nothing() {
        let phrases = extract_noun_phrases(&seq(&[("먹", "VV"), ("었", "EP"), ("다", "EF")]));
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_other_previous_tag_emits_bare_noun_only() {
        let phrases = extract_noun_phrases(&seq(&[("을", "JKO"), ("책", "NN")]));
        assert_eq!(phrases, vec!["책"]);
    }

    #[test]
    fn test_etm_without_adjective_is_ignored() {
        let phrases = extract_noun_phrases(&seq(&[("가", "VV"), ("ㄴ", "ETM"), ("곳", "NN")]));
        assert_eq!(phrases, vec!["곳"]);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let phrases = extract_noun_phrases(&seq(&[("사과", "NNG"), ("배", "NN")]));
        assert_eq!(phrases, vec!["배"]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(extract_noun_phrases(&MorphemeSequence::default()).is_empty());
    }
}
