//! Abbreviation scoring for preset search.
//!
//! Scores how well `abbrev` reads as an abbreviation of `text`: every
//! character of `abbrev` must appear in `text` in order. Matched characters
//! score 1, skipped characters before a word start or an uppercase letter
//! score a little less, other skipped characters score nothing, and the
//! unmatched tail scores high. The result is the best per-character average,
//! in `[0, 1]`.

const NO_MATCH: f32 = 0.0;
const MATCH: f32 = 1.0;
const TRAILING: f32 = 0.8;
const TRAILING_BUT_STARTED: f32 = 0.9;
const BUFFER: f32 = 0.85;

/// Best abbreviation score of `abbrev` against `text`.
///
/// An empty `abbrev` scores [`TRAILING`]; an `abbrev` longer than `text`, or
/// one whose characters do not all appear in order, scores 0.
#[must_use]
pub fn score(text: &str, abbrev: &str) -> f32 {
    let cased: Vec<char> = text.chars().collect();
    let abbrev: Vec<char> = abbrev.chars().map(lower).collect();
    if abbrev.is_empty() {
        return TRAILING;
    }
    if abbrev.len() > cased.len() {
        return NO_MATCH;
    }

    let search: Vec<char> = cased.iter().copied().map(lower).collect();
    let scorer = Scorer {
        cased: &cased,
        search: &search,
    };
    let trail = if search.first() == abbrev.first() {
        TRAILING_BUT_STARTED
    } else {
        TRAILING
    };

    // best[from]: highest total for `cased[from..]` once the remaining
    // abbreviation characters are placed there, `None` if they cannot be.
    let len = cased.len();
    let mut best: Vec<Option<f32>> =
        (0..=len).map(|from| Some((len - from) as f32 * trail)).collect();
    for &c in abbrev.iter().rev() {
        best = (0..=len)
            .map(|from| {
                (from..len)
                    .filter(|&i| search[i] == c)
                    .filter_map(|i| Some(scorer.segment(from, i) + best[i + 1]?))
                    .reduce(f32::max)
            })
            .collect();
    }
    best[0].unwrap_or(NO_MATCH) / len as f32
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

struct Scorer<'a> {
    cased: &'a [char],
    search: &'a [char],
}

impl Scorer<'_> {
    /// Total for `cased[from..=index]` when `index` is the next match and
    /// `from` follows the previous one.
    fn segment(&self, from: usize, index: usize) -> f32 {
        let gap = (index - from) as f32;
        if self.is_new_word(index) {
            if index > from {
                // The separator before a word counts as matched
                MATCH + (gap - 1.0) * BUFFER + MATCH
            } else {
                MATCH
            }
        } else if self.cased[index].is_uppercase() {
            gap * BUFFER + MATCH
        } else {
            // Skipped lowercase characters score nothing
            MATCH
        }
    }

    fn is_new_word(&self, index: usize) -> bool {
        index == 0 || matches!(self.cased[index - 1], ' ' | '\t')
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn exact_match_scores_one() {
        assert!((score("fist", "fist") - 1.0).abs() < 1e-6);
        assert!((score("Fist", "fist") - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_abbreviation_scores_trailing() {
        assert!((score("anything", "") - TRAILING).abs() < 1e-6);
    }

    #[test]
    fn missing_or_too_long_scores_zero() {
        assert_eq!(score("fist", "fisty"), 0.0);
        assert_eq!(score("open palm", "xyz"), 0.0);
        assert_eq!(score("abc", "cb"), 0.0);
    }

    #[test]
    fn prefix_scores_trailing_but_started() {
        // f,i matched (2 x 1.0) + s,t trailing (2 x 0.9)
        assert!((score("fist", "fi") - 0.95).abs() < 1e-6);
    }

    #[test]
    fn word_initials_score_higher_than_scattered_letters() {
        let initials = score("open palm", "op");
        let scattered = score("open palm", "pa");
        assert!(initials > scattered);
        assert!(initials > 0.8);
    }

    #[test]
    fn uppercase_boundaries_count_as_buffer() {
        // "HP" against "HandPose": H match, andP buffer, ose trailing
        let camel = score("HandPose", "hp");
        let flat = score("handpose", "hp");
        assert!(camel > flat);
    }

    #[test]
    fn repetitive_text_scores_quickly() {
        let text = "a".repeat(40);
        let start = Instant::now();
        let s = score(&text, &"a".repeat(20));
        assert!(start.elapsed() < Duration::from_secs(1));
        // 20 matches + 20 trailing at 0.9, over 40
        assert!((s - 0.95).abs() < 1e-5);
    }

    #[test]
    fn separator_before_word_start_counts_as_matched() {
        // o match, "pen" buffer, " " match, x match, "yz" trailing
        let expected = (1.0 + 3.0 * BUFFER + 1.0 + 1.0 + 2.0 * 0.9) / 8.0;
        assert!((score("open xyz", "ox") - expected).abs() < 1e-6);
    }
}
