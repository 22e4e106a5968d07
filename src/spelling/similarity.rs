//! Pairwise word similarity measures used to rank correction candidates.
//!
//! All functions here are pure, case-sensitive, and operate on raw
//! character sequences without any normalization.

use ahash::AHashSet;

/// Positional similarity between two words.
///
/// Counts matching characters position by position from the front and
/// from the back, each over a window of `min(len(a), len(b))` characters,
/// and averages the two counts. The result grows with word length; it is
/// a ranking score, not a probability.
pub fn similarity_metric(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let window = a_chars.len().min(b_chars.len());

    let mut left_matches = 0usize;
    for i in 0..window {
        if a_chars[i] == b_chars[i] {
            left_matches += 1;
        }
    }

    let mut right_matches = 0usize;
    for i in 1..=window {
        if a_chars[a_chars.len() - i] == b_chars[b_chars.len() - i] {
            right_matches += 1;
        }
    }

    (left_matches + right_matches) as f64 / 2.0
}

/// Character-overlap ratio between two words: the Jaccard index of their
/// distinct character sets, ignoring position and repetition.
///
/// Returns 0.0 when both words are empty (the union is empty, so the
/// literal formula would divide by zero).
pub fn common_percent(a: &str, b: &str) -> f64 {
    let chars_a: AHashSet<char> = a.chars().collect();
    let chars_b: AHashSet<char> = b.chars().collect();

    let union = chars_a.union(&chars_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = chars_a.intersection(&chars_b).count();

    intersection as f64 / union as f64
}

/// Number of distinct characters the two words share.
pub fn common_count(a: &str, b: &str) -> usize {
    let chars_a: AHashSet<char> = a.chars().collect();
    let chars_b: AHashSet<char> = b.chars().collect();

    chars_a.intersection(&chars_b).count()
}

/// Check whether two words differ in length by at most `max_diff`
/// characters.
pub fn within_length_diff(a: &str, b: &str, max_diff: usize) -> bool {
    a.chars().count().abs_diff(b.chars().count()) <= max_diff
}
