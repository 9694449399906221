//! Fuzzy token-set similarity on a 0–100 scale.
//!
//! Compares two texts by their sets of distinct words, so word order and
//! repetition do not matter. Texts are normalised first by dropping Latin-1
//! supplement characters and lowercasing, with anything that is not a letter
//! or digit treated as a word break.

use std::collections::BTreeSet;

/// Token-set similarity ratio of `a` and `b`, rounded to an integer in `0..=100`.
///
/// # Scoring
///
/// With `sect` the shared words and `ab`/`ba` the words unique to each side
/// (each sorted and space-joined):
///
/// - either side empty after normalisation → 0
/// - shared words and one side has nothing extra → 100
/// - otherwise the best of `sect+ab` vs `sect+ba`, `sect` vs `sect+ab` and
///   `sect` vs `sect+ba`, each an indel similarity ratio
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let a = normalise(a);
    let b = normalise(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let sect: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100;
    }

    let diff_ab: Vec<char> = diff_ab.join(" ").chars().collect();
    let diff_ba: Vec<char> = diff_ba.join(" ").chars().collect();

    let sect_len = sect.join(" ").chars().count();
    let separator = usize::from(sect_len > 0);
    let ab_len = diff_ab.len();
    let ba_len = diff_ba.len();
    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    let mut best = normalised_similarity(
        indel_distance(&diff_ab, &diff_ba),
        sect_ab_len + sect_ba_len,
    );

    if sect_len > 0 {
        let sect_ab = normalised_similarity(separator + ab_len, sect_len + sect_ab_len);
        let sect_ba = normalised_similarity(separator + ba_len, sect_len + sect_ba_len);
        best = best.max(sect_ab).max(sect_ba);
    }

    // Half-to-even, matching the conventional integer ratio.
    best.round_ties_even() as u32
}

/// Normalise text for token comparison.
fn normalise(text: &str) -> String {
    text.chars()
        .filter(|c| !('\u{80}'..='\u{ff}').contains(c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_owned()
}

/// `100 * (1 - distance / total)`, or 100 when both strings are empty.
fn normalised_similarity(distance: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    100.0 - 100.0 * distance as f64 / total as f64
}

/// Insertion/deletion edit distance: `|a| + |b| - 2 * LCS(a, b)`.
fn indel_distance(a: &[char], b: &[char]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

/// Length of the longest common subsequence, using one row over the shorter input.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; short.len() + 1];
    for &lc in long {
        let mut diagonal = 0;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_texts_score_100() {
        assert_eq!(token_set_ratio("自动 驾驶", "自动 驾驶"), 100);
    }

    #[test]
    fn subset_scores_100() {
        assert_eq!(token_set_ratio("自动 驾驶", "聊聊 自动 驾驶 技术"), 100);
    }

    #[test]
    fn order_and_repetition_ignored() {
        assert_eq!(
            token_set_ratio("fuzzy was a bear", "bear a was fuzzy fuzzy"),
            100
        );
    }

    #[test]
    fn disjoint_single_letters_score_0() {
        assert_eq!(token_set_ratio("a", "b"), 0);
    }

    #[test]
    fn partial_overlap() {
        // sect = "abc"; best is sect vs sect+ab = 100 * (1 - 4/10).
        assert_eq!(token_set_ratio("abc def", "abc xyz"), 60);
    }

    #[test]
    fn no_overlap_uses_diff_ratio() {
        // "abcd" vs "abce": LCS 3, distance 2, total 8 → 75.
        assert_eq!(token_set_ratio("abcd", "abce"), 75);
    }

    #[test]
    fn empty_side_scores_0() {
        assert_eq!(token_set_ratio("", "anything"), 0);
        assert_eq!(token_set_ratio("!!!", "anything"), 0);
    }

    #[test]
    fn case_and_punctuation_normalised() {
        assert_eq!(token_set_ratio("Hello, World!", "world hello"), 100);
    }

    #[test]
    fn latin1_supplement_removed() {
        assert_eq!(normalise("café"), "caf");
        assert_eq!(normalise("扩博·智聊"), "扩博智聊");
        assert_eq!(normalise("扩博-智聊"), "扩博 智聊");
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = "自动 驾驶 的 未来";
        let b = "机器人 的 未来 发展";
        assert_eq!(token_set_ratio(a, b), token_set_ratio(b, a));
    }

    #[test]
    fn ratio_within_bounds() {
        let r = token_set_ratio("机器 学习 入门", "深度 学习 框架 对比");
        assert!(r <= 100);
    }

    #[test]
    fn lcs_basic() {
        assert_eq!(lcs_len(&chars("abcde"), &chars("ace")), 3);
        assert_eq!(lcs_len(&chars(""), &chars("abc")), 0);
        assert_eq!(lcs_len(&chars("自动驾驶"), &chars("驾驶")), 2);
    }

    #[test]
    fn indel_basic() {
        assert_eq!(indel_distance(&chars("abc"), &chars("abc")), 0);
        assert_eq!(indel_distance(&chars("abc"), &chars("xyz")), 6);
    }
}
