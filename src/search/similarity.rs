//! Normalized edit-distance similarity between two tokens.

use rapidfuzz::distance::levenshtein;

/// Returns `1 - levenshtein(a, b) / max(|a|, |b|)`, in `[0, 1]`.
///
/// Lengths are counted in characters, and insertion, deletion and substitution
/// all cost 1. Two empty strings are identical and score 1.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein::distance(a.chars(), b.chars());
    1.0 - distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    /// Full-matrix Levenshtein used to cross-check the library distance.
    fn reference_distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];

        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=b.len() {
            matrix[0][j] = j;
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                matrix[i][j] = (matrix[i - 1][j] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j - 1] + cost);
            }
        }

        matrix[a.len()][b.len()]
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("arduino")]
    #[case("stm32")]
    #[case("über")]
    fn test_identity(#[case] s: &str) {
        check!(similarity(s, s) == 1.0);
    }

    #[test]
    fn test_empty_strings() {
        check!(similarity("", "") == 1.0);
        check!(similarity("", "abc") == 0.0);
        check!(similarity("abc", "") == 0.0);
    }

    #[rstest]
    #[case("kitten", "sitting")]
    #[case("arduino", "arduno")]
    #[case("embedded", "embeded")]
    #[case("rust", "trust")]
    #[case("flaw", "lawn")]
    #[case("", "xyz")]
    #[case("naïve", "naive")]
    fn test_symmetry(#[case] a: &str, #[case] b: &str) {
        check!(similarity(a, b) == similarity(b, a));
    }

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("arduino", "arduno", 1)]
    #[case("sensor", "sensors", 1)]
    #[case("naïve", "naive", 1)]
    #[case("abc", "xyz", 3)]
    fn test_matches_full_matrix_distance(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: usize,
    ) {
        check!(reference_distance(a, b) == expected);
        let max_len = a.chars().count().max(b.chars().count()) as f64;
        check!((similarity(a, b) - (1.0 - expected as f64 / max_len)).abs() < 1e-12);
    }

    #[rstest]
    #[case("sensor", "sensors")]
    #[case("embedded", "embeded")]
    #[case("arduino", "arduno")]
    fn test_typos_clear_fuzzy_floor(#[case] a: &str, #[case] b: &str) {
        check!(similarity(a, b) > 0.7);
    }

    #[rstest]
    #[case("xyzxyz", "stm32")]
    #[case("rust", "page")]
    fn test_unrelated_words_stay_low(#[case] a: &str, #[case] b: &str) {
        check!(similarity(a, b) <= 0.7);
    }

    #[test]
    fn test_always_in_unit_range() {
        let words = ["", "a", "ab", "abc", "hello", "world", "stm32", "über"];
        for a in words {
            for b in words {
                let value = similarity(a, b);
                check!(value.is_finite());
                check!((0.0..=1.0).contains(&value));
            }
        }
    }
}
