// crates/gazetteer-core/src/similarity.rs

/// Classic Levenshtein edit distance over Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1. Uses the full
/// `(len(a) + 1) x (len(b) + 1)` table; place names are short, so the
/// quadratic memory is not a concern.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }

    dp[m][n]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are vacuously identical and score `1.0`. Lengths are
/// counted in chars, not bytes, so Bengali names are not penalised for
/// their three-byte UTF-8 encoding.
///
/// ```rust
/// use gazetteer_core::similarity;
///
/// assert_eq!(similarity("ab", "ac"), 0.5);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    1.0 - distance as f64 / max_len as f64
}
