#![allow(dead_code)]

use levenshtein_trio::{EditKind, EditScript};

/// Collect a replayed buffer back into a string.
pub fn text(symbols: &[char]) -> String {
    symbols.iter().collect()
}

/// Reference distance from the textbook full table, independent of the crate.
pub fn reference_distance(a: &[char], b: &[char]) -> usize {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let sub = dp[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = sub.min(dp[i - 1][j] + 1).min(dp[i][j - 1] + 1);
        }
    }
    dp[a.len()][b.len()]
}

/// Source symbols consumed and target symbols produced must add up.
pub fn consumes_exactly(script: &EditScript<char>, m: usize, n: usize) -> bool {
    let diag = script.count(EditKind::Match) + script.count(EditKind::Substitute);
    diag + script.count(EditKind::Delete) == m && diag + script.count(EditKind::Insert) == n
}
