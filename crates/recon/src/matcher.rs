//! Approximate string matching for name variants.

use std::cmp::Ordering;

/// Edit distance over characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a_chars.iter().enumerate() {
        let mut cur = vec![i + 1];
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            cur.push((prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1));
        }
        prev = cur;
    }
    prev[b_chars.len()]
}

/// Normalized similarity in [0,1]: `1 - distance / max_len`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Every name in `pool` at least `cutoff` similar to `target`, most similar
/// first. Ties keep pool (rank) order. No fixed count limit; callers walk
/// as many as they need.
pub fn close_matches<'a>(target: &str, pool: &'a [String], cutoff: f64) -> Vec<(&'a str, f64)> {
    let mut matches: Vec<(&str, f64)> = pool
        .iter()
        .map(|name| (name.as_str(), similarity(target, name)))
        .filter(|(_, score)| *score >= cutoff)
        .collect();
    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    matches
}
