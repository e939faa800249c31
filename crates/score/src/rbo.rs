//! Rank-biased overlap, a similarity measure for indefinite rankings.
//!
//! Extrapolated form (equation 32) from Webber, Moffat and Zobel, "A
//! Similarity Measure for Indefinite Rankings", TOIS 2010. Agreement is
//! weighted toward the top of the ranking and lists of unequal length are
//! handled by extrapolating from the overlap at the shorter list's depth.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::ScoreError;

/// RBO score for two ranked lists, in [0,1].
///
/// `p` is the persistence parameter: the probability of examining one rank
/// deeper. When absent it defaults to `1 - 1/l` for the longer length `l`
/// (the authors' suggestion for a prefix of length k: `1 - 1/k`), except
/// that two single-item lists compare exactly. A supplied `p` outside
/// (0,1) is an error, not a value to be repaired.
pub fn score<T: Eq + Hash>(list_1: &[T], list_2: &[T], p: Option<f64>) -> Result<f64, ScoreError> {
    let (short, long) = if list_1.len() <= list_2.len() {
        (list_1, list_2)
    } else {
        (list_2, list_1)
    };
    let (s, l) = (short.len(), long.len());
    if s == 0 {
        return Ok(0.0);
    }

    let p = match p {
        Some(p) => {
            if p <= 0.0 || p >= 1.0 {
                return Err(ScoreError::Persistence(p));
            }
            p
        }
        None => {
            // a one-item list would make the default p zero
            if l == 1 {
                return Ok(if short == long { 1.0 } else { 0.0 });
            }
            1.0 - 1.0 / l as f64
        }
    };

    // overlaps at ranks 1 through l
    let mut short_seen: HashSet<&T> = HashSet::new();
    let mut long_seen: HashSet<&T> = HashSet::new();
    let mut x_d = vec![0.0f64; l + 1];
    let mut sum1 = 0.0;

    for i in 0..l {
        let d = i + 1;
        let long_elem = &long[i];
        let short_elem = if i < s { Some(&short[i]) } else { None };

        if short_elem == Some(long_elem) {
            // same element at this depth: neither set needs it
            x_d[d] = x_d[d - 1] + 1.0;
        } else {
            long_seen.insert(long_elem);
            if let Some(elem) = short_elem {
                short_seen.insert(elem);
            }
            x_d[d] = x_d[d - 1]
                + if short_seen.contains(long_elem) { 1.0 } else { 0.0 }
                + short_elem.map_or(0.0, |elem| if long_seen.contains(elem) { 1.0 } else { 0.0 });
        }
        sum1 += x_d[d] / d as f64 * p.powi(d as i32);
    }

    let (sum2, sum3) = if s != l {
        let mut sum2 = 0.0;
        for d in (s + 1)..=l {
            sum2 += x_d[d] * (d - s) as f64 / (d as f64 * s as f64) * p.powi(d as i32);
        }
        let sum3 =
            ((x_d[l] - x_d[s]) / l as f64 + x_d[s] / s as f64) * p.powi(l as i32);
        (sum2, sum3)
    } else {
        (0.0, x_d[l] / l as f64 * p.powi(l as i32))
    };

    Ok((1.0 - p) / p * (sum1 + sum2) + sum3)
}
