//! Numeric helpers shared by the extractor and the risk rules.
//!
//! The NaN-aware reducers skip undefined values (NaN) but let infinities
//! through, so a zero time delta poisons the statistic instead of vanishing.
//! Callers sanitize afterwards.

use std::collections::HashMap;

/// Mean of the defined values; NaN when there are none.
pub fn nan_mean(values: &[f64]) -> f64 {
    let (sum, n) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

/// Population standard deviation of the defined values; NaN when there are none.
pub fn nan_std(values: &[f64]) -> f64 {
    let defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    std_dev(&defined)
}

/// Largest defined value; NaN when there are none.
pub fn nan_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v > acc { v } else { acc })
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. NaN for an empty sample, 0 for a single value.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let variance = values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Shannon entropy (bits) of the label distribution. 0 for an empty sequence.
pub fn shannon_entropy(labels: &[String]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    let total = labels.len() as f64;
    -counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Length of the longest run of consecutive identical labels. 0 for an empty sequence.
pub fn longest_streak(labels: &[String]) -> usize {
    let mut longest = 0;
    let mut streak = 0;
    let mut prev: Option<&str> = None;
    for label in labels {
        if prev == Some(label.as_str()) {
            streak += 1;
        } else {
            streak = 1;
        }
        longest = longest.max(streak);
        prev = Some(label.as_str());
    }
    longest
}

/// Distinct labels over total labels. 0 for an empty sequence.
pub fn distinct_ratio(labels: &[String]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let distinct: std::collections::HashSet<&str> = labels.iter().map(String::as_str).collect();
    distinct.len() as f64 / labels.len() as f64
}
