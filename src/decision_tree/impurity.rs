//! Impurity measures of a label distribution.
use std::hash::Hash;

use crate::tools::helpers;

/// Returns the Gini impurity `1 - Σ p_c²` of `labels`,
/// rounded to 4 decimal digits.
/// An empty slice has impurity `0`.
pub fn gini_impurity<T>(labels: &[T]) -> f64
    where T: Hash + Eq,
{
    gini_of_counts(&counts_of(labels))
}

/// Returns the Shannon entropy `-Σ p_c log2(p_c)` of `labels`,
/// rounded to 4 decimal digits.
/// An empty slice has entropy `0`.
pub fn entropy<T>(labels: &[T]) -> f64
    where T: Hash + Eq,
{
    entropy_of_counts(&counts_of(labels))
}

fn counts_of<T: Hash + Eq>(labels: &[T]) -> Vec<usize> {
    helpers::first_seen_counts(labels.iter())
        .into_iter()
        .map(|(_, c)| c)
        .collect()
}

/// Gini impurity of a distribution given by its class counts.
#[inline(always)]
pub(crate) fn gini_of_counts(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;
    if total <= 0f64 { return 0f64; }

    let correct = counts.iter()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    helpers::round(1f64 - correct).max(0f64)
}

/// Shannon entropy (in bits) of a distribution given by its class counts.
#[inline(always)]
pub(crate) fn entropy_of_counts(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;
    if total <= 0f64 { return 0f64; }

    let e = counts.iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();

    helpers::round(e).max(0f64)
}
