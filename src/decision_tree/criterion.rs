//! Split-quality criteria and the evaluation of a candidate split.
use serde::Serialize;

use std::fmt;

use crate::sample::{Feature, FeatureKind, Value};
use crate::tools::helpers;
use super::impurity::{entropy_of_counts, gini_of_counts};
use super::split::SplitRule;


/// Splitting criteria for growing decision tree.
/// * `Criterion::Gini` minimizes the weighted Gini impurity
///     of a binary partition (CART).
///     Numeric attributes split by `(<=, >)`,
///     categorical attributes split by `(=, !=)`.
/// * `Criterion::Entropy` maximizes the information gain (ID3).
///     Numeric attributes split by `(<, >=)`,
///     categorical attributes split into one branch per observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Criterion {
    /// Gini impurity.
    #[default]
    Gini,
    /// Shannon entropy (information gain).
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy (Information gain)",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns `true` if `candidate` is a strictly better score
    /// than `incumbent`.
    /// Equal scores never replace the incumbent.
    #[inline]
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Gini => candidate < incumbent,
            Self::Entropy => candidate > incumbent,
        }
    }


    /// Returns `true` if this criterion splits attributes of `kind`
    /// into one branch per observed value.
    #[inline]
    pub fn is_multiway(&self, kind: FeatureKind) -> bool {
        matches!((self, kind), (Self::Entropy, FeatureKind::Categorical))
    }


    /// Returns the binary rule this criterion uses
    /// to split an attribute of `kind` at `value`.
    pub fn binary_rule(&self, kind: FeatureKind, value: Value) -> SplitRule {
        match (self, kind) {
            (Self::Gini, FeatureKind::Numeric) => {
                SplitRule::numeric_cut(value)
            },
            (Self::Entropy, FeatureKind::Numeric) => {
                SplitRule::numeric_threshold(value)
            },
            (_, FeatureKind::Categorical) => {
                SplitRule::category_match(value)
            },
        }
    }


    /// Returns the score of splitting `target` over `rows`
    /// by `attribute` following `rule`.
    pub fn evaluate(
        &self,
        target: &Feature,
        attribute: &Feature,
        rows: &[usize],
        rule: &SplitRule,
    ) -> f64
    {
        match self {
            Self::Gini => gini_index(target, attribute, rows, rule),
            Self::Entropy => information_gain(target, attribute, rows, rule),
        }
    }
}


/// Returns the weighted Gini impurity
/// `Σ (|part|/n) gini(part)` of the partition of `target` over `rows`
/// induced by `rule` on `attribute`.
/// Lower is better.
pub fn gini_index(
    target: &Feature,
    attribute: &Feature,
    rows: &[usize],
    rule: &SplitRule,
) -> f64
{
    let weighted = weighted_impurity(
        target, attribute, rows, rule, gini_of_counts
    );
    helpers::round(weighted)
}


/// Returns the information gain
/// `entropy(target) - Σ (|part|/n) entropy(part)`
/// of the partition of `target` over `rows`
/// induced by `rule` on `attribute`.
/// Higher is better.
pub fn information_gain(
    target: &Feature,
    attribute: &Feature,
    rows: &[usize],
    rule: &SplitRule,
) -> f64
{
    let parent = entropy_of_counts(&target.label_counts(rows));
    let weighted = weighted_impurity(
        target, attribute, rows, rule, entropy_of_counts
    );
    // Both terms are rounded, so a split without gain
    // may come out marginally negative.
    helpers::round(parent - weighted).max(0f64)
}


/// Returns `Σ (|part|/n) impurity(part)` over the branches of `rule`.
/// Empty parts contribute `0` and are never passed to `impurity`.
fn weighted_impurity<F>(
    target: &Feature,
    attribute: &Feature,
    rows: &[usize],
    rule: &SplitRule,
    impurity: F,
) -> f64
    where F: Fn(&[usize]) -> f64,
{
    let n = rows.len();
    if n == 0 { return 0f64; }
    let n = n as f64;

    let mut part = Vec::with_capacity(rows.len());
    rule.branches()
        .into_iter()
        .map(|(comparator, value)| {
            part.clear();
            part.extend(
                rows.iter()
                    .copied()
                    .filter(|&i| attribute.test(i, comparator, &value))
            );
            if part.is_empty() { return 0f64; }

            let m = part.len() as f64;
            (m / n) * impurity(&target.label_counts(&part))
        })
        .sum::<f64>()
}
