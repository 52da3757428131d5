//! Split rules and the search for the best split.
use fixedbitset::FixedBitSet;
use rayon::prelude::*;
use serde::Serialize;

use crate::sample::{Feature, Sample, Value};
use super::comparator::Comparator;
use super::criterion::Criterion;


/// How the rows of a node are distributed among its branches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SplitRule {
    /// Two branches against a single reference value.
    Binary {
        /// Reference value shared by both branches.
        value: Value,
        /// Comparator of the first branch.
        left: Comparator,
        /// Comparator of the second branch.
        right: Comparator,
    },
    /// One `=` branch per value.
    Multiway {
        /// Observed values, in first-seen order.
        values: Vec<Value>,
    },
}


impl SplitRule {
    /// `(<=, >)` against `value`.
    pub fn numeric_cut(value: Value) -> Self {
        let left = Comparator::LessEqual;
        Self::Binary { value, left, right: left.negate() }
    }


    /// `(<, >=)` against `value`.
    pub fn numeric_threshold(value: Value) -> Self {
        let left = Comparator::Less;
        Self::Binary { value, left, right: left.negate() }
    }


    /// `(=, !=)` against `value`.
    pub fn category_match(value: Value) -> Self {
        let left = Comparator::Equal;
        Self::Binary { value, left, right: left.negate() }
    }


    /// Returns the `(comparator, reference)` pair of each branch,
    /// in branch order.
    pub fn branches(&self) -> Vec<(Comparator, Value)> {
        match self {
            Self::Binary { value, left, right } => {
                vec![(*left, value.clone()), (*right, value.clone())]
            },
            Self::Multiway { values } => {
                values.iter()
                    .map(|v| (Comparator::Equal, v.clone()))
                    .collect()
            },
        }
    }


    /// Returns the number of branches.
    pub fn arity(&self) -> usize {
        match self {
            Self::Binary { .. } => 2,
            Self::Multiway { values } => values.len(),
        }
    }
}


/// The rows one branch of a split receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Comparator of the branch.
    pub comparator: Comparator,
    /// Reference value of the branch.
    pub value: Value,
    /// Rows accepted by `comparator(_, value)`, in their original order.
    pub rows: Vec<usize>,
}


/// The best split found on a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSplit {
    /// Score of the split under the criterion.
    pub score: f64,
    /// The rule achieving `score`.
    pub rule: SplitRule,
    /// Whether the attribute is numeric.
    pub is_numeric: bool,
}


/// The best split found over all remaining attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Index of the attribute in the [`Sample`].
    pub attribute: usize,
    /// Name of the attribute.
    pub name: String,
    /// Score of the split under the criterion.
    pub score: f64,
    /// The rule achieving `score`.
    pub rule: SplitRule,
    /// Whether the attribute is numeric.
    pub is_numeric: bool,
}


/// Returns the best split of `target` over `rows` on `attribute`.
///
/// Every distinct value of `attribute` over `rows` is a candidate,
/// visited in first-seen order; a later candidate wins
/// only if it scores strictly better.
/// For a multiway rule the single candidate carries
/// all observed values.
/// Returns `None` if `rows` is empty.
pub fn best_split_for_attribute(
    criterion: Criterion,
    target: &Feature,
    attribute: &Feature,
    rows: &[usize],
) -> Option<AttributeSplit>
{
    let kind = attribute.kind();
    let is_numeric = attribute.is_numeric();
    let values = attribute.unique_values(rows);
    if values.is_empty() { return None; }

    if criterion.is_multiway(kind) {
        let rule = SplitRule::Multiway { values };
        let score = criterion.evaluate(target, attribute, rows, &rule);
        return Some(AttributeSplit { score, rule, is_numeric });
    }

    let mut best: Option<AttributeSplit> = None;
    for value in values {
        let rule = criterion.binary_rule(kind, value);
        let score = criterion.evaluate(target, attribute, rows, &rule);
        let replace = best.as_ref()
            .map_or(true, |b| criterion.is_better(score, b.score));
        if replace {
            best = Some(AttributeSplit { score, rule, is_numeric });
        }
    }
    best
}


/// Returns the best split of the target over `rows`
/// among the attributes flagged in `attributes`.
///
/// Attributes are scored in parallel, but the winner is picked
/// in column order with the same strict tie-break as
/// [`best_split_for_attribute`], so the result is deterministic.
/// Returns `None` if no attribute is left.
pub fn best_split_for_dataset(
    criterion: Criterion,
    sample: &Sample,
    rows: &[usize],
    attributes: &FixedBitSet,
) -> Option<Split>
{
    let features = sample.features();
    let target = sample.target();

    let candidates = attributes.ones()
        .collect::<Vec<_>>()
        .into_par_iter()
        .filter_map(|i| {
            best_split_for_attribute(criterion, target, &features[i], rows)
                .map(|split| (i, split))
        })
        .collect::<Vec<_>>();

    let mut best: Option<(usize, AttributeSplit)> = None;
    for (i, split) in candidates {
        let replace = best.as_ref()
            .map_or(true, |(_, b)| criterion.is_better(split.score, b.score));
        if replace { best = Some((i, split)); }
    }

    best.map(|(attribute, split)| {
        let AttributeSplit { score, rule, is_numeric } = split;
        let name = features[attribute].name().to_string();
        Split { attribute, name, score, rule, is_numeric }
    })
}
