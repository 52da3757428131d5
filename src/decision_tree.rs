//! Decision tree induction and prediction.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the impurity measures.
pub mod impurity;
/// Defines the splitting criteria and the split evaluation.
pub mod criterion;
/// Defines the split rules and the split search.
pub mod split;

mod comparator;
mod node;
mod path;


pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use criterion::{Criterion, gini_index, information_gain};
pub use impurity::{entropy, gini_impurity};
pub use split::{
    AttributeSplit,
    Partition,
    Split,
    SplitRule,
    best_split_for_attribute,
    best_split_for_dataset,
};
pub use comparator::Comparator;
pub use node::{Branch, Node};
pub use path::{DecisionPath, PathStep};
