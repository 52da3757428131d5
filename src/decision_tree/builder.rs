use super::criterion::Criterion;
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .criterion(Criterion::Entropy)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTreeBuilder {
    max_depth: Option<usize>,
    criterion: Criterion,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: None (grow until the leaves are pure
    ///            or the attributes run out),
    /// criterion: Criterion::Gini,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Specify the maximal depth of the tree.
    /// The root sits at depth `0`,
    /// so `max_depth(0)` yields a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Remove the depth limit.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Gini`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Build an untrained `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.criterion, self.max_depth)
    }
}
