//! Root-to-leaf paths of a trained tree.
use serde::Serialize;

use std::fmt;

use crate::sample::Value;
use super::comparator::Comparator;
use super::node::Node;


/// One test on a root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    /// Tested attribute.
    pub attribute: String,
    /// Comparator of the branch taken.
    pub comparator: Comparator,
    /// Reference value of the branch taken.
    pub value: Value,
}


/// A root-to-leaf path:
/// `(attribute, comparator, value) -> ... -> prediction`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionPath {
    /// Tests from the root downwards.
    pub steps: Vec<PathStep>,
    /// Prediction of the leaf ending the path.
    pub prediction: Value,
}


impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.comparator, self.value)
    }
}


impl fmt::Display for DecisionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps.iter() {
            write!(f, "{step} -> ")?;
        }
        write!(f, "{}", self.prediction)
    }
}


impl Node {
    /// Returns every root-to-leaf path below `self`,
    /// leftmost branch first.
    pub fn paths(&self) -> Vec<DecisionPath> {
        let mut paths = Vec::new();
        let mut steps = Vec::new();
        collect_paths(self, &mut steps, &mut paths);
        paths
    }
}


fn collect_paths(
    node: &Node,
    steps: &mut Vec<PathStep>,
    paths: &mut Vec<DecisionPath>,
)
{
    match node {
        Node::Leaf { prediction } => {
            paths.push(DecisionPath {
                steps: steps.clone(),
                prediction: prediction.clone(),
            });
        },
        Node::Internal { attribute, branches, .. } => {
            for branch in branches {
                steps.push(PathStep {
                    attribute: attribute.clone(),
                    comparator: branch.comparator,
                    value: branch.value.clone(),
                });
                collect_paths(&branch.child, steps, paths);
                steps.pop();
            }
        },
    }
}
