//! Defines the inner representation
//! of the Decision Tree class.
use serde::Serialize;

use std::fmt;

use crate::errors::{Result, TreeError};
use crate::sample::{Row, Value};
use super::comparator::Comparator;


/// Enumeration of internal decision nodes and leaves.
#[derive(Clone, PartialEq, Serialize)]
pub enum Node {
    /// A node that tests one attribute and owns its branches.
    Internal {
        /// Name of the tested attribute.
        attribute: String,
        /// Score of the split under the training criterion.
        score: f64,
        /// Branches, in the order they were created.
        branches: Vec<Branch>,
    },
    /// A node that has no child.
    Leaf {
        /// The predicted value.
        prediction: Value,
    },
}


/// An edge from an internal node to one of its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    /// The test applied to the observed value.
    pub comparator: Comparator,
    /// The value the observed value is compared against.
    pub value: Value,
    /// The subtree reached when the test holds.
    pub child: Box<Node>,
}


impl Branch {
    /// Construct a new branch.
    pub fn new(comparator: Comparator, value: Value, child: Node) -> Self {
        Self { comparator, value, child: Box::new(child) }
    }


    /// Returns `true` if `observed` passes the test of this branch.
    #[inline]
    pub fn accepts(&self, observed: &Value) -> bool {
        self.comparator.evaluate(observed, &self.value)
    }
}


impl Node {
    /// Returns a leaf predicting `prediction`.
    pub fn leaf(prediction: Value) -> Self {
        Self::Leaf { prediction }
    }


    /// Returns an internal node.
    pub fn internal<S: ToString>(
        attribute: S,
        score: f64,
        branches: Vec<Branch>,
    ) -> Self
    {
        Self::Internal { attribute: attribute.to_string(), score, branches }
    }


    /// Returns `true` if `self` is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Walk down from `self` following the first accepting branch
    /// at each node.
    /// Returns `None` if some node has no accepting branch
    /// or `row` lacks the tested attribute.
    pub fn predict(&self, row: &Row) -> Option<&Value> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { prediction } => return Some(prediction),
                Self::Internal { attribute, branches, .. } => {
                    let observed = row.get(attribute)?;
                    node = branches.iter()
                        .find(|b| b.accepts(observed))
                        .map(|b| b.child.as_ref())?;
                },
            }
        }
    }


    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { branches, .. } => {
                branches.iter()
                    .map(|b| b.child.depth() + 1)
                    .max()
                    .unwrap_or(0)
            },
        }
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { branches, .. } => {
                branches.iter().map(|b| b.child.n_leaves()).sum()
            },
        }
    }


    /// Returns the number of nodes, leaves included.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { branches, .. } => {
                1 + branches.iter().map(|b| b.child.n_nodes()).sum::<usize>()
            },
        }
    }


    /// Check that every internal node has at least one branch.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Leaf { .. } => Ok(()),
            Self::Internal { attribute, branches, .. } => {
                if branches.is_empty() {
                    return Err(TreeError::MalformedNode(attribute.clone()));
                }
                branches.iter().try_for_each(|b| b.child.validate())
            },
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Internal { attribute, branches, .. } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute}\" ];\n"
                )];

                let mut next_id = id + 1;
                for branch in branches {
                    let child_id = next_id;
                    let (mut child, return_id) = branch.child
                        .to_dot_info(child_id);
                    info.append(&mut child);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                        [ label = \"{} {}\" ];\n",
                        branch.comparator, branch.value,
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { prediction } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{prediction}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal { attribute, score, branches } => {
                f.debug_struct("Internal")
                    .field("attribute", &attribute)
                    .field("score", &score)
                    .field("branches", &branches)
                    .finish()
            },
            Self::Leaf { prediction } => {
                f.debug_struct("Leaf")
                    .field("prediction", &prediction)
                    .finish()
            },
        }
    }
}
