//! Exports the tree learner, its configuration, and the data types.
//!
pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeBuilder,
    Criterion,


    // Trained model
    Node,
    Branch,
    Comparator,
    DecisionPath,
};


pub use crate::sample::{
    Feature,
    FeatureKind,
    Row,
    Sample,
    Value,
};


pub use crate::errors::TreeError;
