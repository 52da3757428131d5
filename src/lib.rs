#![warn(missing_docs)]

//!
//! A crate that induces decision trees from tabular data.
//!
//! Two splitting criteria are provided.
//!
//! - `Criterion::Gini` (CART)
//!     Minimizes the weighted Gini impurity of a binary split.
//!     Numeric attributes split by `(<=, >)`,
//!     categorical attributes split by `(=, !=)`.
//!
//! - `Criterion::Entropy` (ID3)
//!     Maximizes the information gain.
//!     Numeric attributes split by `(<, >=)`,
//!     categorical attributes split into one branch per observed value.
//!
//! Each attribute is used at most once along a root-to-leaf path.
//! A leaf predicts the mode of a categorical target
//! or the mean of a numeric one.
//!
//! ```no_run
//! use minitrees::prelude::*;
//! use polars::prelude::*;
//!
//! let col1 = Series::new("col1", &[1i64, 2, 1, 1, 1]);
//! let col2 = Series::new("col2", &["x", "y", "x", "y", "x"]);
//! let data = DataFrame::new(vec![col1, col2]).unwrap();
//! let target = Series::new("class", &["a", "a", "b", "b", "b"]);
//!
//! let mut tree = DecisionTreeBuilder::new()
//!     .criterion(Criterion::Entropy)
//!     .build();
//! tree.train(&data, &target).unwrap();
//! println!("{tree}");
//! ```

pub mod constants;
pub mod errors;
pub mod tools;
pub mod sample;
pub mod decision_tree;
pub mod prelude;


pub use errors::{Result, TreeError};

pub use sample::{
    Feature,
    FeatureKind,
    Row,
    Sample,
    Value,
};

pub use decision_tree::{
    Comparator,
    Criterion,
    DecisionPath,
    DecisionTree,
    DecisionTreeBuilder,
    Node,
};
