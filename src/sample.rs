//! Tabular data handed to the tree:
//! typed columns, the training [`Sample`], and prediction [`Row`]s.
mod value;
mod feature;
mod sample_struct;
mod row;

pub use value::{FeatureKind, Value};
pub use feature::Feature;
pub use sample_struct::Sample;
pub use row::Row;
