use polars::prelude::*;
use rayon::prelude::*;

use std::ops::Index;
use std::collections::HashMap;

use crate::{
    decision_tree::{Comparator, Partition, SplitRule},
    errors::Result,
    tools::checkers,
};
use super::feature::Feature;
use super::value::Value;


/// Struct `Sample` holds the attribute columns and the target column
/// of a training set.
/// Rows are addressed by their index,
/// so any subset of rows stays aligned with the target.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Feature,
    pub(super) n_sample: usize,
}


impl Sample {
    /// Construct a `Sample` from typed columns.
    pub fn new(features: Vec<Feature>, target: Feature) -> Result<Self> {
        let n_sample = target.len();
        checkers::shape(&features[..], n_sample)?;
        checkers::distinct_names(&features[..])?;
        checkers::finite(&features[..], &target)?;

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(Self { name_to_index, features, target, n_sample, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// The kind of each column is decided here, from its dtype.
    pub fn from_dataframe(data: &DataFrame, target: &Series)
        -> Result<Self>
    {
        let features = data.get_columns()
            .par_iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;
        let target = Feature::from_series(target)?;

        Self::new(features, target)
    }


    /// Returns the pair `(# of rows, # of attributes)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.features.len())
    }


    /// Returns a slice of the attribute columns.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the target column.
    pub fn target(&self) -> &Feature {
        &self.target
    }


    /// Returns the attribute column named `name`.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.position(name).map(|i| &self.features[i])
    }


    /// Returns the index of the attribute column named `name`.
    pub fn position<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }


    /// Returns the distinct values of the `attribute`-th column
    /// over `rows`, in first-seen order.
    pub fn unique_values(&self, attribute: usize, rows: &[usize])
        -> Vec<Value>
    {
        self.features[attribute].unique_values(rows)
    }


    /// Returns the rows `i` in `rows` such that
    /// `comparator(self[attribute][i], value)` holds.
    /// The relative order of `rows` is preserved.
    pub fn filter(
        &self,
        attribute: usize,
        rows: &[usize],
        comparator: Comparator,
        value: &Value,
    ) -> Vec<usize>
    {
        let feature = &self.features[attribute];
        rows.iter()
            .copied()
            .filter(|&i| feature.test(i, comparator, value))
            .collect()
    }


    /// Split `rows` by the `attribute`-th column following `rule`.
    /// Returns one partition per branch of `rule`, in branch order.
    pub fn partition(
        &self,
        attribute: usize,
        rows: &[usize],
        rule: &SplitRule,
    ) -> Vec<Partition>
    {
        rule.branches()
            .into_iter()
            .map(|(comparator, value)| {
                let rows = self.filter(attribute, rows, comparator, &value);
                Partition { comparator, value, rows }
            })
            .collect()
    }


    /// Returns `true` if the target takes a single value over `rows`.
    pub fn is_pure(&self, rows: &[usize]) -> bool {
        self.target.distinct_value_count(rows) == 1
    }


    /// Returns the prediction a leaf holding `rows` makes:
    /// the mean for a numeric target, the mode for a categorical one.
    /// `None` if `rows` is empty.
    pub fn leaf_value(&self, rows: &[usize]) -> Option<Value> {
        match &self.target {
            Feature::Numeric { .. } => self.target.mean(rows).map(Value::Number),
            Feature::Categorical { .. } => self.target.mode(rows),
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;
    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        let i = self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("The feature `{name}` does not exist"));
        &self.features[*i]
    }
}
