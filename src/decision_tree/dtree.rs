use fixedbitset::FixedBitSet;
use log::{debug, info, trace};
use polars::prelude::*;

use std::fmt;
use std::collections::HashMap;

use crate::{
    errors::{Result, TreeError},
    sample::{Feature, FeatureKind, Row, Sample, Value},
    tools::checkers,
};
use super::{
    criterion::Criterion,
    node::{Branch, Node},
    path::DecisionPath,
    split::{self, Partition},
};


/// The Decision Tree algorithm.
/// Given a set of training examples,
/// [`DecisionTree`] grows a tree that predicts the mode
/// (categorical target) or the mean (numeric target)
/// of the examples reaching each leaf.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use polars::prelude::*;
///
/// let col1 = Series::new("col1", &[1i64, 2, 1, 1, 1]);
/// let col2 = Series::new("col2", &["x", "y", "x", "y", "x"]);
/// let data = DataFrame::new(vec![col1, col2]).unwrap();
/// let target = Series::new("class", &["a", "a", "b", "b", "b"]);
///
/// let mut tree = DecisionTreeBuilder::new()
///     .criterion(Criterion::Gini)
///     .build();
/// tree.train(&data, &target).unwrap();
///
/// let row = Row::new().with("col1", 1).with("col2", "x");
/// let prediction = tree.predict(&row).unwrap();
/// assert_eq!(Some(Value::from("b")), prediction);
/// ```
#[derive(Clone)]
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: Option<usize>,
    root: Option<Node>,
    schema: HashMap<String, FeatureKind>,
}


impl DecisionTree {
    /// Construct an untrained tree.
    pub(super) fn new(criterion: Criterion, max_depth: Option<usize>) -> Self {
        Self {
            criterion,
            max_depth,
            root: None,
            schema: HashMap::new(),
        }
    }


    /// Returns the splitting criterion.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }


    /// Returns the maximal depth, `None` if unbounded.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }


    /// Returns the root node, `None` before training.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }


    /// Returns `true` once `train` or `fit` has succeeded.
    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }


    /// Train the tree on the attribute table `data`
    /// and the row-aligned `target`.
    /// The kind of each column is read from its dtype.
    pub fn train(&mut self, data: &DataFrame, target: &Series) -> Result<()> {
        let sample = Sample::from_dataframe(data, target)?;
        self.fit(&sample)
    }


    /// Train the tree on `sample`.
    /// Any previous root is replaced.
    pub fn fit(&mut self, sample: &Sample) -> Result<()> {
        let (n_sample, n_feature) = sample.shape();
        checkers::non_empty(n_sample)?;

        info!(
            "Growing a decision tree on {n_sample} rows and {n_feature} \
            attributes [criterion: {}, max depth: {}]",
            self.criterion,
            self.max_depth.map_or("unbounded".to_string(), |d| d.to_string()),
        );

        let rows = (0..n_sample).collect::<Vec<_>>();
        let mut attributes = FixedBitSet::with_capacity(n_feature);
        attributes.insert_range(..);

        let root = self.grow(sample, rows, &attributes, 0)
            .ok_or(TreeError::EmptySample)?;
        root.validate()?;

        info!(
            "Finished growing a tree of depth {} with {} leaves",
            root.depth(),
            root.n_leaves(),
        );

        self.schema = sample.features()
            .iter()
            .map(|f| (f.name().to_string(), f.kind()))
            .collect();
        self.root = Some(root);
        Ok(())
    }


    /// Grow a subtree on `rows`,
    /// splitting only on the attributes flagged in `attributes`.
    /// Returns `None` if `rows` is empty.
    fn grow(
        &self,
        sample: &Sample,
        rows: Vec<usize>,
        attributes: &FixedBitSet,
        depth: usize,
    ) -> Option<Node>
    {
        if rows.is_empty() { return None; }

        let exhausted = attributes.count_ones(..) == 0;
        if self.max_depth == Some(depth) || exhausted || sample.is_pure(&rows) {
            trace!("Leaf at depth {depth} on {} rows", rows.len());
            return sample.leaf_value(&rows).map(Node::leaf);
        }

        let Some(best) = split::best_split_for_dataset(
            self.criterion, sample, &rows, attributes
        ) else {
            return sample.leaf_value(&rows).map(Node::leaf);
        };

        debug!(
            "Split at depth {depth} on `{}` ({} branches, score {})",
            best.name, best.rule.arity(), best.score,
        );

        // Children never see the attribute consumed here.
        // Each call owns its own copy of the set.
        let mut remaining = attributes.clone();
        remaining.set(best.attribute, false);

        let branches = sample.partition(best.attribute, &rows, &best.rule)
            .into_iter()
            .filter_map(|Partition { comparator, value, rows }| {
                let child = self.grow(sample, rows, &remaining, depth + 1)?;
                Some(Branch::new(comparator, value, child))
            })
            .collect::<Vec<_>>();

        Some(Node::internal(best.name, best.score, branches))
    }


    /// Predict the target of `row`.
    ///
    /// Returns `Ok(None)` if the row reaches a node
    /// where no branch accepts its value,
    /// or lacks an attribute the path tests.
    pub fn predict(&self, row: &Row) -> Result<Option<Value>> {
        let root = self.root.as_ref().ok_or(TreeError::NotTrained)?;
        self.check_row(row)?;
        Ok(root.predict(row).cloned())
    }


    /// Predict the target of every row of `data`.
    pub fn predict_dataframe(&self, data: &DataFrame)
        -> Result<Vec<Option<Value>>>
    {
        let root = self.root.as_ref().ok_or(TreeError::NotTrained)?;
        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        for feature in features.iter() {
            self.check_column(feature.name(), feature.kind())?;
        }

        (0..data.height())
            .map(|i| -> Result<Option<Value>> {
                let row = Row::from_features(&features[..], i)?;
                Ok(root.predict(&row).cloned())
            })
            .collect()
    }


    fn check_row(&self, row: &Row) -> Result<()> {
        row.iter()
            .try_for_each(|(name, value)| self.check_column(name, value.kind()))
    }


    fn check_column(&self, name: &str, found: FeatureKind) -> Result<()> {
        let expected = *self.schema.get(name)
            .ok_or_else(|| TreeError::UnknownColumn(name.to_string()))?;
        if expected != found {
            return Err(TreeError::KindMismatch {
                column: name.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }


    /// Returns every root-to-leaf path of the trained tree.
    /// Empty before training.
    pub fn paths(&self) -> Vec<DecisionPath> {
        self.root.as_ref()
            .map(|root| root.paths())
            .unwrap_or_default()
    }


    /// Render the tree in the Graphviz `dot` language.
    pub fn to_dot(&self) -> String {
        let body = self.root.as_ref()
            .map(|root| root.to_dot_info(0).0.concat())
            .unwrap_or_default();
        format!("graph DecisionTree {{\n{body}}}\n")
    }


    /// Dump the node structure as JSON.
    /// `null` before training.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.root)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_depth = self.max_depth
            .map_or("unbounded".to_string(), |d| d.to_string());
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {max_depth}\n\
            - Splitting criterion: {}\
            ",
            self.criterion,
        )?;

        match self.root.as_ref() {
            None => writeln!(f, "- Not trained")?,
            Some(root) => {
                writeln!(
                    f,
                    "- Depth: {}\n- Leaves: {}\n- Paths:",
                    root.depth(),
                    root.n_leaves(),
                )?;
                for path in root.paths() {
                    writeln!(f, "\t* {path}")?;
                }
            },
        }

        write!(f, "----------")
    }
}


impl fmt::Debug for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionTree")
            .field("criterion", &self.criterion)
            .field("max_depth", &self.max_depth)
            .field("root", &self.root)
            .finish()
    }
}
