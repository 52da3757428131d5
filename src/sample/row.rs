use polars::prelude::*;

use std::collections::HashMap;

use crate::errors::{Result, TreeError};
use super::feature::Feature;
use super::value::Value;

/// A single record to predict.
/// Maps column names to values; a column may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    /// Construct an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `name`, consuming `self`.
    pub fn with<S, V>(mut self, name: S, value: V) -> Self
        where S: ToString,
              V: Into<Value>,
    {
        self.insert(name, value);
        self
    }

    /// Set the value of `name`.
    /// Returns the previous value, if any.
    pub fn insert<S, V>(&mut self, name: S, value: V) -> Option<Value>
        where S: ToString,
              V: Into<Value>,
    {
        self.values.insert(name.to_string(), value.into())
    }

    /// Returns the value of `name`.
    pub fn get<S: AsRef<str>>(&self, name: S) -> Option<&Value> {
        self.values.get(name.as_ref())
    }

    /// Iterate over the `(name, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no column.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build the `row`-th record of the given columns.
    pub fn from_features(features: &[Feature], row: usize) -> Result<Self> {
        if let Some(f) = features.iter().find(|f| row >= f.len()) {
            return Err(TreeError::RowOutOfBounds { row, rows: f.len() });
        }
        let values = features.iter()
            .map(|f| (f.name().to_string(), f.value(row)))
            .collect();
        Ok(Self { values })
    }

    /// Build the `row`-th record of `data`.
    pub fn from_dataframe(data: &DataFrame, row: usize) -> Result<Self> {
        let rows = data.height();
        if row >= rows {
            return Err(TreeError::RowOutOfBounds { row, rows });
        }
        let data = data.slice(row as i64, 1);
        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;
        Self::from_features(&features[..], 0)
    }
}

impl<S, V> FromIterator<(S, V)> for Row
    where S: ToString,
          V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.into()))
            .collect();
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_01() {
        let row = Row::new().with("col1", 1).with("col2", "x");
        assert_eq!(Some(&Value::from(1.0)), row.get("col1"));
        assert_eq!(Some(&Value::from("x")), row.get("col2"));
        assert_eq!(None, row.get("col3"));
    }

    #[test]
    fn test_row_from_dataframe_01() {
        let col1 = Series::new("col1", &[1i64, 3]);
        let col2 = Series::new("col2", &["x", "y"]);
        let data = DataFrame::new(vec![col1, col2]).unwrap();

        let res = Row::from_dataframe(&data, 1).unwrap();
        let exp = Row::new().with("col1", 3).with("col2", "y");
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_row_from_dataframe_02() {
        let col1 = Series::new("col1", &[1i64]);
        let data = DataFrame::new(vec![col1]).unwrap();

        let res = Row::from_dataframe(&data, 1);
        assert!(
            matches!(res, Err(TreeError::RowOutOfBounds { row: 1, rows: 1 })),
            "expected an out of bounds error, got {res:?}."
        );
    }

    #[test]
    fn test_row_from_features_01() {
        let features = vec![
            Feature::numeric("col1", vec![1.0, 2.0]),
            Feature::categorical("col2", ["x", "y"]),
        ];
        let res = Row::from_features(&features, 1).unwrap();
        let exp = Row::new().with("col1", 2.0).with("col2", "y");
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_row_from_features_02() {
        let features = vec![Feature::numeric("col1", vec![1.0, 2.0])];
        let res = Row::from_features(&features, 2);
        assert!(
            matches!(res, Err(TreeError::RowOutOfBounds { row: 2, rows: 2 })),
            "expected an out of bounds error, got {res:?}."
        );
    }

    #[test]
    fn test_row_from_iter_01() {
        let row = [("col1", 1.0), ("col2", 2.0)]
            .into_iter()
            .collect::<Row>();
        assert_eq!(2, row.len());
    }
}
