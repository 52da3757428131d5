use polars::prelude::*;

use crate::{
    decision_tree::Comparator,
    errors::{Result, TreeError},
    tools::helpers,
};
use super::value::{FeatureKind, Value};

/// A named column, either numeric or categorical.
/// The kind is fixed when the column is built
/// and never re-inferred afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Real-valued column.
    Numeric {
        /// Column name.
        name: String,
        /// Column values.
        vals: Vec<f64>,
    },
    /// Symbolic column.
    Categorical {
        /// Column name.
        name: String,
        /// Column values.
        vals: Vec<String>,
    },
}

impl Feature {
    /// Construct a numeric column.
    pub fn numeric<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self::Numeric { name: name.to_string(), vals }
    }

    /// Construct a categorical column.
    pub fn categorical<T, I, S>(name: T, vals: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: ToString,
    {
        let vals = vals.into_iter()
            .map(|s| s.to_string())
            .collect();
        Self::Categorical { name: name.to_string(), vals }
    }

    /// Convert a `polars::Series` into a `Feature`.
    /// Numeric dtypes become [`Feature::Numeric`],
    /// string and boolean dtypes become [`Feature::Categorical`].
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();
        if series.null_count() > 0 {
            return Err(TreeError::NullValue(name));
        }

        match series.dtype() {
            DataType::Utf8 => {
                let vals = collect_strings(series.utf8()?, &name)?;
                Ok(Self::Categorical { name, vals })
            },
            DataType::Boolean => {
                let series = series.cast(&DataType::Utf8)?;
                let vals = collect_strings(series.utf8()?, &name)?;
                Ok(Self::Categorical { name, vals })
            },
            dtype if dtype.is_numeric() => {
                let series = series.cast(&DataType::Float64)?;
                let vals = series.f64()?
                    .into_iter()
                    .map(|x| match x {
                        Some(x) if x.is_nan() => {
                            Err(TreeError::NanValue(name.clone()))
                        },
                        Some(x) => Ok(x),
                        None => Err(TreeError::NullValue(name.clone())),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Numeric { name, vals })
            },
            dtype => {
                Err(TreeError::UnsupportedDtype {
                    column: name,
                    dtype: format!("{dtype}"),
                })
            },
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric     { name, .. } => name,
            Self::Categorical { name, .. } => name,
        }
    }

    /// Returns the semantic type of the column.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Numeric     { .. } => FeatureKind::Numeric,
            Self::Categorical { .. } => FeatureKind::Categorical,
        }
    }

    /// Returns `true` if the column is numeric.
    pub fn is_numeric(&self) -> bool {
        self.kind() == FeatureKind::Numeric
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric     { vals, .. } => vals.len(),
            Self::Categorical { vals, .. } => vals.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `row`.
    pub fn value(&self, row: usize) -> Value {
        match self {
            Self::Numeric     { vals, .. } => Value::Number(vals[row]),
            Self::Categorical { vals, .. } => Value::Category(vals[row].clone()),
        }
    }

    /// Returns `comparator(self[row], reference)`.
    /// A reference of the other kind never matches.
    #[inline]
    pub fn test(&self, row: usize, comparator: Comparator, reference: &Value)
        -> bool
    {
        match (self, reference) {
            (Self::Numeric { vals, .. }, Value::Number(x)) => {
                comparator.compare(&vals[row], x)
            },
            (Self::Categorical { vals, .. }, Value::Category(s)) => {
                comparator.compare(vals[row].as_str(), s.as_str())
            },
            _ => false,
        }
    }

    /// Returns the number of occurrences of each distinct value
    /// over `rows`, in first-seen order.
    pub fn label_counts(&self, rows: &[usize]) -> Vec<usize> {
        match self {
            Self::Numeric { vals, .. } => {
                let keys = rows.iter().map(|&i| helpers::float_key(vals[i]));
                helpers::first_seen_counts(keys)
                    .into_iter()
                    .map(|(_, c)| c)
                    .collect()
            },
            Self::Categorical { vals, .. } => {
                let keys = rows.iter().map(|&i| vals[i].as_str());
                helpers::first_seen_counts(keys)
                    .into_iter()
                    .map(|(_, c)| c)
                    .collect()
            },
        }
    }

    /// Returns each distinct value over `rows` with its count,
    /// in first-seen order.
    pub fn value_counts(&self, rows: &[usize]) -> Vec<(Value, usize)> {
        match self {
            Self::Numeric { vals, .. } => {
                let keys = rows.iter().map(|&i| helpers::float_key(vals[i]));
                helpers::first_seen_counts(keys)
                    .into_iter()
                    .map(|(k, c)| (Value::Number(f64::from_bits(k)), c))
                    .collect()
            },
            Self::Categorical { vals, .. } => {
                let keys = rows.iter().map(|&i| vals[i].as_str());
                helpers::first_seen_counts(keys)
                    .into_iter()
                    .map(|(k, c)| (Value::from(k), c))
                    .collect()
            },
        }
    }

    /// Returns the distinct values over `rows`, in first-seen order.
    pub fn unique_values(&self, rows: &[usize]) -> Vec<Value> {
        self.value_counts(rows)
            .into_iter()
            .map(|(v, _)| v)
            .collect()
    }

    /// Returns the number of distinct values over `rows`.
    pub fn distinct_value_count(&self, rows: &[usize]) -> usize {
        self.label_counts(rows).len()
    }

    /// Returns the arithmetic mean over `rows`.
    /// `None` if `rows` is empty or the column is categorical.
    pub fn mean(&self, rows: &[usize]) -> Option<f64> {
        match self {
            Self::Numeric { vals, .. } if !rows.is_empty() => {
                let sum = rows.iter().map(|&i| vals[i]).sum::<f64>();
                Some(sum / rows.len() as f64)
            },
            _ => None,
        }
    }

    /// Returns the most frequent value over `rows`.
    /// Ties go to the value seen first.
    pub fn mode(&self, rows: &[usize]) -> Option<Value> {
        let counts = self.value_counts(rows);
        let ix = helpers::argmax_first(&counts)?;
        counts.into_iter().nth(ix).map(|(v, _)| v)
    }
}

fn collect_strings(chunked: &Utf8Chunked, name: &str) -> Result<Vec<String>> {
    chunked.into_iter()
        .map(|s| {
            s.map(|s| s.to_string())
                .ok_or_else(|| TreeError::NullValue(name.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rows(feature: &Feature) -> Vec<usize> {
        (0..feature.len()).collect()
    }

    #[test]
    fn test_from_series_01() {
        let series = Series::new("col1", &[1i64, 2, 1]);
        let res = Feature::from_series(&series).unwrap();
        let exp = Feature::numeric("col1", vec![1.0, 2.0, 1.0]);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_from_series_02() {
        let series = Series::new("col2", &["x", "y"]);
        let res = Feature::from_series(&series).unwrap();
        let exp = Feature::categorical("col2", ["x", "y"]);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_from_series_03() {
        let series = Series::new("flag", &[true, false]);
        let res = Feature::from_series(&series).unwrap();
        assert_eq!(FeatureKind::Categorical, res.kind());
    }

    #[test]
    fn test_from_series_04() {
        let series = Series::new("col1", &[Some(1.0), None]);
        let res = Feature::from_series(&series);
        assert!(
            matches!(res, Err(TreeError::NullValue(ref name)) if name == "col1"),
            "expected a null value error, got {res:?}."
        );
    }

    #[test]
    fn test_from_series_05() {
        let series = Series::new("col1", &[1.0, f64::NAN]);
        let res = Feature::from_series(&series);
        assert!(
            matches!(res, Err(TreeError::NanValue(_))),
            "expected a NaN error, got {res:?}."
        );
    }

    #[test]
    fn test_test_01() {
        let feature = Feature::numeric("col1", vec![1.0, 2.0, 3.0]);
        let threshold = Value::from(2.0);
        let res = (0..3)
            .map(|i| feature.test(i, Comparator::LessEqual, &threshold))
            .collect::<Vec<_>>();
        let exp = vec![true, true, false];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_test_02() {
        let feature = Feature::categorical("col2", ["x", "y"]);
        let res = feature.test(0, Comparator::Equal, &Value::from(1.0));
        assert!(!res, "a numeric reference must not match a symbol.");
    }

    #[test]
    fn test_label_counts_01() {
        let feature = Feature::categorical("y", ["a", "b", "b", "c", "b"]);
        let res = feature.label_counts(&all_rows(&feature));
        let exp = vec![1, 3, 1];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_unique_values_01() {
        let feature = Feature::numeric("col1", vec![2.0, 2.0, 1.0, 3.0]);
        let res = feature.unique_values(&[0, 1, 2, 3]);
        let exp = vec![Value::from(2.0), Value::from(1.0), Value::from(3.0)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_unique_values_02() {
        let feature = Feature::numeric("col1", vec![2.0, 2.0, 1.0, 3.0]);
        let res = feature.unique_values(&[2, 3]);
        let exp = vec![Value::from(1.0), Value::from(3.0)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_mode_01() {
        let feature = Feature::categorical("y", ["a", "a", "b", "b", "b"]);
        let res = feature.mode(&all_rows(&feature));
        let exp = Some(Value::from("b"));
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_mode_02() {
        let feature = Feature::categorical("y", ["b", "a", "a", "b"]);
        let res = feature.mode(&all_rows(&feature));
        let exp = Some(Value::from("b"));
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_mean_01() {
        let feature = Feature::numeric("y", vec![2.0, 1.0, 2.0, 2.0]);
        let res = feature.mean(&all_rows(&feature));
        let exp = Some(1.75);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_mean_02() {
        let feature = Feature::numeric("y", vec![2.0]);
        let res = feature.mean(&[]);
        assert_eq!(None, res, "expected None, got {res:?}.");
    }
}
