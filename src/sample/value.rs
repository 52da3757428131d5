use serde::Serialize;

use std::fmt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::tools::helpers::float_key;

/// The semantic type of a column.
/// Numeric columns split on thresholds,
/// categorical columns split on equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureKind {
    /// Real-valued column.
    Numeric,
    /// Symbolic column.
    Categorical,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        };
        write!(f, "{name}")
    }
}

/// A single cell of a column.
/// Used as split reference values, leaf predictions,
/// and prediction row entries.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A finite number.
    Number(f64),
    /// A symbol.
    Category(String),
}

impl Value {
    /// Returns the kind of column this value can live in.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Number(_) => FeatureKind::Numeric,
            Self::Category(_) => FeatureKind::Categorical,
        }
    }

    /// Returns the number, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            Self::Category(_) => None,
        }
    }

    /// Returns the symbol, if this is a categorical value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Category(s) => Some(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Category(a), Self::Category(b)) => a == b,
            _ => false,
        }
    }
}

// NaN never enters a `Value` built from a `Sample`.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(x) => {
                0u8.hash(state);
                float_key(*x).hash(state);
            },
            Self::Category(s) => {
                1u8.hash(state);
                s.hash(state);
            },
        }
    }
}

/// Values of different kinds are not comparable.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Category(a), Self::Category(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Category(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(x: i64) -> Self {
        Self::Number(x as f64)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(x: i32) -> Self {
        Self::Number(x as f64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Category(s.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Category(s)
    }
}
