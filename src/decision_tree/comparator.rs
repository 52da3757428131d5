use serde::Serialize;

use std::fmt;

use crate::sample::Value;

/// The test a [`Branch`](crate::decision_tree::Branch) applies
/// to an observed value before descending into its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparator {
    /// `observed == reference`
    Equal,
    /// `observed != reference`
    NotEqual,
    /// `observed <= reference`
    LessEqual,
    /// `observed > reference`
    Greater,
    /// `observed < reference`
    Less,
    /// `observed >= reference`
    GreaterEqual,
}

impl Comparator {
    /// Returns `self(observed, reference)`.
    #[inline(always)]
    pub fn compare<T>(self, observed: &T, reference: &T) -> bool
        where T: PartialOrd + ?Sized,
    {
        match self {
            Self::Equal        => observed == reference,
            Self::NotEqual     => observed != reference,
            Self::LessEqual    => observed <= reference,
            Self::Greater      => observed >  reference,
            Self::Less         => observed <  reference,
            Self::GreaterEqual => observed >= reference,
        }
    }

    /// Returns `self(observed, reference)`.
    /// Values of different kinds never satisfy any comparator.
    #[inline]
    pub fn evaluate(self, observed: &Value, reference: &Value) -> bool {
        observed.kind() == reference.kind()
            && self.compare(observed, reference)
    }

    /// Returns the comparator accepting exactly the values
    /// `self` rejects.
    pub fn negate(self) -> Self {
        match self {
            Self::Equal        => Self::NotEqual,
            Self::NotEqual     => Self::Equal,
            Self::LessEqual    => Self::Greater,
            Self::Greater      => Self::LessEqual,
            Self::Less         => Self::GreaterEqual,
            Self::GreaterEqual => Self::Less,
        }
    }

    /// Returns the mathematical symbol of the comparator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal        => "=",
            Self::NotEqual     => "!=",
            Self::LessEqual    => "<=",
            Self::Greater      => ">",
            Self::Less         => "<",
            Self::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
