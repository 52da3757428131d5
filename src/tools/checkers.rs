//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use std::collections::HashSet;

use crate::errors::{Result, TreeError};
use crate::sample::Feature;

/// Check that every attribute column has as many rows as the target.
#[inline(always)]
pub fn shape(features: &[Feature], n_target: usize) -> Result<()> {
    match features.iter().find(|f| f.len() != n_target) {
        Some(feature) => Err(TreeError::ShapeMismatch {
            rows: feature.len(),
            target: n_target,
        }),
        None => Ok(()),
    }
}

/// Check that the attribute names are pairwise distinct.
#[inline(always)]
pub fn distinct_names(features: &[Feature]) -> Result<()> {
    let mut seen = HashSet::with_capacity(features.len());
    for feature in features {
        if !seen.insert(feature.name()) {
            return Err(TreeError::DuplicateColumn(feature.name().to_string()));
        }
    }
    Ok(())
}

/// Check that no numeric column, the target included, holds a NaN.
pub fn finite(features: &[Feature], target: &Feature) -> Result<()> {
    let nan = features.iter()
        .chain(std::iter::once(target))
        .find(|f| match f {
            Feature::Numeric { vals, .. } => vals.iter().any(|x| x.is_nan()),
            Feature::Categorical { .. } => false,
        });
    match nan {
        Some(feature) => Err(TreeError::NanValue(feature.name().to_string())),
        None => Ok(()),
    }
}

/// Check that there is at least one training row.
#[inline(always)]
pub fn non_empty(n_sample: usize) -> Result<()> {
    if n_sample == 0 { Err(TreeError::EmptySample) } else { Ok(()) }
}
