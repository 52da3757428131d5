//! This file defines some helper functions.
use std::hash::Hash;
use std::collections::HashMap;

use crate::constants::ROUND_DIGITS;

/// Round `x` to [`ROUND_DIGITS`] decimal digits.
#[inline(always)]
pub fn round(x: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DIGITS);
    (x * scale).round() / scale
}

/// Hashable key of a finite `f64`.
/// `-0.0` and `0.0` share the same key.
#[inline(always)]
pub fn float_key(x: f64) -> u64 {
    (x + 0f64).to_bits()
}

/// Count the occurrences of each key.
/// The keys are returned in the order they are first seen,
/// so that ties are broken deterministically.
pub fn first_seen_counts<K, I>(keys: I) -> Vec<(K, usize)>
    where K: Hash + Eq + Copy,
          I: IntoIterator<Item = K>,
{
    let mut position = HashMap::<K, usize>::new();
    let mut counts = Vec::<(K, usize)>::new();
    for key in keys {
        match position.get(&key) {
            Some(&ix) => { counts[ix].1 += 1; },
            None => {
                position.insert(key, counts.len());
                counts.push((key, 1));
            },
        }
    }
    counts
}

/// Returns the index of the largest count.
/// The first one wins if several counts tie.
pub fn argmax_first<K>(counts: &[(K, usize)]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (ix, &(_, c)) in counts.iter().enumerate() {
        match best {
            Some((_, b)) if c <= b => {},
            _ => { best = Some((ix, c)); },
        }
    }
    best.map(|(ix, _)| ix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_01() {
        let res = round(10f64 / 36f64);
        let exp = 0.2778;
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_round_02() {
        let res = round(0.46664);
        let exp = 0.4666;
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_float_key_01() {
        assert_eq!(float_key(0f64), float_key(-0f64));
    }

    #[test]
    fn test_first_seen_counts_01() {
        let res = first_seen_counts(["b", "a", "b", "c", "a", "b"]);
        let exp = vec![("b", 3), ("a", 2), ("c", 1)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_first_seen_counts_02() {
        let res = first_seen_counts(Vec::<u64>::new());
        assert!(res.is_empty(), "expected no counts, got {res:?}.");
    }

    #[test]
    fn test_argmax_first_01() {
        let counts = [("a", 2), ("b", 3), ("c", 3)];
        let res = argmax_first(&counts);
        let exp = Some(1);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_argmax_first_02() {
        let counts: [(&str, usize); 0] = [];
        let res = argmax_first(&counts);
        assert_eq!(None, res, "expected None, got {res:?}.");
    }
}
