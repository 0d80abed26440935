// SPDX-License-Identifier: MIT OR Apache-2.0

//! Equality-keyed counting and partitioning for categorical columns.
//!
//! These helpers are the grouping primitive behind every measure in the
//! crate; they are public because tree-building callers need the same
//! partition step when recursing into subsets.

use ndarray::{ArrayView1, ArrayView2};
use std::collections::HashMap;
use std::hash::Hash;

/// Count the occurrences of each distinct token in a column.
pub fn count_frequencies<T>(values: ArrayView1<'_, T>) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::new();
    for value in values.iter() {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}

/// Group row indices by the token found in one column.
///
/// The returned map is a partition of `0..nrows`: every row index appears in
/// exactly one bucket.
pub fn partition_by_column<T>(data: ArrayView2<'_, T>, column: usize) -> HashMap<T, Vec<usize>>
where
    T: Eq + Hash + Clone,
{
    let mut partition: HashMap<T, Vec<usize>> = HashMap::new();
    for (row, value) in data.column(column).iter().enumerate() {
        partition.entry(value.clone()).or_default().push(row);
    }
    partition
}

/// Shannon entropy (base 2) from a histogram.
///
/// Computes `-Σ p·log2(p)` over `p = count / n`, skipping zero counts.
/// Returns `0.0` when `n == 0`. Iteration order of the counts does not
/// affect the sum.
pub fn entropy_from_counts<I>(counts: I, n: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if n == 0 {
        return 0.0;
    }
    let n_f = n as f64;
    let mut h = 0.0_f64;
    for count in counts {
        if count == 0 {
            continue;
        }
        let p = count as f64 / n_f;
        h -= p * p.log2();
    }
    h
}
