// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label entropy and attribute-conditioned entropy of a categorical table.

use ndarray::ArrayView2;
use std::collections::HashMap;
use std::hash::Hash;

use crate::frequency::{count_frequencies, entropy_from_counts, partition_by_column};

/// Shannon entropy (base 2) of the class-label column.
///
/// The label is the last column of `data`; any earlier columns are ignored.
///
/// # Arguments
///
/// * `data` - Table of categorical tokens, one sample per row
///
/// # Returns
///
/// Entropy in `[0, log2(k)]` for `k` distinct labels present. `0.0` for an
/// empty table, and exactly `0.0` when all labels agree.
///
/// ```rust
/// use id3_gain::entropy;
/// use ndarray::array;
///
/// let data = array![
///     ["Sunny", "Yes"],
///     ["Sunny", "No"],
///     ["Rain", "Yes"],
///     ["Rain", "Yes"],
/// ];
/// // 3 x Yes, 1 x No
/// assert!((entropy(data.view()) - 0.8112781244591328).abs() < 1e-12);
/// ```
pub fn entropy<T>(data: ArrayView2<'_, T>) -> f64
where
    T: Eq + Hash + Clone,
{
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let label_counts = count_frequencies(data.column(cols - 1));
    entropy_from_counts(label_counts.into_values(), rows)
}

/// Expected label entropy after partitioning rows by one attribute.
///
/// Rows are grouped by the distinct tokens of the attribute column; each
/// group contributes its label entropy weighted by its share of the rows.
///
/// # Arguments
///
/// * `data` - Table of categorical tokens, last column is the label
/// * `attribute` - Index of a non-label column
///
/// # Returns
///
/// A value in `[0, entropy(data)]`. An empty table, or an `attribute`
/// outside `[0, columns - 2]` (negative indices included), yields the floor
/// value `0.0` rather than an error.
pub fn conditional_entropy<T>(data: ArrayView2<'_, T>, attribute: isize) -> f64
where
    T: Eq + Hash + Clone,
{
    let (rows, cols) = data.dim();
    if rows == 0 || cols < 2 || attribute < 0 || attribute as usize >= cols - 1 {
        return 0.0;
    }
    let label = cols - 1;
    let total = rows as f64;

    let mut expected = 0.0_f64;
    for subset in partition_by_column(data.view(), attribute as usize).into_values() {
        let mut label_counts: HashMap<&T, usize> = HashMap::new();
        for &row in &subset {
            *label_counts.entry(&data[[row, label]]).or_insert(0) += 1;
        }
        let weight = subset.len() as f64 / total;
        expected += weight * entropy_from_counts(label_counts.into_values(), subset.len());
    }
    expected
}
