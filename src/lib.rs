// SPDX-License-Identifier: MIT OR Apache-2.0

//! # id3-gain
//!
//! Information-gain attribute selection for ID3 decision-tree induction over
//! categorical data.
//!
//! A dataset is a two-dimensional `ndarray` table of opaque categorical
//! tokens; the last column is the class label, every other column is a
//! candidate attribute. Four pure operations form the selection pipeline:
//! label entropy, attribute-conditioned entropy, information gain, and
//! best-attribute selection.
//!
//! ## Quick Start
//!
//! ```rust
//! use id3_gain::{information_gain, select_attribute};
//! use ndarray::array;
//!
//! // Columns: outlook, windy, play (label).
//! let data = array![
//!     ["Sunny", "False", "No"],
//!     ["Sunny", "True", "No"],
//!     ["Overcast", "False", "Yes"],
//!     ["Rain", "False", "Yes"],
//! ];
//!
//! // Outlook alone separates the labels perfectly.
//! assert_eq!(information_gain(data.view(), 0), 1.0);
//!
//! let result = select_attribute(data.view());
//! assert_eq!(result.selected, 0);
//! assert_eq!(result.gains.len(), 2);
//! ```
//!
//! ## Contract
//!
//! Every operation is total: invalid input never raises. An empty dataset or
//! an out-of-range attribute index yields the floor value `0.0` (selection
//! yields an empty gain table and the sentinel index `-1`), so recursive
//! tree builders can pass empty partitions without guarding. Information
//! gain is rounded to 4 decimal digits; entropy and conditional entropy are
//! returned unrounded.
//!
//! Tokens are compared only for equality. Any `T: Eq + Hash + Clone` works:
//! integer codes, `&str` labels, interned symbols.

pub mod entropy;
pub mod frequency;
pub mod gain;

pub use entropy::{conditional_entropy, entropy};
pub use gain::{GainTable, SelectionResult, information_gain, select_attribute};
