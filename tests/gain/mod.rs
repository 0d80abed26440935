// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for information gain and attribute selection.
mod information_gain_test;
