// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for label entropy and conditional entropy.
