use id3_gain::information_gain;
use ndarray::array;

use crate::test_helpers::{empty_table, generate_random_table, outlook_table};

/// Hand-computed gain for the outlook fixture: 0.8113 - 0.5, rounded to
/// 4 decimals.
#[test]
fn test_gain_outlook_fixture() {
    assert_eq!(information_gain(outlook_table().view(), 0), 0.3113);
}

/// Splitting cannot lose information.
#[test]
fn test_gain_is_non_negative() {
    for seed in 0..10 {
        let table = generate_random_table(60, 4, 3, seed);
        for attribute in 0..3 {
            let gain = information_gain(table.view(), attribute);
            assert!(gain >= 0.0, "gain for attr {attribute} was {gain}");
        }
    }
}

/// A constant attribute is uninformative: gain exactly 0.
#[test]
fn test_gain_constant_attribute_is_zero() {
    let data = array![[5, 0], [5, 1], [5, 0], [5, 1]];
    assert_eq!(information_gain(data.view(), 0), 0.0);
}

/// An attribute that mirrors the label resolves all uncertainty.
#[test]
fn test_gain_label_copy_attribute_is_full_entropy() {
    let data = array![[0, 0], [1, 1], [0, 0], [1, 1]];
    assert_eq!(information_gain(data.view(), 0), 1.0);
}

/// Gains carry at most 4 decimal digits.
#[test]
fn test_gain_rounded_to_four_decimals() {
    for seed in 0..5 {
        let table = generate_random_table(37, 3, 5, seed);
        for attribute in 0..2 {
            let gain = information_gain(table.view(), attribute);
            let scaled = gain * 1e4;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "gain {gain} is not rounded to 4 decimals"
            );
        }
    }
}

#[test]
fn test_gain_empty_table_is_zero() {
    assert_eq!(information_gain(empty_table(4).view(), 0), 0.0);
}

/// Invalid attribute indices get the same floor treatment as in
/// conditional entropy.
#[test]
fn test_gain_invalid_index_is_zero() {
    let table = outlook_table();
    assert_eq!(information_gain(table.view(), -3), 0.0);
    assert_eq!(information_gain(table.view(), 1), 0.0);
    assert_eq!(information_gain(table.view(), 99), 0.0);
}
