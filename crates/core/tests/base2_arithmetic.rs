//! Arithmetic between binary units, and between the two families

#![recursion_limit = "512"]

use memory_units::{
    cast, exbibytes, gibibytes, kibibytes, kilobytes, mebibytes, pebibytes, tebibytes, Bytes,
    Gibibytes, Kibibytes, Mebibytes, Quantity, Ratio,
};
use typenum::U8;

#[test]
fn test_addition() {
    let total: Kibibytes = kibibytes!(4) + mebibytes!(1);
    assert_eq!(total.count(), 1_028);
    let total: Gibibytes = tebibytes!(1) + gibibytes!(24);
    assert_eq!(total.count(), 1_048);
}

#[test]
fn test_subtraction() {
    let remaining: Mebibytes = gibibytes!(1) - mebibytes!(24);
    assert_eq!(remaining.count(), 1_000);
}

#[test]
fn test_division() {
    assert_eq!(gibibytes!(1) / mebibytes!(256), 4);
    assert_eq!(exbibytes!(1) / pebibytes!(1), 1_024);
    let quarter: Mebibytes = mebibytes!(4) / 4;
    assert_eq!(quarter.count(), 1);
}

#[test]
fn test_modulo() {
    let rem: Kibibytes = mebibytes!(1) % kibibytes!(3);
    assert_eq!(rem.count(), 1);
    let rem: Kibibytes = kibibytes!(1_025) % 1_024;
    assert_eq!(rem.count(), 1);
}

#[test]
fn test_largest_unit_in_bytes() {
    let bytes: Bytes = cast(exbibytes!(1));
    assert_eq!(bytes.count(), 1 << 60);
    let bytes: Bytes = cast(exbibytes!(15));
    assert_eq!(bytes.count(), 15 << 60);
}

#[test]
fn test_decimal_plus_binary_uses_shared_power_of_two() {
    let total: Quantity<u64, Ratio<U8>> = kilobytes!(1) + kibibytes!(1);
    assert_eq!(total.count(), 253);
    let bytes: Bytes = cast(total);
    assert_eq!(bytes.count(), 2_024);
}

#[test]
fn test_sum_of_pages() {
    let pages = [kibibytes!(4); 256];
    let total: Kibibytes = pages.into_iter().sum();
    assert!(total == mebibytes!(1));
}
