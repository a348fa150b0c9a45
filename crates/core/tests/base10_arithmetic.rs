//! Arithmetic between decimal units

#![recursion_limit = "512"]

use memory_units::{
    cast, exabytes, gigabytes, kilobytes, megabytes, petabytes, terabytes, Bytes, Gigabytes,
    Kilobytes, Megabytes, Petabytes, Terabytes,
};

#[test]
fn test_addition_resolves_to_finer_unit() {
    let total = petabytes!(27) + megabytes!(54);
    let as_bytes: Bytes = cast(total);
    assert_eq!(as_bytes.count(), 27_000_000_054_000_000);

    let total: Megabytes = gigabytes!(1) + megabytes!(1);
    assert_eq!(total.count(), 1_001);
}

#[test]
fn test_addition_near_the_top_of_u64() {
    let total: Petabytes = exabytes!(6) + petabytes!(16);
    assert_eq!(total.count(), 6_016);
    let as_bytes: Bytes = cast(total);
    assert_eq!(as_bytes.count(), 6_016_000_000_000_000_000);
}

#[test]
fn test_subtraction() {
    let remaining: Megabytes = gigabytes!(2) - megabytes!(500);
    assert_eq!(remaining.count(), 1_500);
    let remaining: Bytes = kilobytes!(1) - Bytes::new(24);
    assert_eq!(remaining.count(), 976);
}

#[test]
fn test_multiplication() {
    let doubled: Terabytes = terabytes!(21) * 2;
    assert_eq!(doubled.count(), 42);
    let doubled: Terabytes = 2 * terabytes!(21);
    assert_eq!(doubled.count(), 42);
    let area: Kilobytes = kilobytes!(3) * kilobytes!(4);
    assert_eq!(area.count(), 12);
}

#[test]
fn test_division() {
    assert_eq!(megabytes!(4) / kilobytes!(4), 1_000);
    assert_eq!(gigabytes!(1) / megabytes!(3), 333);
    let share: Gigabytes = gigabytes!(10) / 4;
    assert_eq!(share.count(), 2);
}

#[test]
fn test_modulo() {
    let rem: Bytes = Bytes::new(1_001) % 499;
    assert_eq!(rem.count(), 3);
    let rem: Kilobytes = kilobytes!(4) % 3;
    assert_eq!(rem.count(), 1);
    let rem: Bytes = Bytes::new(1_001) % kilobytes!(1);
    assert_eq!(rem.count(), 1);
    let rem: Kilobytes = megabytes!(1) % kilobytes!(3);
    assert_eq!(rem.count(), 1);
}

#[test]
fn test_compound_assignment_sequence() {
    let mut size = Megabytes::new(10);
    size += Megabytes::new(5);
    assert_eq!(size.count(), 15);
    size -= Megabytes::new(3);
    assert_eq!(size.count(), 12);
    size *= 2;
    assert_eq!(size.count(), 24);
    size /= 2;
    assert_eq!(size.count(), 12);

    let mut bytes = Bytes::new(1_001);
    bytes %= 1_000;
    assert_eq!(bytes.count(), 1);
}

#[test]
fn test_increment_and_decrement() {
    let mut size = Kilobytes::new(10);
    assert_eq!(size.pre_increment().count(), 11);
    assert_eq!(size.post_increment().count(), 11);
    assert_eq!(size.pre_decrement().count(), 11);
    assert_eq!(size.post_decrement().count(), 11);
    assert_eq!(size.count(), 10);
}
