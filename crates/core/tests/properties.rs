//! Algebraic properties checked over seeded random counts

#![recursion_limit = "512"]

use memory_units::{cast, Bytes, Kibibytes, Kilobytes, Mebibytes, Megabytes};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 1_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

#[test]
fn test_addition_commutes() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = Kilobytes::new(rng.random_range(0..1_000_000_000));
        let b = Kibibytes::new(rng.random_range(0..1_000_000_000));
        assert!(a + b == b + a);
    }
}

#[test]
fn test_scalar_multiplication_commutes() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q = Megabytes::new(rng.random_range(0..1_000_000));
        let k: u64 = rng.random_range(0..1_000);
        let lhs: Megabytes = q * k;
        let rhs: Megabytes = k * q;
        assert!(lhs == rhs);
    }
}

#[test]
fn test_fine_coarse_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let count = rng.random_range(0..1_000_000_000_000);
        let bytes: Bytes = cast(Mebibytes::new(count));
        let back: Mebibytes = cast(bytes);
        assert_eq!(back.count(), count);
    }
}

#[test]
fn test_division_and_remainder_recompose() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let lhs = Bytes::new(rng.random_range(0..u64::from(u32::MAX)));
        let rhs = Kilobytes::new(rng.random_range(1..1_000_000));
        let quotient = lhs / rhs;
        let rem = lhs % rhs;
        let recomposed = cast::<Bytes>(rhs) * quotient + rem;
        assert!(recomposed == lhs);
    }
}

#[test]
fn test_comparison_matches_byte_counts() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let kilo: u64 = rng.random_range(0..1_000_000);
        let kibi: u64 = rng.random_range(0..1_000_000);
        let lhs = Kilobytes::new(kilo);
        let rhs = Kibibytes::new(kibi);
        assert_eq!(lhs < rhs, kilo * 1_000 < kibi * 1_024);
        assert_eq!(lhs == rhs, kilo * 1_000 == kibi * 1_024);
    }
}
