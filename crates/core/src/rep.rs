//! Numeric representations a [`Quantity`](crate::Quantity) can store.
//!
//! Every primitive integer and floating-point type is a [`Rep`]. The trait is
//! sealed, which also guarantees that a quantity never wraps another quantity.
//!
//! # Promotion
//! Binary operators between two representations go through [`CommonRep`]:
//! - identical types resolve to themselves
//! - floating point dominates integers, `f32` with `f64` gives `f64`
//! - same signedness resolves to the wider type
//! - mixed signedness resolves to the signed type when it is strictly wider,
//!   otherwise to the unsigned type
//! - `usize` and `isize` only combine with themselves
//!
//! Pairs outside these rules have no `CommonRep` impl and fail to compile.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::sealed::Sealed;

/// Broad numeric family of a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepKind {
    Unsigned,
    Signed,
    Float,
}

impl RepKind {
    #[inline]
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, RepKind::Float)
    }
}

/// Widest arithmetic used while moving a value between two representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intermediate {
    Unsigned,
    Signed,
    Float,
}

impl Intermediate {
    pub(crate) const fn between(from: RepKind, to: RepKind) -> Self {
        match (from, to) {
            (RepKind::Float, _) | (_, RepKind::Float) => Intermediate::Float,
            (RepKind::Unsigned, RepKind::Unsigned) => Intermediate::Unsigned,
            _ => Intermediate::Signed,
        }
    }
}

/// A primitive number usable as the count of a [`Quantity`](crate::Quantity).
pub trait Rep:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
    + Sealed
{
    const ZERO: Self;
    const ONE: Self;
    /// Lowest representable value (`f64::MIN` for floats, not the smallest positive).
    const MIN: Self;
    const MAX: Self;
    const KIND: RepKind;

    fn to_u128(self) -> u128;
    fn to_i128(self) -> i128;
    fn to_f64(self) -> f64;
    fn from_u128(value: u128) -> Self;
    fn from_i128(value: i128) -> Self;
    fn from_f64(value: f64) -> Self;

    /// Convert a parsed literal, refusing any sign change or truncation.
    fn from_literal(value: u64) -> Option<Self>;

    /// Convert into another representation with `as` semantics.
    #[inline]
    fn convert<T: Rep>(self) -> T {
        match Intermediate::between(Self::KIND, T::KIND) {
            Intermediate::Float => T::from_f64(self.to_f64()),
            Intermediate::Unsigned => T::from_u128(self.to_u128()),
            Intermediate::Signed => T::from_i128(self.to_i128()),
        }
    }
}

/// Integer representations: the only ones that support `%` and `%=`.
pub trait IntRep: Rep + Eq + Ord + Hash + Rem<Output = Self> + RemAssign {}

/// Representation two operands are promoted to before they are combined.
pub trait CommonRep<Rhs: Rep>: Rep {
    type Output: Rep;
}

/// Shorthand for `<L as CommonRep<R>>::Output`.
pub type CommonRepOf<L, R> = <L as CommonRep<R>>::Output;

impl<R: Rep> CommonRep<R> for R {
    type Output = R;
}

macro_rules! impl_int_rep {
    ($kind:ident: $($ty:ty),+) => {$(
        impl Sealed for $ty {}

        impl Rep for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const KIND: RepKind = RepKind::$kind;

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_u128(value: u128) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_i128(value: i128) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_literal(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }

        impl IntRep for $ty {}
    )+};
}

macro_rules! impl_float_rep {
    ($($ty:ty),+) => {$(
        impl Sealed for $ty {}

        impl Rep for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const KIND: RepKind = RepKind::Float;

            #[inline(always)]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_u128(value: u128) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_i128(value: i128) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_literal(value: u64) -> Option<Self> {
                let converted = value as $ty;
                // compared in u128: rounding up to 2^64 must not saturate back
                (converted as u128 == u128::from(value)).then_some(converted)
            }
        }
    )+};
}

impl_int_rep!(Unsigned: u8, u16, u32, u64, u128, usize);
impl_int_rep!(Signed: i8, i16, i32, i64, i128, isize);
impl_float_rep!(f32, f64);

macro_rules! common_rep {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {$(
        impl CommonRep<$rhs> for $lhs {
            type Output = $out;
        }

        impl CommonRep<$lhs> for $rhs {
            type Output = $out;
        }
    )+};
}

macro_rules! float_dominates {
    ($float:ty: $($int:ty),+) => {
        common_rep! { $($float, $int => $float;)+ }
    };
}

common_rep! {
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;

    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;

    u8, i8 => u8;
    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u8, i128 => i128;
    u16, i8 => u16;
    u16, i16 => u16;
    u16, i32 => i32;
    u16, i64 => i64;
    u16, i128 => i128;
    u32, i8 => u32;
    u32, i16 => u32;
    u32, i32 => u32;
    u32, i64 => i64;
    u32, i128 => i128;
    u64, i8 => u64;
    u64, i16 => u64;
    u64, i32 => u64;
    u64, i64 => u64;
    u64, i128 => i128;
    u128, i8 => u128;
    u128, i16 => u128;
    u128, i32 => u128;
    u128, i64 => u128;
    u128, i128 => u128;

    f32, f64 => f64;
}

float_dominates!(f32: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
float_dominates!(f64: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
