//! Rational scaling factors relative to one byte.
//!
//! A factor is a zero-sized type carrying a numerator and a denominator as
//! constants. [`Ratio`] takes its components as [`typenum`] unsigned integers,
//! so [`CommonFactor`] can compute the finest factor both operands of a binary
//! operator share at the type level, for any pair of ratios.
//!
//! The type-level gcd recurses once per bit, so crates mixing very large
//! factors (exabytes with exbibytes) may need `#![recursion_limit = "512"]`.

use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops::{Div, Mul};

use typenum::{Gcd, Gcf, NonZero, Prod, Quot, Unsigned, U1};

/// Compile-time scaling factor: one unit equals `NUM / DEN` bytes.
pub trait Factor: Copy + Default + Debug + Send + Sync + 'static {
    const NUM: u64;
    const DEN: u64;
}

/// Factor of `N / D` bytes, with `N` and `D` given as [`typenum`] unsigned
/// integers. Lowest terms are not required.
///
/// ```
/// use memory_units::{Factor, Ratio};
/// use typenum::{U1, U3};
///
/// assert_eq!(<Ratio<U1, U3> as Factor>::DEN, 3);
/// ```
///
/// A zero component is not a factor:
///
/// ```compile_fail
/// use memory_units::{Quantity, Ratio};
/// use typenum::U0;
/// let broken = Quantity::<u64, Ratio<U0>>::new(1);
/// ```
pub struct Ratio<N, D = U1>(PhantomData<fn() -> (N, D)>);

impl<N, D> Clone for Ratio<N, D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, D> Copy for Ratio<N, D> {}

impl<N, D> Default for Ratio<N, D> {
    #[inline(always)]
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<N: Unsigned, D: Unsigned> Debug for Ratio<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio<{}, {}>", N::U64, D::U64)
    }
}

impl<N, D> Factor for Ratio<N, D>
where
    N: Unsigned + NonZero,
    D: Unsigned + NonZero,
{
    const NUM: u64 = N::U64;
    const DEN: u64 = D::U64;
}

/// Greatest common divisor. `gcd(0, 0)` is defined as 1 so it can always divide.
#[inline]
#[must_use]
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    if a == 0 && b == 0 {
        return 1;
    }
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Numerator of the common factor: the largest unit both numerators divide into.
#[inline]
#[must_use]
pub const fn common_numerator(lhs: u64, rhs: u64) -> u64 {
    gcd(lhs as u128, rhs as u128) as u64
}

/// Denominator of the common factor, `(lhs / gcd(lhs, rhs)) * rhs`.
#[inline]
#[must_use]
pub const fn common_denominator(lhs: u64, rhs: u64) -> u64 {
    (lhs / gcd(lhs as u128, rhs as u128) as u64) * rhs
}

/// `(num / den) / (by_num / by_den)` in lowest terms.
///
/// Numerators and denominators are reduced against each other first, which
/// keeps the products small for the factor pairs used in practice.
#[must_use]
pub const fn ratio_divide(num: u64, den: u64, by_num: u64, by_den: u64) -> (u128, u128) {
    let (num, den, by_num, by_den) = (num as u128, den as u128, by_num as u128, by_den as u128);
    let num_gcd = gcd(num, by_num);
    let den_gcd = gcd(den, by_den);
    let num = (num / num_gcd) * (by_den / den_gcd);
    let den = (den / den_gcd) * (by_num / num_gcd);
    let all = gcd(num, den);
    (num / all, den / all)
}

/// Factor both `Self` and `Rhs` can be expressed in exactly.
///
/// For `N1 / D1` and `N2 / D2` this is `gcd(N1, N2) / ((D1 / gcd(D1, D2)) * D2)`.
pub trait CommonFactor<Rhs: Factor>: Factor {
    type Output: Factor;
}

impl<N1, D1, N2, D2> CommonFactor<Ratio<N2, D2>> for Ratio<N1, D1>
where
    Ratio<N1, D1>: Factor,
    Ratio<N2, D2>: Factor,
    N1: Gcd<N2>,
    D1: Gcd<D2> + Div<Gcf<D1, D2>>,
    Quot<D1, Gcf<D1, D2>>: Mul<D2>,
    Ratio<Gcf<N1, N2>, Prod<Quot<D1, Gcf<D1, D2>>, D2>>: Factor,
{
    type Output = Ratio<Gcf<N1, N2>, Prod<Quot<D1, Gcf<D1, D2>>, D2>>;
}
