//! Binary operators.
//!
//! Two quantities are first promoted to their [`CommonQuantity`]: the common
//! representation of their counts and the common factor of their units. The
//! arithmetic then happens on the raw counts.
//!
//! ```
//! use memory_units::{Bytes, Kibibytes, Kilobytes};
//!
//! let total = Kilobytes::new(1) + Kibibytes::new(1);
//! // 1000 B + 1024 B, expressed in the 8-byte unit both share
//! assert_eq!(total.count(), 253);
//! assert!(Kilobytes::new(1) == Bytes::new(1_000));
//! assert_eq!(Kilobytes::new(4) / Bytes::new(1_000), 4);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::factor::{CommonFactor, Factor};
use crate::quantity::Quantity;
use crate::rep::{CommonRep, CommonRepOf, IntRep, Rep};

/// Type both operands of a binary operator are converted to.
pub type CommonQuantity<R1, F1, R2, F2> =
    Quantity<<R1 as CommonRep<R2>>::Output, <F1 as CommonFactor<F2>>::Output>;

#[inline(always)]
#[allow(clippy::type_complexity)]
fn promote<R1, F1, R2, F2>(
    lhs: Quantity<R1, F1>,
    rhs: Quantity<R2, F2>,
) -> (CommonQuantity<R1, F1, R2, F2>, CommonQuantity<R1, F1, R2, F2>)
where
    R1: CommonRep<R2>,
    R2: Rep,
    F1: CommonFactor<F2>,
    F2: Factor,
{
    (lhs.cast(), rhs.cast())
}

macro_rules! quantity_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<R1, F1, R2, F2> $trait<Quantity<R2, F2>> for Quantity<R1, F1>
        where
            R1: CommonRep<R2>,
            R2: Rep,
            F1: CommonFactor<F2>,
            F2: Factor,
        {
            type Output = CommonQuantity<R1, F1, R2, F2>;

            #[inline]
            fn $method(self, rhs: Quantity<R2, F2>) -> Self::Output {
                let (lhs, rhs) = promote(self, rhs);
                Quantity::new(lhs.count() $op rhs.count())
            }
        }
    };
}

quantity_op!(Add, add, +);
quantity_op!(Sub, sub, -);
quantity_op!(Mul, mul, *);

impl<R1, F1, R2, F2> Rem<Quantity<R2, F2>> for Quantity<R1, F1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    F1: CommonFactor<F2>,
    F2: Factor,
    CommonRepOf<R1, R2>: IntRep,
{
    type Output = CommonQuantity<R1, F1, R2, F2>;

    #[inline]
    fn rem(self, rhs: Quantity<R2, F2>) -> Self::Output {
        let (lhs, rhs) = promote(self, rhs);
        Quantity::new(lhs.count() % rhs.count())
    }
}

/// How many times `rhs` fits in `self`, as a bare number.
impl<R1, F1, R2, F2> Div<Quantity<R2, F2>> for Quantity<R1, F1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    F1: CommonFactor<F2>,
    F2: Factor,
{
    type Output = CommonRepOf<R1, R2>;

    #[inline]
    fn div(self, rhs: Quantity<R2, F2>) -> Self::Output {
        let (lhs, rhs) = promote(self, rhs);
        lhs.count() / rhs.count()
    }
}

impl<R1, F1, R2, F2> PartialEq<Quantity<R2, F2>> for Quantity<R1, F1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    F1: CommonFactor<F2>,
    F2: Factor,
{
    #[inline]
    fn eq(&self, other: &Quantity<R2, F2>) -> bool {
        let (lhs, rhs) = promote(*self, *other);
        lhs.count() == rhs.count()
    }
}

impl<R1, F1, R2, F2> PartialOrd<Quantity<R2, F2>> for Quantity<R1, F1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    F1: CommonFactor<F2>,
    F2: Factor,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<R2, F2>) -> Option<Ordering> {
        let (lhs, rhs) = promote(*self, *other);
        lhs.count().partial_cmp(&rhs.count())
    }
}

// ============================================================================
// Scalar operands
// ============================================================================

impl<R, F, S> Mul<S> for Quantity<R, F>
where
    R: CommonRep<S>,
    S: Rep,
    F: Factor,
{
    type Output = Quantity<CommonRepOf<R, S>, F>;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        Quantity::new(self.count().convert::<CommonRepOf<R, S>>() * rhs.convert())
    }
}

impl<R, F, S> Div<S> for Quantity<R, F>
where
    R: CommonRep<S>,
    S: Rep,
    F: Factor,
{
    type Output = Quantity<CommonRepOf<R, S>, F>;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        Quantity::new(self.count().convert::<CommonRepOf<R, S>>() / rhs.convert())
    }
}

impl<R, F, S> Rem<S> for Quantity<R, F>
where
    R: CommonRep<S>,
    S: IntRep,
    F: Factor,
    CommonRepOf<R, S>: IntRep,
{
    type Output = Quantity<CommonRepOf<R, S>, F>;

    #[inline]
    fn rem(self, rhs: S) -> Self::Output {
        Quantity::new(self.count().convert::<CommonRepOf<R, S>>() % rhs.convert())
    }
}

macro_rules! scalar_times_quantity {
    ($($scalar:ty),+) => {$(
        impl<R, F> Mul<Quantity<R, F>> for $scalar
        where
            Quantity<R, F>: Mul<$scalar>,
        {
            type Output = <Quantity<R, F> as Mul<$scalar>>::Output;

            #[inline]
            fn mul(self, rhs: Quantity<R, F>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}

scalar_times_quantity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
