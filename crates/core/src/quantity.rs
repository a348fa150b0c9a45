//! The scaled quantity type.
//!
//! A [`Quantity`] is a count of `F` units stored as an `R`. Mixing factors
//! goes through the binary operators in [`ops`](crate::ops) or through an
//! explicit [`cast`](crate::cast()); everything in this module keeps the
//! factor unchanged.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};

use crate::cast::{self, ScaledQuantity};
use crate::factor::{ratio_divide, CommonFactor, Factor};
use crate::rep::{IntRep, Rep};
use crate::sealed::Sealed;
use crate::units::Byte;

/// `count` units of `F` bytes each, stored as `R`.
///
/// The representation is sealed to primitive numbers, so quantities never nest.
/// Compound assignment only accepts the same factor:
///
/// ```compile_fail
/// use memory_units::{Bytes, Kilobytes};
/// let mut total = Bytes::new(1);
/// total += Kilobytes::new(1);
/// ```
///
/// Floating-point quantities have no remainder:
///
/// ```compile_fail
/// use memory_units::FloatKilobytes;
/// let mut size = FloatKilobytes::new(1.5);
/// size %= 1.0;
/// ```
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Quantity<R, F = Byte> {
    count: R,
    factor: PhantomData<F>,
}

impl<R: Rep, F: Factor> Quantity<R, F> {
    /// Build from a count already in the representation type.
    #[inline]
    #[must_use]
    pub const fn new(count: R) -> Self {
        const {
            assert!(
                F::NUM > 0 && F::DEN > 0,
                "memory size factor components must be positive"
            );
        };
        Self {
            count,
            factor: PhantomData,
        }
    }

    /// Build from a count in any representation, with `as` semantics.
    ///
    /// A floating-point count cannot initialize an integer quantity:
    ///
    /// ```compile_fail
    /// use memory_units::Bytes;
    /// let bytes = Bytes::from_count(1.5_f64);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_count<O: Rep>(count: O) -> Self {
        const {
            assert!(
                R::KIND.is_float() || !O::KIND.is_float(),
                "floating-point count would be truncated by an integer memory size"
            );
        };
        Self::new(count.convert())
    }

    /// Lossless conversion from another quantity.
    ///
    /// Accepted when `R` is floating point, or when every `F2` is a whole
    /// number of `F` and `R2` is an integer. Anything else needs [`cast`](crate::cast()).
    ///
    /// ```
    /// use memory_units::{Bytes, Kilobytes};
    /// assert_eq!(Bytes::from_quantity(Kilobytes::new(3)).count(), 3_000);
    /// ```
    ///
    /// ```compile_fail
    /// use memory_units::{Bytes, Kilobytes};
    /// let kilo = Kilobytes::from_quantity(Bytes::new(1_000));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_quantity<R2: Rep, F2: Factor>(other: Quantity<R2, F2>) -> Self {
        const {
            assert!(
                R::KIND.is_float()
                    || (ratio_divide(F2::NUM, F2::DEN, F::NUM, F::DEN).1 == 1
                        && !R2::KIND.is_float()),
                "implicit memory size conversion would truncate, use `cast`"
            );
        };
        other.cast()
    }

    /// Raw count in units of `F`.
    #[inline]
    pub const fn count(&self) -> R {
        self.count
    }

    /// Convert into another quantity type, truncating when needed.
    #[inline]
    pub fn cast<To: ScaledQuantity>(self) -> To {
        cast::cast(self)
    }

    /// Unary plus.
    #[inline]
    pub const fn pos(self) -> Self {
        self
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(R::ZERO)
    }

    /// Lowest representable quantity (the most negative for floats).
    #[inline]
    pub const fn min() -> Self {
        Self::new(R::MIN)
    }

    #[inline]
    pub const fn max() -> Self {
        Self::new(R::MAX)
    }

    /// Add one unit, returning the updated quantity.
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        self.count += R::ONE;
        *self
    }

    /// Add one unit, returning the quantity as it was before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.count += R::ONE;
        previous
    }

    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        self.count -= R::ONE;
        *self
    }

    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.count -= R::ONE;
        previous
    }
}

impl<R, F> Sealed for Quantity<R, F> {}

impl<R: Rep, F: Factor> ScaledQuantity for Quantity<R, F> {
    type Rep = R;
    type Factor = F;

    #[inline(always)]
    fn raw(self) -> R {
        self.count
    }

    #[inline(always)]
    fn from_raw(raw: R) -> Self {
        Self::new(raw)
    }
}

impl<R: Rep, F: Factor> From<R> for Quantity<R, F> {
    #[inline]
    fn from(count: R) -> Self {
        Self::new(count)
    }
}

/// Zero units, built through [`Quantity::new`] like every other constructor.
///
/// ```compile_fail
/// use memory_units::{Factor, Quantity};
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Empty;
///
/// impl Factor for Empty {
///     const NUM: u64 = 0;
///     const DEN: u64 = 1;
/// }
///
/// let size = Quantity::<u64, Empty>::default();
/// ```
///
/// ```compile_fail
/// use memory_units::{Quantity, Ratio};
/// use typenum::U0;
/// let size = Quantity::<u64, Ratio<U0>>::default();
/// ```
impl<R: Rep, F: Factor> Default for Quantity<R, F> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Rep + Neg<Output = R>, F: Factor> Neg for Quantity<R, F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

// ============================================================================
// Compound assignment (same factor only)
// ============================================================================

impl<R: Rep, F: Factor> AddAssign for Quantity<R, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.count += rhs.count;
    }
}

impl<R: Rep, F: Factor> SubAssign for Quantity<R, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.count -= rhs.count;
    }
}

impl<R: Rep, F: Factor> MulAssign<R> for Quantity<R, F> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.count *= rhs;
    }
}

impl<R: Rep, F: Factor> MulAssign for Quantity<R, F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.count *= rhs.count;
    }
}

impl<R: Rep, F: Factor> DivAssign<R> for Quantity<R, F> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.count /= rhs;
    }
}

impl<R: Rep, F: Factor> DivAssign for Quantity<R, F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.count /= rhs.count;
    }
}

impl<R: IntRep, F: Factor> RemAssign<R> for Quantity<R, F> {
    #[inline]
    fn rem_assign(&mut self, rhs: R) {
        self.count %= rhs;
    }
}

impl<R: IntRep, F: Factor> RemAssign for Quantity<R, F> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        self.count %= rhs.count;
    }
}

// ============================================================================
// Same-type traits
// ============================================================================

impl<R: Rep + Eq, F: CommonFactor<F>> Eq for Quantity<R, F> {}

impl<R: Rep + Ord, F: CommonFactor<F>> Ord for Quantity<R, F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

impl<R: Rep + Hash, F: Factor> Hash for Quantity<R, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<R: Rep, F: Factor> Sum for Quantity<R, F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut total, item| {
            total += item;
            total
        })
    }
}
