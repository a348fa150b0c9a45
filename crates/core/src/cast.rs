//! Explicit conversion between scaled quantities.
//!
//! The conversion ratio between the two factors is folded at compile time and
//! picks one of four arithmetic paths, so converting between identical
//! factors costs nothing beyond the representation change.

use std::ops::{Div, Mul};

use crate::factor::{ratio_divide, Factor};
use crate::rep::{Intermediate, Rep};
use crate::sealed::Sealed;

/// A value made of a raw count and a compile-time scaling factor.
///
/// Sealed: only [`Quantity`](crate::Quantity) implements it.
pub trait ScaledQuantity: Copy + Sealed {
    type Rep: Rep;
    type Factor: Factor;

    fn raw(self) -> Self::Rep;
    fn from_raw(raw: Self::Rep) -> Self;
}

/// Arithmetic needed to apply a reduced ratio `num / den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CastPath {
    Identity,
    Divide,
    Multiply,
    Scale,
}

impl CastPath {
    pub(crate) const fn select(num: u128, den: u128) -> Self {
        match (num == 1, den == 1) {
            (true, true) => CastPath::Identity,
            (true, false) => CastPath::Divide,
            (false, true) => CastPath::Multiply,
            (false, false) => CastPath::Scale,
        }
    }

    #[inline(always)]
    fn apply<T: Mul<Output = T> + Div<Output = T>>(self, value: T, num: T, den: T) -> T {
        match self {
            CastPath::Identity => value,
            CastPath::Divide => value / den,
            CastPath::Multiply => value * num,
            CastPath::Scale => value * num / den,
        }
    }
}

/// Re-express `count` units of `F` as units of `To`, narrowing into `R2`.
#[inline]
pub(crate) fn rescale<R: Rep, F: Factor, R2: Rep, To: Factor>(count: R) -> R2 {
    let (num, den, path) = const {
        let (num, den) = ratio_divide(F::NUM, F::DEN, To::NUM, To::DEN);
        (num, den, CastPath::select(num, den))
    };
    if path == CastPath::Identity {
        return count.convert();
    }
    match Intermediate::between(R::KIND, R2::KIND) {
        Intermediate::Float => R2::from_f64(path.apply(count.to_f64(), num as f64, den as f64)),
        Intermediate::Unsigned => R2::from_u128(path.apply(count.to_u128(), num, den)),
        Intermediate::Signed => {
            R2::from_i128(path.apply(count.to_i128(), num as i128, den as i128))
        }
    }
}

/// Convert `from` into `To`, truncating toward zero when the target cannot
/// hold the exact value.
///
/// ```
/// use memory_units::{cast, Bytes, Kilobytes};
///
/// let small: Kilobytes = cast(Bytes::new(1_999));
/// assert_eq!(small.count(), 1);
/// ```
#[inline]
pub fn cast<To: ScaledQuantity>(from: impl ScaledQuantity) -> To {
    convert(from)
}

#[inline]
fn convert<Src: ScaledQuantity, Dst: ScaledQuantity>(from: Src) -> Dst {
    Dst::from_raw(rescale::<Src::Rep, Src::Factor, Dst::Rep, Dst::Factor>(
        from.raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{
        Byte, Bytes, Exabytes, FloatKibibytes, FloatKilobytes, Kibi, Kilo, Kilobytes,
        Megabytes, Pebibytes,
    };
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_selection() {
        assert_eq!(CastPath::select(1, 1), CastPath::Identity);
        assert_eq!(CastPath::select(1, 1_000), CastPath::Divide);
        assert_eq!(CastPath::select(1_000, 1), CastPath::Multiply);
        assert_eq!(CastPath::select(125, 128), CastPath::Scale);
    }

    #[test]
    fn test_path_apply() {
        assert_eq!(CastPath::Identity.apply(7_u128, 3, 2), 7);
        assert_eq!(CastPath::Divide.apply(7_u128, 1, 2), 3);
        assert_eq!(CastPath::Multiply.apply(7_u128, 3, 1), 21);
        assert_eq!(CastPath::Scale.apply(7_u128, 3, 2), 10);
    }

    #[test]
    fn test_rescale_between_families() {
        let bytes: u64 = rescale::<u64, Kibi, u64, Byte>(3);
        assert_eq!(bytes, 3_072);
        let kilo: u64 = rescale::<u64, Kibi, u64, Kilo>(1_000);
        assert_eq!(kilo, 1_024);
    }

    #[test]
    fn test_downcast_is_exact() {
        let bytes: Bytes = cast(Kilobytes::new(1));
        assert_eq!(bytes.count(), 1_000);
    }

    #[test]
    fn test_upcast_truncates() {
        let mega: Megabytes = cast(Kilobytes::new(1_999));
        assert_eq!(mega.count(), 1);
        let exa: Exabytes = Pebibytes::new(1_024).cast();
        assert_eq!(exa.count(), 1);
    }

    #[test]
    fn test_signed_intermediate() {
        let negative: Quantity<i32, Byte> = cast(Quantity::<i64, Kilo>::new(-3));
        assert_eq!(negative.count(), -3_000);
    }

    #[test]
    fn test_float_target_keeps_fraction() {
        let kilo: FloatKilobytes = cast(Bytes::new(1_500));
        assert_relative_eq!(kilo.count(), 1.5);
        let kibi: FloatKibibytes = cast(Kilobytes::new(1));
        assert_relative_eq!(kibi.count(), 0.9765625);
    }

    #[test]
    fn test_float_to_integer_truncates_toward_zero() {
        let bytes: Bytes = cast(FloatKilobytes::new(1.9999));
        assert_eq!(bytes.count(), 1_999);
    }
}
