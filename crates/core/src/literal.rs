//! Memory size literals.
//!
//! Integer literals are parsed from their source text, so the whole range of
//! `u64` and the C-style prefixes are available: `0b`/`0B` binary, `0x`/`0X`
//! hexadecimal, `0o`/`0O` or a bare leading `0` octal, decimal otherwise.
//! `'` and `_` separate digit groups and are ignored.
//!
//! The macros run the parser inside a `const` item, so a malformed literal
//! or one the representation cannot hold is a compile error:
//!
//! ```
//! use memory_units::{kibibytes, kilobytes};
//!
//! assert_eq!(kilobytes!(1024).count(), 1_024);
//! assert_eq!(kibibytes!("1'024").count(), 1_024);
//! assert_eq!(kilobytes!(0x10).count(), 16);
//! ```
//!
//! ```compile_fail
//! use memory_units::{quantity, Byte};
//! let size = quantity!(u8, Byte; 300);
//! ```
//!
//! A digit outside the base:
//!
//! ```compile_fail
//! use memory_units::kilobytes;
//! let size = kilobytes!("12z");
//! ```
//!
//! ```compile_fail
//! use memory_units::bytes;
//! let size = bytes!(0b102);
//! ```
//!
//! More than 64 bits:
//!
//! ```compile_fail
//! use memory_units::bytes;
//! let size = bytes!(18446744073709551616);
//! ```
//!
//! A float that would round the literal:
//!
//! ```compile_fail
//! use memory_units::{quantity, Byte};
//! let size = quantity!(f64, Byte; 18446744073709551615);
//! ```
//!
//! Floating-point sizes skip the parser and go through [`MemoryLiteral`].

use std::str::FromStr;

use tracing::debug;

use crate::error::LiteralError;
use crate::factor::Factor;
use crate::quantity::Quantity;
use crate::rep::Rep;
use crate::units::{Byte, Exa, Exbi, Gibi, Giga, Kibi, Kilo, Mebi, Mega, Pebi, Peta, Tebi, Tera};

/// Parse the text of an integer literal into a `u64`.
///
/// An empty digit sequence (`""`, `"0x"`) is zero.
///
/// # Errors
/// [`LiteralError::InvalidDigit`] for a character outside the base,
/// [`LiteralError::Overflow`] when the value does not fit in 64 bits.
///
/// ```
/// use memory_units::parse_integer;
///
/// assert_eq!(parse_integer("0x1F"), Ok(31));
/// assert_eq!(parse_integer("017"), Ok(15));
/// assert_eq!(parse_integer("1'000_000"), Ok(1_000_000));
/// ```
pub const fn parse_integer(literal: &str) -> Result<u64, LiteralError> {
    parse_digits(literal.as_bytes())
}

const fn parse_digits(bytes: &[u8]) -> Result<u64, LiteralError> {
    let (base, mut index): (u64, usize) = match bytes {
        [b'0', b'b' | b'B', ..] => (2, 2),
        [b'0', b'x' | b'X', ..] => (16, 2),
        [b'0', b'o' | b'O', ..] => (8, 2),
        [b'0', _, ..] => (8, 1),
        _ => (10, 0),
    };

    let mut value: u64 = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        index += 1;
        if byte == b'\'' || byte == b'_' {
            continue;
        }

        let digit = match digit_value(byte) {
            Some(digit) if digit < base => digit,
            _ => {
                return Err(LiteralError::InvalidDigit {
                    found: if byte.is_ascii() {
                        byte as char
                    } else {
                        char::REPLACEMENT_CHARACTER
                    },
                    base: base as u32,
                })
            }
        };

        value = match value.checked_mul(base) {
            Some(shifted) => shifted,
            None => return Err(LiteralError::Overflow),
        };
        value = match value.checked_add(digit) {
            Some(sum) => sum,
            None => return Err(LiteralError::Overflow),
        };
    }
    Ok(value)
}

const fn digit_value(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u64),
        b'a'..=b'f' => Some((byte - b'a') as u64 + 10),
        b'A'..=b'F' => Some((byte - b'A') as u64 + 10),
        _ => None,
    }
}

/// Parse a literal token as produced by `stringify!`, with surrounding quotes
/// removed for string literals. Panics, so it aborts const evaluation.
#[doc(hidden)]
#[track_caller]
pub const fn parse_token(token: &str) -> u64 {
    let bytes = token.as_bytes();
    let digits = match bytes {
        [b'"', inner @ .., b'"'] => inner,
        _ => bytes,
    };
    match parse_digits(digits) {
        Ok(value) => value,
        Err(LiteralError::InvalidDigit { .. }) => panic!("invalid digit in memory size literal"),
        Err(LiteralError::Overflow) => panic!("memory size literal does not fit in 64 bits"),
        Err(LiteralError::OutOfRange { .. }) => {
            panic!("literal value cannot be represented by memory size type")
        }
    }
}

/// Parse a literal into a quantity of `R` units of `F`.
///
/// # Errors
/// Any error of [`parse_integer`], plus [`LiteralError::OutOfRange`] when the
/// value does not survive conversion into `R`.
pub fn parse_quantity<R: Rep, F: Factor>(literal: &str) -> Result<Quantity<R, F>, LiteralError> {
    let value = parse_integer(literal)?;
    let count = R::from_literal(value).ok_or(LiteralError::OutOfRange { value })?;
    Ok(Quantity::new(count))
}

impl<R: Rep, F: Factor> FromStr for Quantity<R, F> {
    type Err = LiteralError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        parse_quantity(literal)
            .inspect_err(|error| debug!(literal, %error, "Rejected memory size literal"))
    }
}

/// Build a quantity of `$rep` units of `$factor` from an integer literal at
/// compile time.
///
/// ```
/// use memory_units::{quantity, Mebi};
///
/// let page = quantity!(u32, Mebi; 0b100);
/// assert_eq!(page.count(), 4_u32);
/// ```
#[macro_export]
macro_rules! quantity {
    ($rep:ty, $factor:ty; $literal:literal) => {{
        const RAW: u64 = $crate::literal::parse_token(stringify!($literal));
        const COUNT: $rep = {
            let count = RAW as $rep;
            assert!(
                count as u128 == RAW as u128 && count as i128 >= 0,
                "literal value cannot be represented by memory size type"
            );
            count
        };
        const QUANTITY: $crate::Quantity<$rep, $factor> = $crate::Quantity::new(COUNT);
        QUANTITY
    }};
}

macro_rules! unit_literals {
    ($($(#[$meta:meta])* $name:ident => $factor:ident;)+) => {$(
        $(#[$meta])*
        #[macro_export]
        macro_rules! $name {
            ($literal:literal) => {
                $crate::quantity!(u64, $crate::units::$factor; $literal)
            };
        }
    )+};
}

unit_literals! {
    /// `bytes!(512)`
    bytes => Byte;
    kilobytes => Kilo;
    megabytes => Mega;
    gigabytes => Giga;
    terabytes => Tera;
    petabytes => Peta;
    exabytes => Exa;
    /// `kibibytes!(4)`, or `kibibytes!("1'024")` with digit separators
    kibibytes => Kibi;
    mebibytes => Mebi;
    gibibytes => Gibi;
    tebibytes => Tebi;
    pebibytes => Pebi;
    exbibytes => Exbi;
}

/// Unit constructors on plain numbers: `4_u64.kibibytes()`, `1.5_f64.gigabytes()`.
pub trait MemoryLiteral: Rep {
    fn bytes(self) -> Quantity<Self, Byte> {
        Quantity::new(self)
    }

    fn kilobytes(self) -> Quantity<Self, Kilo> {
        Quantity::new(self)
    }

    fn megabytes(self) -> Quantity<Self, Mega> {
        Quantity::new(self)
    }

    fn gigabytes(self) -> Quantity<Self, Giga> {
        Quantity::new(self)
    }

    fn terabytes(self) -> Quantity<Self, Tera> {
        Quantity::new(self)
    }

    fn petabytes(self) -> Quantity<Self, Peta> {
        Quantity::new(self)
    }

    fn exabytes(self) -> Quantity<Self, Exa> {
        Quantity::new(self)
    }

    fn kibibytes(self) -> Quantity<Self, Kibi> {
        Quantity::new(self)
    }

    fn mebibytes(self) -> Quantity<Self, Mebi> {
        Quantity::new(self)
    }

    fn gibibytes(self) -> Quantity<Self, Gibi> {
        Quantity::new(self)
    }

    fn tebibytes(self) -> Quantity<Self, Tebi> {
        Quantity::new(self)
    }

    fn pebibytes(self) -> Quantity<Self, Pebi> {
        Quantity::new(self)
    }

    fn exbibytes(self) -> Quantity<Self, Exbi> {
        Quantity::new(self)
    }
}

impl MemoryLiteral for u64 {}
impl MemoryLiteral for f64 {}
