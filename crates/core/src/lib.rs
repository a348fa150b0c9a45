//! Memory Units
//!
//! Unit-safe storage sizes. A [`Quantity`] is a count paired with a
//! compile-time scaling factor relative to one byte, so kilobytes and
//! kibibytes are distinct types and mixing them is resolved by the compiler.
//!
//! ## Overview
//! - Decimal units (`Kilobytes` .. `Exabytes`) and binary units
//!   (`Kibibytes` .. `Exbibytes`), integer- or float-backed
//! - Arithmetic and comparison across units through a common type:
//!   `1 kB == 1000 B`, `1 kB + 1 KiB` is exact
//! - Explicit [`cast`] for lossy conversions, [`Quantity::from_quantity`] for
//!   lossless ones
//! - Literal macros parsed at compile time (`kibibytes!("1'024")`)
//!
//! ```
//! use memory_units::{cast, kilobytes, Bytes, Kibibytes, Megabytes};
//!
//! let buffer = kilobytes!(512) + Kibibytes::new(4);
//! assert!(buffer > Bytes::new(512_000));
//!
//! let rounded: Megabytes = cast(buffer);
//! assert_eq!(rounded.count(), 0);
//! ```

// Type-level gcd of the largest built-in factors
#![recursion_limit = "512"]

// Numeric building blocks
pub mod factor;
pub mod rep;

// The quantity type and its operators
pub mod cast;
pub mod ops;
pub mod quantity;

// Literals, units and errors
pub mod error;
pub mod literal;
pub mod units;

mod sealed {
    pub trait Sealed {}
}

// Re-export the public surface
pub use cast::{cast, ScaledQuantity};
pub use error::LiteralError;
pub use factor::{CommonFactor, Factor, Ratio};
pub use literal::{parse_integer, parse_quantity, MemoryLiteral};
pub use ops::CommonQuantity;
pub use quantity::Quantity;
pub use rep::{CommonRep, CommonRepOf, IntRep, Rep, RepKind};
pub use units::*;
