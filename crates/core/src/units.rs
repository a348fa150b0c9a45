//! Predefined storage units.

use typenum::{
    U1, U1000, U1000000, U1000000000, U1000000000000, U1000000000000000, U1000000000000000000,
    U1024, U1048576, U1073741824, U1099511627776, U1125899906842624, U1152921504606846976,
};

use crate::factor::Ratio;
use crate::quantity::Quantity;

/// Default integer representation of the unit aliases.
pub type IntUnitRep = u64;
/// Default floating-point representation of the `Float*` unit aliases.
pub type FloatUnitRep = f64;

// ============================================================================
// Factors
// ============================================================================

pub type Byte = Ratio<U1>;

pub type Kilo = Ratio<U1000>;
pub type Mega = Ratio<U1000000>;
pub type Giga = Ratio<U1000000000>;
pub type Tera = Ratio<U1000000000000>;
pub type Peta = Ratio<U1000000000000000>;
pub type Exa = Ratio<U1000000000000000000>;

pub type Kibi = Ratio<U1024>;
pub type Mebi = Ratio<U1048576>;
pub type Gibi = Ratio<U1073741824>;
pub type Tebi = Ratio<U1099511627776>;
pub type Pebi = Ratio<U1125899906842624>;
pub type Exbi = Ratio<U1152921504606846976>;

// ============================================================================
// Integer quantities
// ============================================================================

pub type Bytes = Quantity<IntUnitRep, Byte>;

pub type Kilobytes = Quantity<IntUnitRep, Kilo>;
pub type Megabytes = Quantity<IntUnitRep, Mega>;
pub type Gigabytes = Quantity<IntUnitRep, Giga>;
pub type Terabytes = Quantity<IntUnitRep, Tera>;
pub type Petabytes = Quantity<IntUnitRep, Peta>;
pub type Exabytes = Quantity<IntUnitRep, Exa>;

pub type Kibibytes = Quantity<IntUnitRep, Kibi>;
pub type Mebibytes = Quantity<IntUnitRep, Mebi>;
pub type Gibibytes = Quantity<IntUnitRep, Gibi>;
pub type Tebibytes = Quantity<IntUnitRep, Tebi>;
pub type Pebibytes = Quantity<IntUnitRep, Pebi>;
pub type Exbibytes = Quantity<IntUnitRep, Exbi>;

// ============================================================================
// Floating-point quantities
// ============================================================================

pub type FloatBytes = Quantity<FloatUnitRep, Byte>;

pub type FloatKilobytes = Quantity<FloatUnitRep, Kilo>;
pub type FloatMegabytes = Quantity<FloatUnitRep, Mega>;
pub type FloatGigabytes = Quantity<FloatUnitRep, Giga>;
pub type FloatTerabytes = Quantity<FloatUnitRep, Tera>;
pub type FloatPetabytes = Quantity<FloatUnitRep, Peta>;
pub type FloatExabytes = Quantity<FloatUnitRep, Exa>;

pub type FloatKibibytes = Quantity<FloatUnitRep, Kibi>;
pub type FloatMebibytes = Quantity<FloatUnitRep, Mebi>;
pub type FloatGibibytes = Quantity<FloatUnitRep, Gibi>;
pub type FloatTebibytes = Quantity<FloatUnitRep, Tebi>;
pub type FloatPebibytes = Quantity<FloatUnitRep, Pebi>;
pub type FloatExbibytes = Quantity<FloatUnitRep, Exbi>;
