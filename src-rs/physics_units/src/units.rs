//! Shortcuts for building common units without a registry lookup
//!
//! ```
//! use physics_units::{builtin::{MILLI, OHM}, units};
//!
//! let milliohm = units::prefixed(&MILLI, &OHM);
//! assert_eq!(milliohm.to_string(), "mΩ");
//! assert_eq!((units::volt() / units::ampere()).to_string(), "V/A");
//! ```

use crate::{
    builtin::{self, BuiltinPrefix, BuiltinUnit},
    unit::Unit,
};

/// The dimensionless unit.
#[must_use]
pub const fn dimensionless() -> Unit {
    Unit::dimensionless()
}

/// A builtin unit with a builtin prefix, e.g. `mΩ`.
#[must_use]
pub fn prefixed(prefix: &BuiltinPrefix, unit: &BuiltinUnit) -> Unit {
    unit.prefixed(prefix)
}

/// Meters (`m`).
#[must_use]
pub fn meter() -> Unit {
    builtin::METER.unit()
}

/// Seconds (`s`).
#[must_use]
pub fn second() -> Unit {
    builtin::SECOND.unit()
}

/// Kilograms (`kg`).
#[must_use]
pub fn kilogram() -> Unit {
    builtin::GRAM.prefixed(&builtin::KILO)
}

/// Kelvin (`K`).
#[must_use]
pub fn kelvin() -> Unit {
    builtin::KELVIN.unit()
}

/// Amperes (`A`).
#[must_use]
pub fn ampere() -> Unit {
    builtin::AMPERE.unit()
}

/// Volts (`V`).
#[must_use]
pub fn volt() -> Unit {
    builtin::VOLT.unit()
}

/// Ohms (`Ω`).
#[must_use]
pub fn ohm() -> Unit {
    builtin::OHM.unit()
}

/// Coulombs (`C`).
#[must_use]
pub fn coulomb() -> Unit {
    builtin::COULOMB.unit()
}

/// Farads (`F`).
#[must_use]
pub fn farad() -> Unit {
    builtin::FARAD.unit()
}

/// Watts (`W`).
#[must_use]
pub fn watt() -> Unit {
    builtin::WATT.unit()
}

/// Joules (`J`).
#[must_use]
pub fn joule() -> Unit {
    builtin::JOULE.unit()
}

/// Electronvolts (`eV`).
#[must_use]
pub fn electronvolt() -> Unit {
    builtin::ELECTRONVOLT.unit()
}
