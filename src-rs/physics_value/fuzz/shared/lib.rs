use libfuzzer_sys::arbitrary::{self, Result, Unstructured};
use physics_units::{
    Unit,
    builtin::{self, BuiltinUnit},
    units,
};
use physics_value::Quantity;

/// Units that fuzzed voltages are expressed in
const VOLTAGE_PREFIXES: [&builtin::BuiltinPrefix; 4] =
    [&builtin::MICRO, &builtin::MILLI, &builtin::KILO, &builtin::MEGA];

/// Units of different dimensionality
const UNITS: [&BuiltinUnit; 6] = [
    &builtin::METER,
    &builtin::SECOND,
    &builtin::AMPERE,
    &builtin::VOLT,
    &builtin::OHM,
    &builtin::JOULE,
];

/// A finite magnitude that stays away from overflow when scaled by a prefix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude(pub f64);

impl<'a> arbitrary::Arbitrary<'a> for Magnitude {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let value = u.arbitrary::<f64>()?;

        if !value.is_finite() || value.abs() > 1e100 {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        Ok(Magnitude(value))
    }
}

/// A voltage in volts or in a prefixed volt unit
#[derive(Debug, Clone)]
pub struct Voltage(pub Quantity);

impl<'a> arbitrary::Arbitrary<'a> for Voltage {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let Magnitude(magnitude) = u.arbitrary()?;
        let unit = voltage_unit(u)?;

        Ok(Voltage(Quantity::new(magnitude, unit)))
    }
}

/// Picks a volt unit, prefixed or not.
pub fn voltage_unit(u: &mut Unstructured<'_>) -> Result<Unit> {
    let index = u.choose_index(VOLTAGE_PREFIXES.len() + 1)?;

    Ok(VOLTAGE_PREFIXES
        .get(index)
        .map_or_else(units::volt, |prefix| units::prefixed(prefix, &builtin::VOLT)))
}

/// A quantity in one of a handful of units of different dimensionality
#[derive(Debug, Clone)]
pub struct AnyQuantity(pub Quantity);

impl<'a> arbitrary::Arbitrary<'a> for AnyQuantity {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let Magnitude(magnitude) = u.arbitrary()?;
        let unit = u.choose(&UNITS)?.unit();

        Ok(AnyQuantity(Quantity::new(magnitude, unit)))
    }
}
