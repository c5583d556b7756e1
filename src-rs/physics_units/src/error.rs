//! Errors raised by unit lookup and conversion

use physics_shared::error::{AsPhysicsError, Context};

use crate::unit::Unit;

/// An error raised while looking up or converting units
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// The unit name is not in the registry, with or without a prefix
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    /// The units measure different things
    #[error("cannot convert from `{from}` to `{to}`")]
    IncompatibleUnits {
        /// The unit being converted from
        from: String,
        /// The unit being converted to
        to: String,
        /// The dimensionality of the unit being converted from
        from_dimensionality: String,
        /// The dimensionality of the unit being converted to
        to_dimensionality: String,
    },
}

impl UnitError {
    /// Creates an [`UnitError::IncompatibleUnits`] error for the given units.
    #[must_use]
    pub fn incompatible(from: &Unit, to: &Unit) -> Self {
        Self::IncompatibleUnits {
            from: describe(from),
            to: describe(to),
            from_dimensionality: from.dimensionality().to_string(),
            to_dimensionality: to.dimensionality().to_string(),
        }
    }
}

impl AsPhysicsError for UnitError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownUnit(_) => vec![Context::Help(
                "units are looked up by symbol or name with an optional SI prefix, e.g. `mV` or `millivolt`"
                    .to_string(),
            )],
            Self::IncompatibleUnits {
                from,
                to,
                from_dimensionality,
                to_dimensionality,
            } => vec![
                Context::Note(format!("`{from}` has dimensionality {from_dimensionality}")),
                Context::Note(format!("`{to}` has dimensionality {to_dimensionality}")),
            ],
        }
    }
}

/// Describes a unit for error messages, naming the dimensionless unit
/// explicitly since it displays as an empty string.
#[must_use]
pub fn describe(unit: &Unit) -> String {
    let symbol = unit.to_string();
    if symbol.is_empty() {
        "dimensionless".to_string()
    } else {
        symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn unknown_unit_suggests_lookup_format() {
        let error = UnitError::UnknownUnit("furlong".to_string());

        assert_eq!(error.message(), "unknown unit `furlong`");
        assert!(matches!(error.context().as_slice(), [Context::Help(_)]));
    }

    #[test]
    fn incompatible_units_note_both_dimensionalities() {
        let error = UnitError::incompatible(&units::volt(), &units::ampere());

        assert_eq!(error.message(), "cannot convert from `V` to `A`");
        assert_eq!(
            error.context(),
            vec![
                Context::Note(
                    "`V` has dimensionality [mass]*[length]^2/[time]^3/[current]".to_string()
                ),
                Context::Note("`A` has dimensionality [current]".to_string()),
            ]
        );
    }

    #[test]
    fn dimensionless_unit_is_described_by_name() {
        assert_eq!(describe(&Unit::dimensionless()), "dimensionless");
        assert_eq!(describe(&units::ohm()), "Ω");
    }
}
