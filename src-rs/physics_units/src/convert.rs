//! Conversions between units
//!
//! Each conversion returns the new magnitude together with the new unit, so
//! that `value * from == new_value * to`.

use tracing::debug;

use crate::{
    builtin,
    dimension::Dimension,
    error::UnitError,
    unit::{Unit, UnitTerm},
    util::is_close,
};

/// Converts a value from one unit to another.
///
/// # Errors
///
/// Returns [`UnitError::IncompatibleUnits`] if the units have different
/// dimensionality.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64, UnitError> {
    if !from.dimensionally_eq(to) {
        debug!(%from, %to, "refusing to convert between units of different dimensionality");
        return Err(UnitError::incompatible(from, to));
    }

    Ok(value * from.magnitude() / to.magnitude())
}

/// Expresses a value in SI base units (`kg`, `m`, `s`, `K`, `A`, `mol`, `cd`).
#[must_use]
pub fn to_base_units(value: f64, unit: &Unit) -> (f64, Unit) {
    let dimensionality = unit.dimensionality();

    let base = Unit::from_terms(Dimension::ALL.into_iter().filter_map(|dimension| {
        let exponent = dimensionality.exponent(dimension);
        (!is_close(exponent, 0.0)).then(|| UnitTerm {
            unit: builtin::base_unit(dimension),
            exponent,
        })
    }));

    (value * unit.magnitude(), base)
}

/// Folds together the terms of a unit that share the same dimensions.
///
/// Every term is converted into the first term with the same dimensions,
/// so `m*km` becomes `m^2` and `V/mV` becomes dimensionless.
#[must_use]
pub fn to_reduced_units(value: f64, unit: &Unit) -> (f64, Unit) {
    let mut factor = 1.0;
    let mut reduced: Vec<UnitTerm> = Vec::with_capacity(unit.terms().len());

    for term in unit.terms() {
        let existing = reduced
            .iter_mut()
            .find(|existing| existing.unit.dimension_map() == term.unit.dimension_map());

        match existing {
            Some(existing) => {
                factor *= (term.unit.magnitude() / existing.unit.magnitude()).powf(term.exponent);
                existing.exponent += term.exponent;
            }
            None => reduced.push(term.clone()),
        }
    }

    reduced.retain(|term| !is_close(term.exponent, 0.0));

    (value * factor, Unit::from_terms(reduced))
}

/// Rescales the prefix of a unit so the value is between 1 and 1000.
///
/// Prefixes are removed from every term, then the first term with a positive
/// exponent (or the first term, if there is none) is given the power-of-1000
/// prefix that brings the value closest to `[1, 1000)`. Zero and non-finite
/// values and dimensionless units are returned unchanged.
#[must_use]
pub fn to_compact(value: f64, unit: &Unit) -> (f64, Unit) {
    if value == 0.0 || !value.is_finite() || unit.is_dimensionless() {
        return (value, unit.clone());
    }

    let (root_value, root_unit) = strip_prefixes(value, unit);

    let Some((index, term)) = root_unit
        .terms()
        .iter()
        .enumerate()
        .find(|(_, term)| term.exponent > 0.0)
        .or_else(|| root_unit.terms().first().map(|term| (0, term)))
    else {
        return (value, unit.clone());
    };

    let scale = root_value.abs().log10() / term.exponent / 3.0;
    let scale = if term.exponent > 0.0 {
        scale.floor()
    } else {
        scale.ceil()
    };

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the power is clamped to the prefix table before the cast"
    )]
    let power = (scale * 3.0).clamp(-30.0, 30.0) as i32;

    let prefix = builtin::prefix_for_power(power).map(builtin::BuiltinPrefix::prefix);

    let mut terms = root_unit.terms().to_vec();
    terms[index].unit = terms[index].unit.clone().with_prefix(prefix);
    let compact = Unit::from_terms(terms);

    let compact_value = root_value * root_unit.magnitude() / compact.magnitude();

    (compact_value, compact)
}

fn strip_prefixes(value: f64, unit: &Unit) -> (f64, Unit) {
    let stripped = Unit::from_terms(unit.terms().iter().map(|term| UnitTerm {
        unit: term.unit.without_prefix(),
        exponent: term.exponent,
    }));

    (value * unit.magnitude() / stripped.magnitude(), stripped)
}
