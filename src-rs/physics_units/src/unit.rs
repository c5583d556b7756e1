use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::{
    dimension::DimensionMap,
    util::{is_close, is_relatively_close},
};

/// A decimal unit prefix, such as `m` (milli) or `k` (kilo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefix {
    symbol: String,
    value: f64,
}

impl Prefix {
    /// Creates a new prefix from its symbol and scale.
    #[must_use]
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }

    /// The symbol written in front of the unit symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The scale of the prefix (e.g. `1e-3` for milli).
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// A single named unit, optionally prefixed (e.g. `mΩ`).
///
/// The root magnitude is the size of the unprefixed unit in SI base units,
/// so the gram has a root magnitude of `1e-3` because the kilogram is the
/// base unit of mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedUnit {
    prefix: Option<Prefix>,
    root: String,
    root_magnitude: f64,
    dimension_map: DimensionMap,
}

impl NamedUnit {
    /// Creates a new unprefixed named unit.
    #[must_use]
    pub fn new(root: impl Into<String>, root_magnitude: f64, dimension_map: DimensionMap) -> Self {
        Self {
            prefix: None,
            root: root.into(),
            root_magnitude,
            dimension_map,
        }
    }

    /// Replaces the prefix of the unit.
    #[must_use]
    pub fn with_prefix(self, prefix: Option<Prefix>) -> Self {
        Self { prefix, ..self }
    }

    /// Returns the same unit without its prefix.
    #[must_use]
    pub fn without_prefix(&self) -> Self {
        self.clone().with_prefix(None)
    }

    /// The full symbol, prefix included (e.g. `kV`).
    #[must_use]
    pub fn symbol(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix.symbol, self.root),
            None => self.root.clone(),
        }
    }

    /// The symbol of the unprefixed unit (e.g. `V`).
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The prefix of the unit, if any.
    #[must_use]
    pub const fn prefix(&self) -> Option<&Prefix> {
        self.prefix.as_ref()
    }

    /// The size of the unit in SI base units, prefix included.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.prefix
            .as_ref()
            .map_or(self.root_magnitude, |prefix| self.root_magnitude * prefix.value)
    }

    /// The dimensions of the unit.
    #[must_use]
    pub const fn dimension_map(&self) -> &DimensionMap {
        &self.dimension_map
    }
}

/// A named unit raised to an exponent, one factor of a [`Unit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTerm {
    /// The named unit
    pub unit: NamedUnit,
    /// The exponent applied to the named unit
    pub exponent: f64,
}

/// A unit descriptor.
///
/// A unit is an ordered product of named units raised to real exponents,
/// for example `kg*m^2/(s^3*A)`. Terms with the same symbol are merged when
/// units are multiplied and terms whose exponent cancels out are dropped.
///
/// The derived equality compares the terms structurally: `m*s` and `s*m`
/// are different descriptors. To check whether two units measure the same
/// thing, use [`Unit::dimensionally_eq`] or [`Unit::numerically_eq`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit {
    terms: Vec<UnitTerm>,
}

impl Unit {
    /// Creates the dimensionless unit.
    #[must_use]
    pub const fn dimensionless() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a unit from its terms, merging repeated symbols.
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = UnitTerm>) -> Self {
        let mut unit = Self::dimensionless();
        for term in terms {
            unit.push_term(term);
        }
        unit
    }

    /// The terms of the unit.
    #[must_use]
    pub fn terms(&self) -> &[UnitTerm] {
        &self.terms
    }

    /// Determines if the unit has no dimensions.
    ///
    /// Note that a unit may have terms and still be dimensionless, e.g.
    /// `V/mV` or `rad`.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimensionality().is_unitless()
    }

    /// The dimensions that the unit reduces to.
    #[must_use]
    pub fn dimensionality(&self) -> DimensionMap {
        self.terms
            .iter()
            .fold(DimensionMap::unitless(), |acc, term| {
                acc * term.unit.dimension_map().clone().pow(term.exponent)
            })
    }

    /// The size of the unit in SI base units (e.g. 1000 for km).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.terms
            .iter()
            .map(|term| term.unit.magnitude().powf(term.exponent))
            .product()
    }

    /// Determines if the unit has the same dimensions as the given unit.
    ///
    /// For example, according to dimensional equality, `km == m` because
    /// they have the same dimensions, while `km != km/h` because they have
    /// different dimensions.
    #[must_use]
    pub fn dimensionally_eq(&self, other: &Self) -> bool {
        self.dimensionality() == other.dimensionality()
    }

    /// Determines if the unit is numerically equal to the given unit.
    ///
    /// For example, `mΩ*kA == V` but `km != m` because the magnitudes are
    /// different.
    #[must_use]
    pub fn numerically_eq(&self, other: &Self) -> bool {
        self.dimensionally_eq(other) && is_relatively_close(self.magnitude(), other.magnitude())
    }

    /// Raises the unit to the power of the given exponent.
    #[must_use]
    pub fn pow(self, exponent: f64) -> Self {
        Self::from_terms(self.terms.into_iter().map(|term| UnitTerm {
            unit: term.unit,
            exponent: term.exponent * exponent,
        }))
    }

    /// Returns the reciprocal of the unit.
    #[must_use]
    pub fn recip(self) -> Self {
        self.pow(-1.0)
    }

    fn push_term(&mut self, term: UnitTerm) {
        let symbol = term.unit.symbol();

        match self.terms.iter().position(|existing| existing.unit.symbol() == symbol) {
            Some(index) => {
                self.terms[index].exponent += term.exponent;
                if is_close(self.terms[index].exponent, 0.0) {
                    self.terms.remove(index);
                }
            }
            None if !is_close(term.exponent, 0.0) => self.terms.push(term),
            None => {}
        }
    }
}

impl From<NamedUnit> for Unit {
    fn from(unit: NamedUnit) -> Self {
        Self {
            terms: vec![UnitTerm {
                unit,
                exponent: 1.0,
            }],
        }
    }
}

impl ops::Mul for Unit {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        for term in rhs.terms {
            self.push_term(term);
        }
        self
    }
}

impl ops::Div for Unit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

impl fmt::Display for Unit {
    /// Writes the unit symbol, e.g. `A*Ω`, `m/s^2` or `W/(m*K)`.
    ///
    /// The dimensionless unit is written as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator): (Vec<_>, Vec<_>) =
            self.terms.iter().partition(|term| term.exponent > 0.0);

        if numerator.is_empty() && denominator.is_empty() {
            return Ok(());
        }

        if numerator.is_empty() {
            write!(f, "1")?;
        }

        write_terms(f, numerator.iter().map(|term| (term.unit.symbol(), term.exponent)))?;

        match denominator.len() {
            0 => {}
            1 => {
                write!(f, "/")?;
                write_terms(f, denominator.iter().map(|term| (term.unit.symbol(), -term.exponent)))?;
            }
            _ => {
                write!(f, "/(")?;
                write_terms(f, denominator.iter().map(|term| (term.unit.symbol(), -term.exponent)))?;
                write!(f, ")")?;
            }
        }

        Ok(())
    }
}

fn write_terms(
    f: &mut fmt::Formatter<'_>,
    terms: impl Iterator<Item = (String, f64)>,
) -> fmt::Result {
    for (index, (symbol, exponent)) in terms.enumerate() {
        if index > 0 {
            write!(f, "*")?;
        }
        write!(f, "{symbol}")?;
        if !is_close(exponent, 1.0) {
            write!(f, "^{exponent}")?;
        }
    }
    Ok(())
}
