use std::{fmt, ops};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::util::is_close;

/// The dimension of a base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Base unit is 'kilogram'
    Mass,
    /// Base unit is 'meter'
    Distance,
    /// Base unit is 'second'
    Time,
    /// Base unit is 'kelvin'
    Temperature,
    /// Base unit is 'ampere'
    Current,
    /// Base unit is 'mole'
    Substance,
    /// Base unit is 'candela'
    LuminousIntensity,
}

impl Dimension {
    /// Every dimension, in the order base units are written out.
    pub const ALL: [Self; 7] = [
        Self::Mass,
        Self::Distance,
        Self::Time,
        Self::Temperature,
        Self::Current,
        Self::Substance,
        Self::LuminousIntensity,
    ];

    /// The name used when displaying a dimensionality, e.g. `[length]`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Distance => "length",
            Self::Time => "time",
            Self::Temperature => "temperature",
            Self::Current => "current",
            Self::Substance => "substance",
            Self::LuminousIntensity => "luminosity",
        }
    }
}

/// A map of dimensions and their exponents.
///
/// For example, "m/s" is represented as
/// `DimensionMap(IndexMap::from([(Dimension::Distance, 1.0), (Dimension::Time, -1.0)]))`.
///
/// Exponents are real numbers so that square roots of units keep a
/// well-defined dimensionality (`sqrt(m^2) = m`, `sqrt(m) = m^0.5`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionMap(IndexMap<Dimension, f64>);

impl DimensionMap {
    /// Creates a new dimension map from a map of dimensions and their exponents.
    ///
    /// Zero exponents are dropped.
    #[must_use]
    pub fn new(dimensions: IndexMap<Dimension, f64>) -> Self {
        Self(
            dimensions
                .into_iter()
                .filter(|(_, exponent)| !is_close(*exponent, 0.0))
                .collect(),
        )
    }

    /// Creates a unitless dimension map, which is a map with no dimensions.
    #[must_use]
    pub fn unitless() -> Self {
        Self(IndexMap::new())
    }

    /// Checks if the map is unitless (has no dimensions).
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of the given dimension, `0.0` if it is absent.
    #[must_use]
    pub fn exponent(&self, dimension: Dimension) -> f64 {
        self.0.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Iterates over the dimensions and their exponents.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().map(|(dimension, exponent)| (*dimension, *exponent))
    }

    /// Creates a dimension map from a list of dimensions and exponents.
    ///
    /// Repeated dimensions have their exponents summed.
    #[must_use]
    pub fn from_slice(dimensions: &[(Dimension, f64)]) -> Self {
        let mut map = IndexMap::new();

        for (dimension, exponent) in dimensions {
            *map.entry(*dimension).or_insert(0.0) += exponent;
        }

        Self::new(map)
    }

    /// Raises the dimensions to the power of the given exponent.
    #[must_use]
    pub fn pow(self, exponent: f64) -> Self {
        Self::new(
            self.0
                .into_iter()
                .map(|(key, value)| (key, value * exponent))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(Dimension, f64); N]> for DimensionMap {
    fn from(dimensions: [(Dimension, f64); N]) -> Self {
        Self::from_slice(&dimensions)
    }
}

impl PartialEq for DimensionMap {
    /// Checks if two dimension maps are equal
    ///
    /// Note that this is a fuzzy equality check, and
    /// that the maps are considered equal if their
    /// dimensions and exponents are close, as determined
    /// by the `is_close` function. Order does not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        self.0.iter().all(|(dimension, value)| {
            let other_value = other.0.get(dimension);
            other_value.is_some_and(|other_value| is_close(*other_value, *value))
        })
    }
}

impl ops::Mul for DimensionMap {
    type Output = Self;

    /// Multiplies two dimension maps together
    ///
    /// For example, `(m/s) * (g) = (g*m/s)`
    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            result
                .entry(key)
                .and_modify(|v| *v += value)
                .or_insert(value);
        }

        Self::new(result)
    }
}

impl ops::Div for DimensionMap {
    type Output = Self;

    /// Divides two dimension maps
    ///
    /// For example, `(g*m/s) / (g) = (m/s)`
    fn div(self, rhs: Self) -> Self::Output {
        let mut result = self.0;

        for (key, value) in rhs.0 {
            #[expect(
                clippy::suspicious_arithmetic_impl,
                reason = "division is defined as subtraction of the exponent"
            )]
            result
                .entry(key)
                .and_modify(|v| *v -= value)
                .or_insert(-value);
        }

        Self::new(result)
    }
}

impl fmt::Display for DimensionMap {
    /// Displays the dimensionality the way it is usually written by hand,
    /// e.g. `[mass]*[length]^2/[time]^3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unitless() {
            return write!(f, "dimensionless");
        }

        let ordered = Dimension::ALL
            .into_iter()
            .filter_map(|dimension| self.0.get(&dimension).map(|exp| (dimension, *exp)));

        let (numerator, denominator): (Vec<_>, Vec<_>) =
            ordered.partition(|(_, exponent)| *exponent > 0.0);

        if numerator.is_empty() {
            write!(f, "1")?;
        }

        for (index, (dimension, exponent)) in numerator.iter().enumerate() {
            if index > 0 {
                write!(f, "*")?;
            }
            write_dimension_factor(f, *dimension, *exponent)?;
        }

        for (dimension, exponent) in denominator {
            write!(f, "/")?;
            write_dimension_factor(f, dimension, -exponent)?;
        }

        Ok(())
    }
}

fn write_dimension_factor(
    f: &mut fmt::Formatter<'_>,
    dimension: Dimension,
    exponent: f64,
) -> fmt::Result {
    write!(f, "[{}]", dimension.name())?;
    if !is_close(exponent, 1.0) {
        write!(f, "^{exponent}")?;
    }
    Ok(())
}
