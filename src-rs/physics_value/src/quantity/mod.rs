//! Dimensioned quantities

mod cmp;
mod ops;
mod state;

use std::{cmp::Ordering, fmt};

use ndarray::{Array, ArrayBase, ArrayD, Data, IxDyn};
use physics_units::{Unit, convert, registry, to_base_units, to_compact, to_reduced_units};

use crate::{
    error::ValueError,
    graph::{Graph, Placeholder, TensorShape},
    meta::AsQuantity,
};

pub use cmp::compare_magnitudes;
pub use state::{QuantitySeed, QuantityState};

/// A magnitude measured in a physical unit.
///
/// Quantities of any unit can be multiplied and divided; the units combine.
/// Quantities can only be added, subtracted and compared when their units
/// have the same dimensionality, in which case the right operand is
/// converted into the unit of the left one. A plain number added to a
/// quantity is taken to be in the quantity's unit.
///
/// Operations build new quantities. The name and placeholder of an operand
/// are never carried into a result.
///
/// ```
/// use physics_units::{builtin::{MILLI, OHM}, units};
/// use physics_value::Quantity;
///
/// let resistance = Quantity::new(1000.0, units::prefixed(&MILLI, &OHM));
/// let current = Quantity::new(2.0, units::ampere());
///
/// let voltage = (resistance.clone() * current.clone()).adjust_unit(&units::volt())?;
/// assert_eq!(voltage.to_string(), "2 V");
///
/// assert_eq!(resistance, Quantity::new(1.0, units::ohm()));
/// assert!(voltage.checked_add(&current).is_err());
/// # Ok::<(), physics_value::ValueError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
    name: Option<String>,
    placeholder: Option<Placeholder>,
}

impl Quantity {
    /// Creates a new quantity.
    #[must_use]
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self {
            magnitude,
            unit,
            name: None,
            placeholder: None,
        }
    }

    /// Creates a new dimensionless quantity.
    #[must_use]
    pub const fn dimensionless(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::dimensionless())
    }

    /// Creates a new quantity, looking the unit up in the builtin registry.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidUnit`] if the unit name is unknown.
    pub fn with_unit_str(magnitude: f64, unit: &str) -> Result<Self, ValueError> {
        Ok(Self::new(magnitude, registry().unit(unit)?))
    }

    /// Gives the quantity a name, without registering a placeholder.
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Creates a named quantity that stands for a placeholder in the graph.
    ///
    /// When no shape is given, the graph's default shape is used. If the
    /// graph does not accept placeholders, the quantity is only named.
    pub fn named_in<G: Graph + ?Sized>(
        magnitude: f64,
        unit: Unit,
        name: impl Into<String>,
        graph: &mut G,
        shape: Option<TensorShape>,
    ) -> Self {
        let name = name.into();
        let placeholder = graph.placeholder(&name, shape);

        Self {
            magnitude,
            unit,
            name: Some(name),
            placeholder,
        }
    }

    /// Creates an array of quantities sharing a unit from an array of
    /// magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::RankUnsupported`] unless the array has one or
    /// two dimensions.
    pub fn array_like<S, D>(
        array: &ArrayBase<S, D>,
        unit: &Unit,
    ) -> Result<Array<Self, D>, ValueError>
    where
        S: Data<Elem = f64>,
        D: ndarray::Dimension,
    {
        let rank = array.ndim();
        if !(1..=2).contains(&rank) {
            return Err(ValueError::RankUnsupported { rank });
        }

        Ok(array.map(|magnitude| Self::new(*magnitude, unit.clone())))
    }

    /// Restores a quantity from its serialized state, rebinding its
    /// placeholder from the graph.
    ///
    /// A placeholder that the graph does not know is dropped with a warning.
    #[must_use]
    pub fn from_state<G: Graph + ?Sized>(state: QuantityState, graph: &G) -> Self {
        state::restore(state, graph)
    }

    /// The serializable state of the quantity.
    #[must_use]
    pub fn state(&self) -> QuantityState {
        QuantityState {
            magnitude: self.magnitude,
            unit: self.unit.clone(),
            name: self.name.clone(),
            tensor: self.placeholder.as_ref().map(Placeholder::tensor_name),
        }
    }

    /// The magnitude, in the quantity's unit.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The symbol of the quantity's unit, e.g. `mΩ`.
    #[must_use]
    pub fn unit_str(&self) -> String {
        self.unit.to_string()
    }

    /// The name of the quantity, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The magnitude expressed in SI base units.
    #[must_use]
    pub fn base_magnitude(&self) -> f64 {
        self.magnitude * self.unit.magnitude()
    }

    /// The placeholder the quantity stands for.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotBound`] if the quantity has no placeholder.
    pub fn tensor(&self) -> Result<&Placeholder, ValueError> {
        self.placeholder.as_ref().ok_or_else(|| ValueError::NotBound {
            name: self.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
        })
    }

    /// The value to feed the quantity's placeholder with: the magnitude in
    /// an array with one element per dimension of the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotBound`] if the quantity has no placeholder.
    pub fn feed(&self) -> Result<ArrayD<f64>, ValueError> {
        let rank = self.tensor()?.shape().rank();
        Ok(ArrayD::from_elem(IxDyn(&vec![1; rank]), self.magnitude))
    }

    /// A new quantity with the same unit and the given magnitude.
    #[must_use]
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        Self::new(magnitude, self.unit.clone())
    }

    /// Copies the magnitude and unit of another quantity into this one.
    ///
    /// The name and placeholder of this quantity are kept. This is the only
    /// operation that changes a quantity in place.
    pub fn copy_value(&mut self, other: &impl AsQuantity) {
        let other = other.as_quantity();
        self.magnitude = other.magnitude;
        self.unit = other.unit.clone();
    }

    /// Raises the quantity to a power.
    ///
    /// A zero magnitude raised to a negative power is infinite, as with
    /// [`f64::powf`]. Use [`Quantity::checked_pow`] to treat that case as a
    /// division by zero.
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Self {
        Self::new(
            self.magnitude.powf(exponent),
            self.unit.clone().pow(exponent),
        )
    }

    /// Raises the quantity to a power.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] if the magnitude is zero and
    /// the exponent is negative.
    pub fn checked_pow(&self, exponent: f64) -> Result<Self, ValueError> {
        if self.magnitude == 0.0 && exponent < 0.0 {
            return Err(ValueError::DivisionByZero);
        }

        Ok(self.pow(exponent))
    }

    /// The square root of the quantity, e.g. `m` for a quantity in `m^2`.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Self::new(self.magnitude.sqrt(), self.unit.clone().pow(0.5))
    }

    /// The absolute value of the quantity.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_magnitude(self.magnitude.abs())
    }

    /// Rounds the magnitude to the given number of decimal digits.
    ///
    /// Halfway cases round away from zero. Negative digits round to tens,
    /// hundreds and so on. The magnitude is returned unchanged when the
    /// digits go beyond the precision of an `f64`, and rounds to zero when
    /// they go beyond its range on the negative side.
    #[must_use]
    pub fn round(&self, digits: i32) -> Self {
        let scale = 10f64.powi(digits);
        let scaled = self.magnitude * scale;

        if !scaled.is_finite() {
            // more digits than an f64 holds
            return self.with_magnitude(self.magnitude);
        }
        if scale == 0.0 {
            return self.with_magnitude(0.0);
        }

        self.with_magnitude(scaled.round() / scale)
    }

    /// Converts the quantity into the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the unit has a different
    /// dimensionality.
    pub fn adjust_unit(&self, unit: &Unit) -> Result<Self, ValueError> {
        let magnitude = convert(self.magnitude, &self.unit, unit)
            .map_err(|_| ValueError::dimension_mismatch(&self.unit, unit))?;

        Ok(Self::new(magnitude, unit.clone()))
    }

    /// Folds together unit terms of the same dimensionality, e.g. `m*km`
    /// becomes `m^2`.
    #[must_use]
    pub fn reduced_units(&self) -> Self {
        let (magnitude, unit) = to_reduced_units(self.magnitude, &self.unit);
        Self::new(magnitude, unit)
    }

    /// Expresses the quantity in SI base units.
    #[must_use]
    pub fn base_units(&self) -> Self {
        let (magnitude, unit) = to_base_units(self.magnitude, &self.unit);
        Self::new(magnitude, unit)
    }

    /// Picks the SI prefix that keeps the magnitude between 1 and 1000.
    #[must_use]
    pub fn compact_units(&self) -> Self {
        let (magnitude, unit) = to_compact(self.magnitude, &self.unit);
        Self::new(magnitude, unit)
    }

    /// Reduces the units, then picks a compact prefix.
    #[must_use]
    pub fn simplify_units(&self) -> Self {
        self.reduced_units().compact_units()
    }

    /// Adds a quantity of the same dimensionality.
    ///
    /// The result is in the unit of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_add(&self, rhs: &impl AsQuantity) -> Result<Self, ValueError> {
        let rhs = self.magnitude_of(rhs.as_quantity())?;
        Ok(self.with_magnitude(self.magnitude + rhs))
    }

    /// Subtracts a quantity of the same dimensionality.
    ///
    /// The result is in the unit of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_sub(&self, rhs: &impl AsQuantity) -> Result<Self, ValueError> {
        let rhs = self.magnitude_of(rhs.as_quantity())?;
        Ok(self.with_magnitude(self.magnitude - rhs))
    }

    /// Divides by another quantity, combining the units.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] if the divisor's magnitude is
    /// zero.
    pub fn checked_div(&self, rhs: &impl AsQuantity) -> Result<Self, ValueError> {
        let rhs = rhs.as_quantity();
        if rhs.magnitude == 0.0 {
            return Err(ValueError::DivisionByZero);
        }

        Ok(Self::new(
            self.magnitude / rhs.magnitude,
            self.unit.clone() / rhs.unit.clone(),
        ))
    }

    /// Divides by a plain number, keeping the unit.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] if the number is zero.
    pub fn checked_div_number(&self, rhs: f64) -> Result<Self, ValueError> {
        if rhs == 0.0 {
            return Err(ValueError::DivisionByZero);
        }

        Ok(self.with_magnitude(self.magnitude / rhs))
    }

    /// Divides a plain number by the quantity, giving the reciprocal unit.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] if the quantity's magnitude is
    /// zero.
    pub fn checked_rdiv_number(&self, lhs: f64) -> Result<Self, ValueError> {
        if self.magnitude == 0.0 {
            return Err(ValueError::DivisionByZero);
        }

        Ok(Self::new(lhs / self.magnitude, self.unit.clone().recip()))
    }

    /// Compares two quantities of the same dimensionality.
    ///
    /// Magnitudes are compared in SI base units, and values within the
    /// relative tolerance of [`physics_units::is_relatively_close`] are equal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_partial_cmp(&self, rhs: &impl AsQuantity) -> Result<Option<Ordering>, ValueError> {
        let rhs = rhs.as_quantity();
        if !self.unit.dimensionally_eq(&rhs.unit) {
            return Err(ValueError::dimension_mismatch(&self.unit, &rhs.unit));
        }

        Ok(cmp::compare_magnitudes(
            self.base_magnitude(),
            rhs.base_magnitude(),
        ))
    }

    /// Checks if two quantities are equal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_eq(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_partial_cmp(rhs)
            .map(|ordering| ordering == Some(Ordering::Equal))
    }

    /// Checks if two quantities are not equal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_ne(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_eq(rhs).map(|eq| !eq)
    }

    /// Checks if `self` is less than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_lt(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_partial_cmp(rhs)
            .map(|ordering| ordering == Some(Ordering::Less))
    }

    /// Checks if `self` is less than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_le(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_partial_cmp(rhs).map(|ordering| {
            matches!(ordering, Some(Ordering::Less | Ordering::Equal))
        })
    }

    /// Checks if `self` is greater than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_gt(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_partial_cmp(rhs)
            .map(|ordering| ordering == Some(Ordering::Greater))
    }

    /// Checks if `self` is greater than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if the dimensionalities
    /// differ.
    pub fn checked_ge(&self, rhs: &impl AsQuantity) -> Result<bool, ValueError> {
        self.checked_partial_cmp(rhs).map(|ordering| {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        })
    }

    /// The magnitude of `other` expressed in the unit of `self`.
    fn magnitude_of(&self, other: &Self) -> Result<f64, ValueError> {
        convert(other.magnitude, &other.unit, &self.unit)
            .map_err(|_| ValueError::dimension_mismatch(&self.unit, &other.unit))
    }
}

impl fmt::Display for Quantity {
    /// Displays the magnitude followed by the unit symbol, e.g. `1.5 mV`.
    ///
    /// Dimensionless quantities display only their magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.terms().is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}
