use crate::quantity::Quantity;

/// A type that stands for a quantity in arithmetic and comparisons.
///
/// Wrapper types that own a [`Quantity`] implement this trait so they can be
/// passed anywhere a quantity operand is expected, and behave exactly like
/// the quantity they wrap.
///
/// ```
/// use physics_units::units;
/// use physics_value::{AsQuantity, Quantity};
///
/// struct Resistor {
///     resistance: Quantity,
/// }
///
/// impl AsQuantity for Resistor {
///     fn as_quantity(&self) -> &Quantity {
///         &self.resistance
///     }
/// }
///
/// let r1 = Resistor { resistance: Quantity::new(10.0, units::ohm()) };
/// let r2 = Quantity::new(5.0, units::ohm());
///
/// let total = r2.checked_add(&r1)?;
/// assert_eq!(total, Quantity::new(15.0, units::ohm()));
/// # Ok::<(), physics_value::ValueError>(())
/// ```
pub trait AsQuantity {
    /// The quantity this value stands for.
    fn as_quantity(&self) -> &Quantity;
}

impl AsQuantity for Quantity {
    fn as_quantity(&self) -> &Quantity {
        self
    }
}

impl<T: AsQuantity + ?Sized> AsQuantity for &T {
    fn as_quantity(&self) -> &Quantity {
        (**self).as_quantity()
    }
}
