//! Infallible operators on quantities
//!
//! Addition and subtraction of two quantities and every division can fail,
//! so they are only available as `checked_*` methods.

use std::ops;

use ndarray::ScalarOperand;

use super::Quantity;

impl ops::Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with_magnitude(-self.magnitude)
    }
}

impl ops::Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Self::Output {
        self.with_magnitude(-self.magnitude)
    }
}

impl ops::Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.magnitude * rhs.magnitude, self.unit * rhs.unit)
    }
}

impl ops::Mul for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Self) -> Self::Output {
        Quantity::new(
            self.magnitude * rhs.magnitude,
            self.unit.clone() * rhs.unit.clone(),
        )
    }
}

impl ops::Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.with_magnitude(self.magnitude * rhs)
    }
}

impl ops::Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs * self
    }
}

impl ops::Add<f64> for Quantity {
    type Output = Self;

    /// Adds a plain number, taken to be in the quantity's unit.
    fn add(self, rhs: f64) -> Self::Output {
        self.with_magnitude(self.magnitude + rhs)
    }
}

impl ops::Add<Quantity> for f64 {
    type Output = Quantity;

    /// Adds a quantity to a plain number, taken to be in the quantity's unit.
    fn add(self, rhs: Quantity) -> Self::Output {
        rhs + self
    }
}

impl ops::Sub<f64> for Quantity {
    type Output = Self;

    /// Subtracts a plain number, taken to be in the quantity's unit.
    fn sub(self, rhs: f64) -> Self::Output {
        self.with_magnitude(self.magnitude - rhs)
    }
}

impl ops::Sub<Quantity> for f64 {
    type Output = Quantity;

    /// Subtracts a quantity from a plain number, taken to be in the
    /// quantity's unit.
    fn sub(self, rhs: Quantity) -> Self::Output {
        rhs.with_magnitude(self - rhs.magnitude)
    }
}

/// Lets arrays of quantities be multiplied by a single quantity.
impl ScalarOperand for Quantity {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use physics_units::units;

    use super::*;

    #[test]
    fn negation_keeps_unit() {
        let voltage = Quantity::new(2.0, units::volt()).named("bias");
        let negated = -&voltage;

        assert_eq!(negated, Quantity::new(-2.0, units::volt()));
        assert_eq!(negated.name(), None);
        assert_eq!(-voltage, negated);
    }

    #[test]
    fn multiplication_combines_units() {
        let voltage = Quantity::new(2.0, units::volt());
        let current = Quantity::new(3.0, units::ampere());

        let power = &voltage * &current;
        assert_relative_eq!(power.magnitude(), 6.0);
        assert_eq!(power.unit_str(), "V*A");
        assert!(power.unit().numerically_eq(&units::watt()));

        assert_eq!(voltage.clone() * current, power);
    }

    #[test]
    fn multiplication_by_number_keeps_unit() {
        let voltage = Quantity::new(2.0, units::volt());

        assert_eq!(voltage.clone() * 3.0, Quantity::new(6.0, units::volt()));
        assert_eq!(3.0 * voltage, Quantity::new(6.0, units::volt()));
    }

    #[test]
    fn numbers_are_in_the_quantity_unit() {
        let voltage = Quantity::new(2.0, units::volt());

        assert_eq!(voltage.clone() + 1.0, Quantity::new(3.0, units::volt()));
        assert_eq!(1.0 + voltage.clone(), Quantity::new(3.0, units::volt()));
        assert_eq!(voltage.clone() - 1.0, Quantity::new(1.0, units::volt()));
        assert_eq!(5.0 - voltage, Quantity::new(3.0, units::volt()));
    }

    #[test]
    fn arrays_of_quantities_times_a_quantity() {
        let currents = array![
            Quantity::new(1.0, units::ampere()),
            Quantity::new(2.0, units::ampere())
        ];
        let resistance = Quantity::new(10.0, units::ohm());

        let voltages = &currents * resistance;

        assert_eq!(voltages[1], Quantity::new(20.0, units::volt()));
        assert_eq!(voltages[1].unit_str(), "A*Ω");

        let doubled = &currents * 2.0;
        assert_eq!(doubled[0], Quantity::new(2.0, units::ampere()));
    }
}
