use std::cmp::Ordering;

use physics_units::is_relatively_close;

use super::Quantity;

/// Compares two magnitudes, treating values within a relative tolerance as
/// equal.
pub fn compare_magnitudes(lhs: f64, rhs: f64) -> Option<Ordering> {
    if is_relatively_close(lhs, rhs) {
        Some(Ordering::Equal)
    } else {
        lhs.partial_cmp(&rhs)
    }
}

impl PartialEq for Quantity {
    /// Checks if two quantities are equal in SI base units.
    ///
    /// Quantities of different dimensionality are never equal. Use
    /// [`Quantity::checked_eq`] to treat that case as an error.
    fn eq(&self, other: &Self) -> bool {
        self.checked_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Quantity {
    /// Orders two quantities by their magnitudes in SI base units.
    ///
    /// Quantities of different dimensionality are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_partial_cmp(other).ok().flatten()
    }
}

impl PartialEq<f64> for Quantity {
    /// Compares the magnitude in SI base units with a plain number, so
    /// `1 km == 1000.0`.
    fn eq(&self, other: &f64) -> bool {
        is_relatively_close(self.base_magnitude(), *other)
    }
}

impl PartialEq<Quantity> for f64 {
    fn eq(&self, other: &Quantity) -> bool {
        other == self
    }
}

impl PartialOrd<f64> for Quantity {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        compare_magnitudes(self.base_magnitude(), *other)
    }
}

impl PartialOrd<Quantity> for f64 {
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        compare_magnitudes(*self, other.base_magnitude())
    }
}

#[cfg(test)]
mod tests {
    use physics_units::{
        builtin::{FARAD, FEMTO, KILO, METER, MILLI, OHM, PICO},
        units,
    };

    use super::*;
    use crate::constants::elementary_charge;

    #[test]
    fn equal_across_prefixes() {
        let milliohms = Quantity::new(1.0, units::prefixed(&MILLI, &OHM));
        let ohms = Quantity::new(0.001, units::ohm());

        assert_eq!(milliohms, ohms);
    }

    #[test]
    fn different_dimensionality_is_never_equal() {
        let ohms = Quantity::new(1.0, units::ohm());
        let volts = Quantity::new(1.0, units::volt());

        assert_ne!(ohms, volts);
        assert_eq!(ohms.partial_cmp(&volts), None);
    }

    #[test]
    fn ordering() {
        let kilometer = Quantity::new(1.0, units::prefixed(&KILO, &METER));
        let meters = Quantity::new(999.0, units::meter());

        assert!(kilometer > meters);
        assert!(meters < kilometer);
        assert!(meters <= meters.clone());
    }

    #[test]
    fn compare_with_plain_numbers() {
        let kilometer = Quantity::new(1.0, units::prefixed(&KILO, &METER));

        assert_eq!(kilometer, 1000.0);
        assert_eq!(1000.0, kilometer);
        assert!(kilometer > 999.0);
        assert!(1.0 < kilometer);
    }

    #[test]
    fn small_quantities_stay_distinct() {
        let one_picofarad = Quantity::new(1.0, units::prefixed(&PICO, &FARAD));
        let two_picofarads = Quantity::new(2.0, units::prefixed(&PICO, &FARAD));

        assert_ne!(one_picofarad, two_picofarads);
        assert!(one_picofarad < two_picofarads);
        assert_eq!(one_picofarad.checked_lt(&two_picofarads), Ok(true));
        assert_eq!(
            one_picofarad,
            Quantity::new(1000.0, units::prefixed(&FEMTO, &FARAD))
        );
        assert_ne!(one_picofarad, 0.0);
    }

    #[test]
    fn elementary_charge_is_not_zero() {
        let no_charge = Quantity::new(0.0, units::coulomb());

        assert_ne!(elementary_charge(), no_charge);
        assert_eq!(elementary_charge().checked_gt(&no_charge), Ok(true));
    }

    #[test]
    fn magnitudes_within_tolerance_are_equal() {
        assert_eq!(compare_magnitudes(0.1 + 0.2, 0.3), Some(Ordering::Equal));
        assert_eq!(compare_magnitudes(1.0, 2.0), Some(Ordering::Less));
        assert_eq!(compare_magnitudes(f64::NAN, 1.0), None);
        assert_eq!(compare_magnitudes(1e-12, 2e-12), Some(Ordering::Less));
        assert_eq!(compare_magnitudes(1e-19, 0.0), Some(Ordering::Greater));
    }
}
