//! Fundamental physical constants, in SI units
//!
//! Values are the CODATA 2018 recommended values.

use physics_units::units;

use crate::quantity::Quantity;

/// The vacuum permittivity, ε₀, in farads per meter.
#[must_use]
pub fn vacuum_permittivity() -> Quantity {
    Quantity::new(8.854_187_812_8e-12, units::farad() / units::meter()).named("vacuum_permittivity")
}

/// The elementary charge, e, in coulombs.
#[must_use]
pub fn elementary_charge() -> Quantity {
    Quantity::new(1.602_176_634e-19, units::coulomb()).named("elementary_charge")
}

/// The Boltzmann constant, k, in joules per kelvin.
#[must_use]
pub fn boltzmann() -> Quantity {
    Quantity::new(1.380_649e-23, units::joule() / units::kelvin()).named("boltzmann")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use physics_units::units;

    use super::*;

    #[test]
    fn units_of_constants() {
        assert_eq!(vacuum_permittivity().unit_str(), "F/m");
        assert_eq!(elementary_charge().unit_str(), "C");
        assert_eq!(boltzmann().unit_str(), "J/K");
    }

    #[test]
    fn elementary_charge_is_one_electronvolt_per_volt() {
        let electronvolt = Quantity::new(1.0, units::electronvolt());
        let energy = elementary_charge() * Quantity::new(1.0, units::volt());

        assert_eq!(energy, electronvolt);
    }

    #[test]
    fn thermal_voltage_at_room_temperature() {
        let thermal_energy = boltzmann() * Quantity::new(300.0, units::kelvin());
        let thermal_energy = thermal_energy
            .adjust_unit(&units::electronvolt())
            .expect("k*T is an energy");

        assert_relative_eq!(thermal_energy.magnitude(), 0.025_852, max_relative = 1e-4);
    }
}
