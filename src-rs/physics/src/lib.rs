#![cfg_attr(doc, doc = include_str!("../../../README.md"))]
//! Dimensioned quantities with unit-checked arithmetic
//!
//! This crate re-exports the physics crates behind features:
//!
//! - `units`: [`units`], the unit registry and conversions
//! - `value`: [`value`], quantities, field tags and placeholders

pub use physics_shared as shared;
#[cfg(feature = "units")]
pub use physics_units as units;
#[cfg(feature = "value")]
pub use physics_value as value;

/// The types needed to work with quantities.
#[cfg(feature = "value")]
pub mod prelude {
    pub use physics_shared::error::{AsPhysicsError, PhysicsError};
    pub use physics_units::{Unit, UnitError, registry, units};
    pub use physics_value::{
        AsQuantity, Comparison, ComputationGraph, Config, FieldKind, FieldTag, Graph, Operand,
        Quantity, ValueError,
    };
}

#[cfg(all(test, feature = "value"))]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    #[test]
    fn prelude_covers_a_calculation() {
        let resistance = Quantity::with_unit_str(1000.0, "mΩ").expect("mΩ is a builtin unit");
        let current = Quantity::new(2.0, units::ampere());

        let voltage = (resistance * current)
            .adjust_unit(&units::volt())
            .expect("Ω*A is a voltage");

        assert_relative_eq!(voltage.magnitude(), 2.0);
    }

    #[test]
    fn errors_convert_to_physics_errors() {
        let voltage = Quantity::new(1.0, units::volt());
        let current = Quantity::new(1.0, units::ampere());

        let error = voltage
            .checked_add(&current)
            .expect_err("volts and amperes do not add");
        let error = PhysicsError::from_error(&error);

        assert_eq!(error.message(), "dimensionality mismatch between `V` and `A`");
    }
}
