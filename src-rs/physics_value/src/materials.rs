//! Materials described by their thermal and electronic properties

use physics_units::{UnitError, units};

use crate::{error::ValueError, field::FieldKind, quantity::Quantity};

/// The electronic class of a material.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    /// A conductor, with no bandgap
    Metal,
    /// A semiconductor
    Semiconductor {
        /// The energy gap between the valence and conduction bands
        bandgap: Quantity,
        /// The relative permittivity
        dielectric: f64,
    },
    /// An insulator, a semiconductor with a wide bandgap
    Insulator {
        /// The energy gap between the valence and conduction bands
        bandgap: Quantity,
        /// The relative permittivity
        dielectric: f64,
    },
}

impl MaterialKind {
    /// The bandgap of the material, if it has one.
    #[must_use]
    pub const fn bandgap(&self) -> Option<&Quantity> {
        match self {
            Self::Metal => None,
            Self::Semiconductor { bandgap, .. } | Self::Insulator { bandgap, .. } => Some(bandgap),
        }
    }

    /// The relative permittivity of the material, if it has one.
    #[must_use]
    pub const fn dielectric(&self) -> Option<f64> {
        match self {
            Self::Metal => None,
            Self::Semiconductor { dielectric, .. } | Self::Insulator { dielectric, .. } => {
                Some(*dielectric)
            }
        }
    }
}

/// A named material.
///
/// ```
/// use physics_units::units;
/// use physics_value::{Quantity, materials::{Material, MaterialKind}};
///
/// let conductivity = Quantity::new(149.0, units::watt() / (units::meter() * units::kelvin()));
/// let silicon = Material::new(
///     "silicon",
///     conductivity,
///     MaterialKind::Semiconductor {
///         bandgap: Quantity::new(1.12, units::electronvolt()),
///         dielectric: 11.7,
///     },
/// )?;
///
/// assert_eq!(silicon.kind().dielectric(), Some(11.7));
/// # Ok::<(), physics_value::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    thermal_conductivity: Quantity,
    kind: MaterialKind,
}

impl Material {
    /// Creates a new material.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidUnit`] if the thermal conductivity is not
    /// measured in a unit of thermal conductivity, or if the bandgap is not
    /// an energy.
    pub fn new(
        name: impl Into<String>,
        thermal_conductivity: Quantity,
        kind: MaterialKind,
    ) -> Result<Self, ValueError> {
        let conductivity_unit = FieldKind::ThermalConductivity.canonical_unit();
        if !thermal_conductivity.unit().dimensionally_eq(&conductivity_unit) {
            return Err(UnitError::incompatible(thermal_conductivity.unit(), &conductivity_unit).into());
        }

        if let Some(bandgap) = kind.bandgap() {
            let energy = units::joule();
            if !bandgap.unit().dimensionally_eq(&energy) {
                return Err(UnitError::incompatible(bandgap.unit(), &energy).into());
            }
        }

        Ok(Self {
            name: name.into(),
            thermal_conductivity,
            kind,
        })
    }

    /// The name of the material.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The thermal conductivity of the material.
    #[must_use]
    pub const fn thermal_conductivity(&self) -> &Quantity {
        &self.thermal_conductivity
    }

    /// The electronic class of the material.
    #[must_use]
    pub const fn kind(&self) -> &MaterialKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conductivity(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, FieldKind::ThermalConductivity.canonical_unit())
    }

    mod success_tests {
        use super::*;

        #[test]
        fn metal_has_no_bandgap() {
            let copper = Material::new("copper", conductivity(401.0), MaterialKind::Metal)
                .expect("W/(m*K) is a thermal conductivity");

            assert_eq!(copper.name(), "copper");
            assert_eq!(copper.thermal_conductivity(), &conductivity(401.0));
            assert_eq!(copper.kind().bandgap(), None);
            assert_eq!(copper.kind().dielectric(), None);
        }

        #[test]
        fn insulator_keeps_bandgap_and_dielectric() {
            let bandgap = Quantity::new(9.0, units::electronvolt());
            let quartz = Material::new(
                "quartz",
                conductivity(1.4),
                MaterialKind::Insulator {
                    bandgap: bandgap.clone(),
                    dielectric: 3.9,
                },
            )
            .expect("valid material");

            assert_eq!(quartz.kind().bandgap(), Some(&bandgap));
            assert_eq!(quartz.kind().dielectric(), Some(3.9));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn conductivity_with_wrong_unit() {
            let result = Material::new(
                "copper",
                Quantity::new(401.0, units::watt()),
                MaterialKind::Metal,
            );

            assert!(matches!(result, Err(ValueError::InvalidUnit(UnitError::IncompatibleUnits { .. }))));
        }

        #[test]
        fn bandgap_that_is_not_an_energy() {
            let result = Material::new(
                "silicon",
                conductivity(149.0),
                MaterialKind::Semiconductor {
                    bandgap: Quantity::new(1.12, units::volt()),
                    dielectric: 11.7,
                },
            );

            assert!(matches!(result, Err(ValueError::InvalidUnit(_))));
        }
    }
}
