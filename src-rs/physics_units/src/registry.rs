//! The unit registry, which resolves unit names to units

use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    builtin,
    error::UnitError,
    unit::{NamedUnit, Prefix, Unit},
};

/// A registry of named units and prefixes.
///
/// Units are looked up by any of their aliases. If a name is not an alias,
/// the registry tries to split a prefix (by symbol or by long name) off the
/// front, so `mV`, `millivolt` and `kOhm` all resolve.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: IndexMap<String, NamedUnit>,
    prefixes: IndexMap<String, Prefix>,
}

impl UnitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the builtin units and prefixes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            units: builtin::builtin_units(),
            prefixes: builtin::builtin_prefixes(),
        }
    }

    /// Registers a unit under the given aliases, replacing any unit that
    /// already uses one of them.
    pub fn define_unit(&mut self, aliases: &[&str], unit: &NamedUnit) {
        for alias in aliases {
            self.units.insert((*alias).to_string(), unit.clone());
        }
    }

    /// Registers a prefix under the given aliases.
    pub fn define_prefix(&mut self, aliases: &[&str], prefix: &Prefix) {
        for alias in aliases {
            self.prefixes.insert((*alias).to_string(), prefix.clone());
        }
    }

    /// Checks whether the name resolves to a unit.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.named_unit(name).is_ok()
    }

    /// Looks up a prefix by symbol or long name.
    #[must_use]
    pub fn prefix(&self, name: &str) -> Option<&Prefix> {
        self.prefixes.get(name)
    }

    /// Looks up a unit by name.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the name is not an alias of a
    /// unit, with or without a prefix.
    pub fn unit(&self, name: &str) -> Result<Unit, UnitError> {
        self.named_unit(name).map(Unit::from)
    }

    /// Looks up a single named unit, including its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the name is not an alias of a
    /// unit, with or without a prefix.
    pub fn named_unit(&self, name: &str) -> Result<NamedUnit, UnitError> {
        if let Some(unit) = self.units.get(name) {
            return Ok(unit.clone());
        }

        // longer prefixes first, so that `da` wins over `d`
        let mut prefixes: Vec<_> = self.prefixes.iter().collect();
        prefixes.sort_by_key(|(alias, _)| std::cmp::Reverse(alias.len()));

        let resolved = prefixes.into_iter().find_map(|(alias, prefix)| {
            let rest = name.strip_prefix(alias.as_str())?;
            let unit = self.units.get(rest)?;
            Some(unit.clone().with_prefix(Some(prefix.clone())))
        });

        resolved.ok_or_else(|| {
            debug!(name, "unit not found in registry");
            UnitError::UnknownUnit(name.to_string())
        })
    }
}

/// The process-wide registry of builtin units.
///
/// The registry is built on first use and never modified.
#[must_use]
pub fn registry() -> &'static UnitRegistry {
    static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::builtin);
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{Dimension, DimensionMap};

    mod success_tests {
        use super::*;

        #[test]
        fn lookup_by_symbol_and_name() {
            let registry = registry();

            for name in ["Ω", "ohm", "Ohms"] {
                let unit = registry.unit(name).expect("ohm is builtin");
                assert_eq!(unit.to_string(), "Ω");
            }
        }

        #[test]
        fn lookup_with_prefix_symbol() {
            let unit = registry().unit("mV").expect("millivolt resolves");

            assert_eq!(unit.to_string(), "mV");
            assert_relative_eq!(unit.magnitude(), 1e-3);
        }

        #[test]
        fn lookup_with_prefix_name() {
            let unit = registry().unit("milliohm").expect("milliohm resolves");

            assert_eq!(unit.to_string(), "mΩ");
        }

        #[test]
        fn lookup_with_micro_spellings() {
            for name in ["uF", "μF", "µF", "microfarad"] {
                let unit = registry().unit(name).expect("microfarad resolves");
                assert_eq!(unit.to_string(), "μF");
                assert_relative_eq!(unit.magnitude(), 1e-6);
            }
        }

        #[test]
        fn exact_alias_wins_over_prefix() {
            let minute = registry().unit("min").expect("minute is builtin");
            assert_relative_eq!(minute.magnitude(), 60.0);

            let hectopascal = registry().unit("hPa").expect("hectopascal resolves");
            assert_relative_eq!(hectopascal.magnitude(), 100.0);
        }

        #[test]
        fn kilogram_is_prefixed_gram() {
            let kilogram = registry().unit("kg").expect("kilogram resolves");

            assert_eq!(kilogram.to_string(), "kg");
            assert_relative_eq!(kilogram.magnitude(), 1.0);
        }

        #[test]
        fn define_custom_unit() {
            let mut registry = UnitRegistry::builtin();
            let furlong = NamedUnit::new(
                "fur",
                201.168,
                DimensionMap::from([(Dimension::Distance, 1.0)]),
            );

            registry.define_unit(&["fur", "furlong"], &furlong);

            assert!(registry.contains("furlong"));
            assert!(registry.contains("kfur"));
            assert!(!crate::registry().contains("furlong"));
        }

        #[test]
        fn prefixes_are_looked_up_by_alias() {
            let registry = registry();

            assert_eq!(registry.prefix("kilo").map(Prefix::symbol), Some("k"));
            assert!(registry.prefix("x").is_none());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn unknown_unit() {
            let result = registry().unit("furlong");

            assert_eq!(result, Err(UnitError::UnknownUnit("furlong".to_string())));
        }

        #[test]
        fn prefix_alone_is_not_a_unit() {
            assert!(!registry().contains("k"));
            assert!(!UnitRegistry::new().contains("m"));
        }
    }
}
