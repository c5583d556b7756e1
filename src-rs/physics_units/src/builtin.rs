//! The builtin units and prefixes that come with the unit registry.
//!
//! Every unit is declared as a constant so that code which needs a specific
//! unit can build it without a registry lookup (see [`crate::units`]).

use indexmap::IndexMap;

use crate::{
    dimension::{Dimension, DimensionMap},
    unit::{NamedUnit, Prefix, Unit},
};

/// A builtin unit prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinPrefix {
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    power: i32,
    value: f64,
}

impl BuiltinPrefix {
    /// The long name of the prefix, e.g. `milli`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The symbol of the prefix, e.g. `m`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Every spelling of the prefix that the registry accepts.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// The power of ten of the prefix, e.g. `-3` for milli.
    #[must_use]
    pub const fn power(&self) -> i32 {
        self.power
    }

    /// The scale of the prefix, e.g. `1e-3` for milli.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Builds the prefix attached to named units.
    #[must_use]
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.symbol, self.value)
    }
}

/// A builtin unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinUnit {
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    magnitude: f64,
    dimensions: &'static [(Dimension, f64)],
}

impl BuiltinUnit {
    /// The long name of the unit, e.g. `ohm`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical symbol of the unit, e.g. `Ω`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Every spelling of the unit that the registry accepts.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// The size of the unit in SI base units.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The dimensions of the unit.
    #[must_use]
    pub fn dimension_map(&self) -> DimensionMap {
        DimensionMap::from_slice(self.dimensions)
    }

    /// Builds the unprefixed named unit.
    #[must_use]
    pub fn named_unit(&self) -> NamedUnit {
        NamedUnit::new(self.symbol, self.magnitude, self.dimension_map())
    }

    /// Builds the unit, raised to the first power.
    #[must_use]
    pub fn unit(&self) -> Unit {
        Unit::from(self.named_unit())
    }

    /// Builds the unit with the given prefix.
    #[must_use]
    pub fn prefixed(&self, prefix: &BuiltinPrefix) -> Unit {
        Unit::from(self.named_unit().with_prefix(Some(prefix.prefix())))
    }
}

macro_rules! prefixes {
    ($($ident:ident => $name:literal, $symbol:literal, [$($alias:literal),*], $power:literal, $value:literal;)*) => {
        $(
            #[doc = concat!("The `", $name, "` prefix (", stringify!($value), ")")]
            pub const $ident: BuiltinPrefix = BuiltinPrefix {
                name: $name,
                symbol: $symbol,
                aliases: &[$symbol, $name $(, $alias)*],
                power: $power,
                value: $value,
            };
        )*

        /// Every builtin prefix, from smallest to largest.
        pub const PREFIXES: &[BuiltinPrefix] = &[$($ident),*];
    };
}

prefixes! {
    QUECTO => "quecto", "q", [], -30, 1e-30;
    RONTO => "ronto", "r", [], -27, 1e-27;
    YOCTO => "yocto", "y", [], -24, 1e-24;
    ZEPTO => "zepto", "z", [], -21, 1e-21;
    ATTO => "atto", "a", [], -18, 1e-18;
    FEMTO => "femto", "f", [], -15, 1e-15;
    PICO => "pico", "p", [], -12, 1e-12;
    NANO => "nano", "n", [], -9, 1e-9;
    MICRO => "micro", "μ", ["u", "µ"], -6, 1e-6;
    MILLI => "milli", "m", [], -3, 1e-3;
    CENTI => "centi", "c", [], -2, 1e-2;
    DECI => "deci", "d", [], -1, 1e-1;
    DECA => "deca", "da", ["deka"], 1, 1e1;
    HECTO => "hecto", "h", [], 2, 1e2;
    KILO => "kilo", "k", [], 3, 1e3;
    MEGA => "mega", "M", [], 6, 1e6;
    GIGA => "giga", "G", [], 9, 1e9;
    TERA => "tera", "T", [], 12, 1e12;
    PETA => "peta", "P", [], 15, 1e15;
    EXA => "exa", "E", [], 18, 1e18;
    ZETTA => "zetta", "Z", [], 21, 1e21;
    YOTTA => "yotta", "Y", [], 24, 1e24;
    RONNA => "ronna", "R", [], 27, 1e27;
    QUETTA => "quetta", "Q", [], 30, 1e30;
}

/// Finds the builtin prefix for the given power of ten.
///
/// A power of zero has no prefix.
#[must_use]
pub fn prefix_for_power(power: i32) -> Option<&'static BuiltinPrefix> {
    PREFIXES.iter().find(|prefix| prefix.power == power)
}

const MASS: Dimension = Dimension::Mass;
const LENGTH: Dimension = Dimension::Distance;
const TIME: Dimension = Dimension::Time;
const TEMPERATURE: Dimension = Dimension::Temperature;
const CURRENT: Dimension = Dimension::Current;
const SUBSTANCE: Dimension = Dimension::Substance;
const LUMINOSITY: Dimension = Dimension::LuminousIntensity;

macro_rules! units {
    ($($ident:ident => $name:literal, $symbol:literal, [$($alias:literal),*], $magnitude:expr, [$(($dimension:ident, $exponent:literal)),*];)*) => {
        $(
            #[doc = concat!("The `", $name, "` unit (`", $symbol, "`)")]
            pub const $ident: BuiltinUnit = BuiltinUnit {
                name: $name,
                symbol: $symbol,
                aliases: &[$symbol $(, $alias)*],
                magnitude: $magnitude,
                dimensions: &[$(($dimension, $exponent)),*],
            };
        )*

        /// Every builtin unit.
        pub const UNITS: &[BuiltinUnit] = &[$($ident),*];
    };
}

units! {
    // === BASE UNITS ===
    // the kilogram is the base unit of mass, so the gram is 1e-3 of a kilogram
    GRAM => "gram", "g", ["gram", "grams"], 1e-3, [(MASS, 1.0)];
    METER => "meter", "m", ["meter", "meters", "metre", "metres"], 1.0, [(LENGTH, 1.0)];
    SECOND => "second", "s", ["second", "seconds", "sec", "secs"], 1.0, [(TIME, 1.0)];
    KELVIN => "kelvin", "K", ["kelvin", "Kelvin"], 1.0, [(TEMPERATURE, 1.0)];
    AMPERE => "ampere", "A", ["ampere", "amperes", "Ampere", "amp", "amps", "Amp"], 1.0, [(CURRENT, 1.0)];
    MOLE => "mole", "mol", ["mole", "moles"], 1.0, [(SUBSTANCE, 1.0)];
    CANDELA => "candela", "cd", ["candela", "candelas"], 1.0, [(LUMINOSITY, 1.0)];

    // === ELECTRICAL UNITS ===
    VOLT => "volt", "V", ["volt", "volts", "Volt", "Volts"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -3.0), (CURRENT, -1.0)];
    OHM => "ohm", "Ω", ["ohm", "ohms", "Ohm", "Ohms"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -3.0), (CURRENT, -2.0)];
    SIEMENS => "siemens", "S", ["siemens", "mho"], 1.0,
        [(MASS, -1.0), (LENGTH, -2.0), (TIME, 3.0), (CURRENT, 2.0)];
    COULOMB => "coulomb", "C", ["coulomb", "coulombs"], 1.0, [(CURRENT, 1.0), (TIME, 1.0)];
    FARAD => "farad", "F", ["farad", "farads"], 1.0,
        [(MASS, -1.0), (LENGTH, -2.0), (TIME, 4.0), (CURRENT, 2.0)];
    HENRY => "henry", "H", ["henry", "henries"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -2.0), (CURRENT, -2.0)];
    WEBER => "weber", "Wb", ["weber", "webers"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -2.0), (CURRENT, -1.0)];
    TESLA => "tesla", "T", ["tesla", "teslas"], 1.0, [(MASS, 1.0), (TIME, -2.0), (CURRENT, -1.0)];
    GAUSS => "gauss", "Gs", ["gauss"], 1e-4, [(MASS, 1.0), (TIME, -2.0), (CURRENT, -1.0)];
    AMP_HOUR => "amp_hour", "Ah", ["amp_hour", "amp_hours"], 3600.0, [(CURRENT, 1.0), (TIME, 1.0)];

    // === MECHANICAL UNITS ===
    WATT => "watt", "W", ["watt", "watts", "Watt", "Watts"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -3.0)];
    JOULE => "joule", "J", ["joule", "joules", "Joule", "Joules"], 1.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -2.0)];
    WATT_HOUR => "watt_hour", "Wh", ["watt_hour", "watt_hours"], 3600.0,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -2.0)];
    ELECTRONVOLT => "electronvolt", "eV", ["electronvolt", "electronvolts"], 1.602_176_634e-19,
        [(MASS, 1.0), (LENGTH, 2.0), (TIME, -2.0)];
    NEWTON => "newton", "N", ["newton", "newtons", "Newton", "Newtons"], 1.0,
        [(MASS, 1.0), (LENGTH, 1.0), (TIME, -2.0)];
    PASCAL => "pascal", "Pa", ["pascal", "pascals"], 1.0, [(MASS, 1.0), (LENGTH, -1.0), (TIME, -2.0)];
    BAR => "bar", "bar", ["bars"], 1e5, [(MASS, 1.0), (LENGTH, -1.0), (TIME, -2.0)];
    ATMOSPHERE => "atmosphere", "atm", ["atmosphere", "atmospheres"], 101_325.0,
        [(MASS, 1.0), (LENGTH, -1.0), (TIME, -2.0)];
    PSI => "psi", "psi", [], 6_894.757_293_168_361, [(MASS, 1.0), (LENGTH, -1.0), (TIME, -2.0)];
    HERTZ => "hertz", "Hz", ["hertz"], 1.0, [(TIME, -1.0)];

    // === TIME UNITS ===
    MINUTE => "minute", "min", ["minute", "minutes", "mins"], 60.0, [(TIME, 1.0)];
    HOUR => "hour", "hr", ["h", "hour", "hours", "hrs"], 3_600.0, [(TIME, 1.0)];
    DAY => "day", "day", ["days"], 86_400.0, [(TIME, 1.0)];
    YEAR => "year", "yr", ["year", "years", "yrs"], 31_557_600.0, [(TIME, 1.0)];

    // === LENGTH, AREA AND VOLUME UNITS ===
    INCH => "inch", "in", ["inch", "inches"], 0.0254, [(LENGTH, 1.0)];
    FOOT => "foot", "ft", ["foot", "feet"], 0.3048, [(LENGTH, 1.0)];
    MILE => "mile", "mi", ["mile", "miles"], 1_609.344, [(LENGTH, 1.0)];
    LITER => "liter", "L", ["l", "liter", "liters", "litre", "litres"], 1e-3, [(LENGTH, 3.0)];

    // === MASS UNITS ===
    POUND => "pound", "lb", ["lbs", "pound", "pounds"], 0.453_592_37, [(MASS, 1.0)];
    TONNE => "tonne", "t", ["tonne", "tonnes"], 1e3, [(MASS, 1.0)];

    // === DIMENSIONLESS UNITS ===
    RADIAN => "radian", "rad", ["radian", "radians"], 1.0, [];
    DEGREE => "degree", "deg", ["degree", "degrees"], std::f64::consts::PI / 180.0, [];
    REVOLUTION => "revolution", "rev", ["revolution", "revolutions"], std::f64::consts::TAU, [];
    PERCENT => "percent", "%", ["percent"], 1e-2, [];
}

/// The unprefixed SI base unit of the given dimension.
///
/// Mass is the exception: its base unit is the kilogram, which is the gram
/// with the kilo prefix.
#[must_use]
pub fn base_unit(dimension: Dimension) -> NamedUnit {
    match dimension {
        Dimension::Mass => GRAM.named_unit().with_prefix(Some(KILO.prefix())),
        Dimension::Distance => METER.named_unit(),
        Dimension::Time => SECOND.named_unit(),
        Dimension::Temperature => KELVIN.named_unit(),
        Dimension::Current => AMPERE.named_unit(),
        Dimension::Substance => MOLE.named_unit(),
        Dimension::LuminousIntensity => CANDELA.named_unit(),
    }
}

/// The builtin units, keyed by every alias.
#[must_use]
pub fn builtin_units() -> IndexMap<String, NamedUnit> {
    UNITS
        .iter()
        .flat_map(|unit| {
            unit.aliases
                .iter()
                .map(|alias| (alias.to_string(), unit.named_unit()))
        })
        .collect()
}

/// The documentation for the builtin units: each unit's name and aliases.
#[must_use]
pub fn builtin_units_docs() -> IndexMap<&'static str, Vec<&'static str>> {
    UNITS
        .iter()
        .map(|unit| (unit.name, unit.aliases.to_vec()))
        .collect()
}

/// The builtin prefixes, keyed by every alias.
#[must_use]
pub fn builtin_prefixes() -> IndexMap<String, Prefix> {
    PREFIXES
        .iter()
        .flat_map(|prefix| {
            prefix
                .aliases
                .iter()
                .map(|alias| (alias.to_string(), prefix.prefix()))
        })
        .collect()
}

/// The documentation for the builtin prefixes: each prefix's symbol, name
/// and scale.
#[must_use]
pub fn builtin_prefixes_docs() -> IndexMap<&'static str, (&'static str, f64)> {
    PREFIXES
        .iter()
        .map(|prefix| (prefix.symbol, (prefix.name, prefix.value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn prefix_values_match_powers() {
        for prefix in PREFIXES {
            assert_relative_eq!(
                prefix.value(),
                10f64.powi(prefix.power()),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn prefix_for_power_finds_multiples_of_three() {
        assert_eq!(prefix_for_power(-3).map(BuiltinPrefix::symbol), Some("m"));
        assert_eq!(prefix_for_power(6).map(BuiltinPrefix::symbol), Some("M"));
        assert!(prefix_for_power(0).is_none());
        assert!(prefix_for_power(33).is_none());
    }

    #[test]
    fn aliases_are_unique() {
        let units = builtin_units();
        let alias_count: usize = UNITS.iter().map(|unit| unit.aliases().len()).sum();

        assert_eq!(units.len(), alias_count);
    }

    #[test]
    fn kilogram_is_the_mass_base_unit() {
        let kilogram = base_unit(Dimension::Mass);

        assert_eq!(kilogram.symbol(), "kg");
        assert_relative_eq!(kilogram.magnitude(), 1.0);
    }

    #[test]
    fn volt_is_watt_per_ampere() {
        let watt_per_ampere = WATT.unit() / AMPERE.unit();

        assert!(VOLT.unit().numerically_eq(&watt_per_ampere));
    }

    #[test]
    fn ohm_is_volt_per_ampere() {
        assert!(OHM.unit().numerically_eq(&(VOLT.unit() / AMPERE.unit())));
        assert!(SIEMENS.unit().numerically_eq(&OHM.unit().recip()));
    }

    #[test]
    fn hertz_is_one_per_second() {
        assert!(HERTZ.unit().numerically_eq(&SECOND.unit().recip()));
    }

    #[test]
    fn docs_list_every_builtin() {
        let units = builtin_units_docs();
        let prefixes = builtin_prefixes_docs();

        assert_eq!(units.len(), UNITS.len());
        assert_eq!(units.get("ohm"), Some(&vec!["Ω", "ohm", "ohms", "Ohm", "Ohms"]));
        assert_eq!(prefixes.get("k"), Some(&("kilo", 1e3)));
        assert_eq!(prefixes.len(), PREFIXES.len());
    }
}
