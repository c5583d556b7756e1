//! Field tags, which classify quantities by the physical field they describe

use std::{fmt, hash, str::FromStr};

use physics_units::{Unit, UnitError, units};

use crate::error::ValueError;

/// A kind of physical field, each with a canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `temperature`, in kelvin
    Temperature,
    /// `heat_temperature`, in kelvin
    HeatTemperature,
    /// `heat flux`, in watts per square meter
    HeatFlux,
    /// `thermal conductivity`, in watts per meter-kelvin
    ThermalConductivity,
    /// `heat_conductivity`, in watts per meter-kelvin
    HeatConductivity,
    /// `voltage`, in volts
    Voltage,
    /// `current`, in amperes
    Current,
}

impl FieldKind {
    /// Every field kind, in documentation order.
    pub const ALL: [Self; 7] = [
        Self::Temperature,
        Self::HeatTemperature,
        Self::HeatFlux,
        Self::ThermalConductivity,
        Self::HeatConductivity,
        Self::Voltage,
        Self::Current,
    ];

    /// The name of the field, as accepted by [`FieldKind::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::HeatTemperature => "heat_temperature",
            Self::HeatFlux => "heat flux",
            Self::ThermalConductivity => "thermal conductivity",
            Self::HeatConductivity => "heat_conductivity",
            Self::Voltage => "voltage",
            Self::Current => "current",
        }
    }

    /// The unit that quantities of this field are measured in by default.
    #[must_use]
    pub fn canonical_unit(self) -> Unit {
        match self {
            Self::Temperature | Self::HeatTemperature => units::kelvin(),
            Self::HeatFlux => units::watt() / units::meter().pow(2.0),
            Self::ThermalConductivity | Self::HeatConductivity => {
                units::watt() / (units::meter() * units::kelvin())
            }
            Self::Voltage => units::volt(),
            Self::Current => units::ampere(),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValueError::InvalidField(s.to_string()))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named classification of a quantity.
///
/// Two tags are equal when they have the same kind and name; the unit only
/// decides how values of the field are expressed.
#[derive(Debug, Clone)]
pub struct FieldTag {
    kind: FieldKind,
    name: Option<String>,
    unit: Unit,
}

impl FieldTag {
    /// Creates a tag for the given field, measured in its canonical unit.
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            name: None,
            unit: kind.canonical_unit(),
        }
    }

    /// Creates a tag from a field name.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidField`] if the name is not a known field.
    pub fn parse(field: &str) -> Result<Self, ValueError> {
        field.parse().map(Self::new)
    }

    /// Sets the name of the tag.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Overrides the unit of the tag.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidUnit`] if the unit does not have the
    /// dimensionality of the field's canonical unit.
    pub fn with_unit(self, unit: Unit) -> Result<Self, ValueError> {
        let canonical = self.kind.canonical_unit();
        if !unit.dimensionally_eq(&canonical) {
            return Err(UnitError::incompatible(&unit, &canonical).into());
        }

        Ok(Self { unit, ..self })
    }

    /// The kind of field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The name of the field, e.g. `heat flux`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.kind.name()
    }

    /// The name given to the tag, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The unit values of the field are measured in.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl PartialEq for FieldTag {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name
    }
}

impl Eq for FieldTag {}

impl hash::Hash for FieldTag {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Documents the available fields and their canonical units, e.g.
/// `Available fields: temperature [K], ...`.
#[must_use]
pub fn fields_docs() -> String {
    let fields = FieldKind::ALL
        .iter()
        .map(|kind| format!("{} [{}]", kind.name(), kind.canonical_unit()))
        .collect::<Vec<_>>()
        .join(", ");

    format!("Available fields: {fields}")
}
