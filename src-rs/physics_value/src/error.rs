//! Errors raised by quantity arithmetic, field tags and configuration

use physics_shared::error::{AsPhysicsError, Context};
use physics_units::{Unit, UnitError, describe};

/// An error raised by an operation on quantities
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A unit could not be found or converted
    #[error(transparent)]
    InvalidUnit(#[from] UnitError),
    /// The operands have different dimensionality
    #[error("dimensionality mismatch between `{lhs}` and `{rhs}`")]
    DimensionMismatch {
        /// The unit of the left operand
        lhs: String,
        /// The unit of the right operand
        rhs: String,
    },
    /// The field name is not one of the known field kinds
    #[error("invalid field `{0}`")]
    InvalidField(String),
    /// Bulk construction only supports one- and two-dimensional arrays
    #[error("arrays of rank {rank} are not supported")]
    RankUnsupported {
        /// The rank of the array that was passed
        rank: usize,
    },
    /// The quantity has no placeholder in a computation graph
    #[error("`{name}` is not bound to a placeholder")]
    NotBound {
        /// The name of the quantity, or `<unnamed>`
        name: String,
    },
    /// The divisor has a magnitude of zero
    #[error("division by zero")]
    DivisionByZero,
    /// The array operands cannot be broadcast together
    #[error("cannot broadcast shape {lhs:?} with shape {rhs:?}")]
    ShapeMismatch {
        /// The shape of the left operand
        lhs: Vec<usize>,
        /// The shape of the right operand
        rhs: Vec<usize>,
    },
}

impl ValueError {
    /// Creates a [`ValueError::DimensionMismatch`] error for the given units.
    #[must_use]
    pub fn dimension_mismatch(lhs: &Unit, rhs: &Unit) -> Self {
        Self::DimensionMismatch {
            lhs: describe(lhs),
            rhs: describe(rhs),
        }
    }
}

impl AsPhysicsError for ValueError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidUnit(error) => error.context(),
            Self::DimensionMismatch { .. } => vec![Context::Help(
                "quantities can only be added, subtracted or compared when they measure the same kind of thing"
                    .to_string(),
            )],
            Self::InvalidField(_) => vec![Context::Note(format!(
                "available fields are {}",
                crate::field::FieldKind::ALL
                    .iter()
                    .map(|kind| format!("`{}`", kind.name()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))],
            Self::RankUnsupported { .. } => vec![Context::Help(
                "reshape the array into one or two dimensions first".to_string(),
            )],
            Self::NotBound { .. } => vec![Context::Help(
                "create the quantity with `Quantity::named_in` to register a placeholder".to_string(),
            )],
            Self::DivisionByZero | Self::ShapeMismatch { .. } => vec![],
        }
    }
}

/// An error raised while reading a [`Config`](crate::Config)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML or has the wrong shape
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AsPhysicsError for ConfigError {
    fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use physics_units::units;

    use super::*;

    #[test]
    fn dimension_mismatch_names_both_units() {
        let error = ValueError::dimension_mismatch(&units::ohm(), &units::volt());

        assert_eq!(
            error.message(),
            "dimensionality mismatch between `Ω` and `V`"
        );
        assert!(matches!(error.context().as_slice(), [Context::Help(_)]));
    }

    #[test]
    fn dimensionless_operand_is_named() {
        let error = ValueError::dimension_mismatch(&Unit::dimensionless(), &units::volt());

        assert_eq!(
            error,
            ValueError::DimensionMismatch {
                lhs: "dimensionless".to_string(),
                rhs: "V".to_string(),
            }
        );
    }

    #[test]
    fn invalid_field_lists_available_fields() {
        let error = ValueError::InvalidField("not_a_field".to_string());
        let context = error.context();

        assert_eq!(error.message(), "invalid field `not_a_field`");
        assert!(matches!(
            context.as_slice(),
            [Context::Note(note)] if note.contains("`heat flux`")
        ));
    }

    #[test]
    fn unit_errors_keep_their_context() {
        let error = ValueError::from(UnitError::UnknownUnit("furlong".to_string()));

        assert_eq!(error.message(), "unknown unit `furlong`");
        assert_eq!(error.context().len(), 1);
    }
}
