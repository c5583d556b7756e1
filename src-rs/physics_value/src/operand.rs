//! Operands of mixed kind: plain numbers, quantities and arrays of either
//!
//! Binary operations classify both sides and apply the rules for that pair
//! of kinds. Arrays are combined element by element, broadcasting shapes the
//! way NumPy does, and each pair of elements follows the scalar rules.

use std::cmp::Ordering;

use ndarray::{ArrayD, IxDyn, arr0};

use crate::{
    error::ValueError,
    meta::AsQuantity,
    quantity::{Quantity, compare_magnitudes},
};

/// One side of a binary operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A plain number, which takes on the unit of the quantity it meets
    Number(f64),
    /// A quantity with a unit
    Quantity(Quantity),
    /// An array of operands
    Array(ArrayD<Operand>),
}

/// A comparison between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Comparison {
    /// Whether the comparison holds for the given ordering.
    #[must_use]
    pub const fn holds(self, ordering: Option<Ordering>) -> bool {
        match self {
            Self::Eq => matches!(ordering, Some(Ordering::Equal)),
            Self::Ne => !matches!(ordering, Some(Ordering::Equal)),
            Self::Lt => matches!(ordering, Some(Ordering::Less)),
            Self::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Self::Gt => matches!(ordering, Some(Ordering::Greater)),
            Self::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        }
    }
}

/// A single element taking part in an operation.
#[derive(Clone, Copy)]
enum Scalar<'a> {
    Number(f64),
    Quantity(&'a Quantity),
}

impl Operand {
    /// The shape of the operand; scalars have an empty shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Number(_) | Self::Quantity(_) => &[],
            Self::Array(array) => array.shape(),
        }
    }

    /// The quantity, if the operand is one.
    #[must_use]
    pub const fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Self::Quantity(quantity) => Some(quantity),
            Self::Number(_) | Self::Array(_) => None,
        }
    }

    /// The array, if the operand is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayD<Self>> {
        match self {
            Self::Array(array) => Some(array),
            Self::Number(_) | Self::Quantity(_) => None,
        }
    }

    /// Adds two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if two quantities have
    /// different dimensionality, or [`ValueError::ShapeMismatch`] if two
    /// arrays cannot be broadcast together.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ValueError> {
        self.arithmetic(rhs, &|lhs, rhs| match (lhs, rhs) {
            (Scalar::Number(lhs), Scalar::Number(rhs)) => Ok(Self::Number(lhs + rhs)),
            (Scalar::Number(lhs), Scalar::Quantity(rhs)) => Ok(Self::Quantity(lhs + rhs.clone())),
            (Scalar::Quantity(lhs), Scalar::Number(rhs)) => Ok(Self::Quantity(lhs.clone() + rhs)),
            (Scalar::Quantity(lhs), Scalar::Quantity(rhs)) => {
                lhs.checked_add(rhs).map(Self::Quantity)
            }
        })
    }

    /// Subtracts two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if two quantities have
    /// different dimensionality, or [`ValueError::ShapeMismatch`] if two
    /// arrays cannot be broadcast together.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ValueError> {
        self.arithmetic(rhs, &|lhs, rhs| match (lhs, rhs) {
            (Scalar::Number(lhs), Scalar::Number(rhs)) => Ok(Self::Number(lhs - rhs)),
            (Scalar::Number(lhs), Scalar::Quantity(rhs)) => Ok(Self::Quantity(lhs - rhs.clone())),
            (Scalar::Quantity(lhs), Scalar::Number(rhs)) => Ok(Self::Quantity(lhs.clone() - rhs)),
            (Scalar::Quantity(lhs), Scalar::Quantity(rhs)) => {
                lhs.checked_sub(rhs).map(Self::Quantity)
            }
        })
    }

    /// Multiplies two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ShapeMismatch`] if two arrays cannot be
    /// broadcast together.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ValueError> {
        self.arithmetic(rhs, &|lhs, rhs| match (lhs, rhs) {
            (Scalar::Number(lhs), Scalar::Number(rhs)) => Ok(Self::Number(lhs * rhs)),
            (Scalar::Number(lhs), Scalar::Quantity(rhs)) => Ok(Self::Quantity(lhs * rhs.clone())),
            (Scalar::Quantity(lhs), Scalar::Number(rhs)) => Ok(Self::Quantity(lhs.clone() * rhs)),
            (Scalar::Quantity(lhs), Scalar::Quantity(rhs)) => Ok(Self::Quantity(lhs * rhs)),
        })
    }

    /// Divides two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] if any divisor is zero, or
    /// [`ValueError::ShapeMismatch`] if two arrays cannot be broadcast
    /// together.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ValueError> {
        self.arithmetic(rhs, &|lhs, rhs| match (lhs, rhs) {
            (Scalar::Number(_), Scalar::Number(rhs)) if rhs == 0.0 => {
                Err(ValueError::DivisionByZero)
            }
            (Scalar::Number(lhs), Scalar::Number(rhs)) => Ok(Self::Number(lhs / rhs)),
            (Scalar::Number(lhs), Scalar::Quantity(rhs)) => {
                rhs.checked_rdiv_number(lhs).map(Self::Quantity)
            }
            (Scalar::Quantity(lhs), Scalar::Number(rhs)) => {
                lhs.checked_div_number(rhs).map(Self::Quantity)
            }
            (Scalar::Quantity(lhs), Scalar::Quantity(rhs)) => {
                lhs.checked_div(rhs).map(Self::Quantity)
            }
        })
    }

    /// Compares two operands element by element.
    ///
    /// Two scalars compare to a zero-dimensional array. A plain number
    /// compared with a quantity is compared with the quantity's magnitude in
    /// SI base units.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] if two quantities have
    /// different dimensionality, or [`ValueError::ShapeMismatch`] if two
    /// arrays cannot be broadcast together.
    pub fn compare(&self, rhs: &Self, comparison: Comparison) -> Result<ArrayD<bool>, ValueError> {
        self.broadcast_with(rhs, &|lhs, rhs| {
            let ordering = match (lhs, rhs) {
                (Scalar::Number(lhs), Scalar::Number(rhs)) => compare_magnitudes(lhs, rhs),
                (Scalar::Number(lhs), Scalar::Quantity(rhs)) => lhs.partial_cmp(rhs),
                (Scalar::Quantity(lhs), Scalar::Number(rhs)) => lhs.partial_cmp(&rhs),
                (Scalar::Quantity(lhs), Scalar::Quantity(rhs)) => lhs.checked_partial_cmp(rhs)?,
            };
            Ok(comparison.holds(ordering))
        })
    }

    const fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Self::Number(number) => Some(Scalar::Number(*number)),
            Self::Quantity(quantity) => Some(Scalar::Quantity(quantity)),
            Self::Array(_) => None,
        }
    }

    /// Applies an operation that builds operands: arrays give arrays and
    /// two scalars give a scalar.
    fn arithmetic(
        &self,
        rhs: &Self,
        op: &impl Fn(Scalar<'_>, Scalar<'_>) -> Result<Self, ValueError>,
    ) -> Result<Self, ValueError> {
        if self.as_array().is_some() || rhs.as_array().is_some() {
            self.broadcast_with(rhs, op).map(Self::Array)
        } else {
            self.scalar_with(rhs, op)
        }
    }

    /// Applies a scalar operation element by element, broadcasting arrays
    /// against scalars and against each other.
    fn broadcast_with<T>(
        &self,
        rhs: &Self,
        op: &impl Fn(Scalar<'_>, Scalar<'_>) -> Result<T, ValueError>,
    ) -> Result<ArrayD<T>, ValueError> {
        match (self, rhs) {
            (Self::Array(lhs_array), Self::Array(rhs_array)) => {
                let shape = broadcast_shape(lhs_array.shape(), rhs_array.shape())?;
                let mismatch = || ValueError::ShapeMismatch {
                    lhs: lhs_array.shape().to_vec(),
                    rhs: rhs_array.shape().to_vec(),
                };

                let lhs_view = lhs_array.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
                let rhs_view = rhs_array.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;

                let elements = lhs_view
                    .iter()
                    .zip(rhs_view.iter())
                    .map(|(lhs, rhs)| lhs.scalar_with(rhs, op))
                    .collect::<Result<Vec<_>, _>>()?;

                ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| mismatch())
            }
            (Self::Array(lhs_array), Self::Number(_) | Self::Quantity(_)) => {
                try_map(lhs_array, |lhs| lhs.scalar_with(rhs, op))
            }
            (Self::Number(_) | Self::Quantity(_), Self::Array(rhs_array)) => {
                try_map(rhs_array, |rhs| self.scalar_with(rhs, op))
            }
            (Self::Number(_) | Self::Quantity(_), Self::Number(_) | Self::Quantity(_)) => {
                self.scalar_with(rhs, op).map(|value| arr0(value).into_dyn())
            }
        }
    }

    /// Applies a scalar operation to two scalar operands.
    ///
    /// Array elements must be scalars themselves, so a nested array is a
    /// shape mismatch.
    fn scalar_with<T>(
        &self,
        rhs: &Self,
        op: &impl Fn(Scalar<'_>, Scalar<'_>) -> Result<T, ValueError>,
    ) -> Result<T, ValueError> {
        match (self.as_scalar(), rhs.as_scalar()) {
            (Some(lhs), Some(rhs)) => op(lhs, rhs),
            (None, _) | (_, None) => Err(ValueError::ShapeMismatch {
                lhs: self.shape().to_vec(),
                rhs: rhs.shape().to_vec(),
            }),
        }
    }
}

fn try_map<T>(
    array: &ArrayD<Operand>,
    f: impl Fn(&Operand) -> Result<T, ValueError>,
) -> Result<ArrayD<T>, ValueError> {
    let elements = array.iter().map(f).collect::<Result<Vec<_>, _>>()?;

    ArrayD::from_shape_vec(array.raw_dim(), elements).map_err(|_| ValueError::ShapeMismatch {
        lhs: array.shape().to_vec(),
        rhs: array.shape().to_vec(),
    })
}

/// The shape two arrays broadcast to, following NumPy's rules: shapes are
/// aligned at their last dimension, and each pair of dimensions must be
/// equal or one of them must be 1.
fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, ValueError> {
    let rank = lhs.len().max(rhs.len());
    let padded = |shape: &[usize], index: usize| {
        let offset = rank - shape.len();
        if index < offset { 1 } else { shape[index - offset] }
    };

    (0..rank)
        .map(|index| match (padded(lhs, index), padded(rhs, index)) {
            (l, r) if l == r => Ok(l),
            (1, r) => Ok(r),
            (l, 1) => Ok(l),
            _ => Err(ValueError::ShapeMismatch {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            }),
        })
        .collect()
}

impl From<f64> for Operand {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<Quantity> for Operand {
    fn from(quantity: Quantity) -> Self {
        Self::Quantity(quantity)
    }
}

impl<T: AsQuantity> From<&T> for Operand {
    fn from(value: &T) -> Self {
        Self::Quantity(value.as_quantity().clone())
    }
}

impl From<ArrayD<f64>> for Operand {
    fn from(array: ArrayD<f64>) -> Self {
        Self::Array(array.mapv(Self::Number))
    }
}

impl From<ArrayD<Quantity>> for Operand {
    fn from(array: ArrayD<Quantity>) -> Self {
        Self::Array(array.mapv(Self::Quantity))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr0, array};
    use physics_units::units;

    use super::*;

    fn volts(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, units::volt())
    }

    fn volt_array(magnitudes: ArrayD<f64>) -> Operand {
        let quantities =
            Quantity::array_like(&magnitudes, &units::volt()).expect("test arrays are 1-D or 2-D");
        Operand::from(quantities)
    }

    fn magnitudes(operand: &Operand) -> Vec<f64> {
        operand
            .as_array()
            .expect("operand is an array")
            .iter()
            .map(|element| match element {
                Operand::Number(number) => *number,
                Operand::Quantity(quantity) => quantity.magnitude(),
                Operand::Array(_) => f64::NAN,
            })
            .collect()
    }

    mod success_tests {
        use super::*;

        #[test]
        fn scalar_rules() {
            let voltage = Operand::from(volts(2.0));
            let number = Operand::from(3.0);

            assert_eq!(voltage.checked_add(&number), Ok(Operand::from(volts(5.0))));
            assert_eq!(number.checked_sub(&voltage), Ok(Operand::from(volts(1.0))));
            assert_eq!(number.checked_mul(&number), Ok(Operand::Number(9.0)));

            let inverse = number.checked_div(&voltage).expect("non-zero voltage");
            let inverse = inverse.as_quantity().expect("quantity result");
            assert_eq!(inverse.unit_str(), "1/V");
        }

        #[test]
        fn quantity_times_quantity() {
            let voltage = Operand::from(volts(2.0));
            let current = Operand::from(Quantity::new(3.0, units::ampere()));

            let power = voltage.checked_mul(&current).expect("multiplication never fails");
            let power = power.as_quantity().expect("quantity result");

            assert!(power.unit().numerically_eq(&units::watt()));
        }

        #[test]
        fn array_plus_scalar() {
            let array = volt_array(array![1.0, 2.0, 3.0].into_dyn());
            let sum = array
                .checked_add(&Operand::from(&volts(1.0)))
                .expect("same dimensionality");

            assert_eq!(sum.shape(), &[3]);
            assert_eq!(magnitudes(&sum), [2.0, 3.0, 4.0]);
        }

        #[test]
        fn number_array_keeps_number_semantics() {
            let numbers = Operand::from(array![1.0, 2.0].into_dyn());
            let sum = numbers
                .checked_add(&Operand::from(volts(1.0)))
                .expect("numbers take on the quantity unit");

            let first = &sum.as_array().expect("array result")[[0]];
            assert_eq!(first, &Operand::from(volts(2.0)));
        }

        #[test]
        fn arrays_broadcast() {
            let column = volt_array(array![[1.0], [2.0]].into_dyn());
            let row = volt_array(array![[10.0, 20.0, 30.0]].into_dyn());

            let sum = column.checked_add(&row).expect("shapes broadcast");

            assert_eq!(sum.shape(), &[2, 3]);
            assert_eq!(magnitudes(&sum), [11.0, 21.0, 31.0, 12.0, 22.0, 32.0]);
        }

        #[test]
        fn arrays_broadcast_across_ranks() {
            let matrix = Operand::from(array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
            let row = Operand::from(array![10.0, 100.0].into_dyn());

            let product = matrix.checked_mul(&row).expect("shapes broadcast");

            assert_eq!(magnitudes(&product), [10.0, 200.0, 30.0, 400.0]);
        }

        #[test]
        fn elementwise_comparison() {
            let array = volt_array(array![0.5, 1.0, 1.5].into_dyn());
            let threshold = Operand::from(volts(1.0));

            let greater = array.compare(&threshold, Comparison::Gt).expect("same dimensionality");
            let equal = array.compare(&threshold, Comparison::Eq).expect("same dimensionality");

            assert_eq!(greater, array![false, false, true].into_dyn());
            assert_eq!(equal, array![false, true, false].into_dyn());
        }

        #[test]
        fn scalar_comparison_is_zero_dimensional() {
            let kilovolt = Operand::from(volts(1000.0));
            let result = kilovolt
                .compare(&Operand::Number(1000.0), Comparison::Eq)
                .expect("numbers compare with base magnitudes");

            assert_eq!(result, arr0(true).into_dyn());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn array_with_incompatible_quantity() {
            let array = volt_array(array![1.0, 2.0].into_dyn());
            let current = Operand::from(Quantity::new(1.0, units::ampere()));

            assert!(matches!(
                array.checked_add(&current),
                Err(ValueError::DimensionMismatch { .. })
            ));
            assert!(matches!(
                array.compare(&current, Comparison::Lt),
                Err(ValueError::DimensionMismatch { .. })
            ));
        }

        #[test]
        fn zero_element_fails_whole_division() {
            let divisors = Operand::from(array![1.0, 0.0, 2.0].into_dyn());

            assert_eq!(
                Operand::from(volts(1.0)).checked_div(&divisors),
                Err(ValueError::DivisionByZero)
            );
            assert_eq!(
                Operand::Number(1.0).checked_div(&Operand::Number(0.0)),
                Err(ValueError::DivisionByZero)
            );
            assert_eq!(
                divisors.checked_div(&Operand::from(volts(0.0))),
                Err(ValueError::DivisionByZero)
            );
        }

        #[test]
        fn incompatible_shapes() {
            let lhs = Operand::from(array![1.0, 2.0, 3.0].into_dyn());
            let rhs = Operand::from(array![1.0, 2.0].into_dyn());

            assert_eq!(
                lhs.checked_add(&rhs),
                Err(ValueError::ShapeMismatch {
                    lhs: vec![3],
                    rhs: vec![2],
                })
            );
        }
    }
}
