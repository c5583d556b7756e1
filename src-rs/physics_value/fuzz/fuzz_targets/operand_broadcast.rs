#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use ndarray::{ArrayD, IxDyn};
use physics_value::{Operand, Quantity, ValueError};
use shared::{Magnitude, Voltage};

/// A small array shape, each dimension between 1 and 3
#[derive(Debug, arbitrary::Arbitrary)]
struct Shape(Vec<u8>);

impl Shape {
    fn dims(&self) -> Vec<usize> {
        self.0.iter().take(3).map(|dim| usize::from(dim % 3) + 1).collect()
    }
}

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzData {
    lhs_shape: Shape,
    rhs_shape: Shape,
    lhs: Magnitude,
    rhs: Voltage,
}

fn expected_shape(lhs: &[usize], rhs: &[usize]) -> Option<Vec<usize>> {
    let rank = lhs.len().max(rhs.len());
    let dim = |shape: &[usize], index: usize| {
        let offset = rank - shape.len();
        if index < offset { 1 } else { shape[index - offset] }
    };

    (0..rank)
        .map(|index| {
            let (l, r) = (dim(lhs, index), dim(rhs, index));
            if l == r || r == 1 {
                Some(l)
            } else if l == 1 {
                Some(r)
            } else {
                None
            }
        })
        .collect()
}

fuzz_target!(|data: FuzzData| {
    let lhs_dims = data.lhs_shape.dims();
    let rhs_dims = data.rhs_shape.dims();
    let Magnitude(lhs) = data.lhs;
    let Voltage(rhs) = data.rhs;

    let lhs_array = Operand::from(ArrayD::from_elem(IxDyn(&lhs_dims), lhs));
    let rhs_array = Operand::from(ArrayD::from_elem(IxDyn(&rhs_dims), rhs.clone()));

    let result = lhs_array.checked_add(&rhs_array);

    match expected_shape(&lhs_dims, &rhs_dims) {
        Some(shape) => {
            let sum = result.expect("shapes broadcast");
            assert_eq!(sum.shape(), shape.as_slice());

            let expected = Operand::from(rhs.clone() + lhs);
            let elements = sum.as_array().expect("arrays add to an array");
            assert!(elements.iter().all(|element| element == &expected));
        }
        None => {
            assert_eq!(
                result,
                Err(ValueError::ShapeMismatch {
                    lhs: lhs_dims,
                    rhs: rhs_dims,
                })
            );
        }
    }

    let scalar = Operand::from(Quantity::dimensionless(lhs));
    assert!(matches!(
        scalar.checked_add(&Operand::from(rhs)),
        Err(ValueError::DimensionMismatch { .. })
    ));
});
