#![no_main]

use libfuzzer_sys::fuzz_target;
use physics_value::ValueError;
use shared::{AnyQuantity, Voltage};

fuzz_target!(|data: (Voltage, Voltage, AnyQuantity)| {
    let (Voltage(a), Voltage(b), AnyQuantity(other)) = data;

    let sum = a.checked_add(&b).expect("voltages add");
    assert!(sum.unit().dimensionally_eq(a.unit()));
    assert_eq!(sum.unit(), a.unit());

    let back = sum.checked_sub(&b).expect("voltages subtract");
    let scale = a.magnitude().abs().max(sum.magnitude().abs()).max(1.0);
    assert!(
        (back.magnitude() - a.magnitude()).abs() <= 1e-9 * scale,
        "expected: {}, actual: {}",
        a,
        back
    );

    let result = a.checked_add(&other);
    if other.unit().dimensionally_eq(a.unit()) {
        assert!(result.is_ok());
    } else {
        assert!(matches!(result, Err(ValueError::DimensionMismatch { .. })));
    }
});
