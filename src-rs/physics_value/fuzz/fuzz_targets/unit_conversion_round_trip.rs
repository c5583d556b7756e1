#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use physics_units::is_close;
use shared::Voltage;

#[derive(Debug, arbitrary::Arbitrary)]
enum FuzzData {
    AdjustUnit { value: Voltage, target: Voltage },
    BaseUnits { value: Voltage },
    CompactUnits { value: Voltage },
}

macro_rules! assert_is_close {
    ($expected:expr, $actual:expr) => {
        assert!(
            is_close($expected, $actual),
            "expected: {}, actual: {}",
            $expected,
            $actual
        );
    };
}

fuzz_target!(|data: FuzzData| {
    match data {
        FuzzData::AdjustUnit {
            value: Voltage(value),
            target: Voltage(target),
        } => {
            let converted = value.adjust_unit(target.unit()).expect("voltages convert");
            let back = converted.adjust_unit(value.unit()).expect("voltages convert");

            assert_eq!(back.unit(), value.unit());
            assert_is_close!(value.base_magnitude(), converted.base_magnitude());
            assert_is_close!(value.base_magnitude(), back.base_magnitude());
        }
        FuzzData::BaseUnits { value: Voltage(value) } => {
            let base = value.base_units();

            assert_is_close!(value.base_magnitude(), base.magnitude());
            assert!(base.unit().dimensionally_eq(value.unit()));
        }
        FuzzData::CompactUnits { value: Voltage(value) } => {
            let compact = value.compact_units();

            assert_is_close!(value.base_magnitude(), compact.base_magnitude());
            assert!(compact.unit().dimensionally_eq(value.unit()));
        }
    }
});
