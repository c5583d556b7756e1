//! Utility functions for the unit system

const TOLERANCE: f64 = 1e-10;

/// Checks if two floating point numbers are close to each other.
///
/// This function uses the `Strong` comparison method defined in the
/// `is_close` crate as reference. See
/// <https://github.com/PM4Rs/is_close/blob/8475cd292946b6e5461375a41160153ce32e31c6/src/lib.rs#L183>
/// for more details.
///
/// The tolerance is fixed at 1e-10.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    if a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = TOLERANCE * f64::min(a.abs(), b.abs());
    let absolute_tolerance = TOLERANCE;

    difference <= relative_tolerance || difference <= absolute_tolerance
}

/// Checks if two magnitudes are equal within a relative tolerance of 1e-10.
///
/// Unlike [`is_close`], there is no absolute tolerance, so small magnitudes
/// such as `1e-12` and `2e-12` are distinct, and only an exact zero is equal
/// to zero. Use this for magnitudes and [`is_close`] for exponents.
#[must_use]
pub fn is_relatively_close(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, epsilon = 0.0, max_relative = TOLERANCE)
}
