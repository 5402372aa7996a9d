// Absorbs representation error so that e.g. 10.3 stored as 10.2999...
// still lands on the intended tenth.
const TENTHS_EPSILON: f64 = 1e-9;

/// Rounds to one decimal place, halves rounding up (towards +inf).
#[inline]
pub fn round_half_up_tenths(value: f64) -> f64 {
    ((value * 10.0) + 0.5 + TENTHS_EPSILON).floor() / 10.0
}

/// Truncates to one decimal place (towards zero).
#[inline]
pub fn truncate_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    (scaled + TENTHS_EPSILON * scaled.signum()).trunc() / 10.0
}

/// Rounds to the nearest integer, halves rounding up.
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5 + TENTHS_EPSILON).floor() as i32
}

/// Equality on the one-decimal grid every index lives on.
#[inline]
pub fn same_tenth(a: f64, b: f64) -> bool {
    (a * 10.0).round() == (b * 10.0).round()
}
