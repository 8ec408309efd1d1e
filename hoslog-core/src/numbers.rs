//! Numeric helpers centralizing rounding and safe float/count conversions.

use num_traits::cast::cast;

/// Round a f64 to two decimal places, returning 0.0 for non-finite values.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Floor a non-negative f64 into a u32 count, returning 0 for non-finite or
/// negative values and clamping values beyond the u32 range.
#[must_use]
pub fn floor_to_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let floored = value.clamp(0.0, max).floor();
    cast::<f64, u32>(floored).unwrap_or(0)
}

/// Convert a u32 count back into f64 hour arithmetic in a single location.
#[must_use]
pub fn count_to_f64(value: u32) -> f64 {
    cast::<u32, f64>(value).unwrap_or(0.0)
}
