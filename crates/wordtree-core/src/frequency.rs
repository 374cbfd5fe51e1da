// Normalized word frequencies and their 5-bit encoding.

use crate::EntryError;

/// Frequency assigned to words that arrive without one.
///
/// Quantizes to 10: above unweighted noise, well below confidently frequent
/// words.
pub const DEFAULT_FREQUENCY: f64 = 0.3;

/// Largest quantized frequency value.
pub const MAX_QUANTIZED: u8 = 31;

/// Returns `true` if `frequency` lies in `[0, 1)`. NaN is rejected.
#[inline]
pub fn is_valid(frequency: f64) -> bool {
    (0.0..1.0).contains(&frequency)
}

/// Checks the `[0, 1)` range, returning the frequency unchanged on success.
pub fn validate(frequency: f64) -> Result<f64, EntryError> {
    if is_valid(frequency) {
        Ok(frequency)
    } else {
        Err(EntryError::InvalidFrequency(frequency))
    }
}

/// Quantizes a normalized frequency into the 5-bit range used by node records.
///
/// `0.0` maps to `0`, the marker for excluded terms that are never
/// suggested. Every other value maps to `1 + floor(f * 31)`, i.e. `1..=31`.
#[inline]
pub fn quantize(frequency: f64) -> u8 {
    if frequency <= 0.0 {
        return 0;
    }
    let scaled = (frequency * f64::from(MAX_QUANTIZED)).floor() as u8;
    (1 + scaled).min(MAX_QUANTIZED)
}
