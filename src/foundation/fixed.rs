//! Coordinate encoding for record payloads.
//!
//! Coordinates are stored as signed integers in thousandths of a logical unit.
//! The world transform written at the start of every stream scales them back
//! down by `0.001`.

/// Fixed-point scale applied to every coordinate.
pub const FIXED_SCALE: f64 = 1000.0;

/// Encode a coordinate as a signed thousandths value.
///
/// Rounds half away from zero: the scaled value is biased by half a unit in the
/// direction of its sign and then truncated. Out-of-range values saturate at the
/// `i32` bounds.
///
/// ```
/// use emfout::to_fixed;
/// assert_eq!(to_fixed(1.2345), 1235);
/// assert_eq!(to_fixed(-1.2345), -1235);
/// assert_eq!(to_fixed(0.0), 0);
/// ```
pub fn to_fixed(v: f64) -> i32 {
    let scaled = v * FIXED_SCALE;
    let biased = if v > 0.0 {
        scaled + 0.5
    } else if v < 0.0 {
        scaled - 0.5
    } else {
        0.0
    };
    biased.trunc() as i32
}

/// [`to_fixed`] reinterpreted as the unsigned bit pattern written to the stream.
pub fn to_fixed_bits(v: f64) -> u32 {
    to_fixed(v) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/fixed.rs"]
mod tests;
