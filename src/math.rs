//! Fixed-point math primitives for the step counting pipeline

use nalgebra::Vector3;

/// Floor integer square root of a 16-bit value
///
/// Uses Newton's method on a 32-bit working value, converging to the
/// largest integer whose square does not exceed the input. The result
/// for any 16-bit input fits in 8 bits plus one guard bit (`sqrt(65535)`
/// is 255), so callers truncating to `u8` lose nothing for the magnitude
/// range produced by this pipeline (at most `sqrt(49152)` = 221).
///
/// # Example
/// ```
/// use step_counter::sqrt_u16;
///
/// assert_eq!(sqrt_u16(0), 0);
/// assert_eq!(sqrt_u16(49152), 221); // maximum tuple magnitude
/// ```
pub fn sqrt_u16(value: u16) -> u16 {
    if value == 0 {
        return 0;
    }

    let value = u32::from(value);
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }

    x as u16
}

/// Extension trait for raw accelerometer sample tuples
pub trait Vector3Ext {
    /// Squared magnitude `x² + y² + z²` in a widened unsigned accumulator
    ///
    /// Components are in `[-128, 127]`, so the maximum value is
    /// `3 × 128² = 49152`, which fits in 16 bits.
    fn magnitude_squared_u16(&self) -> u16;

    /// Floor square root of the squared magnitude, truncated to 8 bits
    ///
    /// Truncation rather than rounding is the deliberate precision policy
    /// of the pipeline and is relied upon by the later filter stages.
    fn magnitude_u8(&self) -> u8;
}

impl Vector3Ext for Vector3<i8> {
    fn magnitude_squared_u16(&self) -> u16 {
        // Widen before squaring so negative components cannot corrupt
        // the sign of the squares.
        let x = i32::from(self.x);
        let y = i32::from(self.y);
        let z = i32::from(self.z);

        (x * x + y * y + z * z) as u16
    }

    fn magnitude_u8(&self) -> u8 {
        sqrt_u16(self.magnitude_squared_u16()) as u8
    }
}
