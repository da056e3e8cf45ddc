//! Magnitude extraction stage of the step counting pipeline

use crate::math::Vector3Ext;
use nalgebra::Vector3;

/// Convert a window of sample tuples into per-tuple magnitudes
///
/// For each tuple the squared magnitude `x² + y² + z²` is computed in
/// widened arithmetic and reduced with a floor integer square root,
/// truncated to 8 bits. The truncation is intentional precision loss
/// carried into the filter stages.
pub fn extract_magnitudes<const N: usize>(samples: &[Vector3<i8>; N], magnitude: &mut [u8; N]) {
    for (out, sample) in magnitude.iter_mut().zip(samples) {
        *out = sample.magnitude_u8();
    }
}

/// Convert an interleaved `x, y, z` buffer into per-tuple magnitudes
///
/// `raw` must hold exactly `3 × N` values laid out as consecutive
/// `(x, y, z)` triplets, matching the acquisition layout of most
/// accelerometer FIFOs. The length is asserted in debug builds only;
/// release builds trust the caller.
pub fn extract_magnitudes_interleaved<const N: usize>(raw: &[i8], magnitude: &mut [u8; N]) {
    debug_assert_eq!(raw.len(), 3 * N, "window must hold 3*N interleaved samples");

    for (out, tuple) in magnitude.iter_mut().zip(raw.chunks_exact(3)) {
        *out = Vector3::new(tuple[0], tuple[1], tuple[2]).magnitude_u8();
    }
}
