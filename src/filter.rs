//! Causal FIR filter stages of the step counting pipeline
//!
//! Both filters share the same convolution pattern: each output sample is
//! a fixed-weight sum of the current and preceding input samples, with
//! taps reaching before the start of the window skipped (left-boundary
//! zero padding). The first `len - 1` outputs are therefore partial
//! convolutions; this is the boundary policy of the algorithm, not a
//! transient to be compensated for.

/// Low-pass filter coefficients, a 9-tap FIR designed with MATLAB's FDATOOL
pub const LPF_COEFFS: [i8; 9] = [-5, 6, 34, 68, 84, 68, 34, 6, -5];

/// Derivative filter coefficients, a 5-tap antisymmetric FIR
/// from <https://www.dsprelated.com/showarticle/814.php>
pub const DERIV_COEFFS: [i8; 5] = [-6, 31, 0, -31, 6];

/// Smooth the magnitude sequence with the low-pass FIR filter
///
/// Accumulation is in `i32`: 9 taps × max |coefficient| 84 × max input 255
/// stays below 200k, far from overflow.
pub fn low_pass_filter<const N: usize>(magnitude: &[u8; N], low_pass: &mut [i32; N]) {
    for (n, out) in low_pass.iter_mut().enumerate() {
        *out = convolve_at(&LPF_COEFFS, n, |k| i32::from(magnitude[k]));
    }
}

/// Differentiate the low-pass sequence with the derivative FIR filter
///
/// Emphasises the rate of change of the smoothed magnitude signal,
/// producing sharp extrema at step impacts.
pub fn derivative_filter<const N: usize>(low_pass: &[i32; N], derivative: &mut [i32; N]) {
    for (n, out) in derivative.iter_mut().enumerate() {
        *out = convolve_at(&DERIV_COEFFS, n, |k| low_pass[k]);
    }
}

/// One causal convolution output at index `n`
///
/// Sums `coeffs[i] * input(n - i)` over the taps that fall inside the
/// window, skipping those with `n - i < 0`.
fn convolve_at<const LEN: usize>(
    coeffs: &[i8; LEN],
    n: usize,
    input: impl Fn(usize) -> i32,
) -> i32 {
    let mut acc = 0i32;
    for (i, &coeff) in coeffs.iter().enumerate().take(n + 1) {
        acc += i32::from(coeff) * input(n - i);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_pass_zero_input_gives_zero_output() {
        let magnitude = [0u8; 16];
        let mut low_pass = [1i32; 16];

        low_pass_filter(&magnitude, &mut low_pass);

        assert_eq!(low_pass, [0i32; 16]);
    }

    #[test]
    fn test_low_pass_impulse_response_is_the_kernel() {
        // A unit impulse at index 0 replays the coefficients one per
        // output sample, then trails off to zero.
        let mut magnitude = [0u8; 12];
        magnitude[0] = 1;
        let mut low_pass = [0i32; 12];

        low_pass_filter(&magnitude, &mut low_pass);

        for (n, &out) in low_pass.iter().enumerate() {
            let expected = if n < LPF_COEFFS.len() {
                i32::from(LPF_COEFFS[n])
            } else {
                0
            };
            assert_eq!(out, expected, "impulse response mismatch at {}", n);
        }
    }

    #[test]
    fn test_low_pass_left_boundary_is_partial() {
        // With constant input the first 8 outputs ramp up as taps come
        // into range: output n is the input times the coefficient prefix
        // sum.
        let magnitude = [10u8; 12];
        let mut low_pass = [0i32; 12];

        low_pass_filter(&magnitude, &mut low_pass);

        let mut prefix = 0i32;
        for (n, &coeff) in LPF_COEFFS.iter().enumerate() {
            prefix += i32::from(coeff);
            assert_eq!(low_pass[n], 10 * prefix);
        }
        // Steady state: full kernel sum (290) times the input
        for &out in &low_pass[LPF_COEFFS.len()..] {
            assert_eq!(out, 2900);
        }
    }

    #[test]
    fn test_derivative_impulse_response_is_the_kernel() {
        let mut low_pass = [0i32; 8];
        low_pass[0] = 1;
        let mut derivative = [0i32; 8];

        derivative_filter(&low_pass, &mut derivative);

        for (n, &out) in derivative.iter().enumerate() {
            let expected = if n < DERIV_COEFFS.len() {
                i32::from(DERIV_COEFFS[n])
            } else {
                0
            };
            assert_eq!(out, expected, "impulse response mismatch at {}", n);
        }
    }

    #[test]
    fn test_derivative_of_constant_settles_to_zero() {
        // The antisymmetric kernel sums to zero, so once all taps are in
        // range a constant signal differentiates to zero.
        let low_pass = [1450i32; 12];
        let mut derivative = [0i32; 12];

        derivative_filter(&low_pass, &mut derivative);

        for &out in &derivative[DERIV_COEFFS.len()..] {
            assert_eq!(out, 0);
        }
    }

    #[test]
    fn test_filter_chain_known_window() {
        // Exact values for a two-bump magnitude window, computed with the
        // reference convolution by hand.
        let magnitude: [u8; 16] = [5, 32, 60, 32, 5, 5, 5, 5, 32, 60, 32, 5, 5, 5, 5, 5];

        let mut low_pass = [0i32; 16];
        low_pass_filter(&magnitude, &mut low_pass);
        assert_eq!(
            low_pass,
            [
                -25, -130, 62, 1628, 4803, 8201, 9737, 8401, 5183, 2450, 2450, 5183, 8376, 9742,
                8376, 5318
            ]
        );

        let mut derivative = [0i32; 16];
        derivative_filter(&low_pass, &mut derivative);
        assert_eq!(
            derivative,
            [
                150, 5, -4402, -7071, 25530, 96985, 145713, 112316, 3920, -106668, -140759,
                -65415, 65565, 139954, 105773, -810
            ]
        );
    }
}
