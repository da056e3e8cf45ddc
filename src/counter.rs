//! Step counting pipeline orchestration

use nalgebra::Vector3;

use crate::filter::{derivative_filter, low_pass_filter};
use crate::magnitude::{extract_magnitudes, extract_magnitudes_interleaved};
use crate::peaks::detect_peaks;

/// Step counting pipeline over windows of `N` sample tuples
///
/// Owns the intermediate signal buffers, so a single instance processes
/// successive windows without any allocation. Every buffer is rewritten
/// in full on each call; the outputs depend only on the window passed in,
/// never on a previous one.
///
/// The struct is a plain owned value. For concurrent use give each
/// execution context its own counter rather than sharing one.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use step_counter::StepCounter;
///
/// let mut counter = StepCounter::<16>::new();
/// let window = [Vector3::new(0i8, 0, 0); 16];
/// assert_eq!(counter.count_steps(&window), 0);
/// ```
pub struct StepCounter<const N: usize> {
    /// Per-tuple magnitudes of the last window
    magnitude: [u8; N],
    /// Low-pass filtered magnitude signal
    low_pass: [i32; N],
    /// Derivative of the low-pass signal
    derivative: [i32; N],
}

impl<const N: usize> StepCounter<N> {
    /// Create a counter with zeroed buffers
    pub const fn new() -> Self {
        Self {
            magnitude: [0; N],
            low_pass: [0; N],
            derivative: [0; N],
        }
    }

    /// Count the walking steps in one window of sample tuples
    ///
    /// Runs the full pipeline: magnitude extraction, low-pass filtering,
    /// differentiation, and peak detection. The work is a fixed number of
    /// integer operations per window, making execution time deterministic.
    ///
    /// # Arguments
    /// * `samples` - one window of `(x, y, z)` accelerometer tuples,
    ///   each component in raw signed 8-bit counts
    ///
    /// # Returns
    /// Number of detected steps in the window
    pub fn count_steps(&mut self, samples: &[Vector3<i8>; N]) -> u8 {
        extract_magnitudes(samples, &mut self.magnitude);
        self.run_filters()
    }

    /// Count steps from an interleaved `x, y, z` sample buffer
    ///
    /// Accepts the raw acquisition layout: `3 × N` signed 8-bit values as
    /// consecutive `(x, y, z)` triplets. The length is asserted in debug
    /// builds only; the release path performs no validation, matching the
    /// no-runtime-checks contract of the pipeline.
    pub fn count_steps_interleaved(&mut self, raw: &[i8]) -> u8 {
        extract_magnitudes_interleaved(raw, &mut self.magnitude);
        self.run_filters()
    }

    fn run_filters(&mut self) -> u8 {
        low_pass_filter(&self.magnitude, &mut self.low_pass);
        derivative_filter(&self.low_pass, &mut self.derivative);
        detect_peaks(&self.derivative)
    }

    /// Magnitude sequence of the last processed window
    ///
    /// Diagnostic view for tests and threshold tuning.
    pub fn magnitude(&self) -> &[u8; N] {
        &self.magnitude
    }

    /// Low-pass filtered signal of the last processed window
    pub fn low_pass(&self) -> &[i32; N] {
        &self.low_pass
    }

    /// Derivative signal of the last processed window
    pub fn derivative(&self) -> &[i32; N] {
        &self.derivative
    }
}

impl<const N: usize> Default for StepCounter<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count the steps in a single window with a one-shot pipeline
///
/// Convenience wrapper that stack-allocates a [`StepCounter`], runs one
/// window through it, and discards it. Prefer keeping a counter around
/// when processing a stream of windows.
pub fn count_steps<const N: usize>(samples: &[Vector3<i8>; N]) -> u8 {
    let mut counter = StepCounter::new();
    counter.count_steps(samples)
}
