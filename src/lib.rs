#![no_std]

//! Step Counter - fixed-point step detection for tri-axis accelerometer data
//!
//! This library converts one fixed-size window of raw accelerometer samples
//! into a count of detected walking steps. The algorithm is a four-stage
//! signal-processing pipeline operating entirely in integer arithmetic:
//!
//! 1. Magnitude extraction with an integer square root
//! 2. A 9-tap FIR low-pass filter to smooth out high-frequency noise
//! 3. A 5-tap FIR derivative filter to emphasise step impacts
//! 4. A local-maximum peak detector with a fixed threshold
//!
//! # Features
//!
//! - No dynamic allocation, no I/O, no floating point
//! - Deterministic, bounded execution time per window
//! - Window size fixed at compile time via const generics
//! - Caller-owned buffers, safe to use one counter per thread
//! - `#![no_std]` compatible for embedded systems
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use step_counter::StepCounter;
//!
//! // One window of 16 (x, y, z) sample tuples from the accelerometer
//! let window = [Vector3::new(0i8, 0, 0); 16];
//!
//! let mut counter = StepCounter::<16>::new();
//! let steps = counter.count_steps(&window);
//!
//! assert_eq!(steps, 0); // a quiet window contains no steps
//! ```
//!
//! A single [`StepCounter`] can be reused across successive windows; its
//! internal buffers are rewritten in full on every call, so no state leaks
//! from one window into the next.

mod counter;
pub mod filter;
pub mod magnitude;
mod math;
pub mod peaks;

// Re-export all public types and functions
pub use counter::{StepCounter, count_steps};
pub use filter::{DERIV_COEFFS, LPF_COEFFS, derivative_filter, low_pass_filter};
pub use magnitude::{extract_magnitudes, extract_magnitudes_interleaved};
pub use math::{Vector3Ext, sqrt_u16};
pub use peaks::{THRESHOLD, detect_peaks};
