use nalgebra::Vector3;
use step_counter::{StepCounter, THRESHOLD};

const WINDOW_SIZE: usize = 64;

/// Synthesize one window of walking at the given stride period in samples
///
/// Each stride is a short vertical impact of the given peak amplitude over
/// a quiet baseline.
fn walking_window(period: usize, amplitude: i8) -> [Vector3<i8>; WINDOW_SIZE] {
    let mut window = [Vector3::new(0i8, 0, 0); WINDOW_SIZE];
    for (i, sample) in window.iter_mut().enumerate() {
        let z = match i % period {
            1 | 3 => amplitude / 2,
            2 => amplitude,
            _ => 5,
        };
        *sample = Vector3::new(0, 0, z);
    }
    window
}

fn main() {
    let mut counter = StepCounter::<WINDOW_SIZE>::new();

    // Process a stream of windows with one reusable counter, inspecting
    // the intermediate signals after each window.
    let windows = [
        ("resting", [Vector3::new(0i8, 0, 0); WINDOW_SIZE]),
        ("strolling", walking_window(8, 40)),
        ("brisk walk", walking_window(6, 60)),
    ];

    for (label, window) in windows {
        let steps = counter.count_steps(&window);

        let peak_magnitude = counter.magnitude().iter().copied().max().unwrap_or(0);
        let peak_derivative = counter.derivative().iter().copied().max().unwrap_or(0);

        println!(
            "{label:>10}: {steps:2} steps (peak magnitude {peak_magnitude}, \
             peak derivative {peak_derivative}, threshold {THRESHOLD})"
        );
    }
}
