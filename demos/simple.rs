use nalgebra::Vector3;
use step_counter::StepCounter;

const WINDOW_SIZE: usize = 64;

fn main() {
    let mut counter = StepCounter::<WINDOW_SIZE>::new();

    // Synthetic gait: a stride impact every 8 samples over a quiet
    // baseline. Replace this with one window of real accelerometer data.
    let stride: [i8; 8] = [5, 32, 60, 32, 5, 5, 5, 5];
    let mut window = [Vector3::new(0i8, 0, 0); WINDOW_SIZE];
    for (i, sample) in window.iter_mut().enumerate() {
        *sample = Vector3::new(0, 0, stride[i % stride.len()]);
    }

    let steps = counter.count_steps(&window);

    println!("Detected {steps} steps in a {WINDOW_SIZE}-sample window");
}
