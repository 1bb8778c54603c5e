//! Demonstrates enabling verbose logging for scifft.
use scifft::{fft, ifft, Complex32, FftPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal: Vec<Complex32> = (0..12).map(|i| Complex32::new(i as f32, 0.0)).collect();
    let spectrum = fft(&signal);
    let _ = ifft(&spectrum);

    let mut planner = FftPlanner::<f32>::new();
    let plan = planner.plan(19);
    let _ = planner.plan(19);
    let mut data = vec![Complex32::new(1.0, 0.0); 19];
    plan.fft_in_place(&mut data).unwrap();
}
