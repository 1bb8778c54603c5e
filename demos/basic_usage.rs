//! Basic usage example for scifft
//!
//! Walks through the one-shot transforms, a reusable plan and the
//! periodogram on a short complex signal.

use scifft::{autocorrelation, fft, ifft, periodogram, Complex64, FftPlanner};

fn show(label: &str, values: &[Complex64]) {
    let parts: Vec<_> = values
        .iter()
        .map(|c| format!("{:.3}{:+.3}i", c.re, c.im))
        .collect();
    println!("   {}: [{}]", label, parts.join(", "));
}

fn main() {
    println!("=== scifft Basic Usage Example ===\n");

    // 1. One-shot forward and inverse transforms
    println!("1. Fast Fourier Transform (FFT)");
    let x = vec![
        Complex64::new(0.0, 0.0),
        Complex64::new(1.0, -2.0),
        Complex64::new(2.0, 8.0),
        Complex64::new(3.0, 2.0),
    ];
    show("Input", &x);
    let spectrum = fft(&x);
    show("FFT", &spectrum);
    show("IFFT(FFT)", &ifft(&spectrum));

    // 2. Spectral estimates
    println!("\n2. Periodogram and autocorrelation");
    let psd = periodogram(&x);
    println!("   PSD: {:?}", psd);
    show("Autocorrelation", &autocorrelation(&x));

    // 3. Reusable plans
    println!("\n3. Planned transforms");
    let mut planner = FftPlanner::<f64>::new();
    for n in [64usize, 81, 125, 216, 343, 101] {
        let plan = planner.plan(n);
        let signal: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((i as f64 * 0.2).sin(), 0.0))
            .collect();
        let mut data = signal.clone();
        plan.fft_in_place(&mut data).unwrap();
        plan.ifft_in_place(&mut data).unwrap();
        let err = data
            .iter()
            .zip(signal.iter())
            .map(|(a, b)| (*a - *b).norm_sqr().sqrt())
            .fold(0.0, f64::max);
        println!(
            "   n={:4} strategy={:?} roundtrip error={:.2e}",
            n,
            plan.strategy(),
            err
        );
    }
    println!("   cached Bluestein chirps: {}", planner.cached_lengths());
}
