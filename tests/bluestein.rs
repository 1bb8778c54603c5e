// Test intent: Bluestein handles primes and awkward composites, including tiny lengths.
use scifft::bluestein::{bluestein_forward, bluestein_inverse, padded_len, BluesteinChirp};
use scifft::stockham::stockham;
use scifft::{fft, Complex64, Direction, FftStrategy};

fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let len = input.len();
    (0..len)
        .map(|k| {
            let mut sum = Complex64::zero();
            for (n, &x) in input.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * ((k * n) % len) as f64 / len as f64;
                sum += x * Complex64::new(angle.cos(), angle.sin());
            }
            sum
        })
        .collect()
}

fn ramp(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
        .collect()
}

#[test]
fn primes_route_through_bluestein_and_match_dft() {
    for n in [2usize, 3, 5, 7, 11, 13, 17, 31, 97, 127] {
        let x = ramp(n);
        let expected = dft(&x);
        let got = bluestein_forward(&x);
        for (a, b) in got.iter().zip(expected.iter()) {
            assert!((a.re - b.re).abs() < 1e-8 && (a.im - b.im).abs() < 1e-8, "n={}", n);
        }
        if n > 7 {
            assert_eq!(FftStrategy::for_len(n), FftStrategy::Bluestein);
            assert_eq!(fft(&x), got);
        }
    }
}

#[test]
fn bluestein_agrees_with_stockham_on_powers_of_two() {
    for n in [4usize, 16, 128] {
        let x = ramp(n);
        let a = bluestein_forward(&x);
        let b = stockham(&x, Direction::Forward);
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((p.re - q.re).abs() < 1e-8 && (p.im - q.im).abs() < 1e-8);
        }
    }
}

#[test]
fn inverse_roundtrip_for_composites() {
    for n in [6usize, 10, 12, 14, 45, 100] {
        let x = ramp(n);
        let back = bluestein_inverse(&bluestein_forward(&x));
        assert_eq!(back.len(), n);
        for (a, b) in back.iter().zip(x.iter()) {
            assert!((a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9, "n={}", n);
        }
    }
}

#[test]
fn padding_is_smallest_power_of_two_covering_linear_convolution() {
    for n in 1usize..300 {
        let m = padded_len(n);
        assert!(m.is_power_of_two());
        assert!(m >= 2 * n - 1);
        assert!(m / 2 < 2 * n - 1 || m == 1);
    }
    assert_eq!(BluesteinChirp::<f64>::new(2).padded_len(), 4);
}

#[test]
fn length_one_is_identity() {
    let x = vec![Complex64::new(5.0, -2.0)];
    let y = bluestein_forward(&x);
    assert!((y[0].re - 5.0).abs() < 1e-12 && (y[0].im + 2.0).abs() < 1e-12);
}
