//! # scifft - arbitrary-length complex FFT
//!
//! Computes the Discrete Fourier Transform and its inverse for complex
//! sequences of any length in `O(n log n)`, picking an algorithm from the
//! prime-power structure of the length:
//!
//! | Length            | Algorithm                               |
//! |-------------------|-----------------------------------------|
//! | `2^p`             | Stockham autosort ([`stockham`])        |
//! | `3^p`, `5^p`, `6^p`, `7^p` | Cooley-Tukey ([`mixed_radix`]) |
//! | anything else     | Bluestein chirp-z ([`bluestein`])       |
//!
//! Lengths that mix radices (10, 12, …) and primes go through Bluestein.
//!
//! ## Usage
//!
//! ```
//! use scifft::{fft, ifft, periodogram, Complex64};
//!
//! let x = vec![
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(1.0, -2.0),
//!     Complex64::new(2.0, 8.0),
//!     Complex64::new(3.0, 2.0),
//! ];
//! let spectrum = fft(&x);
//! assert!((spectrum[0].re - 6.0).abs() < 1e-12);
//! assert!((spectrum[0].im - 8.0).abs() < 1e-12);
//!
//! let back = ifft(&spectrum);
//! assert!((back[2].im - 8.0).abs() < 1e-12);
//!
//! let psd = periodogram(&x);
//! assert!((psd[3] - 26.0).abs() < 1e-12);
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`FftError`].
//!   Without it the crate is `no_std + alloc`.
//! - `verbose-logging`: emits `log` records for strategy selection and
//!   kernel execution.
//! - `internal-tests`: enables the in-crate property tests (`proptest`, `rand`).
//!
//! Inputs are not validated for NaN or infinities; such values propagate to
//! the output.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(feature = "verbose-logging")]
macro_rules! fft_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "verbose-logging")]
macro_rules! fft_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub mod num;

/// Roots of unity and twiddle recurrences.
pub mod twiddle;

/// Power-of-two Stockham autosort transform.
pub mod stockham;

/// Cooley-Tukey kernels for powers of 3, 5, 6 and 7.
pub mod mixed_radix;

/// Bluestein transform for all remaining lengths.
pub mod bluestein;

/// Length classifier and strategy dispatch.
pub mod strategy;

pub mod fft;

/// Planner with cached Bluestein data and fixed-length plans.
pub mod plan;

/// Periodogram and autocorrelation.
pub mod spectrum;

pub use fft::{fft, ifft, transform, Direction, FftError};
pub use num::{Complex, Complex32, Complex64, Float};
pub use plan::{FftPlan, FftPlanner};
pub use spectrum::{autocorrelation, periodogram};
pub use strategy::{smallest_radix, FftStrategy};

#[cfg(all(feature = "internal-tests", test))]
mod property_tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_signal(n: usize, seed: u64) -> Vec<Complex64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
            .collect()
    }

    fn max_abs(x: &[Complex64]) -> f64 {
        x.iter()
            .map(|c| c.re.abs().max(c.im.abs()))
            .fold(1.0, f64::max)
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_length(n in 1usize..200, seed in any::<u64>()) {
            let x = random_signal(n, seed);
            let back = ifft(&fft(&x));
            let tol = 1e-9 * max_abs(&x);
            for (a, b) in back.iter().zip(x.iter()) {
                prop_assert!((a.re - b.re).abs() < tol, "n={} {:?} vs {:?}", n, a, b);
                prop_assert!((a.im - b.im).abs() < tol, "n={} {:?} vs {:?}", n, a, b);
            }
        }

        #[test]
        fn prop_linearity(n in 2usize..100, seed in any::<u64>(), ar in -3.0f64..3.0, ai in -3.0f64..3.0) {
            let x = random_signal(n, seed);
            let y = random_signal(n, seed.wrapping_add(1));
            let a = Complex64::new(ar, ai);
            let b = Complex64::new(ai, -ar);
            let mixed: Vec<Complex64> = x.iter().zip(y.iter()).map(|(&xi, &yi)| a * xi + b * yi).collect();
            let lhs = fft(&mixed);
            let rhs: Vec<Complex64> = fft(&x).into_iter().zip(fft(&y)).map(|(fx, fy)| a * fx + b * fy).collect();
            let tol = 1e-9 * max_abs(&lhs).max(max_abs(&rhs));
            for (l, r) in lhs.iter().zip(rhs.iter()) {
                prop_assert!((l.re - r.re).abs() < tol && (l.im - r.im).abs() < tol);
            }
        }

        #[test]
        fn prop_periodogram_is_scaled_power(n in 1usize..128, seed in any::<u64>()) {
            let x = random_signal(n, seed);
            let p = periodogram(&x);
            for (pk, fk) in p.iter().zip(fft(&x)) {
                let expected = fk.norm_sqr() / n as f64;
                prop_assert!((pk - expected).abs() <= 1e-12 * expected.max(1.0));
            }
        }
    }
}
