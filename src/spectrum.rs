//! Spectral estimates built on the forward transform.

use alloc::vec::Vec;

use crate::fft::{fft, ifft};
use crate::num::{Complex, Float};

/// Periodogram of `input`: `|DFT(x)[k]|² / n` for every bin `k`.
pub fn periodogram<T: Float>(input: &[Complex<T>]) -> Vec<T> {
    let n = T::from_usize(input.len());
    fft(input).into_iter().map(|c| c.norm_sqr() / n).collect()
}

/// Circular autocorrelation estimate of `input`, the inverse transform of
/// its periodogram.
pub fn autocorrelation<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let power: Vec<Complex<T>> = periodogram(input)
        .into_iter()
        .map(|p| Complex::new(p, T::zero()))
        .collect();
    ifft(&power)
}
