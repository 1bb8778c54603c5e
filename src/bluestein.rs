//! Bluestein (chirp-z) FFT for arbitrary lengths.
//!
//! A length-`n` DFT is rewritten as a circular convolution with the chirp
//! `w[k] = exp(iπk²/n)`, padded to a power of two `m ≥ 2n - 1` so that the
//! convolution can be evaluated with three Stockham transforms.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::Direction;
use crate::num::{Complex, Float};
use crate::stockham::stockham;

/// Precomputed chirp data for one transform length.
///
/// Only depends on `n`, so it can be built once and reused; see
/// [`FftPlanner::bluestein`](crate::plan::FftPlanner::bluestein).
#[derive(Clone, Debug)]
pub struct BluesteinChirp<T: Float> {
    len: usize,
    padded_len: usize,
    /// `exp(iπk²/n)` for `k = 0..n`.
    chirp: Vec<Complex<T>>,
    /// Forward transform of the chirp mirrored into a length-`padded_len` ring.
    kernel: Vec<Complex<T>>,
}

impl<T: Float> BluesteinChirp<T> {
    /// # Panics
    /// If `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "bluestein: length must be positive");
        let padded_len = padded_len(n);

        // k² is reduced modulo 2n in integer arithmetic: exp(iπk²/n) has
        // period 2n in k², and the small argument keeps the angle exact.
        let period = 2 * n;
        let base = T::pi() / T::from_usize(n);
        let mut chirp = Vec::with_capacity(n);
        let mut k_sq = 0usize;
        for k in 0..n {
            chirp.push(Complex::expi(base * T::from_usize(k_sq)));
            // (k + 1)² = k² + 2k + 1
            k_sq = (k_sq + 2 * k + 1) % period;
        }

        let mut ring = vec![Complex::zero(); padded_len];
        ring[0] = chirp[0];
        for k in 1..n {
            ring[k] = chirp[k];
            ring[padded_len - k] = chirp[k];
        }
        let kernel = stockham(&ring, Direction::Forward);
        fft_trace!("bluestein: n={} padded to m={}", n, padded_len);

        Self {
            len: n,
            padded_len,
            chirp,
            kernel,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Power-of-two working length of the convolution.
    pub fn padded_len(&self) -> usize {
        self.padded_len
    }

    /// Forward DFT of `input`.
    ///
    /// # Panics
    /// If `input.len()` differs from the chirp length.
    pub fn forward(&self, input: &[Complex<T>]) -> Vec<Complex<T>> {
        assert_eq!(
            input.len(),
            self.len,
            "bluestein: input length does not match chirp length"
        );
        let m = self.padded_len;

        let mut y = vec![Complex::zero(); m];
        for ((slot, &x), &w) in y.iter_mut().zip(input).zip(&self.chirp) {
            *slot = x * w.conj();
        }

        let mut y = stockham(&y, Direction::Forward);
        for (yi, &ki) in y.iter_mut().zip(&self.kernel) {
            *yi *= ki;
        }
        let y = stockham(&y, Direction::Inverse);

        let inv_m = T::one() / T::from_usize(m);
        y.iter()
            .zip(&self.chirp)
            .map(|(&yi, &w)| yi * w.conj().scale(inv_m))
            .collect()
    }

    /// Inverse DFT of `input`, already scaled by `1/n`.
    ///
    /// Uses `IDFT(x) = conj(DFT(conj(x))) / n`.
    pub fn inverse(&self, input: &[Complex<T>]) -> Vec<Complex<T>> {
        let conjugated: Vec<Complex<T>> = input.iter().map(|c| c.conj()).collect();
        let inv_n = T::one() / T::from_usize(self.len);
        self.forward(&conjugated)
            .into_iter()
            .map(|c| c.conj().scale(inv_n))
            .collect()
    }
}

/// Smallest power of two `m` with `m ≥ 2n - 1`.
pub fn padded_len(n: usize) -> usize {
    (2 * n).saturating_sub(1).next_power_of_two()
}

/// Forward DFT of any non-empty sequence.
pub fn bluestein_forward<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    BluesteinChirp::new(input.len()).forward(input)
}

/// Inverse DFT (scaled by `1/n`) of any non-empty sequence.
pub fn bluestein_inverse<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    BluesteinChirp::new(input.len()).inverse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use crate::twiddle::root_of_unity;

    fn direct(x: &[Complex64]) -> Vec<Complex64> {
        let n = x.len();
        (0..n)
            .map(|k| {
                x.iter().enumerate().fold(Complex64::zero(), |acc, (i, &xi)| {
                    acc + xi * root_of_unity((i * k) % n, n, Direction::Forward)
                })
            })
            .collect()
    }

    fn signal(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new(libm::sin(i as f64 * 0.7), libm::cos(i as f64 * 1.3)))
            .collect()
    }

    #[test]
    fn padded_length_edges() {
        assert_eq!(padded_len(1), 1);
        assert_eq!(padded_len(2), 4);
        assert_eq!(padded_len(3), 8);
        assert_eq!(padded_len(5), 16);
        assert_eq!(padded_len(17), 64);
        assert_eq!(padded_len(32), 64);
    }

    #[test]
    fn matches_direct_dft_for_awkward_lengths() {
        for n in [2usize, 3, 10, 12, 17, 31, 100] {
            let x = signal(n);
            let y = bluestein_forward(&x);
            assert_eq!(y.len(), n);
            for (a, b) in y.iter().zip(direct(&x).iter()) {
                assert!((a.re - b.re).abs() < 1e-9, "n={} {:?} vs {:?}", n, a, b);
                assert!((a.im - b.im).abs() < 1e-9, "n={} {:?} vs {:?}", n, a, b);
            }
        }
    }

    #[test]
    fn inverse_is_scaled() {
        let x = signal(13);
        let back = bluestein_inverse(&bluestein_forward(&x));
        for (a, b) in back.iter().zip(x.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn chirp_is_reusable() {
        let chirp = BluesteinChirp::<f64>::new(7);
        assert_eq!(chirp.len(), 7);
        assert_eq!(chirp.padded_len(), 16);
        let a = chirp.forward(&signal(7));
        let b = chirp.forward(&signal(7));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "does not match chirp length")]
    fn rejects_wrong_length() {
        let chirp = BluesteinChirp::<f64>::new(5);
        let _ = chirp.forward(&signal(6));
    }
}
