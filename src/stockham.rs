//! Radix-2 Stockham autosort FFT.
//!
//! Ping-pongs between two buffers so that the output lands in natural order
//! without a bit-reversal pass. See Van Loan, "Computational Frameworks for
//! the Fast Fourier Transform" (SIAM, 1992).

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::Direction;
use crate::num::{Complex, Float};
use crate::twiddle::Twiddles;

/// Forward DFT or unscaled inverse DFT of a power-of-two length sequence.
///
/// # Panics
/// If `input.len()` is not a power of two.
pub fn stockham<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let n = input.len();
    assert!(
        n.is_power_of_two(),
        "stockham: length {} is not a power of two",
        n
    );
    fft_trace!("stockham: n={} passes={}", n, n.trailing_zeros());

    let half = n >> 1;
    let mut src = input.to_vec();
    let mut dst = vec![Complex::zero(); n];

    // `groups` doubles and `span` halves each pass; groups * span == n / 2.
    let mut groups = 1usize;
    let mut span = half;
    while groups < n {
        let step = Complex::expi(-direction.sign::<T>() * T::pi() / T::from_usize(groups));
        let (lo, hi) = dst.split_at_mut(half);
        let pairs = src.chunks_exact(2 * span);
        let outputs = lo.chunks_exact_mut(span).zip(hi.chunks_exact_mut(span));
        for ((pair, (top, bottom)), w) in pairs.zip(outputs).zip(Twiddles::new(step)) {
            let (a, b) = pair.split_at(span);
            for k in 0..span {
                let t = w * b[k];
                top[k] = a[k] + t;
                bottom[k] = a[k] - t;
            }
        }
        core::mem::swap(&mut src, &mut dst);
        groups <<= 1;
        span >>= 1;
    }
    src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn known_length_four_transform() {
        let x = [
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, -2.0),
            Complex64::new(2.0, 8.0),
            Complex64::new(3.0, 2.0),
        ];
        let y = stockham(&x, Direction::Forward);
        let expected = [
            Complex64::new(6.0, 8.0),
            Complex64::new(-6.0, -6.0),
            Complex64::new(-2.0, 8.0),
            Complex64::new(2.0, -10.0),
        ];
        for (a, b) in y.iter().zip(expected.iter()) {
            assert!((a.re - b.re).abs() < 1e-12, "{:?} vs {:?}", a, b);
            assert!((a.im - b.im).abs() < 1e-12, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn inverse_is_unscaled() {
        let x = vec![Complex64::new(1.0, 0.0); 8];
        let y = stockham(&x, Direction::Forward);
        let z = stockham(&y, Direction::Inverse);
        for c in &z {
            assert!((c.re - 8.0).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn single_element_is_identity() {
        let x = [Complex64::new(3.0, -4.0)];
        assert_eq!(stockham(&x, Direction::Forward), x.to_vec());
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn rejects_non_power_of_two() {
        let x = vec![Complex64::zero(); 6];
        let _ = stockham(&x, Direction::Forward);
    }
}
