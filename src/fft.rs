//! Transform facade.
//!
//! [`transform`] classifies the input length, runs the matching kernel from
//! [`FftStrategy`] and applies the `1/n` normalization of the inverse
//! transform exactly once. Radix kernels return an unscaled inverse and are
//! rescaled here; the Bluestein inverse scales itself and is left alone.
//!
//! Inputs are never modified; every call returns a freshly allocated vector
//! of the same length. NaN and infinite values are not checked for and
//! propagate into the output.

use alloc::vec::Vec;

use crate::num::{Complex, Float};
use crate::strategy::FftStrategy;

/// Sign convention of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `X[k] = Σ x[i]·exp(-2πi·k·i/n)`.
    Forward,
    /// `x[i] = Σ X[k]·exp(+2πi·k·i/n)`, unscaled at kernel level.
    Inverse,
}

impl Direction {
    /// `+1` for forward, `-1` for inverse.
    #[inline(always)]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => T::one(),
            Direction::Inverse => -T::one(),
        }
    }

    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }
}

/// Errors returned by the buffer-oriented APIs of [`FftPlan`](crate::plan::FftPlan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A buffer length differs from the planned transform length.
    MismatchedLengths { expected: usize, actual: usize },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::MismatchedLengths { expected, actual } => write!(
                f,
                "buffer length {} does not match transform length {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// DFT (`inverse == false`) or normalized inverse DFT (`inverse == true`) of `input`.
///
/// Lengths below 2 are returned unchanged. Any other length is dispatched by
/// [`FftStrategy::for_len`], so every size runs in `O(n log n)`.
///
/// ```
/// use scifft::{transform, Complex64};
///
/// let x = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let y = transform(&x, false);
/// assert_eq!(y, vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]);
/// ```
pub fn transform<T: Float>(input: &[Complex<T>], inverse: bool) -> Vec<Complex<T>> {
    let n = input.len();
    if n < 2 {
        return input.to_vec();
    }
    let strategy = FftStrategy::for_len(n);
    let direction = Direction::from_inverse(inverse);
    fft_debug!("transform: n={} strategy={:?} direction={:?}", n, strategy, direction);
    let output = strategy.apply(input, direction);
    normalize(output, strategy, direction)
}

/// Forward DFT of `input`.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    transform(input, false)
}

/// Inverse DFT of `input`, normalized by `1/n`.
pub fn ifft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    transform(input, true)
}

/// Divide an unscaled inverse kernel result by its length.
pub(crate) fn normalize<T: Float>(
    mut output: Vec<Complex<T>>,
    strategy: FftStrategy,
    direction: Direction,
) -> Vec<Complex<T>> {
    if direction == Direction::Inverse && !strategy.scales_inverse() {
        let inv_n = T::one() / T::from_usize(output.len());
        for c in output.iter_mut() {
            *c = c.scale(inv_n);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn empty_and_single_are_identity() {
        let empty: [Complex64; 0] = [];
        assert!(fft(&empty).is_empty());
        assert!(ifft(&empty).is_empty());
        let one = [Complex64::new(42.0, -1.0)];
        assert_eq!(fft(&one), one.to_vec());
        assert_eq!(ifft(&one), one.to_vec());
    }

    #[test]
    fn inverse_of_impulse_spectrum_is_scaled_once() {
        // A flat spectrum of ones is the transform of a unit impulse.
        for n in [8usize, 9, 25, 36, 49, 10, 11] {
            let flat = vec![Complex64::one(); n];
            let x = ifft(&flat);
            assert!((x[0].re - 1.0).abs() < 1e-12, "n={} x0={:?}", n, x[0]);
            for c in &x[1..] {
                assert!(c.re.abs() < 1e-12 && c.im.abs() < 1e-12, "n={} {:?}", n, c);
            }
        }
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::from_inverse(true), Direction::Inverse);
        assert_eq!(Direction::Forward.sign::<f64>(), 1.0);
        assert_eq!(Direction::Inverse.sign::<f32>(), -1.0);
    }

    #[test]
    fn error_display() {
        let err = FftError::MismatchedLengths {
            expected: 8,
            actual: 7,
        };
        assert_eq!(
            alloc::format!("{}", err),
            "buffer length 7 does not match transform length 8"
        );
    }
}
