//! Length classification and the closed set of transform strategies.

use alloc::vec::Vec;

use crate::bluestein::{bluestein_forward, bluestein_inverse};
use crate::fft::Direction;
use crate::mixed_radix::{radix3, radix5, radix6, radix7};
use crate::num::{Complex, Float};
use crate::stockham::stockham;

/// Largest radix with a dedicated Cooley-Tukey kernel.
pub const MAX_RADIX: usize = 7;

/// Non-binary radices tried in ascending order.
const ODD_RADICES: [usize; 4] = [3, 5, 6, MAX_RADIX];

/// Smallest `r ∈ {2, 3, 5, 6, 7}` with `n == r^p`, or `n` itself when no
/// such radix exists (the length then needs Bluestein).
///
/// Lengths mixing several radices, such as 10 or 12, are not decomposed and
/// also return `n`.
pub fn smallest_radix(n: usize) -> usize {
    if n & n.wrapping_sub(1) == 0 {
        return 2;
    }
    for radix in ODD_RADICES {
        let mut rest = n;
        while rest % radix == 0 {
            rest /= radix;
        }
        if rest == 1 {
            return radix;
        }
    }
    n
}

/// Transform algorithm chosen for a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FftStrategy {
    /// Radix-2 Stockham autosort, `n = 2^p`.
    Stockham,
    Radix3,
    Radix5,
    Radix6,
    Radix7,
    /// Chirp-z convolution for every other length.
    Bluestein,
}

impl FftStrategy {
    /// Classify a length of at least 2.
    pub fn for_len(n: usize) -> Self {
        match smallest_radix(n) {
            2 => FftStrategy::Stockham,
            3 => FftStrategy::Radix3,
            5 => FftStrategy::Radix5,
            6 => FftStrategy::Radix6,
            7 => FftStrategy::Radix7,
            _ => FftStrategy::Bluestein,
        }
    }

    /// The Cooley-Tukey radix, `None` for Bluestein.
    pub fn radix(self) -> Option<usize> {
        match self {
            FftStrategy::Stockham => Some(2),
            FftStrategy::Radix3 => Some(3),
            FftStrategy::Radix5 => Some(5),
            FftStrategy::Radix6 => Some(6),
            FftStrategy::Radix7 => Some(7),
            FftStrategy::Bluestein => None,
        }
    }

    /// Whether [`apply`](Self::apply) already divides inverse results by `n`.
    ///
    /// Only Bluestein does; the radix kernels return the unscaled inverse.
    pub fn scales_inverse(self) -> bool {
        matches!(self, FftStrategy::Bluestein)
    }

    /// Run the strategy's kernel.
    ///
    /// # Panics
    /// If `input.len()` does not belong to this strategy's length class.
    pub fn apply<T: Float>(self, input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
        match (self, direction) {
            (FftStrategy::Stockham, _) => stockham(input, direction),
            (FftStrategy::Radix3, _) => radix3(input, direction),
            (FftStrategy::Radix5, _) => radix5(input, direction),
            (FftStrategy::Radix6, _) => radix6(input, direction),
            (FftStrategy::Radix7, _) => radix7(input, direction),
            (FftStrategy::Bluestein, Direction::Forward) => bluestein_forward(input),
            (FftStrategy::Bluestein, Direction::Inverse) => bluestein_inverse(input),
        }
    }
}
