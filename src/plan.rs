//! Reusable transform plans.
//!
//! [`FftPlanner`] caches the length-dependent Bluestein chirp so repeated
//! transforms of the same awkward length skip the chirp setup and its
//! forward transform. A [`FftPlan`] fixes one length and offers buffer
//! oriented entry points that report length mismatches as [`FftError`].
//! Results are identical to [`transform`](crate::fft::transform).

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::bluestein::BluesteinChirp;
use crate::fft::{normalize, Direction, FftError};
use crate::num::{Complex, Float};
use crate::strategy::FftStrategy;

/// Caller-owned cache of per-length Bluestein data.
pub struct FftPlanner<T: Float> {
    bluestein_cache: HashMap<usize, Arc<BluesteinChirp<T>>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            bluestein_cache: HashMap::new(),
        }
    }

    /// Chirp data for length `n`, built on first use.
    ///
    /// # Panics
    /// If `n == 0`.
    pub fn bluestein(&mut self, n: usize) -> Arc<BluesteinChirp<T>> {
        let chirp = self
            .bluestein_cache
            .entry(n)
            .or_insert_with(|| Arc::new(BluesteinChirp::new(n)));
        Arc::clone(chirp)
    }

    /// Number of cached Bluestein lengths.
    pub fn cached_lengths(&self) -> usize {
        self.bluestein_cache.len()
    }

    /// Build a plan for transforms of length `n`.
    pub fn plan(&mut self, n: usize) -> FftPlan<T> {
        let strategy = (n >= 2).then(|| FftStrategy::for_len(n));
        let chirp = match strategy {
            Some(FftStrategy::Bluestein) => Some(self.bluestein(n)),
            _ => None,
        };
        fft_debug!("plan: n={} strategy={:?}", n, strategy);
        FftPlan {
            len: n,
            strategy,
            chirp,
        }
    }
}

/// A transform of fixed length.
#[derive(Clone, Debug)]
pub struct FftPlan<T: Float> {
    len: usize,
    /// `None` for lengths below 2, which are the identity.
    strategy: Option<FftStrategy>,
    chirp: Option<Arc<BluesteinChirp<T>>>,
}

impl<T: Float> FftPlan<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn strategy(&self) -> Option<FftStrategy> {
        self.strategy
    }

    fn check_len(&self, actual: usize) -> Result<(), FftError> {
        if actual == self.len {
            Ok(())
        } else {
            Err(FftError::MismatchedLengths {
                expected: self.len,
                actual,
            })
        }
    }

    fn run(&self, input: &[Complex<T>], direction: Direction) -> Result<Vec<Complex<T>>, FftError> {
        self.check_len(input.len())?;
        let Some(strategy) = self.strategy else {
            return Ok(input.to_vec());
        };
        let output = match (&self.chirp, direction) {
            (Some(chirp), Direction::Forward) => chirp.forward(input),
            (Some(chirp), Direction::Inverse) => chirp.inverse(input),
            (None, _) => strategy.apply(input, direction),
        };
        Ok(normalize(output, strategy, direction))
    }

    /// Forward DFT into a new vector.
    pub fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.run(input, Direction::Forward)
    }

    /// Normalized inverse DFT into a new vector.
    pub fn ifft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.run(input, Direction::Inverse)
    }

    pub fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_len(output.len())?;
        output.copy_from_slice(&self.fft(input)?);
        Ok(())
    }

    pub fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_len(output.len())?;
        output.copy_from_slice(&self.ifft(input)?);
        Ok(())
    }

    /// Overwrite `data` with its forward DFT.
    pub fn fft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let out = self.fft(data)?;
        data.copy_from_slice(&out);
        Ok(())
    }

    /// Overwrite `data` with its normalized inverse DFT.
    pub fn ifft_in_place(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let out = self.ifft(data)?;
        data.copy_from_slice(&out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::{fft, ifft};
    use crate::num::Complex64;
    use alloc::vec;

    fn signal(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new(i as f64, (n - i) as f64 * 0.5))
            .collect()
    }

    #[test]
    fn chirp_cache_is_shared() {
        let mut planner = FftPlanner::<f64>::new();
        let a = planner.bluestein(17);
        let b = planner.bluestein(17);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(planner.cached_lengths(), 1);
        let _ = planner.plan(17);
        let _ = planner.plan(64);
        assert_eq!(planner.cached_lengths(), 1);
    }

    #[test]
    fn plans_agree_with_facade() {
        let mut planner = FftPlanner::<f64>::new();
        for n in [1usize, 2, 16, 27, 36, 12, 17] {
            let plan = planner.plan(n);
            let x = signal(n);
            assert_eq!(plan.fft(&x).unwrap(), fft(&x));
            assert_eq!(plan.ifft(&x).unwrap(), ifft(&x));
        }
    }

    #[test]
    fn in_place_and_out_of_place() {
        let mut planner = FftPlanner::<f64>::new();
        let plan = planner.plan(10);
        let x = signal(10);
        let mut out = vec![Complex64::zero(); 10];
        plan.fft_out_of_place(&x, &mut out).unwrap();
        assert_eq!(out, fft(&x));

        let mut data = x.clone();
        plan.fft_in_place(&mut data).unwrap();
        plan.ifft_in_place(&mut data).unwrap();
        for (a, b) in data.iter().zip(x.iter()) {
            assert!((a.re - b.re).abs() < 1e-10 && (a.im - b.im).abs() < 1e-10);
        }
    }

    #[test]
    fn length_mismatch_is_reported() {
        let mut planner = FftPlanner::<f64>::new();
        let plan = planner.plan(8);
        let x = signal(7);
        assert_eq!(
            plan.fft(&x),
            Err(FftError::MismatchedLengths {
                expected: 8,
                actual: 7
            })
        );
        let mut out = vec![Complex64::zero(); 9];
        assert_eq!(
            plan.ifft_out_of_place(&signal(8), &mut out),
            Err(FftError::MismatchedLengths {
                expected: 8,
                actual: 9
            })
        );
    }

    #[test]
    fn tiny_plans_have_no_strategy() {
        let mut planner = FftPlanner::<f32>::new();
        assert_eq!(planner.plan(0).strategy(), None);
        assert_eq!(planner.plan(1).strategy(), None);
        assert_eq!(planner.plan(5).strategy(), Some(FftStrategy::Radix5));
    }
}
