//! Roots of unity shared by the transform kernels.
//!
//! Twiddles along a pass are produced by repeated multiplication with a fixed
//! step ([`Twiddles`]) so only one `sin_cos` evaluation is needed per pass.
//! The primitive roots of the small radices are compile-time tables; the
//! inverse tables hold the conjugates so no sign flip happens at runtime.

use crate::fft::Direction;
use crate::num::{Complex, Float};

/// `exp(-2πi·s·k/m)` for direction sign `s`, evaluated in closed form.
pub fn root_of_unity<T: Float>(k: usize, m: usize, direction: Direction) -> Complex<T> {
    let angle = -direction.sign::<T>() * T::from_f64(2.0) * T::pi() * T::from_usize(k)
        / T::from_usize(m);
    Complex::expi(angle)
}

/// Successive powers `1, w, w², …` of a step factor `w`.
#[derive(Clone, Debug)]
pub struct Twiddles<T: Float> {
    current: Complex<T>,
    step: Complex<T>,
}

impl<T: Float> Twiddles<T> {
    pub fn new(step: Complex<T>) -> Self {
        Self {
            current: Complex::one(),
            step,
        }
    }

    /// Powers of the principal `m`-th root of unity for `direction`.
    pub fn for_modulus(m: usize, direction: Direction) -> Self {
        Self::new(root_of_unity(1, m, direction))
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    #[inline(always)]
    fn next(&mut self) -> Option<Complex<T>> {
        let out = self.current;
        self.current *= self.step;
        Some(out)
    }
}

/// `[1, w, w², …, w^(R-1)]`, each power built from the previous one.
#[inline(always)]
pub fn powers<T: Float, const R: usize>(w: Complex<T>) -> [Complex<T>; R] {
    let mut out = [Complex::one(); R];
    for k in 1..R {
        out[k] = out[k - 1] * w;
    }
    out
}

/// Primitive `R`-th roots of unity for both directions.
///
/// `forward[k] = exp(-2πi·k/R)` and `inverse[k] = conj(forward[k])`.
#[derive(Debug)]
pub struct RootTable<const R: usize> {
    forward: [(f64, f64); R],
    inverse: [(f64, f64); R],
}

impl<const R: usize> RootTable<R> {
    pub const fn radix(&self) -> usize {
        R
    }

    /// The table for `direction`, narrowed to `T`.
    pub fn roots<T: Float>(&self, direction: Direction) -> [Complex<T>; R] {
        let table = match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        };
        core::array::from_fn(|k| Complex::new(T::from_f64(table[k].0), T::from_f64(table[k].1)))
    }
}

const SQRT3_2: f64 = 0.866_025_403_784_438_6;

const COS_2PI_5: f64 = 0.309_016_994_374_947_45;
const SIN_2PI_5: f64 = 0.951_056_516_295_153_5;
const COS_4PI_5: f64 = -0.809_016_994_374_947_5;
const SIN_4PI_5: f64 = 0.587_785_252_292_473_1;

const COS_2PI_7: f64 = 0.623_489_801_858_733_6;
const SIN_2PI_7: f64 = 0.781_831_482_468_029_8;
const COS_4PI_7: f64 = -0.222_520_933_956_314_4;
const SIN_4PI_7: f64 = 0.974_927_912_181_823_6;
const COS_6PI_7: f64 = -0.900_968_867_902_419_1;
const SIN_6PI_7: f64 = 0.433_883_739_117_558_1;

pub const RADIX3: RootTable<3> = RootTable {
    forward: [(1.0, 0.0), (-0.5, -SQRT3_2), (-0.5, SQRT3_2)],
    inverse: [(1.0, 0.0), (-0.5, SQRT3_2), (-0.5, -SQRT3_2)],
};

pub const RADIX5: RootTable<5> = RootTable {
    forward: [
        (1.0, 0.0),
        (COS_2PI_5, -SIN_2PI_5),
        (COS_4PI_5, -SIN_4PI_5),
        (COS_4PI_5, SIN_4PI_5),
        (COS_2PI_5, SIN_2PI_5),
    ],
    inverse: [
        (1.0, 0.0),
        (COS_2PI_5, SIN_2PI_5),
        (COS_4PI_5, SIN_4PI_5),
        (COS_4PI_5, -SIN_4PI_5),
        (COS_2PI_5, -SIN_2PI_5),
    ],
};

// Index 3 is exactly -1; the radix-6 butterfly relies on it.
pub const RADIX6: RootTable<6> = RootTable {
    forward: [
        (1.0, 0.0),
        (0.5, -SQRT3_2),
        (-0.5, -SQRT3_2),
        (-1.0, 0.0),
        (-0.5, SQRT3_2),
        (0.5, SQRT3_2),
    ],
    inverse: [
        (1.0, 0.0),
        (0.5, SQRT3_2),
        (-0.5, SQRT3_2),
        (-1.0, 0.0),
        (-0.5, -SQRT3_2),
        (0.5, -SQRT3_2),
    ],
};

pub const RADIX7: RootTable<7> = RootTable {
    forward: [
        (1.0, 0.0),
        (COS_2PI_7, -SIN_2PI_7),
        (COS_4PI_7, -SIN_4PI_7),
        (COS_6PI_7, -SIN_6PI_7),
        (COS_6PI_7, SIN_6PI_7),
        (COS_4PI_7, SIN_4PI_7),
        (COS_2PI_7, SIN_2PI_7),
    ],
    inverse: [
        (1.0, 0.0),
        (COS_2PI_7, SIN_2PI_7),
        (COS_4PI_7, SIN_4PI_7),
        (COS_6PI_7, SIN_6PI_7),
        (COS_6PI_7, -SIN_6PI_7),
        (COS_4PI_7, -SIN_4PI_7),
        (COS_2PI_7, -SIN_2PI_7),
    ],
};
