//! Decimation-in-time Cooley-Tukey transforms for lengths `r^p`, `r ∈ {3, 5, 6, 7}`.
//!
//! Each kernel copies the input once, applies a base-`r` digit-reversal
//! permutation (which performs every interleaved split of the recursion at
//! once) and then merges sub-transforms of size `m/r` into size `m` for
//! `m = r, r², …, n`. Every merge works on sub-ranges of the same buffer.
//!
//! Inverse transforms are unscaled.

use alloc::vec::Vec;

use crate::fft::Direction;
use crate::num::{Complex, Float};
use crate::twiddle::{powers, RootTable, Twiddles, RADIX3, RADIX5, RADIX6, RADIX7};

/// Forward DFT or unscaled inverse DFT for `input.len() == 3^p`.
///
/// # Panics
/// If the length is not a power of 3.
pub fn radix3<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    cooley_tukey(input, direction, &RADIX3, butterfly)
}

/// Forward DFT or unscaled inverse DFT for `input.len() == 5^p`.
///
/// # Panics
/// If the length is not a power of 5.
pub fn radix5<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    cooley_tukey(input, direction, &RADIX5, butterfly)
}

/// Forward DFT or unscaled inverse DFT for `input.len() == 6^p`.
///
/// # Panics
/// If the length is not a power of 6.
pub fn radix6<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    cooley_tukey(input, direction, &RADIX6, butterfly6)
}

/// Forward DFT or unscaled inverse DFT for `input.len() == 7^p`.
///
/// # Panics
/// If the length is not a power of 7.
pub fn radix7<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    cooley_tukey(input, direction, &RADIX7, butterfly)
}

/// Returns `true` when `n == radix^p` for some `p ≥ 0`.
pub fn is_power_of(mut n: usize, radix: usize) -> bool {
    if n == 0 || radix < 2 {
        return false;
    }
    while n % radix == 0 {
        n /= radix;
    }
    n == 1
}

fn cooley_tukey<T: Float, const R: usize>(
    input: &[Complex<T>],
    direction: Direction,
    table: &RootTable<R>,
    combine: fn(&mut [Complex<T>; R], &[Complex<T>; R]),
) -> Vec<Complex<T>> {
    let n = input.len();
    assert!(
        n < 2 || is_power_of(n, R),
        "radix-{} kernel: length {} is not a power of {}",
        R,
        n,
        R
    );

    let mut data = input.to_vec();
    if n < 2 {
        return data;
    }
    digit_reverse(&mut data, R);

    let roots = table.roots::<T>(direction);
    let mut passes = 0u32;
    let mut m = R;
    while m <= n {
        let stride = m / R;
        for (i, w) in Twiddles::for_modulus(m, direction).take(stride).enumerate() {
            let tw: [Complex<T>; R] = powers(w);
            for block in data.chunks_exact_mut(m) {
                let mut t: [Complex<T>; R] = core::array::from_fn(|k| block[i + k * stride] * tw[k]);
                combine(&mut t, &roots);
                for (k, value) in t.iter().enumerate() {
                    block[i + k * stride] = *value;
                }
            }
        }
        passes += 1;
        m *= R;
    }
    fft_trace!("radix-{}: n={} passes={}", R, n, passes);
    data
}

/// In-place base-`radix` digit reversal of `data`, whose length is a power of `radix`.
///
/// `j` is carried as the digit-reversed counterpart of `i`: incrementing `i`
/// is a carry-propagating add on the reversed digits of `j`.
fn digit_reverse<T: Float>(data: &mut [Complex<T>], radix: usize) {
    let n = data.len();
    let mut j = 0usize;
    for i in 0..n.saturating_sub(1) {
        if i < j {
            data.swap(i, j);
        }
        let mut k = (radix - 1) * n / radix;
        while k <= j {
            j -= k;
            k /= radix;
        }
        j += k / (radix - 1);
    }
}

/// Generic `R`-point DFT of `t` with the primitive roots in `roots`.
#[inline(always)]
fn butterfly<T: Float, const R: usize>(t: &mut [Complex<T>; R], roots: &[Complex<T>; R]) {
    let x = *t;
    for (k, out) in t.iter_mut().enumerate() {
        let mut acc = x[0];
        for (l, &xl) in x.iter().enumerate().skip(1) {
            acc += if k == 0 { xl } else { xl * roots[(k * l) % R] };
        }
        *out = acc;
    }
}

/// Six-point DFT using `roots[3] == -1`, `roots[4] == -roots[1]` and
/// `roots[5] == -roots[2]`.
#[inline(always)]
fn butterfly6<T: Float>(t: &mut [Complex<T>; 6], roots: &[Complex<T>; 6]) {
    let [t0, t1, t2, t3, t4, t5] = *t;

    let even = t0 + t3;
    let odd = t0 - t3;
    let s14 = t1 + t4;
    let d14 = t1 - t4;
    let s25 = t2 + t5;
    let d25 = t2 - t5;

    t[0] = even + s14 + s25;
    t[3] = odd - d14 + d25;
    t[1] = odd + d14 * roots[1] + d25 * roots[2];
    t[5] = odd + d14 * roots[5] + d25 * roots[4];
    t[2] = even + s14 * roots[2] + s25 * roots[4];
    t[4] = even + s14 * roots[4] + s25 * roots[2];
}
