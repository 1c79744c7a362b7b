// kem/src/newhope/reconcile.rs

//! Four-dimensional lattice reconciliation.
//!
//! The 1024 coefficients of `v` are viewed as 256 points of Z^4, one point per
//! group `i` built from coefficients `i`, `256+i`, `512+i` and `768+i`.
//! [`helprec`] rounds each point (plus a random half-step) to the nearest
//! point of the D~4 lattice and publishes its coset as a 2-bit-per-coordinate
//! hint. [`rec`] subtracts the hint from the peer's point and decides, with
//! [`ld_decode`], which of the two lattice cosets it is closer to. That
//! decision is one bit of the shared key.
//!
//! All arithmetic is on `i32` with arithmetic right shifts used as masks.
//! There is no data-dependent branch or memory access.

use algorithms::stream::chacha::chacha20::{key_from_slice, stream_into};
use algorithms::Polynomial;
use common::security::ZeroizeGuard;
use internal::constant_time::{ct_abs_i32, ct_select_i32};
use params::pqc::newhope::{
    NEWHOPE_N, NEWHOPE_Q, NEWHOPE_REC_GROUPS, NEWHOPE_REC_RECIP, NEWHOPE_REC_SHIFT_4Q,
    NEWHOPE_REC_SHIFT_Q, NEWHOPE_SEED_BYTES,
};
use zeroize::Zeroize;

use super::types::SharedKey;
use crate::error::{validate, Result};

const Q: i32 = NEWHOPE_Q as i32;

/// Offset between the four coordinates of one group
const GROUP_STRIDE: usize = NEWHOPE_N / 4;

/// Base quantization along one coordinate
///
/// `x` is a coordinate scaled by 8 (`8*coefficient + 4*rbit`). Returns
/// `v0`, the integer nearest to `x / 2Q`, `v1`, the integer nearest to
/// `x / 2Q - 1/2` (the candidate on the grid shifted by Q), and the distance
/// `|x - 2Q*v0|`.
#[inline(always)]
pub fn f(x: i32) -> (i32, i32, i32) {
    // t = floor(x / Q) via the fixed-point reciprocal
    let b = x * NEWHOPE_REC_RECIP;
    let mut t = b >> NEWHOPE_REC_SHIFT_Q;
    let b = x - t * Q;
    let b = (Q - 1) - b;
    // Correct the estimate by one when the remainder is at least Q
    t -= b >> 31;

    let r = t & 1;
    let v0 = (t >> 1) + r;

    t -= 1;
    let r = t & 1;
    let v1 = (t >> 1) + r;

    (v0, v1, ct_abs_i32(x - v0 * 2 * Q))
}

/// Coarse quantization: distance from `x` to the nearest multiple of `8Q`
#[inline(always)]
pub fn g(x: i32) -> i32 {
    // t = floor(x / 4Q)
    let b = x * NEWHOPE_REC_RECIP;
    let mut t = b >> NEWHOPE_REC_SHIFT_4Q;
    let b = x - t * 4 * Q;
    let b = (4 * Q - 1) - b;
    t -= b >> 31;

    let c = t & 1;
    t = (t >> 1) + c;
    t *= 8 * Q;

    ct_abs_i32(t - x)
}

/// Lattice decoding of one group
///
/// Returns 1 when the summed [`g`] distance of the four coordinates is below
/// `8Q`, and 0 otherwise. Only the sum is used, so the result is invariant
/// under any permutation of the arguments.
#[inline(always)]
pub fn ld_decode(x0: i32, x1: i32, x2: i32, x3: i32) -> u8 {
    let mut t = g(x0) + g(x1) + g(x2) + g(x3);
    t -= 8 * Q;
    t >>= 31;
    (t & 1) as u8
}

/// Secret scratch state of [`helprec`]
#[derive(Default, Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct HelpRecScratch {
    /// One randomization bit per group
    pub(crate) rand: [u8; 32],
    /// `v0` candidates in `0..4`, `v1` candidates in `4..8`
    pub(crate) v0: [i32; 8],
    /// Candidates chosen for the current group
    pub(crate) selected: [i32; 4],
}

/// Compute the reconciliation hint for `v`
///
/// `seed` is expanded with ChaCha20 under the nonce `(nonce as u64) << 56`
/// into one random bit per group. The returned polynomial has every
/// coefficient in `{0, 1, 2, 3}`. Fails only when `seed` is not 32 bytes.
pub fn helprec(v: &Polynomial, seed: &[u8], nonce: u8) -> Result<Polynomial> {
    let mut scratch = HelpRecScratch::default();
    helprec_with_scratch(v, seed, nonce, &mut scratch)
}

/// [`helprec`] with caller-owned scratch, wiped on every exit path
pub(crate) fn helprec_with_scratch(
    v: &Polynomial,
    seed: &[u8],
    nonce: u8,
    scratch: &mut HelpRecScratch,
) -> Result<Polynomial> {
    let mut scratch = ZeroizeGuard::new(scratch);

    validate::length("helprec seed", seed.len(), NEWHOPE_SEED_BYTES)?;
    let key = key_from_slice(seed)?;
    stream_into(&mut scratch.rand, (nonce as u64) << 56, key)?;

    let coeffs = v.coeffs();
    let mut c = Polynomial::zero();
    for i in 0..NEWHOPE_REC_GROUPS {
        let rbit = ((scratch.rand[i >> 3] >> (i & 7)) & 1) as i32;

        let mut k = 0;
        for j in 0..4 {
            let x = 8 * coeffs[GROUP_STRIDE * j + i] as i32 + 4 * rbit;
            let (a, b, d) = f(x);
            scratch.v0[j] = a;
            scratch.v0[4 + j] = b;
            k += d;
        }

        // All-ones when the v0 candidates are at distance 2Q or more
        let k = (2 * Q - 1 - k) >> 31;

        for j in 0..4 {
            scratch.selected[j] = ct_select_i32(k, scratch.v0[j], scratch.v0[4 + j]);
        }

        let s = &scratch.selected;
        let out = c.coeffs_mut();
        out[i] = ((s[0] - s[3]) & 3) as u16;
        out[GROUP_STRIDE + i] = ((s[1] - s[3]) & 3) as u16;
        out[2 * GROUP_STRIDE + i] = ((s[2] - s[3]) & 3) as u16;
        out[3 * GROUP_STRIDE + i] = ((-k + 2 * s[3]) & 3) as u16;
    }

    Ok(c)
}

/// Check that every hint coefficient lies in `{0, 1, 2, 3}`
pub fn validate_hint(c: &Polynomial) -> Result<()> {
    let above = c.coeffs().iter().fold(0u16, |acc, &x| acc | (x >> 2));
    validate::hint(above == 0, "coefficient outside {0, 1, 2, 3}")
}

/// Recover the shared key from `v` and the peer's hint `c`
///
/// `v` may be any polynomial close to the one `c` was computed from; both
/// sides obtain the same key as long as the difference stays well inside the
/// decoding radius.
pub fn rec(v: &Polynomial, c: &Polynomial) -> Result<SharedKey> {
    validate_hint(c)?;

    let v = v.coeffs();
    let c = c.coeffs();
    let mut key = SharedKey::zero();
    let bytes = key.as_mut_bytes();

    for i in 0..NEWHOPE_REC_GROUPS {
        let c3 = c[3 * GROUP_STRIDE + i] as i32;
        let coord = |j: usize| {
            let vj = v[GROUP_STRIDE * j + i] as i32;
            let cj = c[GROUP_STRIDE * j + i] as i32;
            16 * Q + 8 * vj - Q * (2 * cj + c3)
        };

        let t0 = coord(0);
        let t1 = coord(1);
        let t2 = coord(2);
        let t3 = 16 * Q + 8 * v[3 * GROUP_STRIDE + i] as i32 - Q * c3;

        bytes[i >> 3] |= ld_decode(t0, t1, t2, t3) << (i & 7);
    }

    Ok(key)
}
