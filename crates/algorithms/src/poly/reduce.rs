//! reduce.rs - Barrett and Montgomery reduction modulo Q = 12289
//!
//! Both reductions are straight-line integer code: no comparison or branch
//! depends on the operand, so they are safe on secret coefficients.

use params::pqc::newhope::{
    NEWHOPE_BARRETT_MUL, NEWHOPE_BARRETT_SHIFT, NEWHOPE_Q, NEWHOPE_QINV, NEWHOPE_RLOG,
};

const Q: u32 = NEWHOPE_Q as u32;

/// Largest input for which [`montgomery_reduce`] stays below `2^14`
pub const MONTGOMERY_MAX_INPUT: u32 = u32::MAX - (Q << NEWHOPE_RLOG);

/// Barrett reduction of a 16-bit value
///
/// Returns `r ≡ a (mod Q)` with `r < 2Q` for every `a: u16`. The result is
/// not canonical; [`freeze`] finishes the job when `[0, Q)` is required.
#[inline(always)]
pub fn barrett_reduce(a: u16) -> u16 {
    let u = ((a as u32 * NEWHOPE_BARRETT_MUL) >> NEWHOPE_BARRETT_SHIFT) * Q;
    a.wrapping_sub(u as u16)
}

/// Montgomery reduction: computes `a * 2^-18 mod Q`
///
/// Exact for every `u32`: the sum `a + u*Q` is formed in 64 bits. The
/// result is below `2^14 + Q`, and below `2^14` when
/// `a <= MONTGOMERY_MAX_INPUT`, which covers products of two 14-bit
/// coefficients.
#[inline(always)]
pub fn montgomery_reduce(a: u32) -> u16 {
    let u = a.wrapping_mul(NEWHOPE_QINV) & ((1 << NEWHOPE_RLOG) - 1);
    ((a as u64 + u as u64 * Q as u64) >> NEWHOPE_RLOG) as u16
}

/// Fully reduce a coefficient into `[0, Q)`
///
/// Barrett-reduces first, then subtracts Q under a sign mask.
#[inline(always)]
pub fn freeze(a: u16) -> u16 {
    internal::constant_time::ct_csub_u16(barrett_reduce(a), NEWHOPE_Q)
}
