//! Constant-time operations to prevent timing attacks
//!
//! All helpers operate on fixed-width two's complement integers and rely on
//! arithmetic right shift for sign extraction, which Rust guarantees for
//! signed types.

/// All-ones mask if `x` is negative, zero otherwise
#[inline(always)]
pub fn sign_mask_i32(x: i32) -> i32 {
    x >> 31
}

/// All-ones mask if `x` is negative, zero otherwise (16-bit lane)
#[inline(always)]
pub fn sign_mask_i16(x: i16) -> i16 {
    x >> 15
}

/// Branch-free absolute value
///
/// `i32::MIN` maps to itself, as with the two's complement identity it uses.
#[inline(always)]
pub fn ct_abs_i32(x: i32) -> i32 {
    let mask = sign_mask_i32(x);
    (x ^ mask).wrapping_sub(mask)
}

/// Select `a` when `mask == 0` and `b` when `mask == -1`
///
/// `mask` must be 0 or all-ones; other values blend the bits of both inputs.
#[inline(always)]
pub fn ct_select_i32(mask: i32, a: i32, b: i32) -> i32 {
    (!mask & a) ^ (mask & b)
}

/// Subtract `q` from `a` iff `a >= q`, for `a` in `[0, 2q)` and `q < 2^15`
#[inline(always)]
pub fn ct_csub_u16(a: u16, q: u16) -> u16 {
    let m = a.wrapping_sub(q);
    let c = sign_mask_i16(m as i16) as u16;
    m ^ ((a ^ m) & c)
}
