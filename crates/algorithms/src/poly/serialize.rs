//! serialize.rs - 14-bit polynomial wire format
//!
//! Four coefficients share seven bytes, least significant bits first:
//!
//! ```text
//! byte 0: c0[7:0]
//! byte 1: c1[1:0] c0[13:8]
//! byte 2: c1[9:2]
//! byte 3: c2[3:0] c1[13:10]
//! byte 4: c2[11:4]
//! byte 5: c3[5:0] c2[13:12]
//! byte 6: c3[13:6]
//! ```
//!
//! Encoding emits canonical values in `[0, Q)`. Decoding performs no range
//! check and may return values up to `2^14 - 1`; every consumer reduces
//! before use.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use params::pqc::newhope::{
    NEWHOPE_BYTES_PER_GROUP, NEWHOPE_COEFFS_PER_GROUP, NEWHOPE_N, NEWHOPE_POLY_BYTES,
};

use super::polynomial::Polynomial;
use super::reduce::freeze;
use crate::error::{validate, Result};

// Writes one group per 7-byte chunk of `out`; callers hand in exactly 1792 bytes
fn pack_into(poly: &Polynomial, out: &mut [u8]) {
    let groups = poly.coeffs().chunks_exact(NEWHOPE_COEFFS_PER_GROUP);
    for (c, r) in groups.zip(out.chunks_exact_mut(NEWHOPE_BYTES_PER_GROUP)) {
        let t0 = freeze(c[0]);
        let t1 = freeze(c[1]);
        let t2 = freeze(c[2]);
        let t3 = freeze(c[3]);

        r[0] = t0 as u8;
        r[1] = ((t0 >> 8) | (t1 << 6)) as u8;
        r[2] = (t1 >> 2) as u8;
        r[3] = ((t1 >> 10) | (t2 << 4)) as u8;
        r[4] = (t2 >> 4) as u8;
        r[5] = ((t2 >> 12) | (t3 << 2)) as u8;
        r[6] = (t3 >> 6) as u8;
    }
}

/// Encode into a caller-provided buffer of exactly 1792 bytes
pub fn to_bytes_into(poly: &Polynomial, out: &mut [u8]) -> Result<()> {
    validate::length("polynomial encoding", out.len(), NEWHOPE_POLY_BYTES)?;
    pack_into(poly, out);
    Ok(())
}

/// Encode a polynomial into its 1792-byte wire form
pub fn to_bytes(poly: &Polynomial) -> [u8; NEWHOPE_POLY_BYTES] {
    let mut out = [0u8; NEWHOPE_POLY_BYTES];
    pack_into(poly, &mut out);
    out
}

/// Decode a 1792-byte encoding
pub fn from_bytes_array(bytes: &[u8; NEWHOPE_POLY_BYTES]) -> Polynomial {
    let mut poly = Polynomial::zero();
    let groups = poly.coeffs_mut().chunks_exact_mut(NEWHOPE_COEFFS_PER_GROUP);
    for (c, a) in groups.zip(bytes.chunks_exact(NEWHOPE_BYTES_PER_GROUP)) {
        let a: [u16; NEWHOPE_BYTES_PER_GROUP] = core::array::from_fn(|i| a[i] as u16);

        c[0] = a[0] | ((a[1] & 0x3f) << 8);
        c[1] = (a[1] >> 6) | (a[2] << 2) | ((a[3] & 0x0f) << 10);
        c[2] = (a[3] >> 4) | (a[4] << 4) | ((a[5] & 0x03) << 12);
        c[3] = (a[5] >> 2) | (a[6] << 6);
    }
    poly
}

/// Decode a byte slice that must be exactly 1792 bytes long
pub fn from_bytes(bytes: &[u8]) -> Result<Polynomial> {
    validate::length("polynomial decoding", bytes.len(), NEWHOPE_POLY_BYTES)?;
    let mut array = [0u8; NEWHOPE_POLY_BYTES];
    array.copy_from_slice(bytes);
    Ok(from_bytes_array(&array))
}

impl Polynomial {
    /// Decode from a 1792-byte slice, see [`from_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        from_bytes(bytes)
    }

    /// Canonical 1792-byte encoding, see [`to_bytes`]
    pub fn to_bytes(&self) -> [u8; NEWHOPE_POLY_BYTES] {
        to_bytes(self)
    }

    /// Encode into `out`, which must be exactly 1792 bytes
    pub fn to_bytes_into(&self, out: &mut [u8]) -> Result<()> {
        to_bytes_into(self, out)
    }
}

#[cfg(feature = "alloc")]
impl api::Serialize for Polynomial {
    fn from_bytes(bytes: &[u8]) -> api::Result<Self> {
        from_bytes(bytes).map_err(api::Error::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        to_bytes(self).to_vec()
    }
}

const _: () = assert!(NEWHOPE_N / NEWHOPE_COEFFS_PER_GROUP * NEWHOPE_BYTES_PER_GROUP == NEWHOPE_POLY_BYTES);
