// kem/src/newhope/encode.rs

//! Hint packing and key-exchange message encoding.
//!
//! Message A is `tobytes(pk) || seed` (1824 bytes), message B is
//! `tobytes(b) || pack_hint(c)` (2048 bytes).

use algorithms::poly::serialize::{from_bytes_array, to_bytes};
use algorithms::Polynomial;
use params::pqc::newhope::{
    NEWHOPE_N, NEWHOPE_POLY_BYTES, NEWHOPE_REC_BYTES, NEWHOPE_SEED_BYTES, NEWHOPE_SENDA_BYTES,
    NEWHOPE_SENDB_BYTES,
};

use super::reconcile::validate_hint;
use crate::error::{validate, Result};

/// Hint coefficients per packed byte
const HINTS_PER_BYTE: usize = 4;

fn poly_prefix(bytes: &[u8]) -> Polynomial {
    let mut poly = [0u8; NEWHOPE_POLY_BYTES];
    poly.copy_from_slice(&bytes[..NEWHOPE_POLY_BYTES]);
    from_bytes_array(&poly)
}

/// Pack a hint polynomial, four 2-bit coefficients per byte
///
/// Rejects coefficients above 3 rather than truncating them.
pub fn pack_hint(c: &Polynomial) -> Result<[u8; NEWHOPE_REC_BYTES]> {
    validate_hint(c)?;

    let mut out = [0u8; NEWHOPE_REC_BYTES];
    for (byte, h) in out.iter_mut().zip(c.coeffs().chunks_exact(HINTS_PER_BYTE)) {
        *byte = (h[0] | (h[1] << 2) | (h[2] << 4) | (h[3] << 6)) as u8;
    }
    Ok(out)
}

/// Unpack a 256-byte hint
pub fn unpack_hint(bytes: &[u8]) -> Result<Polynomial> {
    validate::length("hint decoding", bytes.len(), NEWHOPE_REC_BYTES)?;

    let mut c = Polynomial::zero();
    for (h, &byte) in c.coeffs_mut().chunks_exact_mut(HINTS_PER_BYTE).zip(bytes) {
        let byte = byte as u16;
        h[0] = byte & 3;
        h[1] = (byte >> 2) & 3;
        h[2] = (byte >> 4) & 3;
        h[3] = byte >> 6;
    }
    Ok(c)
}

/// Encode the initiator's message: public polynomial and public seed
pub fn encode_a(pk: &Polynomial, seed: &[u8; NEWHOPE_SEED_BYTES]) -> [u8; NEWHOPE_SENDA_BYTES] {
    let mut out = [0u8; NEWHOPE_SENDA_BYTES];
    let (poly, tail) = out.split_at_mut(NEWHOPE_POLY_BYTES);
    poly.copy_from_slice(&to_bytes(pk));
    tail.copy_from_slice(seed);
    out
}

/// Decode the initiator's message
pub fn decode_a(bytes: &[u8]) -> Result<(Polynomial, [u8; NEWHOPE_SEED_BYTES])> {
    validate::length("message A", bytes.len(), NEWHOPE_SENDA_BYTES)?;

    let mut seed = [0u8; NEWHOPE_SEED_BYTES];
    seed.copy_from_slice(&bytes[NEWHOPE_POLY_BYTES..]);
    Ok((poly_prefix(bytes), seed))
}

/// Encode the responder's message: public polynomial and packed hint
pub fn encode_b(b: &Polynomial, c: &Polynomial) -> Result<[u8; NEWHOPE_SENDB_BYTES]> {
    let hint = pack_hint(c)?;

    let mut out = [0u8; NEWHOPE_SENDB_BYTES];
    let (poly, tail) = out.split_at_mut(NEWHOPE_POLY_BYTES);
    poly.copy_from_slice(&to_bytes(b));
    tail.copy_from_slice(&hint);
    Ok(out)
}

/// Decode the responder's message into `(b, c)`
pub fn decode_b(bytes: &[u8]) -> Result<(Polynomial, Polynomial)> {
    validate::length("message B", bytes.len(), NEWHOPE_SENDB_BYTES)?;

    let c = unpack_hint(&bytes[NEWHOPE_POLY_BYTES..])?;
    Ok((poly_prefix(bytes), c))
}

const _: () = assert!(NEWHOPE_N / HINTS_PER_BYTE == NEWHOPE_REC_BYTES);
