//! sampling.rs - Uniform and binomial polynomial sampling

use byteorder::{ByteOrder, LittleEndian};
use common::security::EphemeralSecret;
use params::pqc::newhope::{NEWHOPE_N, NEWHOPE_Q, NEWHOPE_SEED_BYTES};
use rand::{CryptoRng, RngCore};

use super::polynomial::Polynomial;
use super::reduce::freeze;
use crate::error::Result;
use crate::stream::chacha::chacha20::stream_into;

/// Keystream bytes consumed by one noise polynomial: 32 bits per coefficient
pub const NOISE_STREAM_BYTES: usize = 4 * NEWHOPE_N;

/// Trait for sampling polynomials uniformly at random
pub trait UniformSampler {
    /// Samples a polynomial with coefficients uniformly random in [0, Q-1]
    fn sample_uniform<R: RngCore + CryptoRng>(rng: &mut R) -> Polynomial;
}

/// Trait for sampling small error polynomials
pub trait NoiseSampler {
    /// Samples a polynomial from the centered binomial distribution ψ16,
    /// offset by Q, deterministically from `(seed, nonce)`
    fn sample_noise(seed: &[u8; NEWHOPE_SEED_BYTES], nonce: u8) -> Result<Polynomial>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_uniform<R: RngCore + CryptoRng>(rng: &mut R) -> Polynomial {
        // Largest multiple of Q that fits in u16
        let bound = (u16::MAX / NEWHOPE_Q) * NEWHOPE_Q;

        let mut poly = Polynomial::zero();
        let mut filled = 0;
        while filled < NEWHOPE_N {
            let candidate = rng.next_u32() as u16;
            if candidate < bound {
                poly.coeffs_mut()[filled] = freeze(candidate);
                filled += 1;
            }
        }
        poly
    }
}

impl NoiseSampler for DefaultSamplers {
    fn sample_noise(seed: &[u8; NEWHOPE_SEED_BYTES], nonce: u8) -> Result<Polynomial> {
        let mut buf = EphemeralSecret::new([0u8; NOISE_STREAM_BYTES]);
        stream_into(&mut buf[..], nonce as u64, seed)?;

        let mut poly = Polynomial::zero();
        for (c, word) in poly.coeffs_mut().iter_mut().zip(buf.chunks_exact(4)) {
            let t = LittleEndian::read_u32(word);

            // Per-byte popcount of the four bytes of t
            let mut d = 0u32;
            for j in 0..8 {
                d += (t >> j) & 0x0101_0101;
            }
            let a = (d & 0xff) + ((d >> 8) & 0xff);
            let b = (d >> 24) + ((d >> 16) & 0xff);

            *c = (a + NEWHOPE_Q as u32 - b) as u16;
        }
        Ok(poly)
    }
}

/// Sample a noise polynomial from `(seed, nonce)`
pub fn get_noise(seed: &[u8; NEWHOPE_SEED_BYTES], nonce: u8) -> Result<Polynomial> {
    DefaultSamplers::sample_noise(seed, nonce)
}

impl Polynomial {
    /// Binomial noise polynomial derived from `(seed, nonce)`
    pub fn get_noise(seed: &[u8; NEWHOPE_SEED_BYTES], nonce: u8) -> Result<Self> {
        get_noise(seed, nonce)
    }
}
