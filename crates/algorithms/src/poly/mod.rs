//! Polynomial arithmetic for the NewHope ring Z_Q[X]/(X^1024 + 1)
//!
//! Reduction, the 14-bit wire codec and sampling. Multiplication (NTT) is
//! not part of this crate.

pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::polynomial::Polynomial;
    pub use super::reduce::{barrett_reduce, freeze, montgomery_reduce};
    pub use super::sampling::{get_noise, DefaultSamplers, NoiseSampler, UniformSampler};
    pub use super::serialize::{from_bytes, from_bytes_array, to_bytes, to_bytes_into};
}
