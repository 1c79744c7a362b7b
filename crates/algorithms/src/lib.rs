//! NewHope primitives with constant-time implementation
//!
//! This crate provides the building blocks of the NewHope key exchange that
//! sit below the reconciliation layer:
//!
//! - Barrett and Montgomery reduction modulo Q = 12289
//! - The ChaCha20 expander with NewHope's state layout
//! - The 14-bit polynomial wire codec
//! - Uniform and binomial polynomial sampling
//!
//! Every routine that touches secret coefficients is straight-line integer
//! code, and intermediate keystream buffers are wiped on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result, validate};

// Polynomial arithmetic and wire codec
pub mod poly;
pub use poly::polynomial::Polynomial;
pub use poly::reduce::{barrett_reduce, freeze, montgomery_reduce};

// Keystream generation
pub mod stream;
pub use stream::chacha::chacha20::{core_block, stream_into, ChaCha20};
#[cfg(feature = "alloc")]
pub use stream::chacha::chacha20::stream;

// Re-export security types used in public signatures
pub use common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
