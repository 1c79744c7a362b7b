//! # newhope
//!
//! Pure Rust NewHope primitives: modular reduction modulo Q = 12289, the
//! NewHope ChaCha20 expander, the 14-bit polynomial wire codec and the
//! four-dimensional lattice reconciliation that turns two noisy ring elements
//! into one shared key.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! newhope = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `algorithms` (default): reduction, expander, codec and sampling
//! - `kem` (default): reconciliation and message encoding
//! - `alloc`: `Vec`-returning helpers and the serialization trait impls
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`newhope-algorithms`]: reduction, ChaCha20 expander, codec, sampling
//! - [`newhope-kem`]: `helprec`, `rec`, hint packing and message encoding

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use newhope_api as api;
pub use newhope_common as common;
pub use newhope_internal as internal;
pub use newhope_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use newhope_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use newhope_kem as kem;

/// Common imports for newhope users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureCompare, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::Polynomial;

    #[cfg(feature = "kem")]
    pub use crate::kem::{helprec, rec, HelpRecSeed, SharedKey};
}
