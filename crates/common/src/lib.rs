//! Common implementations and shared functionality for the NewHope crates
//!
//! This crate provides the secret-memory types every other crate relies on
//! to wipe key material and scratch state on all exit paths.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{
    SecretBuffer,
    EphemeralSecret,
    ZeroizeGuard,
};

// Re-export memory safety traits
pub use security::memory::SecureCompare;
