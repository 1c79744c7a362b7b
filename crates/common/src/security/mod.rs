//! Security primitives and memory safety utilities
//!
//! This module provides the types used throughout the NewHope crates to make
//! sure secret material is wiped on every exit path, not just the happy one.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use memory::SecureCompare;
