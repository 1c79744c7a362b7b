//! Public API traits and types for the NewHope primitives
//!
//! This crate provides the public API surface shared by every NewHope crate:
//! the error type, validation helpers and the serialization trait used by the
//! wire types.

pub mod traits;
pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::serialize;
