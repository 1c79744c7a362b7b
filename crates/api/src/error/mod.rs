//! Error handling for the NewHope primitives

pub mod types;
pub mod traits;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;
