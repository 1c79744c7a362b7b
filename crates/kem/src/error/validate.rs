//! Validation utilities for reconciliation operations

use super::{Error, Result};

/// Validate a reconciliation hint condition
pub fn hint(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidHint { reason });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use algorithms::error::validate::length;
