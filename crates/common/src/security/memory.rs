//! Constant-time equality for secret byte arrays

use subtle::{Choice, ConstantTimeEq};

/// Equality that does not leak where two secrets first differ
pub trait SecureCompare {
    /// Constant-time comparison as a `subtle::Choice`
    fn secure_cmp(&self, other: &Self) -> Choice;

    /// [`secure_cmp`](Self::secure_cmp) collapsed to a `bool`
    fn secure_eq(&self, other: &Self) -> bool {
        self.secure_cmp(other).into()
    }
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self[..].ct_eq(&other[..])
    }
}
