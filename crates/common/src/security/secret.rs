//! Owners of secret bytes and scratch state
//!
//! Keys, keystream blocks and quantization candidates pass through these
//! wrappers so that they are zeroized when the owning scope ends, whichever
//! way it ends.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size secret, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize>([u8; N]);

impl<const N: usize> SecretBuffer<N> {
    /// Take ownership of `bytes`
    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// All-zero buffer
    pub fn zeroed() -> Self {
        Self([0u8; N])
    }

    /// Buffer length, always `N`
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The secret as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.0
    }

    /// Mutable access to the secret bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Owned temporary whose value is zeroized when it goes out of scope
///
/// Derefs to the wrapped value, so a `EphemeralSecret<[u8; 64]>` can be
/// indexed and sliced like the array itself.
pub struct EphemeralSecret<T: Zeroize>(T);

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap `value`
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: Zeroize + Default> Default for EphemeralSecret<T> {
    fn default() -> Self {
        Self(T::default())
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EphemeralSecret([REDACTED])")
    }
}

/// Borrows caller-owned state and zeroizes it when dropped
///
/// Create the guard before the first fallible step: `?` and panics then
/// both run the wipe.
pub struct ZeroizeGuard<'a, T: Zeroize>(&'a mut T);

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the end of the current scope
    pub fn new(value: &'a mut T) -> Self {
        Self(value)
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
