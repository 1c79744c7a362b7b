//! polynomial.rs - Ring element of Z_Q[X]/(X^1024 + 1)

use core::fmt;
use params::pqc::newhope::{NEWHOPE_N, NEWHOPE_Q};
use zeroize::Zeroize;

use super::reduce::{barrett_reduce, freeze};
use crate::error::{validate, Result};

/// A NewHope polynomial with 1024 coefficients
///
/// Coefficients are kept as `u16` and are not required to be canonical:
/// anything below `2^14` is accepted by the wire codec, which reduces on the
/// way out.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    coeffs: [u16; NEWHOPE_N],
}

impl Polynomial {
    /// Creates a new polynomial with all coefficients set to zero
    pub const fn zero() -> Self {
        Self { coeffs: [0; NEWHOPE_N] }
    }

    /// Creates a polynomial from an array of coefficients
    pub const fn from_array(coeffs: [u16; NEWHOPE_N]) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial from a slice of exactly 1024 coefficients
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), NEWHOPE_N)?;
        let mut poly = Self::zero();
        poly.coeffs.copy_from_slice(coeffs);
        Ok(poly)
    }

    /// Coefficient view
    pub fn coeffs(&self) -> &[u16; NEWHOPE_N] {
        &self.coeffs
    }

    /// Mutable coefficient view
    pub fn coeffs_mut(&mut self) -> &mut [u16; NEWHOPE_N] {
        &mut self.coeffs
    }

    /// Coefficient-wise addition, Barrett-reduced
    ///
    /// The sum wraps modulo `2^16` before reduction, so it is congruent to
    /// `a + b` whenever both inputs are below `2^15`. The result is below `2Q`.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = barrett_reduce(a.wrapping_add(b));
        }
        result
    }

    /// Coefficient-wise subtraction, Barrett-reduced
    ///
    /// `2Q` is added before subtracting and the arithmetic wraps modulo
    /// `2^16`, so the result is congruent to `a - b` for inputs below `2Q`.
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = barrett_reduce(a.wrapping_add(2 * NEWHOPE_Q).wrapping_sub(b));
        }
        result
    }

    /// Reduce every coefficient into `[0, Q)` without branching
    pub fn freeze(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = freeze(*c);
        }
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[u16; NEWHOPE_N]> for Polynomial {
    fn from(coeffs: [u16; NEWHOPE_N]) -> Self {
        Self::from_array(coeffs)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({:?}, ..)", &self.coeffs[..4])
    }
}
