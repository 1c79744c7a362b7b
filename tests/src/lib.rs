//! Shared fixtures for the NewHope integration tests
pub mod vectors;

use newhope_algorithms::Polynomial;
use newhope_params::pqc::newhope::NEWHOPE_Q;
use rand::Rng;

/// Polynomial with coefficients uniform in `[0, Q)`
pub fn random_poly<R: Rng>(rng: &mut R) -> Polynomial {
    let mut p = Polynomial::zero();
    for c in p.coeffs_mut().iter_mut() {
        *c = rng.gen_range(0..NEWHOPE_Q);
    }
    p
}

/// `v + e mod Q` with each error term drawn from `[-bound, bound]`
pub fn perturb<R: Rng>(rng: &mut R, v: &Polynomial, bound: i32) -> Polynomial {
    let q = NEWHOPE_Q as i32;
    let mut w = v.clone();
    for c in w.coeffs_mut().iter_mut() {
        let e = rng.gen_range(-bound..=bound);
        *c = (*c as i32 + e).rem_euclid(q) as u16;
    }
    w
}
