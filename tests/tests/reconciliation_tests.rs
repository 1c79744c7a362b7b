//! End-to-end reconciliation: both parties must derive the same key

use newhope_algorithms::poly::sampling::{DefaultSamplers, UniformSampler};
use newhope_algorithms::Polynomial;
use newhope_kem::{
    decode_a, decode_b, encode_a, encode_b, helprec, rec, HelpRecSeed, SharedKey,
};
use newhope_params::pqc::newhope::{NEWHOPE_N, NEWHOPE_Q, NEWHOPE_SEED_BYTES};
use newhope_tests::{perturb, random_poly};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Largest per-coefficient difference the agreement tests inject
const NOISE_BOUND: i32 = 1024;

#[test]
fn test_agreement_10000_trials() {
    let mut rng = ChaChaRng::seed_from_u64(0x6e65_7768_6f70_65);
    for trial in 0..10_000 {
        let v = random_poly(&mut rng);
        let w = perturb(&mut rng, &v, NOISE_BOUND);
        let seed = HelpRecSeed::generate(&mut rng);
        let nonce: u8 = rng.gen();

        let c = helprec(&v, seed.as_ref(), nonce).unwrap();
        let responder = rec(&v, &c).unwrap();
        let initiator = rec(&w, &c).unwrap();
        assert_eq!(responder, initiator, "trial {} disagreed", trial);
    }
}

#[test]
fn test_agreement_at_the_noise_bound() {
    // Every coefficient moved by exactly the bound, random sign
    let mut rng = ChaChaRng::seed_from_u64(77);
    let q = NEWHOPE_Q as i32;
    for _ in 0..200 {
        let v = random_poly(&mut rng);
        let mut w = v.clone();
        for c in w.coeffs_mut().iter_mut() {
            let e = if rng.gen::<bool>() { NOISE_BOUND } else { -NOISE_BOUND };
            *c = (*c as i32 + e).rem_euclid(q) as u16;
        }

        let c = helprec(&v, &[0x5a; NEWHOPE_SEED_BYTES], 0).unwrap();
        assert_eq!(rec(&v, &c).unwrap(), rec(&w, &c).unwrap());
    }
}

#[test]
fn test_exchange_over_the_wire() {
    let mut rng = ChaChaRng::seed_from_u64(2048);

    // Initiator publishes (pk, seed)
    let pk = DefaultSamplers::sample_uniform(&mut rng);
    let public_seed: [u8; NEWHOPE_SEED_BYTES] = rng.gen();
    let msg_a = encode_a(&pk, &public_seed);

    let (pk_received, seed_received) = decode_a(&msg_a).unwrap();
    assert_eq!(pk_received, pk);
    assert_eq!(seed_received, public_seed);

    // Responder reconciles its view and answers with (b, hint)
    let v = random_poly(&mut rng);
    let b = DefaultSamplers::sample_uniform(&mut rng);
    let seed = HelpRecSeed::generate(&mut rng);
    let c = helprec(&v, seed.as_ref(), 0).unwrap();
    let responder_key = rec(&v, &c).unwrap();
    let msg_b = encode_b(&b, &c).unwrap();

    // Initiator only sees the wire form and a noisy copy of v
    let (b_received, c_received) = decode_b(&msg_b).unwrap();
    assert_eq!(b_received, b);
    assert_eq!(c_received, c);

    let w = perturb(&mut rng, &v, NOISE_BOUND);
    let initiator_key = rec(&w, &c_received).unwrap();
    assert_eq!(initiator_key, responder_key);
}

#[test]
fn test_noise_polynomials_reconcile() {
    // Binomial noise is centred on Q; sums of two such terms stay well inside
    // the decoding radius
    let seed = [0x42u8; NEWHOPE_SEED_BYTES];
    let v = random_poly(&mut ChaChaRng::seed_from_u64(3));
    let e = Polynomial::get_noise(&seed, 1).unwrap();
    let f = Polynomial::get_noise(&seed, 2).unwrap();

    // v + (e - f), where e - f has coefficients in [-32, 32]
    let mut w = v.add(&e).sub(&f);
    w.freeze();

    let c = helprec(&v, &seed, 9).unwrap();
    assert_eq!(rec(&v, &c).unwrap(), rec(&w, &c).unwrap());
}

#[test]
fn test_unrelated_polynomials_disagree() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let v = random_poly(&mut rng);
    let u = random_poly(&mut rng);
    let c = helprec(&v, &[0u8; NEWHOPE_SEED_BYTES], 0).unwrap();

    let kv: SharedKey = rec(&v, &c).unwrap();
    let ku: SharedKey = rec(&u, &c).unwrap();
    assert_ne!(kv, ku);

    // About half the 256 key bits should differ
    let differing: u32 = kv
        .as_bytes()
        .iter()
        .zip(ku.as_bytes())
        .map(|(a, b)| (a ^ b).count_ones())
        .sum();
    assert!((64..=192).contains(&differing), "{} bits differ", differing);
}

#[test]
fn test_key_is_deterministic() {
    let v = random_poly(&mut ChaChaRng::seed_from_u64(8));
    let seed = [0x33u8; NEWHOPE_SEED_BYTES];
    let c1 = helprec(&v, &seed, 200).unwrap();
    let c2 = helprec(&v, &seed, 200).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(rec(&v, &c1).unwrap().as_bytes(), rec(&v, &c2).unwrap().as_bytes());
    assert_eq!(c1.coeffs().len(), NEWHOPE_N);
}
