//! Property-based tests for reduction, the polynomial codec and hint packing

use newhope_algorithms::poly::reduce::MONTGOMERY_MAX_INPUT;
use newhope_algorithms::poly::serialize::{from_bytes, to_bytes};
use newhope_algorithms::{barrett_reduce, freeze, montgomery_reduce, Polynomial};
use newhope_kem::newhope::validate_hint;
use newhope_kem::{pack_hint, unpack_hint};
use newhope_params::pqc::newhope::{NEWHOPE_N, NEWHOPE_Q};
use proptest::prelude::*;

const Q: u64 = NEWHOPE_Q as u64;

fn any_poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(any::<u16>(), NEWHOPE_N)
        .prop_map(|c| Polynomial::from_coeffs(&c).unwrap())
}

fn hint_poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(0u16..4, NEWHOPE_N).prop_map(|c| Polynomial::from_coeffs(&c).unwrap())
}

proptest! {
    #[test]
    fn barrett_is_congruent_and_below_2q(a in any::<u16>()) {
        let r = barrett_reduce(a) as u64;
        prop_assert!(r < 2 * Q);
        prop_assert_eq!(r % Q, a as u64 % Q);
    }

    #[test]
    fn freeze_is_canonical(a in any::<u16>()) {
        prop_assert_eq!(freeze(a) as u64, a as u64 % Q);
    }

    #[test]
    fn montgomery_divides_by_radix(a in 0..=MONTGOMERY_MAX_INPUT) {
        let r = montgomery_reduce(a) as u64;
        prop_assert!(r < 1 << 14);
        prop_assert_eq!((r << 18) % Q, a as u64 % Q);
    }

    #[test]
    fn montgomery_is_exact_for_any_u32(a in any::<u32>()) {
        let r = montgomery_reduce(a) as u64;
        prop_assert!(r < (1 << 14) + Q);
        prop_assert_eq!((r << 18) % Q, a as u64 % Q);
    }

    #[test]
    fn codec_roundtrip_reduces(p in any_poly()) {
        let bytes = to_bytes(&p);
        let decoded = from_bytes(&bytes).unwrap();
        for (&d, &c) in decoded.coeffs().iter().zip(p.coeffs()) {
            prop_assert_eq!(d as u64, c as u64 % Q);
        }
        // Canonical polynomials survive unchanged
        prop_assert_eq!(to_bytes(&decoded), bytes);
    }

    #[test]
    fn arbitrary_bytes_decode_below_2_14(bytes in prop::collection::vec(any::<u8>(), 1792)) {
        let p = from_bytes(&bytes).unwrap();
        prop_assert!(p.coeffs().iter().all(|&c| c < 1 << 14));
    }

    #[test]
    fn hint_packing_roundtrip(c in hint_poly()) {
        let packed = pack_hint(&c).unwrap();
        prop_assert_eq!(unpack_hint(&packed).unwrap(), c);
    }

    #[test]
    fn unpacked_hints_are_valid(bytes in prop::collection::vec(any::<u8>(), 256)) {
        let c = unpack_hint(&bytes).unwrap();
        prop_assert!(validate_hint(&c).is_ok());
        prop_assert_eq!(&pack_hint(&c).unwrap()[..], &bytes[..]);
    }
}
