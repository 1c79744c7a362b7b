//! Error contract across the crate boundaries

use newhope_algorithms::Error as PrimitiveError;
use newhope_algorithms::Polynomial;
use newhope_api::error::ResultExt;
use newhope_api::Error as CoreError;
use newhope_kem::{decode_a, decode_b, helprec, pack_hint, rec, unpack_hint, Error};
use newhope_params::pqc::newhope::{
    NEWHOPE_POLY_BYTES, NEWHOPE_REC_BYTES, NEWHOPE_SENDA_BYTES, NEWHOPE_SENDB_BYTES,
};

#[test]
fn test_wrong_lengths_report_expected_and_actual() {
    let err = decode_b(&[0u8; NEWHOPE_SENDB_BYTES + 1]).unwrap_err();
    assert_eq!(
        err,
        Error::Primitive(PrimitiveError::Length {
            context: "message B",
            expected: NEWHOPE_SENDB_BYTES,
            actual: NEWHOPE_SENDB_BYTES + 1,
        })
    );

    assert!(matches!(
        decode_a(&[0u8; NEWHOPE_SENDA_BYTES - 1]),
        Err(Error::Primitive(PrimitiveError::Length { expected: NEWHOPE_SENDA_BYTES, .. }))
    ));
    assert!(matches!(
        unpack_hint(&[0u8; NEWHOPE_REC_BYTES - 1]),
        Err(Error::Primitive(PrimitiveError::Length { expected: NEWHOPE_REC_BYTES, .. }))
    ));
    assert!(matches!(
        Polynomial::from_bytes(&[0u8; NEWHOPE_POLY_BYTES + 7]),
        Err(PrimitiveError::Length { expected: NEWHOPE_POLY_BYTES, .. })
    ));
    assert!(matches!(
        helprec(&Polynomial::zero(), &[0u8; 16], 0),
        Err(Error::Primitive(PrimitiveError::Length { actual: 16, .. }))
    ));
}

#[test]
fn test_errors_convert_to_core_error() {
    let err = decode_b(&[]).unwrap_err();
    assert_eq!(
        CoreError::from(err),
        CoreError::InvalidLength {
            context: "message B",
            expected: NEWHOPE_SENDB_BYTES,
            actual: 0,
        }
    );

    let mut c = Polynomial::zero();
    c.coeffs_mut()[0] = 17;
    let err = CoreError::from(rec(&Polynomial::zero(), &c).unwrap_err());
    assert!(matches!(err, CoreError::InvalidParameter { context: "reconciliation hint", .. }));
}

#[test]
fn test_invalid_hint_is_never_truncated() {
    let mut c = Polynomial::zero();
    c.coeffs_mut()[NEWHOPE_REC_BYTES] = 4;
    assert!(matches!(pack_hint(&c), Err(Error::InvalidHint { .. })));

    let msg = Error::InvalidHint { reason: "coefficient outside {0, 1, 2, 3}" }.to_string();
    assert!(msg.starts_with("Invalid reconciliation hint"));
}

#[test]
fn test_result_ext_relabels_kem_errors() {
    let err = decode_a(&[0u8; 3]).with_context("handshake").unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidLength {
            context: "handshake",
            expected: NEWHOPE_SENDA_BYTES,
            actual: 3,
        }
    );
}
