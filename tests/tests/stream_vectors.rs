//! Known-answer tests for the ChaCha20 expander

use newhope_algorithms::stream::StreamCipher;
use newhope_algorithms::{core_block, stream, stream_into, ChaCha20};
use newhope_tests::vectors::STREAM_VECTORS;

fn key_of(hex_key: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_key).unwrap();
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    key
}

#[test]
fn test_core_block_vectors() {
    for (i, v) in STREAM_VECTORS.iter().enumerate() {
        let key = key_of(v.key);
        let expected = hex::decode(v.keystream).unwrap();
        let block = core_block(&key, v.nonce, v.block);
        assert_eq!(&block[..expected.len()], &expected[..], "vector {}", i);
    }
}

#[test]
fn test_seeked_generator_vectors() {
    for (i, v) in STREAM_VECTORS.iter().enumerate() {
        let key = key_of(v.key);
        let expected = hex::decode(v.keystream).unwrap();

        let mut cipher = ChaCha20::new(&key, v.nonce);
        StreamCipher::seek(&mut cipher, v.block as u64).unwrap();
        let mut out = vec![0u8; expected.len()];
        cipher.keystream(&mut out).unwrap();
        assert_eq!(out, expected, "vector {}", i);
    }
}

#[test]
fn test_stream_vectors_from_block_zero() {
    for v in STREAM_VECTORS.iter().filter(|v| v.block == 0) {
        let key = key_of(v.key);
        let expected = hex::decode(v.keystream).unwrap();

        assert_eq!(stream(expected.len(), v.nonce, &key).unwrap(), expected);

        // An odd length ends inside a block
        let mut out = vec![0u8; expected.len() - 3];
        stream_into(&mut out, v.nonce, &key).unwrap();
        assert_eq!(&out[..], &expected[..expected.len() - 3]);
    }
}

#[test]
fn test_stream_crosses_block_boundary() {
    let v = &STREAM_VECTORS[1];
    let key = key_of(v.key);
    let out = stream(128, v.nonce, &key).unwrap();
    assert_eq!(hex::encode(&out[64..]), v.keystream);
    assert_eq!(&out[..64], &core_block(&key, v.nonce, 0)[..]);
}
