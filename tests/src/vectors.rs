//! Known-answer vectors for the ChaCha20 expander
//!
//! The expander places the block number in word 12, zero in word 13 and the
//! 64-bit nonce in words 14 and 15. With a zero nonce it therefore agrees with
//! the original ChaCha20, and a nonce of `0x4a000000` reproduces the
//! keystream of RFC 8439 section 2.4.2.

/// One keystream vector
pub struct StreamVector {
    /// Key bytes, hex
    pub key: &'static str,
    /// Stream nonce
    pub nonce: u64,
    /// Block the expected output starts at
    pub block: u32,
    /// Expected keystream, hex
    pub keystream: &'static str,
}

/// Keystream vectors checked by the integration tests
pub const STREAM_VECTORS: &[StreamVector] = &[
    StreamVector {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        nonce: 0,
        block: 0,
        keystream: "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
                    da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
    },
    StreamVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        nonce: 0x4a00_0000,
        block: 1,
        keystream: "224f51f3401bd9e12fde276fb8631ded8c131f823d2c06e27e4fcaec9ef3cf78\
                    8a3b0aa372600a92b57974cded2b9334794cba40c63e34cdea212c4cf07d41b7",
    },
    StreamVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        nonce: 0x0102_0304_0506_0708,
        block: 0,
        keystream: "1546a1667684b1726ae6ebebd49af7c38eba7996ca85f9e2b6193eccad16bcb5\
                    646c3257d06d1e42",
    },
];
