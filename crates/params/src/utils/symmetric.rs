//! Constants for the ChaCha20 expander

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes (the 64-bit stream nonce)
pub const CHACHA20_NONCE_SIZE: usize = 8;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// ChaCha20 state size in 32-bit words
pub const CHACHA20_STATE_WORDS: usize = 16;

/// ChaCha20 round count (10 double rounds)
pub const CHACHA20_ROUNDS: usize = 20;

/// "expand 32-byte k" as four little-endian words
pub const CHACHA20_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];
