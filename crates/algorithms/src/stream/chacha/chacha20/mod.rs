//! ChaCha20 keystream expander with the NewHope state layout
//!
//! The block function is the standard 20-round ChaCha20 core. What differs
//! from RFC 8439 is how the last four state words are filled:
//!
//! | word | content                    |
//! |------|----------------------------|
//! | 12   | block number               |
//! | 13   | 0                          |
//! | 14   | low 32 bits of the nonce   |
//! | 15   | high 32 bits of the nonce  |
//!
//! Peers derive the reconciliation randomness with exactly this layout, so it
//! must not be replaced by the RFC counter/nonce convention.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};
use common::security::{SecretBuffer, EphemeralSecret};
use params::utils::symmetric::{CHACHA20_CONSTANTS, CHACHA20_ROUNDS, CHACHA20_STATE_WORDS};

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub use params::utils::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};

/// Number of distinct block numbers available to one key/nonce pair
pub const CHACHA20_MAX_BLOCKS: u64 = 1 << 32;

/// ChaCha20 keystream generator
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Input state; word 12 holds the first block number
    state: [u32; CHACHA20_STATE_WORDS],
    /// Keystream buffer
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Next block number to generate
    counter: u64,
}

impl ChaCha20 {
    /// Creates a generator positioned at block 0
    pub fn new(key: &[u8; CHACHA20_KEY_SIZE], nonce: u64) -> Self {
        Self::with_block(key, nonce, 0)
    }

    /// Creates a generator positioned at `block`
    pub fn with_block(key: &[u8; CHACHA20_KEY_SIZE], nonce: u64, block: u32) -> Self {
        let key_buf = SecretBuffer::new(*key);
        Self::with_block_secure(&key_buf, nonce, block)
    }

    fn with_block_secure(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: u64,
        block: u32,
    ) -> Self {
        let mut state = [0u32; CHACHA20_STATE_WORDS];
        state[..4].copy_from_slice(&CHACHA20_CONSTANTS);

        let key_bytes = key.as_ref();
        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }

        state[12] = block;
        state[13] = 0;
        state[14] = nonce as u32;
        state[15] = (nonce >> 32) as u32;

        Self {
            state,
            buffer: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE, // Force initial keystream generation
            counter: block as u64,
        }
    }

    /// The ChaCha20 quarter round function
    #[inline]
    fn quarter_round(state: &mut [u32], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    /// Run the block function for `block` and write 64 bytes into `out`
    ///
    /// `out` must be exactly one block long.
    fn block_into(state: &[u32; CHACHA20_STATE_WORDS], block: u32, out: &mut [u8]) {
        let mut input = EphemeralSecret::new(*state);
        input[12] = block;

        let mut x = EphemeralSecret::new(*input);
        for _ in 0..CHACHA20_ROUNDS / 2 {
            // Column rounds
            Self::quarter_round(&mut x[..], 0, 4, 8, 12);
            Self::quarter_round(&mut x[..], 1, 5, 9, 13);
            Self::quarter_round(&mut x[..], 2, 6, 10, 14);
            Self::quarter_round(&mut x[..], 3, 7, 11, 15);

            // Diagonal rounds
            Self::quarter_round(&mut x[..], 0, 5, 10, 15);
            Self::quarter_round(&mut x[..], 1, 6, 11, 12);
            Self::quarter_round(&mut x[..], 2, 7, 8, 13);
            Self::quarter_round(&mut x[..], 3, 4, 9, 14);
        }

        for i in 0..CHACHA20_STATE_WORDS {
            LittleEndian::write_u32(&mut out[i * 4..i * 4 + 4], x[i].wrapping_add(input[i]));
        }
    }

    fn refill(&mut self) -> Result<()> {
        if self.counter >= CHACHA20_MAX_BLOCKS {
            return Err(Error::Processing {
                operation: "chacha20",
                details: "block counter exhausted",
            });
        }
        Self::block_into(&self.state, self.counter as u32, &mut self.buffer);
        self.counter += 1;
        self.position = 0;
        Ok(())
    }

    /// Fill `output` with the next keystream bytes
    ///
    /// Successive calls continue where the previous one stopped.
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        for byte in output.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.refill()?;
            }
            *byte = self.buffer[self.position];
            self.position += 1;
        }
        Ok(())
    }

    /// XOR the keystream into `data`
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.refill()?;
            }
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
        Ok(())
    }

    /// Position the generator so the next byte is the first byte of `block`
    pub fn seek(&mut self, block: u32) {
        self.counter = block as u64;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Return to the block the generator was created at
    pub fn reset(&mut self) {
        self.counter = self.state[12] as u64;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }
}

/// Borrow a key slice as a fixed-size ChaCha20 key
pub fn key_from_slice(key: &[u8]) -> Result<&[u8; CHACHA20_KEY_SIZE]> {
    <&[u8; CHACHA20_KEY_SIZE]>::try_from(key).map_err(|_| Error::Length {
        context: "chacha20 key",
        expected: CHACHA20_KEY_SIZE,
        actual: key.len(),
    })
}

/// ChaCha20 block function: one 64-byte block for `(key, nonce, block_number)`
pub fn core_block(
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: u64,
    block_number: u32,
) -> [u8; CHACHA20_BLOCK_SIZE] {
    let cipher = ChaCha20::new(key, nonce);
    let mut out = [0u8; CHACHA20_BLOCK_SIZE];
    ChaCha20::block_into(&cipher.state, block_number, &mut out);
    out
}

/// [`core_block`] for a key of unchecked length
pub fn core_block_from_slice(
    key: &[u8],
    nonce: u64,
    block_number: u32,
) -> Result<[u8; CHACHA20_BLOCK_SIZE]> {
    Ok(core_block(key_from_slice(key)?, nonce, block_number))
}

/// Fill `output` with the keystream starting at block 0
///
/// Full blocks are written in place; a trailing partial block is staged in a
/// scratch block that is wiped before returning.
pub fn stream_into(output: &mut [u8], nonce: u64, key: &[u8; CHACHA20_KEY_SIZE]) -> Result<()> {
    let blocks_needed = (output.len() as u64).div_ceil(CHACHA20_BLOCK_SIZE as u64);
    if blocks_needed > CHACHA20_MAX_BLOCKS {
        return Err(Error::Processing {
            operation: "chacha20 stream",
            details: "requested length exceeds 2^32 blocks",
        });
    }
    if output.is_empty() {
        return Ok(());
    }

    let cipher = ChaCha20::new(key, nonce);
    let mut blknum = 0u32;
    let mut blocks = output.chunks_exact_mut(CHACHA20_BLOCK_SIZE);
    for chunk in &mut blocks {
        ChaCha20::block_into(&cipher.state, blknum, chunk);
        blknum = blknum.wrapping_add(1);
    }

    let tail = blocks.into_remainder();
    if !tail.is_empty() {
        let mut block = EphemeralSecret::new([0u8; CHACHA20_BLOCK_SIZE]);
        ChaCha20::block_into(&cipher.state, blknum, &mut block[..]);
        tail.copy_from_slice(&block[..tail.len()]);
    }
    Ok(())
}

/// Produce `length` keystream bytes starting at block 0
#[cfg(feature = "alloc")]
pub fn stream(length: usize, nonce: u64, key: &[u8; CHACHA20_KEY_SIZE]) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0u8; length];
    stream_into(&mut out, nonce, key)?;
    Ok(out)
}
