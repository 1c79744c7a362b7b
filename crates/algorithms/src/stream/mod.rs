//! Keystream generators
//!
//! NewHope uses ChaCha20 purely as a deterministic expander: a 32-byte seed
//! and a 64-bit nonce are stretched into the random bits consumed by
//! reconciliation and noise sampling. Nothing here encrypts messages.

/// ChaCha family of keystream generators
pub mod chacha;

pub use chacha::chacha20::{
    core_block, core_block_from_slice, stream_into, ChaCha20, CHACHA20_BLOCK_SIZE,
    CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE,
};
#[cfg(feature = "alloc")]
pub use chacha::chacha20::stream;

use crate::error::{validate, Result};

/// Common interface of seekable keystream generators
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// XOR keystream into `data`
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Reset the generator to its initial block
    fn reset(&mut self) -> Result<()>;

    /// Seek to a block boundary
    fn seek(&mut self, block: u64) -> Result<()>;
}

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        ChaCha20::keystream(self, output)
    }

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    fn reset(&mut self) -> Result<()> {
        ChaCha20::reset(self);
        Ok(())
    }

    fn seek(&mut self, block: u64) -> Result<()> {
        validate::parameter(
            block <= u32::MAX as u64,
            "block",
            "ChaCha20 block number must fit in u32",
        )?;
        ChaCha20::seek(self, block as u32);
        Ok(())
    }
}
