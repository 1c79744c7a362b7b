//! Byte encodings of public and secret values

use crate::Result;
use zeroize::Zeroizing;

/// Public values with a fixed wire encoding
pub trait Serialize: Sized {
    /// Decode, rejecting input of the wrong length
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encode into a fresh buffer
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values; the encoding is handed out in a buffer wiped on drop
pub trait SerializeSecret: Sized {
    /// Decode, rejecting input of the wrong length
    ///
    /// The caller still owns `bytes` and is responsible for wiping it.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encode into a buffer that zeroizes itself when dropped
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
