//! Constants for the NewHope key exchange (N = 1024, Q = 12289)

/// Number of coefficients per polynomial
pub const NEWHOPE_N: usize = 1024;

/// Coefficient modulus
pub const NEWHOPE_Q: u16 = 12289;

/// Serialized polynomial size: 14 bits x 1024 / 8
pub const NEWHOPE_POLY_BYTES: usize = 1792;

/// Seed size for the ChaCha20 expander and the public `a` seed
pub const NEWHOPE_SEED_BYTES: usize = 32;

/// Packed reconciliation hint size: 2 bits x 1024 / 8
pub const NEWHOPE_REC_BYTES: usize = 256;

/// First message: serialized polynomial followed by the public seed
pub const NEWHOPE_SENDA_BYTES: usize = NEWHOPE_POLY_BYTES + NEWHOPE_SEED_BYTES;

/// Second message: serialized polynomial followed by the packed hint
pub const NEWHOPE_SENDB_BYTES: usize = NEWHOPE_POLY_BYTES + NEWHOPE_REC_BYTES;

/// Reconciled shared secret size
pub const NEWHOPE_SHARED_BYTES: usize = 32;

/// Coefficients packed into one 7-byte group of the wire form
pub const NEWHOPE_COEFFS_PER_GROUP: usize = 4;

/// Bytes per 4-coefficient group of the wire form
pub const NEWHOPE_BYTES_PER_GROUP: usize = 7;

/// Number of 4-dimensional reconciliation groups (N / 4)
pub const NEWHOPE_REC_GROUPS: usize = NEWHOPE_N / 4;

/// -Q^-1 mod 2^18
pub const NEWHOPE_QINV: u32 = 12287;

/// log2 of the Montgomery radix R = 2^18
pub const NEWHOPE_RLOG: u32 = 18;

/// Barrett multiplier: floor(2^16 / Q) rounded to 5
pub const NEWHOPE_BARRETT_MUL: u32 = 5;

/// Barrett shift
pub const NEWHOPE_BARRETT_SHIFT: u32 = 16;

/// Fixed-point reciprocal used by the reconciliation quantizers (~2^25 / Q)
pub const NEWHOPE_REC_RECIP: i32 = 2730;

/// Shift paired with [`NEWHOPE_REC_RECIP`] for division by Q
pub const NEWHOPE_REC_SHIFT_Q: u32 = 25;

/// Shift paired with [`NEWHOPE_REC_RECIP`] for division by 4Q
pub const NEWHOPE_REC_SHIFT_4Q: u32 = 27;
