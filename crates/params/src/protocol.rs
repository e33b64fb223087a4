//! Wire and session constants

/// Address the server listens on and the client dials by default
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Size of the big-endian length header preceding every frame
pub const FRAME_HEADER_LEN: usize = 4;

/// Largest payload accepted in a single frame (64 KiB)
pub const MAX_FRAME_LEN: usize = 64 * 1024;

/// Bits of randomness drawn for a private scalar before reduction mod n
pub const DEFAULT_PRIVATE_KEY_BITS: usize = 256;

/// Smallest configurable private scalar size, the bit length of the secp256k1 order
pub const MIN_PRIVATE_KEY_BITS: usize = 256;
