pub const GENESIS_PREVIOUS_HASH: &str = "0";
pub const DEFAULT_BLOCK_SIZE: usize = 2;
pub const DEFAULT_DIFFICULTY: usize = 3;
pub const DEFAULT_SIGNATURE_ALGORITHM: &str = "Falcon-512";
pub const DEFAULT_HASH_ALGORITHM: &str = "sha512";
/// Upper bound on the output length of `shake_128_<n>` / `shake_256_<n>`.
pub const MAX_XOF_BYTES: usize = 1024;
pub const MEASURE_REPEAT_COUNT: usize = 10;
pub const MEASURE_TRANSACTIONS: usize = 10;
pub const MEASURE_DIFFICULTY: usize = 1;
