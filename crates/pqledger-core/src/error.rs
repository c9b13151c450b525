use thiserror::Error;

/// Failures raised by the crypto layer. Verification never produces one of
/// these; a bad signature or key there simply verifies as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("unknown signature algorithm: {0}")]
    UnknownSignatureAlgorithm(String),

    #[error("unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    #[error("invalid secret key for {algorithm}: {reason}")]
    InvalidKey { algorithm: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("block size must be at least 1")]
    InvalidBlockSize,

    #[error("difficulty {difficulty} exceeds the {digest_len}-byte digest of the configured hash")]
    DifficultyTooHigh { difficulty: usize, digest_len: usize },

    #[error("block {index} failed validation")]
    InvalidBlock { index: u64 },

    #[error("block {index} does not link to the hash of block {}", .index - 1)]
    BrokenLink { index: u64 },
}
