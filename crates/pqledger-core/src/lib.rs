//! Single-process proof-of-work ledger whose signature and hash primitives
//! are chosen at runtime, for comparing classical ECDSA with post-quantum
//! signature schemes.
//!
//! ```no_run
//! use pqledger_core::{Blockchain, CryptoProvider, KeyGenerator, Transaction};
//!
//! let provider = CryptoProvider::from_names("Dilithium2", "sha512")?;
//! let alice = provider.generate_keypair();
//! let bob = provider.generate_keypair();
//!
//! let mut tx = Transaction::new(alice.address(), bob.address(), 30, provider);
//! tx.sign_transaction(&alice.secret_key)?;
//!
//! let mut chain = Blockchain::new(2, 1, provider)?;
//! chain.add_transaction(tx);
//! chain.mine_pending_transactions();
//! assert!(chain.is_valid());
//! assert_eq!(chain.get_balance(&bob.address()), 30);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod block;
pub mod chain;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod pow;
pub mod transaction;

pub use block::Block;
pub use chain::{Blockchain, MineOutcome};
pub use crypto::{
    decode_address, encode_address, CryptoProvider, HashAlgorithm, Hasher, KeyGenerator, KeyPair,
    SignatureAlgorithm, Signer, Verifier,
};
pub use error::{ChainError, CryptoError};
pub use transaction::Transaction;
