use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

use crate::crypto::{CryptoProvider, Hasher};
use crate::transaction::Transaction;

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn serialize_hash<S: Serializer>(hash: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    match hash {
        Some(bytes) => s.serialize_some(&hex::encode(bytes)),
        None => s.serialize_none(),
    }
}

/// An ordered batch of transactions plus proof-of-work metadata.
///
/// `hash` is whatever was stored when the block was sealed; validation always
/// compares it against [`Block::compute_hash`] over the current fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub nonce: u64,
    #[serde(serialize_with = "serialize_hash")]
    pub hash: Option<Vec<u8>>,
    #[serde(skip)]
    provider: CryptoProvider,
}

impl Block {
    pub fn new(
        index: u64,
        previous_hash: impl Into<String>,
        transactions: Vec<Transaction>,
        provider: CryptoProvider,
    ) -> Self {
        Self::with_timestamp(index, previous_hash, transactions, provider, now_millis())
    }

    pub fn with_timestamp(
        index: u64,
        previous_hash: impl Into<String>,
        transactions: Vec<Transaction>,
        provider: CryptoProvider,
        timestamp: u64,
    ) -> Self {
        Self {
            index,
            previous_hash: previous_hash.into(),
            transactions,
            timestamp,
            nonce: 0,
            hash: None,
            provider,
        }
    }

    pub fn provider(&self) -> CryptoProvider {
        self.provider
    }

    /// The full block, rendered as text: index, previous hash, every
    /// transaction in order, timestamp and nonce.
    pub fn hash_bytes(&self) -> Vec<u8> {
        let txs: String = self
            .transactions
            .iter()
            .map(Transaction::canonical_string)
            .collect();
        format!(
            "{}{}{}{}{}",
            self.index, self.previous_hash, txs, self.timestamp, self.nonce
        )
        .into_bytes()
    }

    pub fn compute_hash(&self) -> Vec<u8> {
        self.provider.hash(&self.hash_bytes())
    }

    pub fn hash_hex(&self) -> Option<String> {
        self.hash.as_deref().map(hex::encode)
    }

    /// All transactions carry valid signatures and the stored hash matches
    /// the current contents.
    pub fn is_valid(&self) -> bool {
        self.transactions.iter().all(Transaction::is_valid)
            && self.hash.as_deref() == Some(self.compute_hash().as_slice())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block #{}", self.index)?;
        writeln!(f, "Previous Hash: {}", self.previous_hash)?;
        writeln!(f, "Transactions:")?;
        for tx in &self.transactions {
            writeln!(f, "{tx}")?;
            writeln!(f, "  |")?;
        }
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        write!(f, "Hash: {}", self.hash_hex().unwrap_or_else(|| "-".into()))
    }
}
