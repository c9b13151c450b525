use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::crypto::{decode_address, CryptoProvider, Signer, Verifier};
use crate::error::CryptoError;

/// A value transfer between two addresses (base64 public keys).
///
/// Fields are public on purpose: nothing stops a caller from changing
/// `amount` after signing, and [`Transaction::is_valid`] is what catches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
    #[serde(serialize_with = "serialize_signature")]
    pub signature: Option<Vec<u8>>,
    #[serde(skip)]
    provider: CryptoProvider,
}

fn serialize_signature<S: Serializer>(sig: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    match sig {
        Some(bytes) => s.serialize_some(&STANDARD.encode(bytes)),
        None => s.serialize_none(),
    }
}

impl Transaction {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u64,
        provider: CryptoProvider,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
            signature: None,
            provider,
        }
    }

    pub fn provider(&self) -> CryptoProvider {
        self.provider
    }

    /// The bytes that get signed: sender, recipient and amount concatenated.
    pub fn message(&self) -> Vec<u8> {
        format!("{}{}{}", self.sender, self.recipient, self.amount).into_bytes()
    }

    /// Signs the current message, replacing any earlier signature.
    pub fn sign_transaction(&mut self, secret_key: &[u8]) -> Result<(), CryptoError> {
        let signature = self.provider.sign(secret_key, &self.message())?;
        debug!(
            algorithm = %self.provider.signature_algorithm(),
            amount = self.amount,
            signature_len = signature.len(),
            "signed transaction"
        );
        self.signature = Some(signature);
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        let Some(signature) = &self.signature else {
            return false;
        };
        let Some(public_key) = decode_address(&self.sender) else {
            return false;
        };
        self.provider.verify(&public_key, &self.message(), signature)
    }

    /// String form fed into the block hash. Includes the signature so that
    /// re-signing a transaction also changes the hash of its block.
    pub fn canonical_string(&self) -> String {
        let signature = self
            .signature
            .as_deref()
            .map(|sig| STANDARD.encode(sig))
            .unwrap_or_default();
        format!(
            "{}{}{}{}",
            self.sender, self.recipient, self.amount, signature
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signature = self
            .signature
            .as_deref()
            .map(|sig| STANDARD.encode(sig))
            .unwrap_or_else(|| "<unsigned>".to_string());
        writeln!(f, "  | Sender:     {}", self.sender)?;
        writeln!(f, "  | Recipient:  {}", self.recipient)?;
        writeln!(f, "  | Amount:     {}", self.amount)?;
        write!(f, "  | Signature:  {signature}")
    }
}
