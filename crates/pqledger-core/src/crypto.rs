//! Signature and digest primitives, selected at runtime by algorithm name.
//!
//! Every algorithm sits behind the same four capabilities ([`KeyGenerator`],
//! [`Signer`], [`Verifier`], [`Hasher`]) so the ledger never needs to know
//! which scheme it is running on. Key and signature bytes are the raw
//! encodings of the underlying library: compressed SEC1 keys, raw 32-byte
//! secrets and DER signatures for ECDSA; the reference encodings for the
//! post-quantum schemes.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use once_cell::sync::Lazy;
use pqcrypto_dilithium::{dilithium2, dilithium3, dilithium5};
use pqcrypto_falcon::{falcon1024, falcon512};
use pqcrypto_sphincsplus::{
    sphincssha2128fsimple, sphincssha2128ssimple, sphincssha2192fsimple, sphincssha2192ssimple,
    sphincssha2256fsimple, sphincssha2256ssimple, sphincsshake128fsimple, sphincsshake128ssimple,
    sphincsshake192fsimple, sphincsshake192ssimple, sphincsshake256fsimple, sphincsshake256ssimple,
};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use secp256k1::{ecdsa::Signature, rand::rngs::OsRng, All, Message, PublicKey, Secp256k1, SecretKey};
use serde::{Serialize, Serializer};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::digest::ExtendableOutput;
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::constants::MAX_XOF_BYTES;
use crate::error::CryptoError;

static SECP256K1_CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// A freshly generated key pair. The public key, base64-encoded, is the
/// owner's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub secret_key: Vec<u8>,
}

impl KeyPair {
    pub fn new(public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    pub fn address(&self) -> String {
        encode_address(&self.public_key)
    }
}

pub fn encode_address(public_key: &[u8]) -> String {
    STANDARD.encode(public_key)
}

/// Returns `None` when the address is not valid base64.
pub fn decode_address(address: &str) -> Option<Vec<u8>> {
    STANDARD.decode(address).ok()
}

pub trait KeyGenerator {
    fn generate_keypair(&self) -> KeyPair;
}

pub trait Signer {
    fn sign(&self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Verification is a predicate: malformed keys and signatures verify as `false`.
pub trait Verifier {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool;
}

pub trait Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8>;

    /// Number of bytes every call to [`Hasher::hash`] returns.
    fn digest_len(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// ECDSA over secp256k1, SHA-256 applied to the message before signing.
    EcdsaSha256,
    Dilithium2,
    Dilithium3,
    Dilithium5,
    Falcon512,
    Falcon1024,
    /// SPHINCS+-SHA2-128f-simple
    Sphincs128f,
    /// SPHINCS+-SHA2-128s-simple
    Sphincs128s,
    Sphincs192f,
    Sphincs192s,
    /// SPHINCS+-SHA2-256f-simple
    Sphincs256f,
    /// SPHINCS+-SHA2-256s-simple
    Sphincs256s,
    /// SPHINCS+-SHAKE-128f-simple
    SphincsShake128f,
    SphincsShake128s,
    SphincsShake192f,
    SphincsShake192s,
    SphincsShake256f,
    SphincsShake256s,
}

impl SignatureAlgorithm {
    pub const ALL: [SignatureAlgorithm; 18] = [
        SignatureAlgorithm::EcdsaSha256,
        SignatureAlgorithm::Dilithium2,
        SignatureAlgorithm::Dilithium3,
        SignatureAlgorithm::Dilithium5,
        SignatureAlgorithm::Falcon512,
        SignatureAlgorithm::Falcon1024,
        SignatureAlgorithm::Sphincs128f,
        SignatureAlgorithm::Sphincs128s,
        SignatureAlgorithm::Sphincs192f,
        SignatureAlgorithm::Sphincs192s,
        SignatureAlgorithm::Sphincs256f,
        SignatureAlgorithm::Sphincs256s,
        SignatureAlgorithm::SphincsShake128f,
        SignatureAlgorithm::SphincsShake128s,
        SignatureAlgorithm::SphincsShake192f,
        SignatureAlgorithm::SphincsShake192s,
        SignatureAlgorithm::SphincsShake256f,
        SignatureAlgorithm::SphincsShake256s,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignatureAlgorithm::EcdsaSha256 => "ECDSA-SHA256",
            SignatureAlgorithm::Dilithium2 => "Dilithium2",
            SignatureAlgorithm::Dilithium3 => "Dilithium3",
            SignatureAlgorithm::Dilithium5 => "Dilithium5",
            SignatureAlgorithm::Falcon512 => "Falcon-512",
            SignatureAlgorithm::Falcon1024 => "Falcon-1024",
            SignatureAlgorithm::Sphincs128f => "SPHINCS+-SHA2-128f-simple",
            SignatureAlgorithm::Sphincs128s => "SPHINCS+-SHA2-128s-simple",
            SignatureAlgorithm::Sphincs192f => "SPHINCS+-SHA2-192f-simple",
            SignatureAlgorithm::Sphincs192s => "SPHINCS+-SHA2-192s-simple",
            SignatureAlgorithm::Sphincs256f => "SPHINCS+-SHA2-256f-simple",
            SignatureAlgorithm::Sphincs256s => "SPHINCS+-SHA2-256s-simple",
            SignatureAlgorithm::SphincsShake128f => "SPHINCS+-SHAKE-128f-simple",
            SignatureAlgorithm::SphincsShake128s => "SPHINCS+-SHAKE-128s-simple",
            SignatureAlgorithm::SphincsShake192f => "SPHINCS+-SHAKE-192f-simple",
            SignatureAlgorithm::SphincsShake192s => "SPHINCS+-SHAKE-192s-simple",
            SignatureAlgorithm::SphincsShake256f => "SPHINCS+-SHAKE-256f-simple",
            SignatureAlgorithm::SphincsShake256s => "SPHINCS+-SHAKE-256s-simple",
        }
    }

    pub fn is_post_quantum(self) -> bool {
        self != SignatureAlgorithm::EcdsaSha256
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| CryptoError::UnknownSignatureAlgorithm(s.to_string()))
    }
}

impl Serialize for SignatureAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

macro_rules! pq_keypair {
    ($scheme:ident) => {{
        let (pk, sk) = $scheme::keypair();
        KeyPair::new(pk.as_bytes().to_vec(), sk.as_bytes().to_vec())
    }};
}

macro_rules! pq_sign {
    ($scheme:ident, $alg:expr, $secret_key:expr, $message:expr) => {{
        let sk = $scheme::SecretKey::from_bytes($secret_key)
            .map_err(|_| invalid_key($alg, format!("expected {} bytes", $scheme::secret_key_bytes())))?;
        Ok($scheme::detached_sign($message, &sk).as_bytes().to_vec())
    }};
}

macro_rules! pq_verify {
    ($scheme:ident, $public_key:expr, $message:expr, $signature:expr) => {{
        match (
            $scheme::PublicKey::from_bytes($public_key),
            $scheme::DetachedSignature::from_bytes($signature),
        ) {
            (Ok(pk), Ok(sig)) => $scheme::verify_detached_signature(&sig, $message, &pk).is_ok(),
            _ => false,
        }
    }};
}

fn invalid_key(algorithm: SignatureAlgorithm, reason: impl Into<String>) -> CryptoError {
    CryptoError::InvalidKey {
        algorithm: algorithm.name().to_string(),
        reason: reason.into(),
    }
}

fn ecdsa_message(message: &[u8]) -> Message {
    Message::from_digest(Sha256::digest(message).into())
}

fn ecdsa_keypair() -> KeyPair {
    let secret_key = SecretKey::new(&mut OsRng);
    let public_key = PublicKey::from_secret_key(&SECP256K1_CONTEXT, &secret_key);
    KeyPair::new(
        public_key.serialize().to_vec(),
        secret_key.secret_bytes().to_vec(),
    )
}

fn ecdsa_sign(secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let secret_key = SecretKey::from_slice(secret_key)
        .map_err(|e| invalid_key(SignatureAlgorithm::EcdsaSha256, e.to_string()))?;
    let signature = SECP256K1_CONTEXT.sign_ecdsa(&ecdsa_message(message), &secret_key);
    Ok(signature.serialize_der().to_vec())
}

fn ecdsa_verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let (Ok(public_key), Ok(signature)) =
        (PublicKey::from_slice(public_key), Signature::from_der(signature))
    else {
        return false;
    };
    SECP256K1_CONTEXT
        .verify_ecdsa(&ecdsa_message(message), &signature, &public_key)
        .is_ok()
}

impl KeyGenerator for SignatureAlgorithm {
    fn generate_keypair(&self) -> KeyPair {
        match self {
            SignatureAlgorithm::EcdsaSha256 => ecdsa_keypair(),
            SignatureAlgorithm::Dilithium2 => pq_keypair!(dilithium2),
            SignatureAlgorithm::Dilithium3 => pq_keypair!(dilithium3),
            SignatureAlgorithm::Dilithium5 => pq_keypair!(dilithium5),
            SignatureAlgorithm::Falcon512 => pq_keypair!(falcon512),
            SignatureAlgorithm::Falcon1024 => pq_keypair!(falcon1024),
            SignatureAlgorithm::Sphincs128f => pq_keypair!(sphincssha2128fsimple),
            SignatureAlgorithm::Sphincs128s => pq_keypair!(sphincssha2128ssimple),
            SignatureAlgorithm::Sphincs192f => pq_keypair!(sphincssha2192fsimple),
            SignatureAlgorithm::Sphincs192s => pq_keypair!(sphincssha2192ssimple),
            SignatureAlgorithm::Sphincs256f => pq_keypair!(sphincssha2256fsimple),
            SignatureAlgorithm::Sphincs256s => pq_keypair!(sphincssha2256ssimple),
            SignatureAlgorithm::SphincsShake128f => pq_keypair!(sphincsshake128fsimple),
            SignatureAlgorithm::SphincsShake128s => pq_keypair!(sphincsshake128ssimple),
            SignatureAlgorithm::SphincsShake192f => pq_keypair!(sphincsshake192fsimple),
            SignatureAlgorithm::SphincsShake192s => pq_keypair!(sphincsshake192ssimple),
            SignatureAlgorithm::SphincsShake256f => pq_keypair!(sphincsshake256fsimple),
            SignatureAlgorithm::SphincsShake256s => pq_keypair!(sphincsshake256ssimple),
        }
    }
}

impl Signer for SignatureAlgorithm {
    fn sign(&self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let alg = *self;
        match alg {
            SignatureAlgorithm::EcdsaSha256 => ecdsa_sign(secret_key, message),
            SignatureAlgorithm::Dilithium2 => pq_sign!(dilithium2, alg, secret_key, message),
            SignatureAlgorithm::Dilithium3 => pq_sign!(dilithium3, alg, secret_key, message),
            SignatureAlgorithm::Dilithium5 => pq_sign!(dilithium5, alg, secret_key, message),
            SignatureAlgorithm::Falcon512 => pq_sign!(falcon512, alg, secret_key, message),
            SignatureAlgorithm::Falcon1024 => pq_sign!(falcon1024, alg, secret_key, message),
            SignatureAlgorithm::Sphincs128f => {
                pq_sign!(sphincssha2128fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::Sphincs128s => {
                pq_sign!(sphincssha2128ssimple, alg, secret_key, message)
            }
            SignatureAlgorithm::Sphincs192f => {
                pq_sign!(sphincssha2192fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::Sphincs192s => {
                pq_sign!(sphincssha2192ssimple, alg, secret_key, message)
            }
            SignatureAlgorithm::Sphincs256f => {
                pq_sign!(sphincssha2256fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::Sphincs256s => {
                pq_sign!(sphincssha2256ssimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake128f => {
                pq_sign!(sphincsshake128fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake128s => {
                pq_sign!(sphincsshake128ssimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake192f => {
                pq_sign!(sphincsshake192fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake192s => {
                pq_sign!(sphincsshake192ssimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake256f => {
                pq_sign!(sphincsshake256fsimple, alg, secret_key, message)
            }
            SignatureAlgorithm::SphincsShake256s => {
                pq_sign!(sphincsshake256ssimple, alg, secret_key, message)
            }
        }
    }
}

impl Verifier for SignatureAlgorithm {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
        match self {
            SignatureAlgorithm::EcdsaSha256 => ecdsa_verify(public_key, message, signature),
            SignatureAlgorithm::Dilithium2 => pq_verify!(dilithium2, public_key, message, signature),
            SignatureAlgorithm::Dilithium3 => pq_verify!(dilithium3, public_key, message, signature),
            SignatureAlgorithm::Dilithium5 => pq_verify!(dilithium5, public_key, message, signature),
            SignatureAlgorithm::Falcon512 => pq_verify!(falcon512, public_key, message, signature),
            SignatureAlgorithm::Falcon1024 => pq_verify!(falcon1024, public_key, message, signature),
            SignatureAlgorithm::Sphincs128f => {
                pq_verify!(sphincssha2128fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::Sphincs128s => {
                pq_verify!(sphincssha2128ssimple, public_key, message, signature)
            }
            SignatureAlgorithm::Sphincs192f => {
                pq_verify!(sphincssha2192fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::Sphincs192s => {
                pq_verify!(sphincssha2192ssimple, public_key, message, signature)
            }
            SignatureAlgorithm::Sphincs256f => {
                pq_verify!(sphincssha2256fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::Sphincs256s => {
                pq_verify!(sphincssha2256ssimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake128f => {
                pq_verify!(sphincsshake128fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake128s => {
                pq_verify!(sphincsshake128ssimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake192f => {
                pq_verify!(sphincsshake192fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake192s => {
                pq_verify!(sphincsshake192ssimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake256f => {
                pq_verify!(sphincsshake256fsimple, public_key, message, signature)
            }
            SignatureAlgorithm::SphincsShake256s => {
                pq_verify!(sphincsshake256ssimple, public_key, message, signature)
            }
        }
    }
}

/// Digest selection. The SHAKE variants carry the requested output length in
/// bytes and are named `shake_128_<n>` / `shake_256_<n>`, with `n` at most
/// [`MAX_XOF_BYTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    /// BLAKE2b with its full 64-byte digest.
    Blake2b,
    /// BLAKE2s with its full 32-byte digest.
    Blake2s,
    Shake128(usize),
    Shake256(usize),
}

impl HashAlgorithm {
    /// The fixed-output digests. SHAKE variants are parameterized and listed
    /// separately by [`HashAlgorithm::XOF_NAMES`].
    pub const FIXED: [HashAlgorithm; 14] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
    ];

    pub const XOF_NAMES: [&'static str; 2] = ["shake_128_<bytes>", "shake_256_<bytes>"];

    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha512_256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Blake2s => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Blake2b => 64,
            HashAlgorithm::Shake128(len) | HashAlgorithm::Shake256(len) => len,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => f.write_str("md5"),
            HashAlgorithm::Sha1 => f.write_str("sha1"),
            HashAlgorithm::Sha224 => f.write_str("sha224"),
            HashAlgorithm::Sha256 => f.write_str("sha256"),
            HashAlgorithm::Sha384 => f.write_str("sha384"),
            HashAlgorithm::Sha512 => f.write_str("sha512"),
            HashAlgorithm::Sha512_224 => f.write_str("sha512_224"),
            HashAlgorithm::Sha512_256 => f.write_str("sha512_256"),
            HashAlgorithm::Sha3_224 => f.write_str("sha3_224"),
            HashAlgorithm::Sha3_256 => f.write_str("sha3_256"),
            HashAlgorithm::Sha3_384 => f.write_str("sha3_384"),
            HashAlgorithm::Sha3_512 => f.write_str("sha3_512"),
            HashAlgorithm::Blake2b => f.write_str("blake2b"),
            HashAlgorithm::Blake2s => f.write_str("blake2s"),
            HashAlgorithm::Shake128(len) => write!(f, "shake_128_{len}"),
            HashAlgorithm::Shake256(len) => write!(f, "shake_256_{len}"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CryptoError::UnknownHashAlgorithm(s.to_string());
        let name = s.to_ascii_lowercase();

        if let Some(fixed) = HashAlgorithm::FIXED
            .into_iter()
            .find(|alg| alg.to_string() == name)
        {
            return Ok(fixed);
        }

        let xof_len = |len: &str| match len.parse::<usize>() {
            Ok(len) if (1..=MAX_XOF_BYTES).contains(&len) => Ok(len),
            _ => Err(unknown()),
        };
        if let Some(len) = name.strip_prefix("shake_128_") {
            return Ok(HashAlgorithm::Shake128(xof_len(len)?));
        }
        if let Some(len) = name.strip_prefix("shake_256_") {
            return Ok(HashAlgorithm::Shake256(xof_len(len)?));
        }
        Err(unknown())
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn xof<H: ExtendableOutput + Default>(data: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    H::digest_xof(data, &mut out);
    out
}

impl Hasher for HashAlgorithm {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        match *self {
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Sha512_224 => Sha512_224::digest(data).to_vec(),
            HashAlgorithm::Sha512_256 => Sha512_256::digest(data).to_vec(),
            HashAlgorithm::Sha3_224 => Sha3_224::digest(data).to_vec(),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
            HashAlgorithm::Sha3_384 => Sha3_384::digest(data).to_vec(),
            HashAlgorithm::Sha3_512 => Sha3_512::digest(data).to_vec(),
            HashAlgorithm::Blake2b => Blake2b512::digest(data).to_vec(),
            HashAlgorithm::Blake2s => Blake2s256::digest(data).to_vec(),
            HashAlgorithm::Shake128(len) => xof::<Shake128>(data, len),
            HashAlgorithm::Shake256(len) => xof::<Shake256>(data, len),
        }
    }

    fn digest_len(&self) -> usize {
        self.output_len()
    }
}

/// The pair of algorithms a ledger runs on. Cheap to copy; carries no state
/// beyond the two selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CryptoProvider {
    signature_algorithm: SignatureAlgorithm,
    hash_algorithm: HashAlgorithm,
}

impl CryptoProvider {
    pub fn new(signature_algorithm: SignatureAlgorithm, hash_algorithm: HashAlgorithm) -> Self {
        Self {
            signature_algorithm,
            hash_algorithm,
        }
    }

    /// Builds a provider from runtime names such as `("Falcon-512", "sha512")`
    /// or `("ECDSA-SHA256", "shake_256_32")`.
    pub fn from_names(signature_algorithm: &str, hash_algorithm: &str) -> Result<Self, CryptoError> {
        Ok(Self::new(
            signature_algorithm.parse()?,
            hash_algorithm.parse()?,
        ))
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature_algorithm
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }
}

impl fmt::Display for CryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.signature_algorithm, self.hash_algorithm)
    }
}

impl KeyGenerator for CryptoProvider {
    fn generate_keypair(&self) -> KeyPair {
        self.signature_algorithm.generate_keypair()
    }
}

impl Signer for CryptoProvider {
    fn sign(&self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.signature_algorithm.sign(secret_key, message)
    }
}

impl Verifier for CryptoProvider {
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
        self.signature_algorithm.verify(public_key, message, signature)
    }
}

impl Hasher for CryptoProvider {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self.hash_algorithm.hash(data)
    }

    fn digest_len(&self) -> usize {
        self.hash_algorithm.output_len()
    }
}
