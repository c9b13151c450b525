use std::time::{Duration, Instant};

use anyhow::Result;
use pqledger_core::{Blockchain, CryptoProvider, KeyGenerator, Signer, Transaction};
use serde::Serialize;
use tracing::info;

pub const BENCHMARK_SET: [&str; 8] = [
    "ECDSA-SHA256",
    "Falcon-512",
    "Falcon-1024",
    "Dilithium2",
    "Dilithium3",
    "Dilithium5",
    "SPHINCS+-SHA2-256f-simple",
    "SPHINCS+-SHA2-256s-simple",
];

#[derive(Debug, Clone)]
pub struct MeasureConfig {
    pub repeat: usize,
    pub block_size: usize,
    pub difficulty: usize,
    pub transactions: usize,
}

/// Per-algorithm figures. Times are means in milliseconds; storage is the
/// mean JSON size of the chain in bytes.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub algorithm: String,
    pub public_key_size: usize,
    pub secret_key_size: usize,
    pub signature_size: usize,
    pub transaction_ms: f64,
    pub verification_ms: f64,
    pub mining_ms: f64,
    pub storage_bytes: f64,
}

fn mean_ms(samples: &[Duration]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|d| d.as_secs_f64() * 1000.0).sum::<f64>() / samples.len() as f64
}

fn mean(samples: &[usize]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<usize>() as f64 / samples.len() as f64
}

pub fn measure(signature: &str, hash: &str, config: &MeasureConfig) -> Result<Measurement> {
    let provider = CryptoProvider::from_names(signature, hash)?;
    info!(%provider, repeat = config.repeat, "measuring");

    let keys = provider.generate_keypair();
    let sample = provider.sign(&keys.secret_key, b"Test Message")?;

    let mut transaction_times = Vec::with_capacity(config.repeat);
    let mut verification_times = Vec::with_capacity(config.repeat);
    let mut mining_times = Vec::with_capacity(config.repeat);
    for _ in 0..config.repeat {
        let mut chain = Blockchain::new(config.block_size, config.difficulty, provider)?;
        let sender = provider.generate_keypair();
        let recipient = provider.generate_keypair();

        let start = Instant::now();
        let mut tx = Transaction::new(sender.address(), recipient.address(), 10, provider);
        tx.sign_transaction(&sender.secret_key)?;
        transaction_times.push(start.elapsed());

        let start = Instant::now();
        let valid = tx.is_valid();
        verification_times.push(start.elapsed());
        anyhow::ensure!(valid, "{provider}: freshly signed transaction did not verify");

        chain.add_transaction(tx);
        let start = Instant::now();
        chain.mine_pending_transactions();
        mining_times.push(start.elapsed());
    }

    let mut storage = Vec::with_capacity(config.repeat);
    for _ in 0..config.repeat {
        let mut chain = Blockchain::new(config.block_size, config.difficulty, provider)?;
        let sender = provider.generate_keypair();
        let recipient = provider.generate_keypair();
        for _ in 0..config.transactions {
            let mut tx = Transaction::new(sender.address(), recipient.address(), 10, provider);
            tx.sign_transaction(&sender.secret_key)?;
            chain.add_transaction(tx);
        }
        chain.mine_pending_transactions();
        storage.push(chain.serialized_size());
    }

    Ok(Measurement {
        algorithm: signature.to_string(),
        public_key_size: keys.public_key.len(),
        secret_key_size: keys.secret_key.len(),
        signature_size: sample.len(),
        transaction_ms: mean_ms(&transaction_times),
        verification_ms: mean_ms(&verification_times),
        mining_ms: mean_ms(&mining_times),
        storage_bytes: mean(&storage),
    })
}

pub fn render_table(results: &[Measurement]) -> String {
    let mut out = format!(
        "{:<28} {:>8} {:>8} {:>8} {:>10} {:>10} {:>10} {:>12}\n",
        "algorithm", "pk", "sk", "sig", "sign ms", "verify ms", "mine ms", "storage B"
    );
    for m in results {
        out.push_str(&format!(
            "{:<28} {:>8} {:>8} {:>8} {:>10.3} {:>10.3} {:>10.3} {:>12.0}\n",
            m.algorithm,
            m.public_key_size,
            m.secret_key_size,
            m.signature_size,
            m.transaction_ms,
            m.verification_ms,
            m.mining_ms,
            m.storage_bytes
        ));
    }
    out
}
