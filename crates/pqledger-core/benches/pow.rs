use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pqledger_core::{
    pow::mine_block, Block, CryptoProvider, HashAlgorithm, Hasher, KeyGenerator,
    SignatureAlgorithm, Signer, Transaction, Verifier,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const BENCH_ALGORITHMS: [SignatureAlgorithm; 4] = [
    SignatureAlgorithm::EcdsaSha256,
    SignatureAlgorithm::Dilithium2,
    SignatureAlgorithm::Falcon512,
    SignatureAlgorithm::Sphincs128f,
];

fn bench_sign_verify(c: &mut Criterion) {
    let message = b"Test Message";
    let mut group = c.benchmark_group("signature");
    for alg in BENCH_ALGORITHMS {
        let keys = alg.generate_keypair();
        let signature = alg.sign(&keys.secret_key, message).unwrap();

        group.bench_with_input(BenchmarkId::new("sign", alg), &keys, |b, keys| {
            b.iter(|| alg.sign(black_box(&keys.secret_key), black_box(message)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("verify", alg), &keys, |b, keys| {
            b.iter(|| alg.verify(black_box(&keys.public_key), black_box(message), &signature));
        });
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let data = vec![0xA5u8; 4096];
    let mut group = c.benchmark_group("hash");
    for alg in [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Shake256(64),
    ] {
        group.bench_function(BenchmarkId::from_parameter(alg), |b| {
            b.iter(|| alg.hash(black_box(&data)));
        });
    }
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_block_difficulty_1");
    for alg in BENCH_ALGORITHMS {
        let provider = CryptoProvider::new(alg, HashAlgorithm::Sha512);
        let mut rng = StdRng::seed_from_u64(42);
        let alice = provider.generate_keypair();
        let bob = provider.generate_keypair();
        let txs: Vec<Transaction> = (0..10)
            .map(|_| {
                let mut tx =
                    Transaction::new(alice.address(), bob.address(), rng.gen_range(1..10), provider);
                tx.sign_transaction(&alice.secret_key).unwrap();
                tx
            })
            .collect();

        let block = Block::with_timestamp(1, "0", txs, provider, 1_600_000_000_000);

        group.bench_function(BenchmarkId::from_parameter(alg), |b| {
            b.iter(|| {
                let _mined = mine_block(block.clone(), 1);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign_verify, bench_hash, bench_pow);
criterion_main!(benches);
