#![allow(dead_code)]

use pqledger_core::{
    Blockchain, CryptoProvider, HashAlgorithm, KeyGenerator, KeyPair, SignatureAlgorithm,
    Transaction,
};

pub fn provider(alg: SignatureAlgorithm) -> CryptoProvider {
    CryptoProvider::new(alg, HashAlgorithm::Sha512)
}

pub fn two_parties(provider: CryptoProvider) -> (KeyPair, KeyPair) {
    (provider.generate_keypair(), provider.generate_keypair())
}

pub fn signed_transfer(
    provider: CryptoProvider,
    from: &KeyPair,
    to: &KeyPair,
    amount: u64,
) -> Transaction {
    let mut tx = Transaction::new(from.address(), to.address(), amount, provider);
    tx.sign_transaction(&from.secret_key)
        .expect("Failed to sign transaction");
    tx
}

/// Block size 2, difficulty 1, with A->B:30, B->A:10, B->A:15 pending.
pub fn three_transfer_chain(provider: CryptoProvider) -> (Blockchain, KeyPair, KeyPair) {
    let (a, b) = two_parties(provider);
    let mut chain = Blockchain::new(2, 1, provider).expect("Failed to create blockchain");
    chain.add_transaction(signed_transfer(provider, &a, &b, 30));
    chain.add_transaction(signed_transfer(provider, &b, &a, 10));
    chain.add_transaction(signed_transfer(provider, &b, &a, 15));
    (chain, a, b)
}
