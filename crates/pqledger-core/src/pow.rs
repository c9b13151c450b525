use std::time::Instant;

use tracing::info;

use crate::block::Block;

/// Mines the block by trying nonce 0, 1, 2, ... until the hash of the whole
/// block starts with `difficulty` zero bytes, then seals it with that hash.
///
/// The search is sequential and has no upper bound. Every attempt rehashes
/// the full block including all transactions.
pub fn mine_block(mut block: Block, difficulty: usize) -> Block {
    let started = Instant::now();
    loop {
        let hash = block.compute_hash();
        if meets_difficulty(&hash, difficulty) {
            info!(
                "Mined block {} with nonce {} and hash {} in {:?}",
                block.index,
                block.nonce,
                hex::encode(&hash),
                started.elapsed()
            );
            block.hash = Some(hash);
            return block;
        }
        block.nonce = block.nonce.wrapping_add(1);
    }
}

pub fn leading_zero_bytes(hash: &[u8]) -> usize {
    hash.iter().take_while(|b| **b == 0).count()
}

/// A digest shorter than `difficulty` never qualifies.
pub fn meets_difficulty(hash: &[u8], difficulty: usize) -> bool {
    hash.len() >= difficulty && leading_zero_bytes(&hash[..difficulty]) == difficulty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{CryptoProvider, HashAlgorithm, SignatureAlgorithm};

    fn provider(hash: HashAlgorithm) -> CryptoProvider {
        CryptoProvider::new(SignatureAlgorithm::EcdsaSha256, hash)
    }

    #[test]
    fn leading_zero_bytes_examples() {
        assert_eq!(leading_zero_bytes(&[0u8; 32]), 32);
        assert_eq!(leading_zero_bytes(&[0, 0, 1, 0]), 2);
        assert_eq!(leading_zero_bytes(&[0x0F, 0]), 0);
        assert_eq!(leading_zero_bytes(&[]), 0);
    }

    #[test]
    fn meets_difficulty_examples() {
        assert!(meets_difficulty(&[0xFF], 0));
        assert!(meets_difficulty(&[0, 0, 7], 2));
        assert!(!meets_difficulty(&[0, 1, 0], 2));
        assert!(!meets_difficulty(&[0], 2));
    }

    #[test]
    fn zero_difficulty_mines_immediately() {
        let block = Block::with_timestamp(1, "ab", vec![], provider(HashAlgorithm::Sha256), 7);
        let mined = mine_block(block.clone(), 0);
        assert_eq!(mined.nonce, 0);
        assert_eq!(mined.hash, Some(block.compute_hash()));
    }

    #[test]
    fn mine_block_example() {
        let block = Block::with_timestamp(1, "ab", vec![], provider(HashAlgorithm::Sha512), 7);
        let mined = mine_block(block, 1);
        let hash = mined.hash.clone().unwrap();
        assert_eq!(hash[0], 0);
        assert_eq!(hash, mined.compute_hash());
        assert!(mined.is_valid());
    }

    #[test]
    fn mine_block_with_short_xof() {
        let block = Block::with_timestamp(3, "cd", vec![], provider(HashAlgorithm::Shake128(2)), 9);
        let mined = mine_block(block, 2);
        assert_eq!(mined.hash, Some(vec![0, 0]));
    }

    #[test]
    fn first_qualifying_nonce_is_chosen() {
        let block = Block::with_timestamp(2, "ef", vec![], provider(HashAlgorithm::Sha256), 11);
        let mined = mine_block(block.clone(), 1);
        let mut probe = block;
        for nonce in 0..mined.nonce {
            probe.nonce = nonce;
            assert!(!meets_difficulty(&probe.compute_hash(), 1));
        }
    }
}
