use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::block::Block;
use crate::constants::GENESIS_PREVIOUS_HASH;
use crate::crypto::{CryptoProvider, Hasher};
use crate::error::ChainError;
use crate::pow;
use crate::transaction::Transaction;

/// Result of [`Blockchain::mine_pending_transactions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MineOutcome {
    /// The pending pool was empty; nothing changed.
    NothingToMine,
    Mined {
        index: u64,
        nonce: u64,
        hash: Vec<u8>,
        transactions: usize,
    },
}

/// Single-owner in-memory ledger: the chain of sealed blocks plus a FIFO pool
/// of submitted transactions.
#[derive(Debug, Clone, Serialize)]
pub struct Blockchain {
    block_size: usize,
    difficulty: usize,
    provider: CryptoProvider,
    chain: Vec<Block>,
    pending_transactions: VecDeque<Transaction>,
}

impl Blockchain {
    /// Creates the chain with its genesis block.
    ///
    /// Fails when `block_size` is zero or when `difficulty` asks for more zero
    /// bytes than the configured digest has, since mining could never finish.
    pub fn new(
        block_size: usize,
        difficulty: usize,
        provider: CryptoProvider,
    ) -> Result<Self, ChainError> {
        if block_size == 0 {
            return Err(ChainError::InvalidBlockSize);
        }
        let digest_len = provider.digest_len();
        if difficulty > digest_len {
            return Err(ChainError::DifficultyTooHigh {
                difficulty,
                digest_len,
            });
        }

        let mut chain = Self {
            block_size,
            difficulty,
            provider,
            chain: Vec::new(),
            pending_transactions: VecDeque::new(),
        };
        chain.create_genesis_block();
        Ok(chain)
    }

    /// The genesis block is sealed with its plain hash; it is not mined.
    fn create_genesis_block(&mut self) {
        let mut genesis = Block::new(0, GENESIS_PREVIOUS_HASH, vec![], self.provider);
        genesis.hash = Some(genesis.compute_hash());
        debug!(provider = %self.provider, "created genesis block");
        self.chain.push(genesis);
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn provider(&self) -> CryptoProvider {
        self.provider
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Direct access to sealed blocks. Edits made here are exactly what
    /// [`Blockchain::validate`] is meant to detect.
    pub fn chain_mut(&mut self) -> &mut [Block] {
        &mut self.chain
    }

    pub fn pending_transactions(&self) -> &VecDeque<Transaction> {
        &self.pending_transactions
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false: the genesis block is created on construction.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn tip(&self) -> &Block {
        self.chain.last().expect("genesis block is always present")
    }

    /// Queues a transaction. Signatures are not checked here; an invalid
    /// transaction is only caught when the block holding it is validated.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.pending_transactions.push_back(transaction);
    }

    /// Mines up to `block_size` transactions from the front of the pool into
    /// a new block linked to the tip's recomputed hash.
    pub fn mine_pending_transactions(&mut self) -> MineOutcome {
        if self.pending_transactions.is_empty() {
            debug!("no transactions to mine");
            return MineOutcome::NothingToMine;
        }

        let take = self.block_size.min(self.pending_transactions.len());
        let batch: Vec<Transaction> = self.pending_transactions.iter().take(take).cloned().collect();
        let previous_hash = hex::encode(self.tip().compute_hash());
        let block = Block::new(self.chain.len() as u64, previous_hash, batch, self.provider);

        let mined = pow::mine_block(block, self.difficulty);
        let outcome = MineOutcome::Mined {
            index: mined.index,
            nonce: mined.nonce,
            hash: mined.hash.clone().unwrap_or_default(),
            transactions: take,
        };
        self.chain.push(mined);
        self.pending_transactions.drain(..take);
        outcome
    }

    /// Walks blocks 1.. and reports the first one that fails. Each block must
    /// be valid on its own and its `previous_hash` must equal the hash
    /// recomputed from the prior block's current contents; the stored `hash`
    /// of the prior block is never trusted for linkage.
    pub fn validate(&self) -> Result<(), ChainError> {
        for pair in self.chain.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if !current.is_valid() {
                warn!(index = current.index, "block failed validation");
                return Err(ChainError::InvalidBlock {
                    index: current.index,
                });
            }
            if current.previous_hash != hex::encode(previous.compute_hash()) {
                warn!(index = current.index, "block does not link to its predecessor");
                return Err(ChainError::BrokenLink {
                    index: current.index,
                });
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Net of every mined transfer into and out of `address`. Pending
    /// transactions do not count and the result may be negative.
    pub fn get_balance(&self, address: &str) -> i128 {
        let mut balance: i128 = 0;
        for tx in self.chain.iter().flat_map(|b| &b.transactions) {
            if tx.recipient == address {
                balance += i128::from(tx.amount);
            }
            if tx.sender == address {
                balance -= i128::from(tx.amount);
            }
        }
        balance
    }

    /// Size in bytes of the chain rendered as JSON; a storage estimate.
    pub fn serialized_size(&self) -> usize {
        serde_json::to_vec(self).map(|v| v.len()).unwrap_or_default()
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Blockchain with Blocksize {} and Difficulty {} ({})",
            self.block_size, self.difficulty, self.provider
        )?;
        for block in &self.chain {
            writeln!(f)?;
            writeln!(f, "{block}")?;
        }
        writeln!(f)?;
        writeln!(f, "Pending Transactions: {}", self.pending_transactions.len())?;
        for tx in &self.pending_transactions {
            writeln!(f, "{tx}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{HashAlgorithm, KeyGenerator, KeyPair, SignatureAlgorithm};

    fn provider() -> CryptoProvider {
        CryptoProvider::new(SignatureAlgorithm::EcdsaSha256, HashAlgorithm::Sha512)
    }

    fn transfer(p: CryptoProvider, from: &KeyPair, to: &KeyPair, amount: u64) -> Transaction {
        let mut tx = Transaction::new(from.address(), to.address(), amount, p);
        tx.sign_transaction(&from.secret_key).unwrap();
        tx
    }

    #[test]
    fn genesis_block_example() {
        let chain = Blockchain::new(2, 1, provider()).unwrap();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        let genesis = chain.tip();
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
        assert_eq!(genesis.hash, Some(genesis.compute_hash()));
        assert!(chain.is_valid());
    }

    #[test]
    fn rejects_impossible_configuration() {
        assert_eq!(
            Blockchain::new(0, 1, provider()).unwrap_err(),
            ChainError::InvalidBlockSize
        );
        let short = CryptoProvider::new(SignatureAlgorithm::EcdsaSha256, HashAlgorithm::Shake256(2));
        assert_eq!(
            Blockchain::new(1, 3, short).unwrap_err(),
            ChainError::DifficultyTooHigh {
                difficulty: 3,
                digest_len: 2
            }
        );
        assert!(Blockchain::new(1, 2, short).is_ok());
    }

    #[test]
    fn empty_pool_is_a_no_op() {
        let mut chain = Blockchain::new(2, 1, provider()).unwrap();
        assert_eq!(chain.mine_pending_transactions(), MineOutcome::NothingToMine);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn pool_is_fifo_and_drained_by_block_size() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(2, 0, p).unwrap();
        for amount in [1, 2, 3, 4, 5] {
            chain.add_transaction(transfer(p, &a, &b, amount));
        }
        assert!(matches!(
            chain.mine_pending_transactions(),
            MineOutcome::Mined { index: 1, transactions: 2, .. }
        ));
        let amounts: Vec<u64> = chain.tip().transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1, 2]);
        let pending: Vec<u64> = chain.pending_transactions().iter().map(|t| t.amount).collect();
        assert_eq!(pending, vec![3, 4, 5]);
    }

    #[test]
    fn mined_block_links_to_recomputed_tip_hash() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(1, 1, p).unwrap();
        chain.add_transaction(transfer(p, &a, &b, 7));
        let MineOutcome::Mined { hash, .. } = chain.mine_pending_transactions() else {
            panic!("expected a mined block");
        };
        assert_eq!(hash[0], 0);
        assert_eq!(chain.chain()[1].previous_hash, hex::encode(chain.chain()[0].compute_hash()));
    }

    #[test]
    fn unsigned_transaction_is_accepted_then_fails_validation() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(2, 0, p).unwrap();
        chain.add_transaction(Transaction::new(a.address(), b.address(), 5, p));
        assert_eq!(chain.pending_transactions().len(), 1);
        chain.mine_pending_transactions();
        assert_eq!(chain.validate(), Err(ChainError::InvalidBlock { index: 1 }));
    }

    #[test]
    fn forged_previous_hash_is_a_broken_link() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(2, 0, p).unwrap();
        chain.add_transaction(transfer(p, &a, &b, 5));
        chain.mine_pending_transactions();

        // Reseal block 1 with a wrong link so it is valid on its own.
        let block = &mut chain.chain_mut()[1];
        block.previous_hash = "00".into();
        block.hash = Some(block.compute_hash());
        assert!(block.is_valid());
        assert_eq!(chain.validate(), Err(ChainError::BrokenLink { index: 1 }));
    }

    #[test]
    fn tampering_with_older_block_is_detected_even_if_resealed() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(1, 0, p).unwrap();
        chain.add_transaction(transfer(p, &a, &b, 5));
        chain.add_transaction(transfer(p, &a, &b, 6));
        chain.mine_pending_transactions();
        chain.mine_pending_transactions();
        assert!(chain.is_valid());

        // Shift the timestamp (covered only by the block hash) and reseal
        // block 1: it is valid alone but block 2 no longer links.
        let block = &mut chain.chain_mut()[1];
        block.timestamp += 1;
        assert!(!block.is_valid());
        block.hash = Some(block.compute_hash());
        assert!(block.is_valid());
        assert_eq!(chain.validate(), Err(ChainError::BrokenLink { index: 2 }));
    }

    #[test]
    fn pending_transactions_do_not_affect_balance() {
        let p = provider();
        let a = p.generate_keypair();
        let b = p.generate_keypair();
        let mut chain = Blockchain::new(2, 0, p).unwrap();
        chain.add_transaction(transfer(p, &a, &b, 9));
        assert_eq!(chain.get_balance(&a.address()), 0);
        assert_eq!(chain.get_balance(&b.address()), 0);
        chain.mine_pending_transactions();
        assert_eq!(chain.get_balance(&a.address()), -9);
        assert_eq!(chain.get_balance(&b.address()), 9);
    }

    #[test]
    fn self_transfer_nets_to_zero() {
        let p = provider();
        let a = p.generate_keypair();
        let mut chain = Blockchain::new(2, 0, p).unwrap();
        chain.add_transaction(transfer(p, &a, &a, 50));
        chain.mine_pending_transactions();
        assert_eq!(chain.get_balance(&a.address()), 0);
    }

    #[test]
    fn display_and_size() {
        let chain = Blockchain::new(2, 1, provider()).unwrap();
        let text = chain.to_string();
        assert!(text.starts_with("Blockchain with Blocksize 2 and Difficulty 1"));
        assert!(text.contains("Block #0"));
        assert!(chain.serialized_size() > 0);
    }
}
