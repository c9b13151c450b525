use anyhow::Result;
use pqledger_core::{Blockchain, CryptoProvider, KeyGenerator, MineOutcome, Transaction};
use tracing::info;

fn signed(
    provider: CryptoProvider,
    sender: &str,
    recipient: &str,
    amount: u64,
    secret_key: &[u8],
) -> Result<Transaction> {
    let mut tx = Transaction::new(sender, recipient, amount, provider);
    tx.sign_transaction(secret_key)?;
    Ok(tx)
}

fn print_balances(chain: &Blockchain, addresses: [&str; 2]) {
    for (i, address) in addresses.iter().enumerate() {
        println!(
            "Balance of address{}({}...): {}",
            i + 1,
            &address[..address.len().min(16)],
            chain.get_balance(address)
        );
    }
}

fn report(outcome: &MineOutcome) {
    match outcome {
        MineOutcome::NothingToMine => println!("No transactions to mine."),
        MineOutcome::Mined {
            index,
            nonce,
            transactions,
            ..
        } => println!("Mined block #{index} with {transactions} transaction(s), nonce {nonce}"),
    }
}

/// A→B:30, B→A:10, B→A:15; mine twice, validate, tamper with block 1 and
/// validate again.
pub fn run(
    signature: &str,
    hash: &str,
    block_size: usize,
    difficulty: usize,
    dump_json: bool,
) -> Result<()> {
    let provider = CryptoProvider::from_names(signature, hash)?;
    info!(%provider, block_size, difficulty, "starting demo");
    println!("=== {provider} ===");

    let alice = provider.generate_keypair();
    let bob = provider.generate_keypair();
    let (a, b) = (alice.address(), bob.address());

    let mut chain = Blockchain::new(block_size, difficulty, provider)?;
    chain.add_transaction(signed(provider, &a, &b, 30, &alice.secret_key)?);
    chain.add_transaction(signed(provider, &b, &a, 10, &bob.secret_key)?);
    chain.add_transaction(signed(provider, &b, &a, 15, &bob.secret_key)?);

    report(&chain.mine_pending_transactions());
    println!("\nChecking the balances of the addresses...");
    print_balances(&chain, [&a, &b]);

    println!("\nMining the last pending transaction...");
    report(&chain.mine_pending_transactions());
    println!("Checking the balances of the addresses again...");
    print_balances(&chain, [&a, &b]);

    println!("\nChecking the validity of the blockchain...");
    println!("Blockchain validity: {}", chain.is_valid());

    if let Some(tx) = chain
        .chain_mut()
        .get_mut(1)
        .and_then(|block| block.transactions.last_mut())
    {
        tx.amount = 20;
        println!("Modifying blockchain...");
        match chain.validate() {
            Ok(()) => println!("Blockchain validity: true"),
            Err(e) => println!("Blockchain validity: false ({e})"),
        }
    }

    if dump_json {
        println!("{}", serde_json::to_string_pretty(&chain)?);
    }
    println!();
    Ok(())
}
