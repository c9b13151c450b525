mod demo;
mod measure;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pqledger_core::{constants, HashAlgorithm, SignatureAlgorithm};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pqledger")]
#[command(about = "Compare classical and post-quantum signatures on a toy proof-of-work ledger")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign, mine, query balances, then tamper with the chain and re-validate
    Demo(DemoArgs),
    /// Measure key/signature sizes and sign, verify and mining times
    Measure(MeasureArgs),
    /// List supported signature and hash algorithms
    Algorithms,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Signature algorithm; repeat to run the demo once per algorithm
    #[arg(long = "signature", default_value = constants::DEFAULT_SIGNATURE_ALGORITHM)]
    signatures: Vec<String>,
    /// Hash algorithm, e.g. sha512 or shake_256_32
    #[arg(long, default_value = constants::DEFAULT_HASH_ALGORITHM)]
    hash: String,
    /// Maximum transactions per mined block
    #[arg(long, default_value_t = constants::DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    /// Leading zero bytes required in a mined block hash
    #[arg(long, default_value_t = constants::DEFAULT_DIFFICULTY)]
    difficulty: usize,
    /// Print the final chain as JSON
    #[arg(long)]
    dump_json: bool,
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Signature algorithms to measure; defaults to the benchmark set
    #[arg(long = "signature")]
    signatures: Vec<String>,
    /// Hash algorithm used by every chain
    #[arg(long, default_value = constants::DEFAULT_HASH_ALGORITHM)]
    hash: String,
    /// Fresh chains built per algorithm for the timing figures
    #[arg(long, default_value_t = constants::MEASURE_REPEAT_COUNT)]
    repeat: usize,
    #[arg(long, default_value_t = constants::DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    #[arg(long, default_value_t = constants::MEASURE_DIFFICULTY)]
    difficulty: usize,
    /// Transactions added before mining in the storage figure
    #[arg(long, default_value_t = constants::MEASURE_TRANSACTIONS)]
    transactions: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => {
            for name in &args.signatures {
                demo::run(
                    name,
                    &args.hash,
                    args.block_size,
                    args.difficulty,
                    args.dump_json,
                )?;
            }
        }
        Command::Measure(args) => {
            let names = if args.signatures.is_empty() {
                measure::BENCHMARK_SET.iter().map(|s| s.to_string()).collect()
            } else {
                args.signatures
            };
            let config = measure::MeasureConfig {
                repeat: args.repeat,
                block_size: args.block_size,
                difficulty: args.difficulty,
                transactions: args.transactions,
            };
            let results = names
                .iter()
                .map(|name| measure::measure(name, &args.hash, &config))
                .collect::<Result<Vec<_>>>()?;
            match args.format {
                OutputFormat::Table => print!("{}", measure::render_table(&results)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            }
        }
        Command::Algorithms => {
            println!("Signature algorithms:");
            for alg in SignatureAlgorithm::ALL {
                let kind = if alg.is_post_quantum() {
                    "post-quantum"
                } else {
                    "classical"
                };
                println!("  {:<28} {kind}", alg.to_string());
            }
            println!("Hash algorithms:");
            for alg in HashAlgorithm::FIXED {
                println!("  {:<28} {} bytes", alg.to_string(), alg.output_len());
            }
            for name in HashAlgorithm::XOF_NAMES {
                println!("  {name:<28} variable");
            }
        }
    }
    Ok(())
}
