//! ol-genesis: build and inspect genesis account state offline.

use clap::Parser;
use ol_genesis::GenesisFile;
use ol_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ol-genesis", about = "Offline genesis builder for the account layer")]
struct Cli {
    /// Path to the TOML genesis file.
    #[arg(long, env = "OL_GENESIS")]
    genesis: PathBuf,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Defaults to the genesis file's `config.log_level`.
    #[arg(long, env = "OL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    /// Defaults to the genesis file's `config.log_format`.
    #[arg(long, env = "OL_LOG_FORMAT")]
    log_format: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Parse the genesis file and report what it contains.
    Check,
    /// Build genesis state and print the resulting report.
    Apply {
        /// Print the report as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let genesis = GenesisFile::from_toml_file(&cli.genesis)?;

    let format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(&genesis.config.log_format)
        .parse()?;
    let level = cli.log_level.as_deref().unwrap_or(&genesis.config.log_level);
    ol_utils::init_logging(format, level);

    tracing::info!("Loaded genesis from {}", cli.genesis.display());

    match cli.command {
        Command::Check => {
            println!(
                "{} accounts, {} transfers, limit check {:?}",
                genesis.accounts.len(),
                genesis.transfers.len(),
                genesis.config.limit_check
            );
        }
        Command::Apply { json } => {
            let (_, report) = ol_genesis::apply(&genesis)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for account in &report.accounts {
                    println!(
                        "{} total={} unlocked={}{}{}{}",
                        account.address,
                        account.total,
                        account.unlocked,
                        if account.slow_wallet { " (slow)" } else { "" },
                        if account.validator { " (validator)" } else { "" },
                        if account.donor_directed { " (donor-directed)" } else { "" }
                    );
                }
                println!(
                    "supply: total={} normal={} slow={} (locked={}, unlocked={}) donor_directed={}",
                    report.supply.total,
                    report.supply.normal,
                    report.supply.slow_total,
                    report.supply.slow_locked,
                    report.supply.slow_unlocked,
                    report.supply.donor_directed
                );
                println!(
                    "validators: {} (locked={})",
                    report.supply.validator, report.supply.validator_locked
                );
                println!(
                    "transfers: {} applied, {} rejected",
                    report.applied_transfers,
                    report.rejected_transfers.len()
                );
                for rejected in &report.rejected_transfers {
                    println!("  #{} abort {}: {}", rejected.index, rejected.code, rejected.reason);
                }
            }
        }
    }

    Ok(())
}
