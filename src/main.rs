use std::path::PathBuf;
use alloy::primitives::{utils::format_units, Address};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::info;
use serde::Serialize;
use claim_check::{
    config::read_address_list,
    types::{DecodePolicy, MethodSelector},
    utils::decode_utils::AMOUNT_DECIMALS,
    AlloyRpcClient, BatchResolver, EligibilityConfig, EligibilityOutcome, SummaryReport,
};

/// Check token-allocation eligibility for a list of addresses.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// JSON configuration file; command-line values override it
    #[arg(short, long, env = "CLAIM_CHECK_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the RPC endpoint
    #[arg(short, long, env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Contract exposing the eligibility checks
    #[arg(long, env = "CLAIM_CONTRACT")]
    contract: Option<Address>,

    /// The two check selectors, as 4-byte hex
    #[arg(long = "selector", num_args = 2, value_names = ["FIRST", "SECOND"])]
    selectors: Option<Vec<MethodSelector>>,

    /// Pause between addresses in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-call timeout in milliseconds, 0 disables it
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Report malformed call results as errors instead of zero
    #[arg(long)]
    strict_decode: bool,

    /// File with one address per line
    #[arg(long)]
    addresses_file: Option<PathBuf>,

    /// Print outcomes and summary as JSON
    #[arg(long)]
    json: bool,

    /// Addresses to check
    addresses: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<EligibilityConfig> {
        let mut config = match &self.config {
            Some(path) => EligibilityConfig::from_file(path)?,
            None => EligibilityConfig::default(),
        };
        if let Some(rpc_url) = self.rpc_url {
            config.rpc_url = rpc_url;
        }
        if let Some(contract) = self.contract {
            config.contract = contract;
        }
        if let Some(selectors) = self.selectors {
            config.check_selectors = selectors
                .try_into()
                .map_err(|_| anyhow::anyhow!("exactly two selectors are required"))?;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.call_timeout_ms = (timeout_ms > 0).then_some(timeout_ms);
        }
        if self.strict_decode {
            config.decode_policy = DecodePolicy::Strict;
        }
        if let Some(path) = &self.addresses_file {
            config.addresses.extend(read_address_list(path)?);
        }
        config.addresses.extend(self.addresses);
        Ok(config)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcomes: &'a [EligibilityOutcome],
    summary: &'a SummaryReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    // In order to view debug logs, run with `RUST_LOG=debug`
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let json = args.json;
    let config = args.into_config()?;

    let (client, chain_id) = AlloyRpcClient::from_config(&config)
        .await
        .context("failed to start eligibility check")?;
    info!(
        "chain {chain_id}: checking {} addresses against {}",
        config.addresses.len(),
        config.contract
    );

    let batch = BatchResolver::from_config(client, &config);
    let outcomes = batch.resolve_all(&config.addresses).await;
    let summary = SummaryReport::from_outcomes(&outcomes);

    if json {
        let report = JsonReport { outcomes: &outcomes, summary: &summary };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&outcomes, &summary);
    }
    Ok(())
}

fn print_report(outcomes: &[EligibilityOutcome], summary: &SummaryReport) {
    println!("{}", "Eligibility results".cyan().bold());
    println!("{}", "-".repeat(80));
    for outcome in outcomes {
        match (&outcome.error, outcome.is_eligible) {
            (Some(error), _) => println!("{} {} ({})", "ERROR   ".red().bold(), outcome.address, error),
            (None, true) => println!(
                "{} {} {}",
                "ELIGIBLE".green().bold(),
                outcome.address,
                format_units(outcome.raw_amount, AMOUNT_DECIMALS).unwrap_or_else(|_| outcome.amount.to_string())
            ),
            (None, false) => println!("{} {}", "NONE    ".yellow(), outcome.address),
        }
    }
    println!("{}", "-".repeat(80));
    println!(
        "{} eligible, {} not eligible, {} errors",
        summary.eligible.to_string().green(),
        summary.not_eligible,
        summary.errors.to_string().red()
    );
    println!(
        "Total eligible amount: {}",
        format_units(summary.total_raw_amount, AMOUNT_DECIMALS)
            .unwrap_or_else(|_| summary.total_amount.to_string())
            .bold()
    );
}
