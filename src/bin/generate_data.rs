//! Generate a synthetic insurance portfolio CSV
//!
//! Standalone data producer for downstream sweep runs; the seed is an
//! explicit parameter so generated files are reproducible

use anyhow::Context;
use clap::Parser;
use csm_system::portfolio::{generate_portfolio, write_portfolio, GeneratorParams};

#[derive(Parser, Debug)]
#[command(name = "generate_data", about = "Generate a synthetic insurance portfolio CSV")]
struct Args {
    /// Number of contracts to generate
    #[arg(long, default_value_t = 1000)]
    contracts: usize,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Mean annual premium
    #[arg(long, default_value_t = 1200.0)]
    premium_mean: f64,

    /// Premium standard deviation
    #[arg(long, default_value_t = 100.0)]
    premium_std: f64,

    /// Mean annual claims cost
    #[arg(long, default_value_t = 900.0)]
    claims_mean: f64,

    /// Claims standard deviation
    #[arg(long, default_value_t = 120.0)]
    claims_std: f64,

    /// Output path
    #[arg(long, default_value = "data/synthetic_insurance_data.csv")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = GeneratorParams {
        n_contracts: args.contracts,
        premium_mean: args.premium_mean,
        premium_std: args.premium_std,
        claims_mean: args.claims_mean,
        claims_std: args.claims_std,
    };

    let portfolio = generate_portfolio(&params, args.seed)
        .context("generating synthetic portfolio")?;

    write_portfolio(&args.out, &portfolio)
        .map_err(|e| anyhow::anyhow!("writing {}: {}", args.out, e))?;

    println!("Generated {} contracts (seed {}) -> {}", portfolio.len(), args.seed, args.out);
    println!("  Mean premium: ${:.2}", portfolio.total_premium() / portfolio.len() as f64);
    println!("  Mean claims:  ${:.2}", portfolio.total_claims() / portfolio.len() as f64);

    Ok(())
}
