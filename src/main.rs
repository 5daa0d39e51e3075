//! CSM System CLI
//!
//! Generates a synthetic portfolio, runs the financial sensitivity sweep,
//! and exports the average CSM curves for charting

use anyhow::Context;
use clap::Parser;
use csm_system::portfolio::{generate_portfolio, write_portfolio, GeneratorParams};
use csm_system::ScenarioRunner;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "csm_system", version, about = "CSM sensitivity analysis for an insurance portfolio")]
struct Args {
    /// Number of synthetic contracts to generate
    #[arg(long, default_value_t = 1000)]
    contracts: usize,

    /// RNG seed for portfolio generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of projection years
    #[arg(long, default_value_t = 10)]
    years: usize,

    /// Output path for the generated portfolio CSV
    #[arg(long, default_value = "data/synthetic_insurance_data.csv")]
    portfolio_out: String,

    /// Output path for the scenario curve CSV
    #[arg(long, default_value = "output/csm_sensitivity.csv")]
    curves_out: String,

    /// Run scenarios sequentially instead of across worker threads
    #[arg(long)]
    sequential: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("CSM System v0.1.0");
    println!("=================\n");

    // Generate the synthetic portfolio
    let params = GeneratorParams {
        n_contracts: args.contracts,
        ..GeneratorParams::default()
    };
    let portfolio = generate_portfolio(&params, args.seed)?;
    info!("generated {} contracts with seed {}", portfolio.len(), args.seed);

    println!("Portfolio: {} contracts (seed {})", portfolio.len(), args.seed);
    println!("  Total premium: ${:.2}", portfolio.total_premium());
    println!("  Total claims:  ${:.2}", portfolio.total_claims());
    println!();

    write_portfolio(&args.portfolio_out, &portfolio)
        .map_err(|e| anyhow::anyhow!("writing portfolio to {}: {}", args.portfolio_out, e))?;
    println!("Portfolio written to: {}", args.portfolio_out);

    // Run the sensitivity sweep
    let runner = ScenarioRunner::default_sensitivity();
    let results = if args.sequential {
        runner.run(&portfolio, args.years)?
    } else {
        runner.run_parallel(&portfolio, args.years)?
    };

    // Print the curves, one column per scenario
    println!("\nAverage CSM by year:");
    print!("{:>4}", "Year");
    for result in &results {
        print!(" {:>22}", result.name);
    }
    println!();
    println!("{}", "-".repeat(4 + 23 * results.len()));

    for t in 0..args.years {
        print!("{:>4}", t + 1);
        for result in &results {
            print!(" {:>22.4}", result.curve.values[t]);
        }
        println!();
    }

    // Write the wide-format curve CSV for external charting
    // (x-axis = year 1..n_years, one series per scenario)
    if let Some(parent) = Path::new(&args.curves_out).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(&args.curves_out)
        .with_context(|| format!("creating {}", args.curves_out))?;

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    writeln!(file, "year,{}", names.join(","))?;
    for t in 0..args.years {
        write!(file, "{}", t + 1)?;
        for result in &results {
            write!(file, ",{:.8}", result.curve.values[t])?;
        }
        writeln!(file)?;
    }

    println!("\nCurves written to: {}", args.curves_out);

    Ok(())
}
