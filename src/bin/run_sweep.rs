//! Run the full sensitivity sweep over a persisted portfolio CSV
//!
//! Outputs per-year average CSM for every scenario, for comparison with
//! the reference chart data

use csm_system::portfolio::load_default_portfolio;
use csm_system::ScenarioRunner;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

const N_YEARS: usize = 10;

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!("Loading portfolio from data/synthetic_insurance_data.csv...");

    let portfolio = load_default_portfolio().expect("Failed to load portfolio");
    println!("Loaded {} contracts in {:?}", portfolio.len(), start.elapsed());

    let runner = ScenarioRunner::default_sensitivity();

    println!("Running {} scenarios...", runner.scenarios().len());
    let sweep_start = Instant::now();

    // Scenarios are independent; fan out across worker threads
    let results = runner
        .run_parallel(&portfolio, N_YEARS)
        .expect("Sensitivity sweep failed");

    println!("Sweep complete in {:?}", sweep_start.elapsed());

    // Write output
    let output_path = "csm_sensitivity_analysis.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "scenario,discount_rate,margin_ratio,year,avg_csm").unwrap();

    for result in &results {
        for (t, value) in result.curve.values.iter().enumerate() {
            writeln!(
                file,
                "{},{},{},{},{:.8}",
                result.name,
                result.assumption.discount_rate,
                result.assumption.margin_ratio,
                t + 1,
                value,
            )
            .unwrap();
        }
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    println!("\nSweep Summary:");
    for result in &results {
        println!(
            "  {:<24} rate={:>6.3} margin={:>5.2}  year 1: {:>10.4}  year {}: {:>10.4}",
            result.name,
            result.assumption.discount_rate,
            result.assumption.margin_ratio,
            result.curve.values[0],
            N_YEARS,
            result.curve.final_value().unwrap_or(0.0),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
