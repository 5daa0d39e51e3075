//! Load and persist portfolios as CSV
//!
//! Schema: `contract_id,premium,claims,expected_service_cost`, header row
//! present, one row per contract.

use super::{ContractRecord, Portfolio};
use csv::{Reader, Writer};
use std::error::Error;
use std::path::Path;

/// Default location for the synthetic portfolio CSV
pub const DEFAULT_PORTFOLIO_PATH: &str = "data/synthetic_insurance_data.csv";

/// Load a portfolio from a CSV file
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut contracts = Vec::new();

    for result in reader.deserialize() {
        let record: ContractRecord = result?;
        contracts.push(record);
    }

    Ok(Portfolio::new(contracts))
}

/// Load a portfolio from any reader (e.g., string buffer, network stream)
pub fn load_portfolio_from_reader<R: std::io::Read>(reader: R) -> Result<Portfolio, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut contracts = Vec::new();

    for result in csv_reader.deserialize() {
        let record: ContractRecord = result?;
        contracts.push(record);
    }

    Ok(Portfolio::new(contracts))
}

/// Load the portfolio from the default location
pub fn load_default_portfolio() -> Result<Portfolio, Box<dyn Error>> {
    load_portfolio(DEFAULT_PORTFOLIO_PATH)
}

/// Write a portfolio to a CSV file, creating parent directories as needed
pub fn write_portfolio<P: AsRef<Path>>(path: P, portfolio: &Portfolio) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = Writer::from_path(path)?;
    for record in portfolio.iter() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write a portfolio to any writer
pub fn write_portfolio_to_writer<W: std::io::Write>(
    writer: W,
    portfolio: &Portfolio,
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_writer(writer);
    for record in portfolio.iter() {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}
