//! Contract and portfolio data structures

use serde::{Deserialize, Serialize};

/// Expected service cost as a fraction of annual claims, applied at
/// contract creation
pub const SERVICE_COST_RATIO: f64 = 0.2;

/// A single insurance contract record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Unique contract identifier, assigned sequentially within a portfolio
    pub contract_id: u32,

    /// Annual premium
    pub premium: f64,

    /// Annual claims cost
    pub claims: f64,

    /// Expected annual service cost, derived from claims at creation
    pub expected_service_cost: f64,
}

impl ContractRecord {
    /// Create a record, deriving the expected service cost from claims
    pub fn new(contract_id: u32, premium: f64, claims: f64) -> Self {
        Self {
            contract_id,
            premium,
            claims,
            expected_service_cost: claims * SERVICE_COST_RATIO,
        }
    }

    /// Raw (undiscounted) annual service margin under a margin ratio
    /// assumption. May be negative; onerous-like contracts get no special
    /// treatment.
    pub fn service_margin(&self, margin_ratio: f64) -> f64 {
        (self.premium - self.claims - self.expected_service_cost) * margin_ratio
    }
}

/// An ordered collection of contracts, created once per run and read-only
/// thereafter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    contracts: Vec<ContractRecord>,
}

impl Portfolio {
    pub fn new(contracts: Vec<ContractRecord>) -> Self {
        Self { contracts }
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContractRecord> {
        self.contracts.iter()
    }

    pub fn contracts(&self) -> &[ContractRecord] {
        &self.contracts
    }

    /// Total annual premium across the portfolio
    pub fn total_premium(&self) -> f64 {
        self.contracts.iter().map(|c| c.premium).sum()
    }

    /// Total annual claims across the portfolio
    pub fn total_claims(&self) -> f64 {
        self.contracts.iter().map(|c| c.claims).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_service_cost_derivation() {
        let c = ContractRecord::new(0, 1200.0, 900.0);
        assert_relative_eq!(c.expected_service_cost, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_service_margin() {
        // (1000 - 800 - 100) * 0.1 = 10
        let c = ContractRecord {
            contract_id: 0,
            premium: 1000.0,
            claims: 800.0,
            expected_service_cost: 100.0,
        };
        assert_relative_eq!(c.service_margin(0.1), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_margin_passes_through() {
        // Claims exceed premium: margin is negative, not clamped
        let c = ContractRecord::new(1, 800.0, 1000.0);
        assert!(c.service_margin(0.1) < 0.0);
    }

    #[test]
    fn test_portfolio_totals() {
        let portfolio = Portfolio::new(vec![
            ContractRecord::new(0, 1200.0, 900.0),
            ContractRecord::new(1, 1100.0, 950.0),
        ]);
        assert_eq!(portfolio.len(), 2);
        assert_relative_eq!(portfolio.total_premium(), 2300.0, epsilon = 1e-9);
        assert_relative_eq!(portfolio.total_claims(), 1850.0, epsilon = 1e-9);
    }
}
