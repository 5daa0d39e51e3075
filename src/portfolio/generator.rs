//! Synthetic portfolio generator
//!
//! Premiums and claims are drawn from normal distributions around
//! configurable means. The RNG seed is an explicit parameter so the same
//! seed and parameters always reproduce the same portfolio.

use super::{ContractRecord, Portfolio};
use crate::error::{CsmError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Parameters for synthetic portfolio generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Number of contracts to generate
    #[serde(default = "default_n_contracts")]
    pub n_contracts: usize,

    /// Mean annual premium
    #[serde(default = "default_premium_mean")]
    pub premium_mean: f64,

    /// Premium standard deviation
    #[serde(default = "default_premium_std")]
    pub premium_std: f64,

    /// Mean annual claims cost
    #[serde(default = "default_claims_mean")]
    pub claims_mean: f64,

    /// Claims standard deviation
    #[serde(default = "default_claims_std")]
    pub claims_std: f64,
}

fn default_n_contracts() -> usize { 1000 }
fn default_premium_mean() -> f64 { 1200.0 }
fn default_premium_std() -> f64 { 100.0 }
fn default_claims_mean() -> f64 { 900.0 }
fn default_claims_std() -> f64 { 120.0 }

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            n_contracts: default_n_contracts(),
            premium_mean: default_premium_mean(),
            premium_std: default_premium_std(),
            claims_mean: default_claims_mean(),
            claims_std: default_claims_std(),
        }
    }
}

/// Generate a portfolio of `params.n_contracts` synthetic contracts.
/// Contract ids are assigned sequentially from 0.
pub fn generate_portfolio(params: &GeneratorParams, seed: u64) -> Result<Portfolio> {
    let premium_dist = Normal::new(params.premium_mean, params.premium_std)
        .map_err(|e| CsmError::InvalidInput(format!("premium distribution: {}", e)))?;
    let claims_dist = Normal::new(params.claims_mean, params.claims_std)
        .map_err(|e| CsmError::InvalidInput(format!("claims distribution: {}", e)))?;

    let mut rng = StdRng::seed_from_u64(seed);

    let contracts = (0..params.n_contracts)
        .map(|id| {
            let premium = premium_dist.sample(&mut rng);
            let claims = claims_dist.sample(&mut rng);
            ContractRecord::new(id as u32, premium, claims)
        })
        .collect();

    Ok(Portfolio::new(contracts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_size_and_ids() {
        let params = GeneratorParams {
            n_contracts: 50,
            ..GeneratorParams::default()
        };
        let portfolio = generate_portfolio(&params, 42).unwrap();

        assert_eq!(portfolio.len(), 50);
        for (i, c) in portfolio.iter().enumerate() {
            assert_eq!(c.contract_id, i as u32);
        }
    }

    #[test]
    fn test_same_seed_reproduces_portfolio() {
        let params = GeneratorParams::default();
        let a = generate_portfolio(&params, 42).unwrap();
        let b = generate_portfolio(&params, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = GeneratorParams::default();
        let a = generate_portfolio(&params, 42).unwrap();
        let b = generate_portfolio(&params, 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_cluster_near_means() {
        let params = GeneratorParams::default();
        let portfolio = generate_portfolio(&params, 7).unwrap();

        let mean_premium = portfolio.total_premium() / portfolio.len() as f64;
        let mean_claims = portfolio.total_claims() / portfolio.len() as f64;

        // 1000 draws: sample means land well within 5 sigma of the mean
        assert!((mean_premium - 1200.0).abs() < 5.0 * 100.0 / (1000f64).sqrt());
        assert!((mean_claims - 900.0).abs() < 5.0 * 120.0 / (1000f64).sqrt());
    }

    #[test]
    fn test_invalid_std_rejected() {
        let params = GeneratorParams {
            premium_std: -1.0,
            ..GeneratorParams::default()
        };
        assert!(matches!(
            generate_portfolio(&params, 1),
            Err(crate::error::CsmError::InvalidInput(_))
        ));
    }
}
