//! Core CSM projection engine
//!
//! For each contract the raw service margin is discounted year by year,
//! then averaged across the portfolio into a single curve. Pure function
//! of its inputs; the portfolio is never mutated.

use super::curve::CsmCurve;
use crate::error::{CsmError, Result};
use crate::portfolio::Portfolio;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub n_years: usize,

    /// Annual discount rate. Negative rates are valid and produce curves
    /// that grow with time; exactly -1 is rejected as degenerate.
    pub discount_rate: f64,

    /// Fraction of net premium-minus-cost treated as service margin
    pub margin_ratio: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            n_years: 10,
            discount_rate: 0.03,
            margin_ratio: 0.1,
        }
    }
}

/// CSM projection engine
#[derive(Debug, Clone)]
pub struct CsmProjector {
    config: ProjectionConfig,
}

impl CsmProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project the portfolio-average discounted service margin curve.
    ///
    /// Per contract: `service_margin = (premium - claims - expected_service_cost)
    /// * margin_ratio`, discounted as `service_margin / (1 + rate)^t` for each
    /// year `t`. The curve value at `t` is the arithmetic mean of the
    /// discounted margins across all contracts.
    pub fn project(&self, portfolio: &Portfolio) -> Result<CsmCurve> {
        let ProjectionConfig {
            n_years,
            discount_rate,
            margin_ratio,
        } = self.config;

        if n_years == 0 {
            return Err(CsmError::InvalidInput(
                "n_years must be a positive integer".to_string(),
            ));
        }
        if portfolio.is_empty() {
            return Err(CsmError::InvalidInput(
                "portfolio is empty; the average curve is undefined".to_string(),
            ));
        }
        if 1.0 + discount_rate == 0.0 {
            return Err(CsmError::DegenerateDiscount(discount_rate));
        }

        let mut totals = vec![0.0_f64; n_years];
        for contract in portfolio.iter() {
            let margin = contract.service_margin(margin_ratio);
            for (t, total) in totals.iter_mut().enumerate() {
                *total += margin / (1.0 + discount_rate).powi(t as i32);
            }
        }

        let count = portfolio.len() as f64;
        let values = totals.into_iter().map(|total| total / count).collect();

        Ok(CsmCurve::new(values))
    }
}

impl Default for CsmProjector {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::ContractRecord;
    use approx::assert_relative_eq;

    fn single_contract_portfolio() -> Portfolio {
        // premium 1000, claims 800, expected service cost 100
        Portfolio::new(vec![ContractRecord {
            contract_id: 0,
            premium: 1000.0,
            claims: 800.0,
            expected_service_cost: 100.0,
        }])
    }

    #[test]
    fn test_single_contract_zero_discount_exact() {
        // (1000 - 800 - 100) * 0.1 = 10; zero discount => constant curve
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 3,
            discount_rate: 0.0,
            margin_ratio: 0.1,
        });
        let curve = projector.project(&single_contract_portfolio()).unwrap();

        assert_eq!(curve.values, vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_positive_rate_strictly_decreasing() {
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 10,
            discount_rate: 0.03,
            margin_ratio: 0.1,
        });
        let curve = projector.project(&single_contract_portfolio()).unwrap();

        for window in curve.values.windows(2) {
            assert!(window[1] < window[0], "expected strictly decreasing: {:?}", window);
        }
        assert_relative_eq!(curve.values[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(curve.values[1], 10.0 / 1.03, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_rate_strictly_increasing() {
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 10,
            discount_rate: -0.01,
            margin_ratio: 0.1,
        });
        let curve = projector.project(&single_contract_portfolio()).unwrap();

        for window in curve.values.windows(2) {
            assert!(window[1] > window[0], "expected strictly increasing: {:?}", window);
        }
    }

    #[test]
    fn test_zero_margin_ratio_all_zeros() {
        for rate in [0.0, 0.03, -0.01, 0.5] {
            let projector = CsmProjector::new(ProjectionConfig {
                n_years: 5,
                discount_rate: rate,
                margin_ratio: 0.0,
            });
            let curve = projector.project(&single_contract_portfolio()).unwrap();
            assert!(curve.values.iter().all(|&v| v == 0.0), "rate {}: {:?}", rate, curve);
        }
    }

    #[test]
    fn test_degenerate_discount_rate_fails() {
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 5,
            discount_rate: -1.0,
            margin_ratio: 0.1,
        });
        assert!(matches!(
            projector.project(&single_contract_portfolio()),
            Err(CsmError::DegenerateDiscount(r)) if r == -1.0
        ));
    }

    #[test]
    fn test_empty_portfolio_fails() {
        let projector = CsmProjector::default();
        assert!(matches!(
            projector.project(&Portfolio::default()),
            Err(CsmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_years_fails() {
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 0,
            ..ProjectionConfig::default()
        });
        assert!(matches!(
            projector.project(&single_contract_portfolio()),
            Err(CsmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_two_contract_mean_exact() {
        // Margins: (1200-900-180)*0.1 = 12, (1000-800-160)*0.1 = 4
        let portfolio = Portfolio::new(vec![
            ContractRecord::new(0, 1200.0, 900.0),
            ContractRecord::new(1, 1000.0, 800.0),
        ]);
        let projector = CsmProjector::new(ProjectionConfig {
            n_years: 4,
            discount_rate: 0.03,
            margin_ratio: 0.1,
        });
        let curve = projector.project(&portfolio).unwrap();

        assert_relative_eq!(curve.values[0], (12.0 + 4.0) / 2.0, epsilon = 1e-9);
        assert_relative_eq!(curve.values[2], 8.0 / 1.03_f64.powi(2), epsilon = 1e-9);
    }

    #[test]
    fn test_negative_aggregate_margin_projects() {
        // Onerous-like contract: negative margin flows through unchanged
        let portfolio = Portfolio::new(vec![ContractRecord::new(0, 800.0, 1000.0)]);
        let projector = CsmProjector::default();
        let curve = projector.project(&portfolio).unwrap();

        assert!(curve.values.iter().all(|&v| v < 0.0));
    }
}
