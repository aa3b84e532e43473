//! Opt-in consistency checks over a [`Dataset`].
//!
//! The render path never calls into this module; the authored tables are
//! trusted. `superapp check` and the tests use it to catch a bad edit before it
//! ships.

use model::{Dataset, Decimal};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Single broken invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("product '{product}' share is {authored}% but its GMV gives {computed}%")]
    ProductShareMismatch {
        product: String,
        authored: Decimal,
        computed: Decimal,
    },

    #[error("{table} shares sum to {total}% instead of 100%")]
    SharesDoNotSum { table: &'static str, total: Decimal },

    #[error("cohort '{cohort}' has no M0 value of 100")]
    CohortMissingBaseline { cohort: String },

    #[error("cohort '{cohort}' has a value at M{month} after an unobserved month")]
    CohortNotRightCensored { cohort: String, month: usize },

    #[error("cohort '{cohort}' retention rises from {previous}% to {value}% at M{month}")]
    CohortRetentionIncreases {
        cohort: String,
        month: usize,
        previous: u8,
        value: u8,
    },

    #[error("activation at '{day}' is {pct}%, outside 0..=100")]
    ActivationOutOfRange { day: String, pct: u8 },

    #[error("activation drops from {previous}% to {pct}% at '{day}'")]
    ActivationDecreases { day: String, previous: u8, pct: u8 },
}

/// Every violation found in one pass.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("dataset failed validation with {} violation(s)", .violations.len())]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

/// Checks all invariants and reports every violation rather than the first.
#[instrument(skip_all)]
pub fn validate_dataset(data: &Dataset) -> Result<(), ValidationReport> {
    let mut violations = Vec::new();
    violations.extend(check_product_shares(data));
    violations.extend(check_share_totals(data));
    violations.extend(check_cohorts(data));
    violations.extend(check_activation(data));

    if violations.is_empty() {
        debug!("Dataset passed validation");
        Ok(())
    } else {
        for violation in &violations {
            warn!(%violation, "Dataset invariant violated");
        }
        Err(ValidationReport { violations })
    }
}

fn check_product_shares(data: &Dataset) -> Vec<Violation> {
    let total = data.product_gmv_total();
    if total.is_zero() {
        return Vec::new();
    }
    let tolerance = Decimal::new(1, 1);

    data.products
        .iter()
        .filter_map(|product| {
            let computed = (product.gmv / total * Decimal::ONE_HUNDRED).round_dp(1);
            ((computed - product.share_pct).abs() > tolerance).then(|| {
                Violation::ProductShareMismatch {
                    product: product.name.clone(),
                    authored: product.share_pct,
                    computed,
                }
            })
        })
        .collect()
}

fn check_share_totals(data: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    let products: Decimal = data.products.iter().map(|p| p.share_pct).sum();
    if (products - Decimal::ONE_HUNDRED).abs() > Decimal::new(5, 1) {
        violations.push(Violation::SharesDoNotSum {
            table: "product",
            total: products,
        });
    }

    let countries: Decimal = data.countries.iter().map(|c| Decimal::from(c.share_pct)).sum();
    if countries != Decimal::ONE_HUNDRED {
        violations.push(Violation::SharesDoNotSum {
            table: "country",
            total: countries,
        });
    }

    let statuses: Decimal = data.statuses.iter().map(|s| Decimal::from(s.pct)).sum();
    if statuses != Decimal::ONE_HUNDRED {
        violations.push(Violation::SharesDoNotSum {
            table: "status",
            total: statuses,
        });
    }

    violations
}

fn check_cohorts(data: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    for cohort in &data.cohorts {
        if cohort.months[0] != Some(100) {
            violations.push(Violation::CohortMissingBaseline {
                cohort: cohort.cohort.clone(),
            });
        }

        // Only the leading observed run may carry values.
        let observed = cohort.observed_months();
        for (month, value) in cohort.months.iter().enumerate().skip(observed) {
            if value.is_some() {
                violations.push(Violation::CohortNotRightCensored {
                    cohort: cohort.cohort.clone(),
                    month,
                });
            }
        }

        let run: Vec<u8> = cohort.months[..observed].iter().flatten().copied().collect();
        for (offset, pair) in run.windows(2).enumerate() {
            if pair[1] > pair[0] {
                violations.push(Violation::CohortRetentionIncreases {
                    cohort: cohort.cohort.clone(),
                    month: offset + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
    }

    violations
}

fn check_activation(data: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut previous: Option<u8> = None;

    for step in &data.activation {
        if step.pct > 100 {
            violations.push(Violation::ActivationOutOfRange {
                day: step.day.clone(),
                pct: step.pct,
            });
        }
        if let Some(prev) = previous.filter(|prev| step.pct < *prev) {
            violations.push(Violation::ActivationDecreases {
                day: step.day.clone(),
                previous: prev,
                pct: step.pct,
            });
        }
        previous = Some(step.pct);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{ActivationStep, CohortRetention};

    #[test]
    fn test_superapp_dataset_is_valid() {
        assert_eq!(validate_dataset(&Dataset::superapp()), Ok(()));
    }

    #[test]
    fn test_product_share_regression() {
        let data = Dataset::superapp();
        let total = data.product_gmv_total();
        for product in &data.products {
            let computed = (product.gmv / total * Decimal::ONE_HUNDRED).round_dp(1);
            assert!(
                (computed - product.share_pct).abs() <= Decimal::new(1, 1),
                "{}: {} vs {}",
                product.name,
                computed,
                product.share_pct
            );
        }
    }

    #[test]
    fn test_detects_product_share_mismatch() {
        let mut data = Dataset::superapp();
        data.products[0].share_pct = Decimal::new(550, 1);

        let report = validate_dataset(&data).unwrap_err();
        assert!(report.violations.contains(&Violation::ProductShareMismatch {
            product: "BNPL".to_string(),
            authored: Decimal::new(550, 1),
            computed: Decimal::new(610, 1),
        }));
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::SharesDoNotSum { table: "product", .. })));
    }

    #[test]
    fn test_detects_status_total() {
        let mut data = Dataset::superapp();
        data.statuses[2].pct = 9;

        let report = validate_dataset(&data).unwrap_err();
        assert_eq!(
            report.violations,
            vec![Violation::SharesDoNotSum {
                table: "status",
                total: Decimal::from(102),
            }]
        );
    }

    #[test]
    fn test_detects_broken_censoring() {
        let mut data = Dataset::superapp();
        data.cohorts.push(CohortRetention::new(
            "Jul 24",
            [Some(100), None, Some(40), None, None, None, None],
        ));

        let report = validate_dataset(&data).unwrap_err();
        assert_eq!(
            report.violations,
            vec![Violation::CohortNotRightCensored {
                cohort: "Jul 24".to_string(),
                month: 2,
            }]
        );
    }

    #[test]
    fn test_values_after_a_gap_are_not_compared_for_decline() {
        let mut data = Dataset::superapp();
        data.cohorts.push(CohortRetention::new(
            "Sep 24",
            [Some(100), Some(50), None, Some(70), Some(80), None, None],
        ));

        let report = validate_dataset(&data).unwrap_err();
        assert_eq!(
            report.violations,
            vec![
                Violation::CohortNotRightCensored {
                    cohort: "Sep 24".to_string(),
                    month: 3,
                },
                Violation::CohortNotRightCensored {
                    cohort: "Sep 24".to_string(),
                    month: 4,
                },
            ]
        );
    }

    #[test]
    fn test_detects_rising_retention_and_missing_baseline() {
        let mut data = Dataset::superapp();
        data.cohorts.push(CohortRetention::new(
            "Aug 24",
            [Some(90), Some(60), Some(65), None, None, None, None],
        ));

        let report = validate_dataset(&data).unwrap_err();
        assert_eq!(
            report.violations,
            vec![
                Violation::CohortMissingBaseline {
                    cohort: "Aug 24".to_string(),
                },
                Violation::CohortRetentionIncreases {
                    cohort: "Aug 24".to_string(),
                    month: 2,
                    previous: 60,
                    value: 65,
                },
            ]
        );
    }

    #[test]
    fn test_activation_funnel_is_monotonic_and_bounded() {
        let data = Dataset::superapp();
        assert!(data.activation.windows(2).all(|w| w[0].pct <= w[1].pct));
        assert!(data.activation.iter().all(|s| s.pct <= 100));
    }

    #[test]
    fn test_detects_activation_violations() {
        let mut data = Dataset::superapp();
        data.activation.push(ActivationStep {
            day: "Day 120".to_string(),
            pct: 101,
        });
        data.activation.push(ActivationStep {
            day: "Day 180".to_string(),
            pct: 90,
        });

        let report = validate_dataset(&data).unwrap_err();
        assert_eq!(
            report.violations,
            vec![
                Violation::ActivationOutOfRange {
                    day: "Day 120".to_string(),
                    pct: 101,
                },
                Violation::ActivationDecreases {
                    day: "Day 180".to_string(),
                    previous: 101,
                    pct: 90,
                },
            ]
        );
        assert_eq!(report.to_string(), "dataset failed validation with 2 violation(s)");
    }
}
