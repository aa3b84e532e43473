//! Row types of the pre-aggregated dataset.
//!
//! Money is carried as [`Decimal`]; counts as unsigned integers; percentage
//! shares as whole numbers unless the authored figure has a decimal place.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::accent::Accent;

/// Number of monthly retention observations per cohort (M0 through M6).
pub const RETENTION_MONTHS: usize = 7;

/// Headline totals shown on the KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_gmv: Decimal,
    pub total_users: u32,
    pub total_transactions: u32,
    pub total_events: u32,
    /// Share of transactions that completed, in percent.
    pub completion_rate: u8,
    pub avg_gmv_per_user: Decimal,
    pub products: u32,
    pub markets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub name: String,
    pub gmv: Decimal,
    pub transactions: u32,
    pub accent: Accent,
    /// Authored share of total GMV, one decimal place.
    pub share_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryUsage {
    pub country: String,
    pub users: u32,
    pub share_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub gmv: Decimal,
    pub transactions: u32,
    pub users: u32,
}

/// Month-over-month retention of one signup cohort.
///
/// `months[0]` is M0 (always 100 for a well-formed row). A `None` marks a month
/// the cohort has not lived long enough to observe; every later month is then
/// `None` as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRetention {
    pub cohort: String,
    pub months: [Option<u8>; RETENTION_MONTHS],
}

impl CohortRetention {
    pub fn new(cohort: &str, months: [Option<u8>; RETENTION_MONTHS]) -> Self {
        Self {
            cohort: cohort.to_string(),
            months,
        }
    }

    /// Number of observed months, i.e. the length of the leading `Some` run.
    pub fn observed_months(&self) -> usize {
        self.months.iter().take_while(|m| m.is_some()).count()
    }
}

/// Label of the `index`-th retention month (`M0`..`M6`).
pub fn month_label(index: usize) -> String {
    format!("M{}", index)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentAverage {
    pub segment: String,
    pub users: u32,
    pub avg_gmv: Decimal,
    pub accent: Accent,
}

/// Cumulative share of users activated by a given day offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationStep {
    pub day: String,
    pub pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: String,
    pub pct: u8,
    pub accent: Accent,
}

/// Headline card shown under the activation curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationHighlight {
    pub label: String,
    pub value: String,
    pub caption: String,
    pub accent: Accent,
}
