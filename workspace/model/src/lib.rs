//! Static SuperApp dataset: typed rows, the dashboard palette and tab set.
//!
//! Nothing in this crate is computed at runtime; [`Dataset::superapp`] returns
//! the authored tables as-is.

mod accent;
mod dataset;
mod records;
mod tab;

pub use accent::Accent;
pub use dataset::Dataset;
pub use records::{
    month_label, ActivationHighlight, ActivationStep, CohortRetention, CountryUsage,
    KpiSummary, MonthlyTrend, ProductRevenue, SegmentAverage, StatusShare, RETENTION_MONTHS,
};
pub use tab::Tab;

// Re-exported so dependents can build rows without naming the crate.
pub use rust_decimal::Decimal;
