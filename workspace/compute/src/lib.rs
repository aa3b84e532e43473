//! Presentation logic over the static dataset: number formatting, the KPI row,
//! heatmap bucketing, retention curve reshaping, Plotly figure construction and the
//! opt-in dataset validation.

pub mod format;
pub mod heatmap;
pub mod kpis;
pub mod panels;
pub mod retention;
pub mod validate;

pub use format::{format_currency, format_currency_exact, format_number, format_percent};
pub use heatmap::{HeatmapCell, HeatmapGrid, HeatmapRow, RetentionBucket};
pub use kpis::{kpi_cards, KpiCard};
pub use panels::{panel_figures, Figure};
pub use retention::{retention_series, RetentionPoint, RetentionSeries};
pub use validate::{validate_dataset, ValidationReport, Violation};
