//! Cohort retention heatmap: color bucketing and the month × cohort grid.

use model::{month_label, Accent, CohortRetention, RETENTION_MONTHS};
use serde::Serialize;

/// Visual state of a single heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionBucket {
    NoData,
    AtRisk,
    Caution,
    Healthy,
    Strong,
}

impl RetentionBucket {
    /// Lower bounds are inclusive: 70 is strong, 50 healthy, 35 caution.
    pub fn classify(value: Option<u8>) -> Self {
        match value {
            None => RetentionBucket::NoData,
            Some(v) if v >= 70 => RetentionBucket::Strong,
            Some(v) if v >= 50 => RetentionBucket::Healthy,
            Some(v) if v >= 35 => RetentionBucket::Caution,
            Some(_) => RetentionBucket::AtRisk,
        }
    }

    pub fn fill(self) -> String {
        match self {
            RetentionBucket::NoData => "rgba(255, 255, 255, 0.02)".to_string(),
            RetentionBucket::Strong => Accent::Teal.rgba(0.7),
            RetentionBucket::Healthy => Accent::Teal.rgba(0.45),
            RetentionBucket::Caution => Accent::Gold.rgba(0.45),
            RetentionBucket::AtRisk => Accent::Coral.rgba(0.35),
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            RetentionBucket::NoData => "transparent",
            _ => "#fff",
        }
    }

    /// CSS modifier class of the cell.
    pub fn css_class(self) -> &'static str {
        match self {
            RetentionBucket::NoData => "heat-none",
            RetentionBucket::AtRisk => "heat-at-risk",
            RetentionBucket::Caution => "heat-caution",
            RetentionBucket::Healthy => "heat-healthy",
            RetentionBucket::Strong => "heat-strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub value: Option<u8>,
    pub bucket: RetentionBucket,
    pub fill: String,
    pub text_color: &'static str,
    pub text: String,
}

impl HeatmapCell {
    fn new(value: Option<u8>) -> Self {
        let bucket = RetentionBucket::classify(value);
        Self {
            value,
            bucket,
            fill: bucket.fill(),
            text_color: bucket.text_color(),
            text: value.map_or_else(|| "—".to_string(), |v| format!("{}%", v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub cohort: String,
    pub cells: Vec<HeatmapCell>,
}

/// A leading label column followed by the fixed M0–M6 columns, one row per
/// cohort in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub months: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl HeatmapGrid {
    pub fn from_cohorts(cohorts: &[CohortRetention]) -> Self {
        let months = (0..RETENTION_MONTHS).map(month_label).collect();
        let rows = cohorts
            .iter()
            .map(|cohort| HeatmapRow {
                cohort: cohort.cohort.clone(),
                cells: cohort.months.iter().copied().map(HeatmapCell::new).collect(),
            })
            .collect();
        Self { months, rows }
    }
}
