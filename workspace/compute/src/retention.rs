use model::{month_label, Accent, CohortRetention};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionPoint {
    pub month: String,
    pub value: u8,
}

/// Observed retention curve of one cohort, ready for a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionSeries {
    pub cohort: String,
    pub accent: Accent,
    pub points: Vec<RetentionPoint>,
}

/// One series per cohort, keeping dataset order. Unobserved months are dropped
/// rather than plotted as gaps, and the `i`-th cohort always gets the `i`-th
/// accent of the series cycle.
pub fn retention_series(cohorts: &[CohortRetention]) -> Vec<RetentionSeries> {
    cohorts
        .iter()
        .enumerate()
        .map(|(index, cohort)| RetentionSeries {
            cohort: cohort.cohort.clone(),
            accent: Accent::for_series(index),
            points: cohort
                .months
                .iter()
                .enumerate()
                .filter_map(|(month, value)| {
                    value.map(|value| RetentionPoint {
                        month: month_label(month),
                        value,
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Dataset;

    #[test]
    fn test_series_drop_unobserved_months() {
        let data = Dataset::superapp();
        let series = retention_series(&data.cohorts);

        assert_eq!(series.len(), 6);
        let lengths: Vec<usize> = series.iter().map(|s| s.points.len()).collect();
        assert_eq!(lengths, vec![7, 6, 5, 4, 3, 2]);

        let june = &series[5];
        assert_eq!(june.cohort, "Jun 24");
        assert_eq!(
            june.points,
            vec![
                RetentionPoint { month: "M0".to_string(), value: 100 },
                RetentionPoint { month: "M1".to_string(), value: 73 },
            ]
        );
    }

    #[test]
    fn test_series_keep_label_and_color() {
        let data = Dataset::superapp();
        let series = retention_series(&data.cohorts);

        for (index, (s, cohort)) in series.iter().zip(&data.cohorts).enumerate() {
            assert_eq!(s.cohort, cohort.cohort);
            assert_eq!(s.accent, Accent::for_series(index));
        }
        assert_eq!(series[0].accent, Accent::Teal);
        assert_eq!(series[1].accent, Accent::Gold);
    }

    #[test]
    fn test_interior_gap_is_skipped() {
        // A malformed row still yields only the observed points.
        let cohort = CohortRetention::new(
            "Broken",
            [Some(100), None, Some(40), None, None, None, None],
        );
        let series = retention_series(&[cohort]);
        let months: Vec<&str> = series[0].points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["M0", "M2"]);
    }
}
