use model::{Accent, KpiSummary};
use serde::Serialize;

use crate::format::{format_currency, format_number};

/// One headline tile: formatted value plus its caption and accent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub caption: String,
    pub accent: Accent,
}

/// The KPI row shown above every tab, in display order.
pub fn kpi_cards(kpis: &KpiSummary) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total GMV",
            value: format_currency(kpis.total_gmv),
            caption: "Completed transactions".to_string(),
            accent: Accent::Teal,
        },
        KpiCard {
            label: "Users",
            value: kpis.total_users.to_string(),
            caption: format!("Across {} markets", kpis.markets),
            accent: Accent::Gold,
        },
        KpiCard {
            label: "Transactions",
            value: format_number(kpis.total_transactions),
            caption: format!("{}% completion rate", kpis.completion_rate),
            accent: Accent::Violet,
        },
        KpiCard {
            label: "Avg GMV/User",
            value: format_currency(kpis.avg_gmv_per_user),
            caption: "Lifetime value".to_string(),
            accent: Accent::Coral,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Dataset;

    #[test]
    fn test_kpi_cards_format_headline_numbers() {
        let cards = kpi_cards(&Dataset::superapp().kpis);

        let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Total GMV", "Users", "Transactions", "Avg GMV/User"]);

        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$801K", "500", "5.7K", "$2K"]);

        assert_eq!(cards[1].caption, "Across 4 markets");
        assert_eq!(cards[2].caption, "78% completion rate");
        assert_eq!(cards[0].accent, Accent::Teal);
    }
}
