use rust_decimal::Decimal;
use serde::Serialize;

use crate::accent::Accent;
use crate::records::{
    ActivationHighlight, ActivationStep, CohortRetention, CountryUsage, KpiSummary,
    MonthlyTrend, ProductRevenue, SegmentAverage, StatusShare,
};

/// Every table the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub kpis: KpiSummary,
    pub products: Vec<ProductRevenue>,
    pub countries: Vec<CountryUsage>,
    pub monthly: Vec<MonthlyTrend>,
    pub cohorts: Vec<CohortRetention>,
    pub segments: Vec<SegmentAverage>,
    pub activation: Vec<ActivationStep>,
    pub statuses: Vec<StatusShare>,
    pub highlights: Vec<ActivationHighlight>,
    /// Short market codes shown as header badges.
    pub market_badges: Vec<String>,
}

impl Dataset {
    /// The authored SuperApp figures (500 users, 5,738 transactions, ~$800K GMV).
    pub fn superapp() -> Self {
        Self {
            kpis: kpis(),
            products: products(),
            countries: countries(),
            monthly: monthly(),
            cohorts: cohorts(),
            segments: segments(),
            activation: activation(),
            statuses: statuses(),
            highlights: highlights(),
            market_badges: ["UAE", "KSA", "EGY", "KWT"]
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }

    /// Sum of the product GMV column.
    pub fn product_gmv_total(&self) -> Decimal {
        self.products.iter().map(|p| p.gmv).sum()
    }
}

fn kpis() -> KpiSummary {
    KpiSummary {
        total_gmv: Decimal::from(800_590),
        total_users: 500,
        total_transactions: 5738,
        total_events: 13_314,
        completion_rate: 78,
        avg_gmv_per_user: Decimal::new(160_118, 2),
        products: 4,
        markets: 4,
    }
}

fn product(name: &str, gmv: i64, transactions: u32, accent: Accent, share_tenths: i64) -> ProductRevenue {
    ProductRevenue {
        name: name.to_string(),
        gmv: Decimal::from(gmv),
        transactions,
        accent,
        share_pct: Decimal::new(share_tenths, 1),
    }
}

fn products() -> Vec<ProductRevenue> {
    vec![
        product("BNPL", 488_360, 2008, Accent::Gold, 610),
        product("Food Delivery", 185_070, 1721, Accent::Teal, 231),
        product("Ride Sharing", 78_650, 1148, Accent::Coral, 98),
        product("Gaming", 48_510, 861, Accent::Violet, 61),
    ]
}

fn countries() -> Vec<CountryUsage> {
    [("UAE", 175, 35), ("Saudi Arabia", 150, 30), ("Egypt", 100, 20), ("Kuwait", 75, 15)]
        .into_iter()
        .map(|(country, users, share_pct)| CountryUsage {
            country: country.to_string(),
            users,
            share_pct,
        })
        .collect()
}

fn monthly() -> Vec<MonthlyTrend> {
    [
        ("Jan 24", 42_500, 310, 45),
        ("Feb 24", 48_200, 355, 52),
        ("Mar 24", 55_800, 398, 58),
        ("Apr 24", 61_200, 432, 62),
        ("May 24", 58_900, 418, 55),
        ("Jun 24", 63_400, 448, 68),
        ("Jul 24", 68_100, 472, 72),
        ("Aug 24", 72_300, 498, 78),
        ("Sep 24", 69_800, 465, 70),
        ("Oct 24", 75_400, 512, 82),
        ("Nov 24", 82_100, 548, 88),
        ("Dec 24", 68_500, 462, 75),
        ("Jan 25", 34_290, 420, 60),
    ]
    .into_iter()
    .map(|(month, gmv, transactions, users)| MonthlyTrend {
        month: month.to_string(),
        gmv: Decimal::from(gmv),
        transactions,
        users,
    })
    .collect()
}

fn cohorts() -> Vec<CohortRetention> {
    vec![
        CohortRetention::new(
            "Jan 24",
            [Some(100), Some(72), Some(58), Some(48), Some(41), Some(35), Some(30)],
        ),
        CohortRetention::new(
            "Feb 24",
            [Some(100), Some(69), Some(55), Some(46), Some(39), Some(33), None],
        ),
        CohortRetention::new(
            "Mar 24",
            [Some(100), Some(74), Some(61), Some(50), Some(42), None, None],
        ),
        CohortRetention::new(
            "Apr 24",
            [Some(100), Some(71), Some(57), Some(47), None, None, None],
        ),
        CohortRetention::new(
            "May 24",
            [Some(100), Some(68), Some(54), None, None, None, None],
        ),
        CohortRetention::new(
            "Jun 24",
            [Some(100), Some(73), None, None, None, None, None],
        ),
    ]
}

fn segments() -> Vec<SegmentAverage> {
    [
        ("New", 200, 420, Accent::Teal),
        ("Regular", 200, 1580, Accent::Gold),
        ("VIP", 100, 4250, Accent::Coral),
    ]
    .into_iter()
    .map(|(segment, users, avg_gmv, accent)| SegmentAverage {
        segment: segment.to_string(),
        users,
        avg_gmv: Decimal::from(avg_gmv),
        accent,
    })
    .collect()
}

fn activation() -> Vec<ActivationStep> {
    [
        ("Day 0", 12),
        ("Day 1", 28),
        ("Day 3", 45),
        ("Day 7", 62),
        ("Day 14", 74),
        ("Day 30", 82),
        ("Day 60", 88),
        ("Day 90", 91),
    ]
    .into_iter()
    .map(|(day, pct)| ActivationStep {
        day: day.to_string(),
        pct,
    })
    .collect()
}

fn statuses() -> Vec<StatusShare> {
    [
        ("Completed", 78, Accent::Teal),
        ("Failed", 15, Accent::Coral),
        ("Pending", 7, Accent::Gold),
    ]
    .into_iter()
    .map(|(status, pct, accent)| StatusShare {
        status: status.to_string(),
        pct,
        accent,
    })
    .collect()
}

fn highlights() -> Vec<ActivationHighlight> {
    [
        ("Day 7 Activation", "62%", "of users transact within 7 days", Accent::Teal),
        ("Day 30 Activation", "82%", "within first month", Accent::Gold),
        ("Median Activation", "4.2d", "days to first purchase", Accent::Coral),
    ]
    .into_iter()
    .map(|(label, value, caption, accent)| ActivationHighlight {
        label: label.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
        accent,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RETENTION_MONTHS;

    #[test]
    fn test_superapp_table_sizes() {
        let data = Dataset::superapp();
        assert_eq!(data.products.len(), 4);
        assert_eq!(data.countries.len(), 4);
        assert_eq!(data.monthly.len(), 13);
        assert_eq!(data.cohorts.len(), 6);
        assert_eq!(data.segments.len(), 3);
        assert_eq!(data.activation.len(), 8);
        assert_eq!(data.statuses.len(), 3);
        assert_eq!(data.highlights.len(), 3);
        assert_eq!(data.market_badges, vec!["UAE", "KSA", "EGY", "KWT"]);
    }

    #[test]
    fn test_monthly_order_is_positional() {
        let data = Dataset::superapp();
        assert_eq!(data.monthly.first().unwrap().month, "Jan 24");
        assert_eq!(data.monthly.last().unwrap().month, "Jan 25");
    }

    #[test]
    fn test_product_gmv_total_matches_kpi() {
        let data = Dataset::superapp();
        assert_eq!(data.product_gmv_total(), data.kpis.total_gmv);
    }

    #[test]
    fn test_cohorts_start_at_full_retention() {
        let data = Dataset::superapp();
        for cohort in &data.cohorts {
            assert_eq!(cohort.months[0], Some(100), "cohort {}", cohort.cohort);
        }
        // Later cohorts are observed for fewer months.
        let observed: Vec<usize> = data.cohorts.iter().map(|c| c.observed_months()).collect();
        assert_eq!(observed, vec![RETENTION_MONTHS, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_status_shares_sum_to_hundred() {
        let data = Dataset::superapp();
        let total: u32 = data.statuses.iter().map(|s| u32::from(s.pct)).sum();
        assert_eq!(total, 100);
    }
}
