//! Revenue analytics response shapes
//!
//! Output types for a revenue breakdown endpoint. Nothing computes these yet;
//! they fix the camelCase wire format the dashboard frontend expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated revenue view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalytics {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub weekly_revenue: f64,
    pub daily_revenue: f64,
    pub revenue_growth: f64,
    pub revenue_by_source: BTreeMap<String, f64>,
    pub revenue_by_region: BTreeMap<String, f64>,
    pub monthly_trend: Vec<MonthlyRevenueData>,
    pub top_performers: Vec<RevenueSourcePerformance>,
}

/// One month in the revenue trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenueData {
    pub month: String,
    pub revenue: f64,
    pub growth: f64,
}

/// Revenue share of a single source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSourcePerformance {
    pub source: String,
    pub revenue: f64,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_camel_case_keys() {
        let json = serde_json::to_value(RevenueAnalytics::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        for key in [
            "totalRevenue",
            "monthlyRevenue",
            "weeklyRevenue",
            "dailyRevenue",
            "revenueGrowth",
            "revenueBySource",
            "revenueByRegion",
            "monthlyTrend",
            "topPerformers",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
    }
}
