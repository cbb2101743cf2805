//! Revenue data points

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One revenue observation as stored in the `revenue` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDataPoint {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub revenue: f64,
    /// e.g. "subscription", "one-time", "ads"
    pub source: String,
    /// e.g. "US", "EU", "APAC"
    pub region: String,
}

/// Create revenue request body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewRevenueDataPoint {
    pub revenue: f64,
    pub source: String,
    pub region: String,
}

impl NewRevenueDataPoint {
    pub fn into_record(self, id: Uuid, date: DateTime<Utc>) -> RevenueDataPoint {
        RevenueDataPoint {
            id,
            date,
            revenue: self.revenue,
            source: self.source,
            region: self.region,
        }
    }
}
