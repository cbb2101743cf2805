//! Overview metric snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dashboard headline numbers as stored in the `overview` collection.
///
/// The snapshot with the greatest `date` is the "latest" one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub id: Uuid,
    pub revenue: f64,
    pub users: i64,
    pub conversions: i64,
    pub growth: f64,
    pub date: DateTime<Utc>,
}

/// Create overview request body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewOverviewMetrics {
    pub revenue: f64,
    pub users: i64,
    pub conversions: i64,
    pub growth: f64,
}

impl NewOverviewMetrics {
    pub fn into_record(self, id: Uuid, date: DateTime<Utc>) -> OverviewMetrics {
        OverviewMetrics {
            id,
            revenue: self.revenue,
            users: self.users,
            conversions: self.conversions,
            growth: self.growth,
            date,
        }
    }
}
