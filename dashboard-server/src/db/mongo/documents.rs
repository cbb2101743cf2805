//! BSON document layouts
//!
//! `_id` holds the UUID as a string and `date` is a native BSON datetime so
//! the server can sort on it. BSON datetimes carry millisecond precision.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::DbError;
use crate::models::{CampaignConversion, OverviewMetrics, RevenueDataPoint};

fn parse_id(raw: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(raw).map_err(|e| DbError::Decode(format!("_id '{}': {}", raw, e)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CampaignDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub campaign: String,
    pub conversions: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl From<&CampaignConversion> for CampaignDocument {
    fn from(c: &CampaignConversion) -> Self {
        Self {
            id: c.id.to_string(),
            campaign: c.campaign.clone(),
            conversions: i64::from(c.conversions),
            date: c.date,
        }
    }
}

impl TryFrom<CampaignDocument> for CampaignConversion {
    type Error = DbError;

    fn try_from(d: CampaignDocument) -> Result<Self, Self::Error> {
        let conversions = u32::try_from(d.conversions).map_err(|_| {
            DbError::Decode(format!("conversions out of range: {}", d.conversions))
        })?;

        Ok(Self {
            id: parse_id(&d.id)?,
            campaign: d.campaign,
            conversions,
            date: d.date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevenueDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub revenue: f64,
    pub source: String,
    pub region: String,
}

impl From<&RevenueDataPoint> for RevenueDocument {
    fn from(r: &RevenueDataPoint) -> Self {
        Self {
            id: r.id.to_string(),
            date: r.date,
            revenue: r.revenue,
            source: r.source.clone(),
            region: r.region.clone(),
        }
    }
}

impl TryFrom<RevenueDocument> for RevenueDataPoint {
    type Error = DbError;

    fn try_from(d: RevenueDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&d.id)?,
            date: d.date,
            revenue: d.revenue,
            source: d.source,
            region: d.region,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub revenue: f64,
    pub users: i64,
    pub conversions: i64,
    pub growth: f64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl From<&OverviewMetrics> for OverviewDocument {
    fn from(o: &OverviewMetrics) -> Self {
        Self {
            id: o.id.to_string(),
            revenue: o.revenue,
            users: o.users,
            conversions: o.conversions,
            growth: o.growth,
            date: o.date,
        }
    }
}

impl TryFrom<OverviewDocument> for OverviewMetrics {
    type Error = DbError;

    fn try_from(d: OverviewDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&d.id)?,
            revenue: d.revenue,
            users: d.users,
            conversions: d.conversions,
            growth: d.growth,
            date: d.date,
        })
    }
}
