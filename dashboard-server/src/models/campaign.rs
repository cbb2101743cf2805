//! Campaign conversion records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Campaign conversion count as stored in the `campaign` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConversion {
    pub id: Uuid,
    pub campaign: String,
    pub conversions: u32,
    pub date: DateTime<Utc>,
}

/// Create campaign request body
///
/// Negative conversion counts fail to deserialize into `u32` and are
/// rejected with the rest of the malformed bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCampaign {
    pub campaign: String,
    pub conversions: u32,
}

impl NewCampaign {
    /// Attach the server-generated identity and timestamp.
    pub fn into_record(self, id: Uuid, date: DateTime<Utc>) -> CampaignConversion {
        CampaignConversion {
            id,
            campaign: self.campaign,
            conversions: self.conversions,
            date,
        }
    }
}
