//! Campaign repository

use std::time::Duration;

use uuid::Uuid;

use super::stamp;
use crate::db::{deadline, DbError, MetricsStore};
use crate::models::{CampaignConversion, NewCampaign};

/// Campaign repository
pub struct CampaignRepo<'a> {
    store: &'a dyn MetricsStore,
    timeout: Duration,
}

impl<'a> CampaignRepo<'a> {
    pub fn new(store: &'a dyn MetricsStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Insert a campaign record with a fresh id and the current time.
    pub async fn create(&self, new: NewCampaign) -> Result<CampaignConversion, DbError> {
        let record = new.into_record(Uuid::new_v4(), stamp());
        deadline::within(self.timeout, self.store.insert_campaign(&record)).await?;

        tracing::debug!(id = %record.id, campaign = %record.campaign, "campaign created");
        Ok(record)
    }

    /// All campaigns in storage order.
    pub async fn list(&self) -> Result<Vec<CampaignConversion>, DbError> {
        deadline::within(self.timeout, self.store.campaigns()).await
    }
}
