//! Overview repository
//!
//! The only repository with ordering guarantees:
//! - list: newest `date` first
//! - latest: single newest snapshot, `NotFound` when the collection is empty

use std::time::Duration;

use uuid::Uuid;

use super::stamp;
use crate::db::{deadline, DbError, MetricsStore};
use crate::models::{NewOverviewMetrics, OverviewMetrics};

/// Overview repository
pub struct OverviewRepo<'a> {
    store: &'a dyn MetricsStore,
    timeout: Duration,
}

impl<'a> OverviewRepo<'a> {
    pub fn new(store: &'a dyn MetricsStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn create(&self, new: NewOverviewMetrics) -> Result<OverviewMetrics, DbError> {
        let record = new.into_record(Uuid::new_v4(), stamp());
        deadline::within(self.timeout, self.store.insert_overview(&record)).await?;

        tracing::debug!(id = %record.id, "overview metrics created");
        Ok(record)
    }

    /// All snapshots sorted by date descending.
    pub async fn list(&self) -> Result<Vec<OverviewMetrics>, DbError> {
        deadline::within(self.timeout, self.store.overview_newest_first()).await
    }

    /// The snapshot with the greatest date.
    pub async fn latest(&self) -> Result<OverviewMetrics, DbError> {
        deadline::within(self.timeout, self.store.latest_overview())
            .await?
            .ok_or(DbError::NotFound {
                resource: "overview metrics",
            })
    }
}
