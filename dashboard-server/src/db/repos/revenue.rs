//! Revenue repository

use std::time::Duration;

use uuid::Uuid;

use super::stamp;
use crate::db::{deadline, DbError, MetricsStore};
use crate::models::{NewRevenueDataPoint, RevenueDataPoint};

/// Revenue repository
pub struct RevenueRepo<'a> {
    store: &'a dyn MetricsStore,
    timeout: Duration,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(store: &'a dyn MetricsStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn create(&self, new: NewRevenueDataPoint) -> Result<RevenueDataPoint, DbError> {
        let record = new.into_record(Uuid::new_v4(), stamp());
        deadline::within(self.timeout, self.store.insert_revenue(&record)).await?;

        tracing::debug!(id = %record.id, source = %record.source, region = %record.region, "revenue data created");
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<RevenueDataPoint>, DbError> {
        deadline::within(self.timeout, self.store.revenue()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn outage_during_create_persists_nothing() {
        let store = MemoryStore::new();
        let repo = RevenueRepo::new(&store, Duration::from_secs(1));
        store.set_available(false);

        let result = repo
            .create(NewRevenueDataPoint {
                revenue: 99.5,
                source: "subscription".into(),
                region: "APAC".into(),
            })
            .await;
        assert!(matches!(result, Err(DbError::Unavailable(_))));

        store.set_available(true);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
