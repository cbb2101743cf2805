//! In-process store
//!
//! Keeps each collection as a `Vec` in insertion order. Used by the test
//! suites and by `dashboard serve --in-memory` for local frontend work.
//! An outage can be simulated with [`MemoryStore::set_available`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{DbError, MetricsStore};
use crate::models::{CampaignConversion, OverviewMetrics, RevenueDataPoint};

#[derive(Default)]
struct Collections {
    campaign: Vec<CampaignConversion>,
    revenue: Vec<RevenueDataPoint>,
    overview: Vec<OverviewMetrics>,
}

/// Memory-backed [`MetricsStore`]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle a simulated outage. While unavailable every call fails and
    /// nothing is written.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of documents held in each collection: (campaign, revenue, overview).
    pub fn counts(&self) -> (usize, usize, usize) {
        match self.collections.read() {
            Ok(c) => (c.campaign.len(), c.revenue.len(), c.overview.len()),
            Err(_) => (0, 0, 0),
        }
    }

    fn check_available(&self) -> Result<(), DbError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbError::Unavailable("memory store is offline".into()))
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, DbError> {
        self.check_available()?;
        self.collections
            .read()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, DbError> {
        self.check_available()?;
        self.collections
            .write()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn insert_campaign(&self, record: &CampaignConversion) -> Result<(), DbError> {
        self.write()?.campaign.push(record.clone());
        Ok(())
    }

    async fn campaigns(&self) -> Result<Vec<CampaignConversion>, DbError> {
        Ok(self.read()?.campaign.clone())
    }

    async fn insert_revenue(&self, record: &RevenueDataPoint) -> Result<(), DbError> {
        self.write()?.revenue.push(record.clone());
        Ok(())
    }

    async fn revenue(&self) -> Result<Vec<RevenueDataPoint>, DbError> {
        Ok(self.read()?.revenue.clone())
    }

    async fn insert_overview(&self, record: &OverviewMetrics) -> Result<(), DbError> {
        self.write()?.overview.push(record.clone());
        Ok(())
    }

    async fn overview_newest_first(&self) -> Result<Vec<OverviewMetrics>, DbError> {
        let mut items = self.read()?.overview.clone();
        // Stable sort: equal dates keep insertion order
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    async fn latest_overview(&self) -> Result<Option<OverviewMetrics>, DbError> {
        let collections = self.read()?;
        let latest = collections
            .overview
            .iter()
            .reduce(|best, item| if item.date > best.date { item } else { best })
            .cloned();
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap()
    }

    fn snapshot(date: DateTime<Utc>, users: i64) -> OverviewMetrics {
        OverviewMetrics {
            id: Uuid::new_v4(),
            revenue: 100.0,
            users,
            conversions: 3,
            growth: 0.5,
            date,
        }
    }

    #[tokio::test]
    async fn overview_sorted_newest_first_for_any_insert_order() {
        let store = MemoryStore::new();
        for minute in [5, 1, 9, 3, 9, 0] {
            store.insert_overview(&snapshot(at(minute), 0)).await.unwrap();
        }

        let items = store.overview_newest_first().await.unwrap();
        assert_eq!(items.len(), 6);
        assert!(items.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[tokio::test]
    async fn latest_overview_picks_max_date_and_first_on_ties() {
        let store = MemoryStore::new();
        assert!(store.latest_overview().await.unwrap().is_none());

        store.insert_overview(&snapshot(at(1), 1)).await.unwrap();
        store.insert_overview(&snapshot(at(7), 2)).await.unwrap();
        store.insert_overview(&snapshot(at(7), 3)).await.unwrap();
        store
            .insert_overview(&snapshot(at(7) - Duration::seconds(30), 4))
            .await
            .unwrap();

        let latest = store.latest_overview().await.unwrap().unwrap();
        assert_eq!(latest.date, at(7));
        assert_eq!(latest.users, 2);

        let listed = store.overview_newest_first().await.unwrap();
        assert_eq!(listed[0].id, latest.id);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            let record = CampaignConversion {
                id: Uuid::new_v4(),
                campaign: name.into(),
                conversions: 1,
                date: at(0),
            };
            store.insert_campaign(&record).await.unwrap();
        }

        let names: Vec<String> = store
            .campaigns()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.campaign)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn outage_rejects_reads_and_writes() {
        let store = MemoryStore::new();
        store.set_available(false);

        let record = RevenueDataPoint {
            id: Uuid::new_v4(),
            date: at(0),
            revenue: 10.0,
            source: "ads".into(),
            region: "US".into(),
        };
        assert!(matches!(
            store.insert_revenue(&record).await,
            Err(DbError::Unavailable(_))
        ));
        assert!(matches!(store.revenue().await, Err(DbError::Unavailable(_))));

        store.set_available(true);
        assert_eq!(store.counts(), (0, 0, 0));
    }
}
