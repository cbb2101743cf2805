//! Store trait - the raw storage calls behind the repositories
//!
//! Implemented by [`MongoStore`](super::MongoStore) for production and
//! [`MemoryStore`](super::MemoryStore) for tests and local runs.

use async_trait::async_trait;

use super::DbError;
use crate::models::{CampaignConversion, OverviewMetrics, RevenueDataPoint};

/// Shared storage handle (safe for concurrent use)
#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn insert_campaign(&self, record: &CampaignConversion) -> Result<(), DbError>;

    /// All campaign records in storage order.
    async fn campaigns(&self) -> Result<Vec<CampaignConversion>, DbError>;

    async fn insert_revenue(&self, record: &RevenueDataPoint) -> Result<(), DbError>;

    /// All revenue records in storage order.
    async fn revenue(&self) -> Result<Vec<RevenueDataPoint>, DbError>;

    async fn insert_overview(&self, record: &OverviewMetrics) -> Result<(), DbError>;

    /// All overview snapshots, newest `date` first.
    async fn overview_newest_first(&self) -> Result<Vec<OverviewMetrics>, DbError>;

    /// The overview snapshot with the greatest `date`, if any exist.
    async fn latest_overview(&self) -> Result<Option<OverviewMetrics>, DbError>;
}
