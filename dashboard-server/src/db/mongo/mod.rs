//! MongoDB storage handle
//!
//! One `Client` per process. The driver pools connections internally, so the
//! handle is shared across request tasks without extra locking.

pub mod documents;

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOneOptions, FindOptions};
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

use self::documents::{CampaignDocument, OverviewDocument, RevenueDocument};
use super::{deadline, DbError, MetricsStore};
use crate::models::{CampaignConversion, OverviewMetrics, RevenueDataPoint};

pub const CAMPAIGN_COLLECTION: &str = "campaign";
pub const REVENUE_COLLECTION: &str = "revenue";
pub const OVERVIEW_COLLECTION: &str = "overview";

/// Default database name
pub const DEFAULT_DATABASE: &str = "analytics_dashboard";

/// Default bound on connecting and the startup ping
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const APP_NAME: &str = "dashboard-server";

/// Connection settings
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB connection string
    pub uri: String,

    /// Database holding the three collections
    pub database: String,

    /// Bound on server selection and the startup ping
    pub connect_timeout: Duration,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

/// Process-wide MongoDB handle
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connect and verify the server answers a ping.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is empty or malformed, or if the ping does
    /// not succeed within `connect_timeout`.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DbError> {
        if config.uri.trim().is_empty() {
            return Err(DbError::Config("connection string is empty".into()));
        }

        let mut options = ClientOptions::parse(&config.uri).await?;
        if options.app_name.is_none() {
            options.app_name = Some(APP_NAME.to_owned());
        }
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        deadline::within(config.connect_timeout, async {
            db.run_command(doc! { "ping": 1 }, None).await?;
            Ok::<_, DbError>(())
        })
        .await?;

        tracing::info!(database = %config.database, "Connected to MongoDB");
        Ok(Self { client, db })
    }

    /// Typed reference to a collection in the configured database.
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Close all pooled connections. Consumes the handle.
    pub async fn disconnect(self) {
        self.client.shutdown().await;
        tracing::info!("Disconnected from MongoDB");
    }

    async fn insert<D>(&self, name: &str, document: D) -> Result<(), DbError>
    where
        D: Serialize + Send + Sync,
    {
        self.collection::<D>(name).insert_one(document, None).await?;
        Ok(())
    }

    async fn find_all<D>(&self, name: &str, options: FindOptions) -> Result<Vec<D>, DbError>
    where
        D: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self.collection::<D>(name).find(doc! {}, options).await?;
        Ok(cursor.try_collect::<Vec<D>>().await?)
    }
}

fn newest_first() -> Document {
    doc! { "date": -1 }
}

#[async_trait]
impl MetricsStore for MongoStore {
    async fn insert_campaign(&self, record: &CampaignConversion) -> Result<(), DbError> {
        self.insert(CAMPAIGN_COLLECTION, CampaignDocument::from(record))
            .await
    }

    async fn campaigns(&self) -> Result<Vec<CampaignConversion>, DbError> {
        self.find_all::<CampaignDocument>(CAMPAIGN_COLLECTION, FindOptions::default())
            .await?
            .into_iter()
            .map(CampaignConversion::try_from)
            .collect()
    }

    async fn insert_revenue(&self, record: &RevenueDataPoint) -> Result<(), DbError> {
        self.insert(REVENUE_COLLECTION, RevenueDocument::from(record))
            .await
    }

    async fn revenue(&self) -> Result<Vec<RevenueDataPoint>, DbError> {
        self.find_all::<RevenueDocument>(REVENUE_COLLECTION, FindOptions::default())
            .await?
            .into_iter()
            .map(RevenueDataPoint::try_from)
            .collect()
    }

    async fn insert_overview(&self, record: &OverviewMetrics) -> Result<(), DbError> {
        self.insert(OVERVIEW_COLLECTION, OverviewDocument::from(record))
            .await
    }

    async fn overview_newest_first(&self) -> Result<Vec<OverviewMetrics>, DbError> {
        let options = FindOptions::builder().sort(newest_first()).build();
        self.find_all::<OverviewDocument>(OVERVIEW_COLLECTION, options)
            .await?
            .into_iter()
            .map(OverviewMetrics::try_from)
            .collect()
    }

    async fn latest_overview(&self) -> Result<Option<OverviewMetrics>, DbError> {
        let options = FindOneOptions::builder().sort(newest_first()).build();
        self.collection::<OverviewDocument>(OVERVIEW_COLLECTION)
            .find_one(doc! {}, options)
            .await?
            .map(OverviewMetrics::try_from)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a running MongoDB
    // Run with: MONGODB_URI=mongodb://localhost:27017 cargo test -p dashboard-server -- --ignored

    fn test_config() -> MongoConfig {
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI required");
        MongoConfig::new(uri)
            .with_database(format!("dashboard_test_{}", uuid::Uuid::new_v4().simple()))
    }

    #[tokio::test]
    async fn empty_uri_is_rejected() {
        let err = MongoStore::connect(&MongoConfig::new("  ")).await.err();
        assert!(matches!(err, Some(DbError::Config(_))));
    }

    #[tokio::test]
    async fn malformed_uri_is_rejected() {
        let err = MongoStore::connect(&MongoConfig::new("http://not-mongo")).await.err();
        assert!(matches!(err, Some(DbError::Mongo(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn overview_round_trip_sorted() {
        use chrono::{TimeZone, Utc};

        let config = test_config();
        let store = MongoStore::connect(&config).await.expect("connect failed");

        for minute in [3, 9, 1] {
            let record = OverviewMetrics {
                id: uuid::Uuid::new_v4(),
                revenue: 1.0,
                users: i64::from(minute),
                conversions: 0,
                growth: 0.0,
                date: Utc.with_ymd_and_hms(2024, 1, 1, 0, minute, 0).unwrap(),
            };
            store.insert_overview(&record).await.expect("insert failed");
        }

        let listed = store.overview_newest_first().await.expect("list failed");
        let users: Vec<i64> = listed.iter().map(|o| o.users).collect();
        assert_eq!(users, [9, 3, 1]);

        let latest = store.latest_overview().await.expect("latest failed");
        assert_eq!(latest.map(|o| o.users), Some(9));

        store.db.drop(None).await.expect("drop failed");
        store.disconnect().await;
    }
}
