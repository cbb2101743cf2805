//! Repositories - the data-access operations
//!
//! Each repository follows these patterns:
//! - `id` and `date` are assigned here, never taken from the client
//! - every store call is wrapped in the operation deadline
//! - one document or one collection per call

pub mod campaigns;
pub mod overview;
pub mod revenue;

use chrono::{DateTime, SubsecRound, Utc};

pub use campaigns::CampaignRepo;
pub use overview::OverviewRepo;
pub use revenue::RevenueRepo;

/// Creation timestamp, truncated to the millisecond precision BSON stores.
pub(crate) fn stamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
