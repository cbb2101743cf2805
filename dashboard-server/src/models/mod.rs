//! Domain models
//!
//! Each stored entity has two shapes:
//! - a `New*` input type holding only client-settable fields
//! - the stored type, which adds the server-generated `id` and `date`
//!
//! Request bodies deserialize into the input type, so a client can never set
//! `id` or `date`. Any such fields in the body are ignored.

pub mod analytics;
pub mod campaign;
pub mod overview;
pub mod revenue;
pub mod validation;

pub use analytics::{MonthlyRevenueData, RevenueAnalytics, RevenueSourcePerformance};
pub use campaign::{CampaignConversion, NewCampaign};
pub use overview::{NewOverviewMetrics, OverviewMetrics};
pub use revenue::{NewRevenueDataPoint, RevenueDataPoint};
pub use validation::ValidationError;
