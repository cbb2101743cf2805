//! Scoped deadlines for storage calls
//!
//! The wrapped future is dropped when the deadline elapses, which abandons
//! the in-flight driver call.

use std::future::Future;
use std::time::Duration;

use super::DbError;

/// Deadline applied to every data-access operation unless configured otherwise
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Run `operation`, failing with [`DbError::Timeout`] once `limit` has passed.
pub async fn within<T, F>(limit: Duration, operation: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, DbError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(DbError::Timeout(limit)),
    }
}
