//! Asynchronous number feed.

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

/// Resolves to a non-empty list of numbers.
///
/// Failure is reported as [`ServiceError::FetchFailed`] with a reason that
/// says what failed.
pub async fn fetch_data() -> ServiceResult<Vec<i64>> {
    deliver(vec![1, 2, 3]).await
}

async fn deliver(values: Vec<i64>) -> ServiceResult<Vec<i64>> {
    tokio::task::yield_now().await;

    if values.is_empty() {
        return Err(ServiceError::FetchFailed {
            reason: "feed failed to produce any values".into(),
        });
    }

    debug!(count = values.len(), "Fetched data");
    Ok(values)
}
