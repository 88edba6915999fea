//! Cancellation racing shared by the controllers.

use std::future::Future;

use givehub_client::ApiError;
use tokio_util::sync::CancellationToken;

use crate::error::WorkflowError;

/// Race an API call against `cancel`. An already-cancelled token wins
/// before the call is polled at all.
pub(crate) async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, WorkflowError> {
    if cancel.is_cancelled() {
        return Err(WorkflowError::Cancelled);
    }

    tokio::select! {
        _ = cancel.cancelled() => Err(WorkflowError::Cancelled),
        result = call => result.map_err(WorkflowError::from),
    }
}
