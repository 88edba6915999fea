//! Workflow-level error type.

use givehub_client::ApiError;
use givehub_core::CoreError;

/// Errors surfaced by the view controllers.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The underlying API call failed; see [`ApiError`] for the
    /// taxonomy.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A domain rule refused the operation before any request was made.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The owning view was torn down while the call was in flight.
    #[error("Operation cancelled")]
    Cancelled,
}
