//! Error taxonomy for the Pharos engine.
//!
//! Per-area enums live in their own files; `PharosError` is the umbrella
//! every public API returns. Upstream I/O failures are carried verbatim in
//! the per-area variants; configuration errors name the missing dependency.

pub mod queue_error;
pub mod reconcile_error;
pub mod remediation_error;

pub use queue_error::QueueError;
pub use reconcile_error::ReconcileError;
pub use remediation_error::RemediationError;

/// Top-level error for all Pharos operations.
#[derive(Debug, thiserror::Error)]
pub enum PharosError {
    #[error(transparent)]
    Remediation(#[from] RemediationError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type PharosResult<T> = Result<T, PharosError>;
