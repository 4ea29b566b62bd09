use thiserror::Error;

/// Errors surfaced by the session-state engine.
///
/// Both variants are recoverable. A persistence failure leaves the in-memory
/// state already updated for the rest of the session; a mode-transition
/// failure leaves the mode at its pre-transition value.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing the active-widget file failed. The widget set in memory still
    /// reflects the mutation, only durability was lost.
    #[error("failed to persist widgets: {0}")]
    Persistence(anyhow::Error),
    /// The external enter/exit restricted-mode side effect failed.
    #[error("mode switch failed: {0}")]
    ModeTransition(anyhow::Error),
}
