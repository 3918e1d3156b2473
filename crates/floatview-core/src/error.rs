use thiserror::Error;

/// Terminal outcomes for a caller request that did not succeed. Every
/// variant is reported through the single resolution of the corresponding
/// pending request; nothing is thrown across the notification boundary,
/// and no variant is fatal to the coordinator itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("external presentation is not supported on this platform")]
    Unsupported,
    #[error("no media has been prepared")]
    NotReady,
    #[error("readiness and capability never converged within the retry bound")]
    GateTimeout,
    #[error("external system rejected the hand-off: {0}")]
    HandoffFailed(String),
    #[error("a newer request replaced this one")]
    Superseded,
    #[error("cancelled by an exit request")]
    Cancelled,
    #[error("session is closed")]
    SessionClosed,
}

/// Failures from the media source collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("cannot resolve locator: {0}")]
    InvalidLocator(String),
    #[error("failed to prepare media: {0}")]
    PrepareFailed(String),
}
